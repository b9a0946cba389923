//! tidalscript — a programmatic builder for TidalCycles scripts.
//!
//! Assemble synth invocations, compose them into layered or sequenced
//! patterns, bind them to streams, and render the whole session as Tidal
//! source text. Nothing here talks to a running engine; the output is plain
//! script text.

pub mod pattern;
pub mod session;
pub mod synth;
pub mod value;

pub use pattern::{ControlAssignment, ControlCollection, Pattern};
pub use session::{TidalConfig, TidalSession, TidalTranspiler, TranspilerConfig};
pub use synth::{Synth, SynthDef, SynthParameter, UnknownControl};
pub use value::{TidalValue, ToTidal};
