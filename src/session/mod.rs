//! Session container — stream bindings plus tempo configuration, rendered
//! as a multiline Tidal script.

pub mod config;
pub mod transpiler;

pub use config::TidalConfig;
pub use transpiler::{TidalTranspiler, TranspilerConfig};

use std::collections::BTreeMap;
use std::fmt;

use crate::pattern::Pattern;
use crate::value::ToTidal;

/// A pattern bound to a named output stream, rendered as `d1 $ <pattern>`.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamAssignment {
    pub stream: String,
    pub pattern: Pattern,
}

impl ToTidal for StreamAssignment {
    fn to_tidal(&self) -> String {
        format!("{} $ {}", self.stream, self.pattern.to_tidal())
    }
}

/// Holds stream assignments and configuration for one session.
///
/// At most one pattern per stream identifier; assigning again replaces the
/// previous binding. Render order: the `setcps` line when tempo is set,
/// legacy directives in the order they were added, a blank separator line if
/// any of those exist, then stream lines sorted by stream identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TidalSession {
    assignments: BTreeMap<String, StreamAssignment>,
    directives: Vec<(String, String)>,
    pub config: TidalConfig,
}

impl TidalSession {
    /// Create an empty session with no tempo configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given tempo configuration.
    pub fn with_config(config: TidalConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Bind a pattern to a stream such as `d1`. Replaces any pattern
    /// previously bound to the same stream.
    pub fn set_stream(&mut self, stream: impl Into<String>, pattern: Pattern) {
        let stream = stream.into();
        self.assignments.insert(
            stream.clone(),
            StreamAssignment { stream, pattern },
        );
    }

    /// Set the session tempo from beats per minute. Replaces any previous
    /// tempo.
    pub fn set_bpm(&mut self, bpm: f64) {
        self.config = TidalConfig::from_bpm(bpm);
    }

    /// Attach a raw `key value` directive rendered verbatim before the
    /// stream lines. Re-using a key updates the stored value in place.
    pub fn configure(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.directives.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.directives.push((key, value)),
        }
    }

    /// The streams currently bound, in render (sorted) order.
    pub fn streams(&self) -> impl Iterator<Item = &StreamAssignment> {
        self.assignments.values()
    }
}

impl ToTidal for TidalSession {
    fn to_tidal(&self) -> String {
        let mut lines = Vec::new();

        let config_line = self.config.to_tidal();
        if !config_line.is_empty() {
            lines.push(config_line);
        }
        for (key, value) in &self.directives {
            lines.push(format!("{key} {value}"));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }

        // BTreeMap iteration gives the sorted stream order directly.
        for assignment in self.assignments.values() {
            lines.push(assignment.to_tidal());
        }

        lines.join("\n")
    }
}
