//! Error type for synth invocation building.

use std::fmt;

/// Raised when a synth invocation names controls the synth does not support.
///
/// Carries every offending control name, sorted, so the message is
/// deterministic regardless of the order the caller supplied them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownControl {
    pub synth: String,
    pub controls: Vec<String>,
}

impl UnknownControl {
    pub fn new(synth: impl Into<String>, mut controls: Vec<String>) -> Self {
        controls.sort();
        Self {
            synth: synth.into(),
            controls,
        }
    }
}

impl fmt::Display for UnknownControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown control(s) for {}: {}",
            self.synth,
            self.controls.join(", ")
        )
    }
}

impl std::error::Error for UnknownControl {}
