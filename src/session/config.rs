//! Session tempo configuration — cps, directly set or derived from BPM.

use crate::value::{format_float, ToTidal};

/// Tempo configuration for a session.
///
/// Tidal's native unit is cycles per second. With the usual 4 beats per
/// cycle, `cps = bpm / 60 / 4`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TidalConfig {
    pub cps: Option<f64>,
}

impl TidalConfig {
    /// Configuration with no tempo set; renders nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with an explicit cps value.
    pub fn with_cps(cps: f64) -> Self {
        Self { cps: Some(cps) }
    }

    /// Derive cps from beats per minute.
    pub fn from_bpm(bpm: f64) -> Self {
        Self {
            cps: Some(bpm / 60.0 / 4.0),
        }
    }
}

impl ToTidal for TidalConfig {
    fn to_tidal(&self) -> String {
        match self.cps {
            Some(cps) => format!("setcps {}", format_float(cps)),
            None => String::new(),
        }
    }
}
