//! Static catalog of known SuperDirt synths and their permitted controls.
//!
//! Each synth is data, not behavior: a sound name plus the set of control
//! names it accepts, with descriptions and defaults for documentation and
//! tooling. Validation in [`crate::synth::Synth`] checks against these
//! tables.

use crate::value::TidalValue;

/// Metadata for one control a synth supports.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub default: Option<TidalValue>,
}

/// A synth definition: the sound name Tidal triggers and the controls it
/// accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthDef {
    pub sound_name: &'static str,
    pub parameters: &'static [SynthParameter],
}

impl SynthDef {
    /// Whether `name` is a control this synth accepts.
    pub fn permits(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }

    /// Look up the metadata for a control by name.
    pub fn parameter(&self, name: &str) -> Option<&SynthParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// SuperDirt's `supersaw`: detuned saw stack with a low pass filter.
pub const SUPERSAW: SynthDef = SynthDef {
    sound_name: "supersaw",
    parameters: &[
        SynthParameter {
            name: "cutoff",
            description: "Low pass filter cutoff frequency.",
            default: Some(TidalValue::Int(1000)),
        },
        SynthParameter {
            name: "resonance",
            description: "Resonance amount of the low pass filter.",
            default: Some(TidalValue::Float(0.1)),
        },
        SynthParameter {
            name: "detune",
            description: "Detuning factor applied to the saw oscillators.",
            default: Some(TidalValue::Float(0.2)),
        },
    ],
};

/// SuperDirt's `superpwm`: pulse width modulation synth.
pub const SUPERPWM: SynthDef = SynthDef {
    sound_name: "superpwm",
    parameters: &[
        SynthParameter {
            name: "pwidth",
            description: "Pulse width modulation amount.",
            default: Some(TidalValue::Float(0.5)),
        },
        SynthParameter {
            name: "cutoff",
            description: "Filter cutoff frequency.",
            default: Some(TidalValue::Int(800)),
        },
    ],
};

/// Every synth this crate knows about.
pub const AVAILABLE_SYNTHS: &[&SynthDef] = &[&SUPERSAW, &SUPERPWM];

/// Find a synth definition by its sound name.
pub fn lookup(sound_name: &str) -> Option<&'static SynthDef> {
    AVAILABLE_SYNTHS
        .iter()
        .copied()
        .find(|def| def.sound_name == sound_name)
}
