//! Synth invocations — validated control sets that build sound-trigger
//! patterns.
//!
//! A [`Synth`] pairs a static [`SynthDef`] from the catalog with an ordered
//! set of control values. Construction validates every control name against
//! the definition before any pattern text exists, so an invalid invocation
//! never produces a partial expression.

pub mod catalog;
pub mod error;

pub use catalog::{lookup, SynthDef, SynthParameter, AVAILABLE_SYNTHS, SUPERPWM, SUPERSAW};
pub use error::UnknownControl;

use crate::pattern::{ControlAssignment, ControlCollection, Pattern};
use crate::value::{TidalValue, ToTidal};

/// A synth invocation: a catalog definition plus validated controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Synth {
    def: &'static SynthDef,
    controls: Vec<ControlAssignment>,
}

impl Synth {
    /// Create an invocation of `def` with the given controls.
    ///
    /// Control order is preserved into the rendered clause. Fails with
    /// [`UnknownControl`] naming every control the definition does not
    /// permit.
    pub fn new<N, V>(
        def: &'static SynthDef,
        controls: impl IntoIterator<Item = (N, V)>,
    ) -> Result<Self, UnknownControl>
    where
        N: Into<String>,
        V: Into<TidalValue>,
    {
        let controls = validate(def, controls)?;
        Ok(Self { def, controls })
    }

    /// The catalog definition this invocation triggers.
    pub fn def(&self) -> &'static SynthDef {
        self.def
    }

    /// Metadata for the controls this synth accepts.
    pub fn describe(&self) -> &'static [SynthParameter] {
        self.def.parameters
    }

    /// Build the sound-trigger pattern for this invocation.
    pub fn to_pattern(&self) -> Pattern {
        let collection: ControlCollection = self.controls.iter().cloned().collect();
        Pattern::sound(self.def.sound_name, &collection)
    }

    /// Build a trigger pattern with extra controls merged in.
    ///
    /// The extra controls are validated first; a name already present
    /// replaces the existing value in place, a new name appends. The
    /// receiver is untouched.
    pub fn with_controls<N, V>(
        &self,
        extra: impl IntoIterator<Item = (N, V)>,
    ) -> Result<Pattern, UnknownControl>
    where
        N: Into<String>,
        V: Into<TidalValue>,
    {
        let extra = validate(self.def, extra)?;
        let mut merged = self.controls.clone();
        for assignment in extra {
            match merged.iter_mut().find(|a| a.name == assignment.name) {
                Some(existing) => existing.value = assignment.value,
                None => merged.push(assignment),
            }
        }
        let collection: ControlCollection = merged.into_iter().collect();
        Ok(Pattern::sound(self.def.sound_name, &collection))
    }
}

impl ToTidal for Synth {
    fn to_tidal(&self) -> String {
        self.to_pattern().to_tidal()
    }
}

/// Check every control name against the definition's permitted set.
///
/// Collects ALL unknown names before failing so the error is complete and
/// deterministic.
fn validate<N, V>(
    def: &SynthDef,
    controls: impl IntoIterator<Item = (N, V)>,
) -> Result<Vec<ControlAssignment>, UnknownControl>
where
    N: Into<String>,
    V: Into<TidalValue>,
{
    let mut accepted = Vec::new();
    let mut unknown = Vec::new();
    for (name, value) in controls {
        let name = name.into();
        if def.permits(&name) {
            accepted.push(ControlAssignment::new(name, value));
        } else if !unknown.contains(&name) {
            unknown.push(name);
        }
    }
    if unknown.is_empty() {
        Ok(accepted)
    } else {
        Err(UnknownControl::new(def.sound_name, unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supersaw_renders_controls_in_order() {
        let synth = Synth::new(&SUPERSAW, [("cutoff", 1200), ("detune", 0)]).unwrap();
        let p = synth.to_pattern();
        assert_eq!(p.to_tidal(), "s \"supersaw\" # cutoff 1200 # detune 0");
    }

    #[test]
    fn mixed_value_kinds() {
        let synth = Synth::new(
            &SUPERSAW,
            [
                ("cutoff", TidalValue::Int(1200)),
                ("detune", TidalValue::Float(0.4)),
            ],
        )
        .unwrap();
        assert_eq!(
            synth.to_tidal(),
            "s \"supersaw\" # cutoff 1200 # detune 0.4"
        );
    }

    #[test]
    fn no_controls_renders_bare_trigger() {
        let none: Vec<(&str, TidalValue)> = Vec::new();
        let synth = Synth::new(&SUPERPWM, none).unwrap();
        assert_eq!(synth.to_tidal(), "s \"superpwm\"");
    }

    #[test]
    fn unknown_control_fails_before_building_pattern() {
        let err = Synth::new(&SUPERSAW, [("foo", 1)]).unwrap_err();
        assert_eq!(err.synth, "supersaw");
        assert_eq!(err.controls, vec!["foo".to_string()]);
    }

    #[test]
    fn all_unknown_controls_reported_sorted() {
        let err = Synth::new(&SUPERPWM, [("zeta", 1), ("alpha", 2), ("pwidth", 3)]).unwrap_err();
        assert_eq!(err.controls, vec!["alpha".to_string(), "zeta".to_string()]);
        assert_eq!(
            err.to_string(),
            "unknown control(s) for superpwm: alpha, zeta"
        );
    }

    #[test]
    fn with_controls_replaces_in_place_and_appends() {
        let synth = Synth::new(&SUPERSAW, [("cutoff", 1000), ("resonance", 0)]).unwrap();
        let p = synth
            .with_controls([("cutoff", 1500), ("detune", 3)])
            .unwrap();
        assert_eq!(
            p.to_tidal(),
            "s \"supersaw\" # cutoff 1500 # resonance 0 # detune 3"
        );
    }

    #[test]
    fn with_controls_rejects_unknown_names() {
        let none: Vec<(&str, TidalValue)> = Vec::new();
        let synth = Synth::new(&SUPERSAW, none).unwrap();
        let err = synth.with_controls([("nope", 1)]).unwrap_err();
        assert_eq!(err.controls, vec!["nope".to_string()]);
    }

    #[test]
    fn with_controls_leaves_receiver_untouched() {
        let synth = Synth::new(&SUPERSAW, [("cutoff", 1000)]).unwrap();
        let _ = synth.with_controls([("cutoff", 2000)]).unwrap();
        assert_eq!(synth.to_tidal(), "s \"supersaw\" # cutoff 1000");
    }

    #[test]
    fn invocation_composes_with_pattern_operators() {
        let synth = Synth::new(&SUPERPWM, [("pwidth", 0.7)]).unwrap();
        let p = synth.to_pattern().fast(2);
        assert_eq!(p.to_tidal(), "fast 2 $ s \"superpwm\" # pwidth 0.7");
    }
}
