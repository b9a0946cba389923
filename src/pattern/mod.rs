//! Pattern expressions — immutable Tidal pattern text with composition
//! operators.
//!
//! A [`Pattern`] stores its rendered form directly; every operator computes
//! the resulting text eagerly and returns a new value, so two chains built
//! from a common ancestor never interfere.

pub mod control;

pub use control::{ControlAssignment, ControlCollection};

use std::fmt;

use crate::value::ToTidal;

/// An immutable Tidal pattern expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    expression: String,
}

impl Pattern {
    /// Wrap raw Tidal expression text. The text is taken as-is; validity of
    /// the expression is the caller's concern.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Build a sound-trigger pattern: `s "<name>"` followed by the control
    /// clause when one is present.
    pub fn sound(name: &str, controls: &ControlCollection) -> Self {
        if controls.is_empty() {
            Pattern::new(format!("s \"{name}\""))
        } else {
            Pattern::new(format!("s \"{name}\" {}", controls.to_tidal()))
        }
    }

    /// Attach control assignments with `#`. Returns the receiver's text
    /// unchanged when `assignments` is empty.
    pub fn with_controls(&self, assignments: impl IntoIterator<Item = ControlAssignment>) -> Self {
        let collection: ControlCollection = assignments.into_iter().collect();
        if collection.is_empty() {
            self.clone()
        } else {
            Pattern::new(format!("{} {}", self.expression, collection.to_tidal()))
        }
    }

    /// Apply `slow`, dividing the pattern's rate by `factor`.
    ///
    /// The factor renders in its natural `Display` form, passed through
    /// verbatim rather than via the float formatting rule.
    pub fn slow(&self, factor: impl fmt::Display) -> Self {
        Pattern::new(format!("slow {factor} $ {}", self.expression))
    }

    /// Apply `fast`, multiplying the pattern's rate by `factor`.
    pub fn fast(&self, factor: impl fmt::Display) -> Self {
        Pattern::new(format!("fast {factor} $ {}", self.expression))
    }

    /// Apply `degrade`, which stochastically drops events in the engine.
    pub fn degrade(&self) -> Self {
        Pattern::new(format!("degrade $ {}", self.expression))
    }

    /// Layer patterns simultaneously: `stack [a, b, ...]`. Order is
    /// preserved; an empty input renders `stack []`.
    pub fn stack<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToTidal,
    {
        Pattern::new(format!("stack [{}]", join(patterns)))
    }

    /// Alternate patterns cyclically: `cat [a, b, ...]`.
    pub fn cat<I>(patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToTidal,
    {
        Pattern::new(format!("cat [{}]", join(patterns)))
    }
}

fn join<I>(patterns: I) -> String
where
    I: IntoIterator,
    I::Item: ToTidal,
{
    patterns
        .into_iter()
        .map(|p| p.to_tidal())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ToTidal for Pattern {
    fn to_tidal(&self) -> String {
        self.expression.clone()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_returns_expression_verbatim() {
        let p = Pattern::new("sound \"bd sn\"");
        assert_eq!(p.to_tidal(), "sound \"bd sn\"");
    }

    #[test]
    fn sound_without_controls_has_no_trailing_space() {
        let p = Pattern::sound("supersaw", &ControlCollection::new());
        assert_eq!(p.to_tidal(), "s \"supersaw\"");
    }

    #[test]
    fn sound_with_controls_appends_clause() {
        let controls: ControlCollection = [
            ControlAssignment::new("cutoff", 1200),
            ControlAssignment::new("detune", 0.4),
        ]
        .into_iter()
        .collect();
        let p = Pattern::sound("supersaw", &controls);
        assert_eq!(p.to_tidal(), "s \"supersaw\" # cutoff 1200 # detune 0.4");
    }

    #[test]
    fn with_controls_appends_single_space_and_clause() {
        let p = Pattern::new("s \"bd\"");
        let q = p.with_controls([ControlAssignment::new("gain", 0.8)]);
        assert_eq!(q.to_tidal(), "s \"bd\" # gain 0.8");
    }

    #[test]
    fn with_controls_empty_leaves_text_unchanged() {
        let p = Pattern::new("s \"bd\"");
        let q = p.with_controls([]);
        assert_eq!(q.to_tidal(), "s \"bd\"");
    }

    #[test]
    fn fast_and_slow_wrap_with_dollar() {
        let p = Pattern::new("s \"hh\"");
        assert_eq!(p.fast(2).to_tidal(), "fast 2 $ s \"hh\"");
        assert_eq!(p.slow(4).to_tidal(), "slow 4 $ s \"hh\"");
    }

    #[test]
    fn factor_renders_in_natural_display_form() {
        let p = Pattern::new("s \"hh\"");
        assert_eq!(p.fast(0.5).to_tidal(), "fast 0.5 $ s \"hh\"");
        assert_eq!(p.slow("1.5").to_tidal(), "slow 1.5 $ s \"hh\"");
    }

    #[test]
    fn negative_factor_renders_literally() {
        let p = Pattern::new("s \"hh\"");
        assert_eq!(p.fast(-2).to_tidal(), "fast -2 $ s \"hh\"");
    }

    #[test]
    fn degrade_wraps_expression() {
        let p = Pattern::new("s \"arpy\"");
        assert_eq!(p.degrade().to_tidal(), "degrade $ s \"arpy\"");
    }

    #[test]
    fn composition_does_not_mutate_receiver() {
        let p1 = Pattern::new("s \"bd\"");
        let before = p1.to_tidal();
        let _p2 = p1.fast(2);
        assert_eq!(p1.to_tidal(), before);
    }

    #[test]
    fn stack_preserves_order() {
        let a = Pattern::new("A");
        let b = Pattern::new("B");
        assert_eq!(Pattern::stack([&a, &b]).to_tidal(), "stack [A, B]");
    }

    #[test]
    fn stack_empty_renders_empty_brackets() {
        let none: [Pattern; 0] = [];
        assert_eq!(Pattern::stack(none).to_tidal(), "stack []");
    }

    #[test]
    fn cat_renders_same_shape() {
        let a = Pattern::new("A");
        let b = Pattern::new("B");
        assert_eq!(Pattern::cat([&a, &b]).to_tidal(), "cat [A, B]");
        let none: [Pattern; 0] = [];
        assert_eq!(Pattern::cat(none).to_tidal(), "cat []");
    }

    #[test]
    fn operators_compose_textually() {
        let controls: ControlCollection =
            [ControlAssignment::new("pwidth", 0.7)].into_iter().collect();
        let p = Pattern::sound("superpwm", &controls).fast(2).degrade();
        assert_eq!(
            p.to_tidal(),
            "degrade $ fast 2 $ s \"superpwm\" # pwidth 0.7"
        );
    }
}
