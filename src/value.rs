//! Scalar values and their canonical Tidal text forms.
//!
//! Everything that ends up in a generated script — control values, config
//! numbers, pattern text — passes through [`TidalValue`] or the [`ToTidal`]
//! trait defined here.

use std::fmt;

/// Anything that can render itself as a fragment of Tidal source.
pub trait ToTidal {
    /// Render the value as Tidal source text.
    fn to_tidal(&self) -> String;
}

impl<T: ToTidal + ?Sized> ToTidal for &T {
    fn to_tidal(&self) -> String {
        (**self).to_tidal()
    }
}

/// A scalar value in a Tidal expression: text, integer, float, or boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum TidalValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for TidalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TidalValue::Text(s) => f.write_str(s),
            TidalValue::Int(i) => write!(f, "{i}"),
            TidalValue::Float(v) => f.write_str(&format_float(*v)),
            TidalValue::Bool(true) => f.write_str("true"),
            TidalValue::Bool(false) => f.write_str("false"),
        }
    }
}

impl ToTidal for TidalValue {
    fn to_tidal(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for TidalValue {
    fn from(s: &str) -> Self {
        TidalValue::Text(s.to_string())
    }
}

impl From<String> for TidalValue {
    fn from(s: String) -> Self {
        TidalValue::Text(s)
    }
}

impl From<i64> for TidalValue {
    fn from(i: i64) -> Self {
        TidalValue::Int(i)
    }
}

impl From<i32> for TidalValue {
    fn from(i: i32) -> Self {
        TidalValue::Int(i64::from(i))
    }
}

impl From<f64> for TidalValue {
    fn from(v: f64) -> Self {
        TidalValue::Float(v)
    }
}

impl From<bool> for TidalValue {
    fn from(b: bool) -> Self {
        TidalValue::Bool(b)
    }
}

/// Format a float with 6 significant digits, trimming trailing zeros and a
/// dangling decimal point.
///
/// Always stays in decimal form so the generated script remains plain
/// Tidal-readable text: `1200.0` → `"1200"`, `0.4` → `"0.4"`,
/// `1.0 / 3.0` → `"0.333333"`.
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if exponent > 5 {
        // More integer digits than significant digits: round to 6 significant
        // figures, still in plain decimal form.
        let scale = 10f64.powi(exponent - 5);
        return format!("{:.0}", (value / scale).round() * scale);
    }
    let decimals = (5 - exponent) as usize;
    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
