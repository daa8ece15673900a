//! # Unit Types
//!
//! Type-safe wrappers for teletraffic quantities. These are plain `f64`
//! newtypes that serialize as bare numbers.
//!
//! - Offered traffic: Erlangs
//! - Blocking: probability in [0, 1], or its percentage form in [0, 100]
//!
//! The numeric engine works on raw `f64` values; the wrappers appear on
//! results where confusing a probability with a percentage is easy.
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::units::{Percent, Probability};
//!
//! let p = Probability(0.02);
//! let pct: Percent = p.into();
//! assert!((pct.0 - 2.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offered traffic in Erlangs
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Erlangs(pub f64);

/// Blocking probability as a fraction in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(pub f64);

/// Blocking probability as a percentage in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl From<Probability> for Percent {
    fn from(p: Probability) -> Self {
        Percent(p.0 * 100.0)
    }
}

impl From<Percent> for Probability {
    fn from(pct: Percent) -> Self {
        Probability(pct.0 / 100.0)
    }
}

impl fmt::Display for Erlangs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} E", self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.0)
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_probability_conversion() {
        let pct: Percent = Probability(0.015).into();
        assert!((pct.0 - 1.5).abs() < 1e-12);

        let p: Probability = Percent(25.0).into();
        assert!((p.0 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Erlangs(11.92)).unwrap();
        assert_eq!(json, "11.92");
        let back: Percent = serde_json::from_str("1.5").unwrap();
        assert_eq!(back, Percent(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Erlangs(10.0).to_string(), "10.00 E");
        assert_eq!(Percent(1.23456).to_string(), "1.2346%");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.125, 4), 0.125);
        assert_eq!(round_to(2.0049, 2), 2.0);
    }
}
