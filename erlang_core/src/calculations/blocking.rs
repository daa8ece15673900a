//! # Erlang-B Blocking Probability
//!
//! Computes the probability that an arriving call finds all `N` channels
//! busy when `A` Erlangs of traffic are offered to a loss system.
//!
//! ## Method
//!
//! ```text
//!            A^N / N!
//! B(A, N) = ──────────────
//!           Σ_{k=0..N} A^k / k!
//! ```
//!
//! Each term is evaluated in the log domain, `t_k = k·ln A − ln k!`, and the
//! largest term `M` is subtracted before exponentiating:
//!
//! ```text
//! B = exp(t_N − M) / Σ_k exp(t_k − M)
//! ```
//!
//! so neither the numerator nor the sum can overflow, whatever the size of
//! `A` or `N`. The result is clamped to [0, 1].
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::calculations::blocking::blocking;
//!
//! let b = blocking(10.0, 17);
//! assert!(b < 0.02 && b > 0.012);
//!
//! // No overflow for large systems
//! let b = blocking(1000.0, 2000);
//! assert!((0.0..=1.0).contains(&b));
//! ```

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::Probability;

/// Natural log of `n!`, summing `ln i` for `i` in `2..=n`.
pub fn log_factorial(n: u32) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

/// Erlang-B blocking probability for `traffic` Erlangs on `channels` trunks.
///
/// No load means no blocking (`traffic <= 0` or NaN gives 0) and no capacity
/// means certain blocking (`channels == 0` gives 1, for positive traffic).
/// Runs in `O(N)` time and constant memory.
pub fn blocking(traffic: f64, channels: u32) -> f64 {
    if is_unloaded(traffic) {
        return 0.0;
    }
    if channels == 0 || traffic.is_infinite() {
        return 1.0;
    }

    let ln_a = traffic.ln();

    // Terms rise while k < A, so the largest sits at k = min(N, ⌊A⌋)
    let peak = traffic.floor().min(channels as f64) as u32;
    let max_term = peak as f64 * ln_a - log_factorial(peak);

    // t_k = k·ln A − ln k!, accumulated term by term; ends holding t_N
    let mut term = 0.0;
    let mut denominator = (-max_term).exp();
    for k in 1..=channels {
        term += ln_a - (k as f64).ln();
        denominator += (term - max_term).exp();
    }

    ((term - max_term).exp() / denominator).clamp(0.0, 1.0)
}

/// Not positive, NaN included.
fn is_unloaded(traffic: f64) -> bool {
    traffic.is_nan() || traffic <= 0.0
}

/// Validated form of [`blocking`] for values arriving from outside the crate.
///
/// # Errors
///
/// `CalcError::InvalidInput` if `traffic` is negative or not finite.
pub fn erlang_b(traffic: f64, channels: u32) -> CalcResult<Probability> {
    require_finite("traffic", traffic)?;
    if traffic < 0.0 {
        return Err(CalcError::invalid_input(
            "traffic",
            traffic.to_string(),
            "Offered traffic cannot be negative",
        ));
    }
    Ok(Probability(blocking(traffic, channels)))
}

/// Blocking probabilities for `N = 0, 1, 2, ...` at a fixed offered traffic.
///
/// Maintains the log-sum-exp state incrementally, so walking up to `N`
/// costs `O(N)` instead of recomputing [`blocking`] for every count.
/// Yields `(N, B(A, N))` pairs and never terminates on its own.
#[derive(Debug, Clone)]
pub struct ChannelSweep {
    ln_traffic: f64,
    next: u32,
    /// ln(A^k / k!) for the last yielded k
    term: f64,
    /// Running maximum of the terms
    max_term: f64,
    /// Σ exp(t_k − max_term) over the yielded k
    scaled_sum: f64,
    /// Constant answer for zero or unbounded load
    fixed: Option<f64>,
}

impl ChannelSweep {
    /// Start a sweep at `N = 0` for the given offered traffic.
    pub fn new(traffic: f64) -> Self {
        let fixed = if is_unloaded(traffic) {
            Some(0.0)
        } else if traffic.is_infinite() {
            Some(1.0)
        } else {
            None
        };
        ChannelSweep {
            ln_traffic: if fixed.is_some() { 0.0 } else { traffic.ln() },
            next: 0,
            term: 0.0,
            max_term: 0.0,
            scaled_sum: 0.0,
            fixed,
        }
    }
}

impl Iterator for ChannelSweep {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.next;
        self.next = self.next.checked_add(1)?;

        if let Some(b) = self.fixed {
            return Some((n, b));
        }

        if n == 0 {
            self.term = 0.0;
            self.max_term = 0.0;
            self.scaled_sum = 1.0;
            return Some((0, 1.0));
        }

        self.term += self.ln_traffic - (n as f64).ln();
        if self.term > self.max_term {
            self.scaled_sum = self.scaled_sum * (self.max_term - self.term).exp() + 1.0;
            self.max_term = self.term;
        } else {
            self.scaled_sum += (self.term - self.max_term).exp();
        }

        let b = (self.term - self.max_term).exp() / self.scaled_sum;
        Some((n, b.clamp(0.0, 1.0)))
    }
}
