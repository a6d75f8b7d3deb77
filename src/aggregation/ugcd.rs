//! Uniform graded conjunction/disjunction (UGCD).
//!
//! A single andness parameter α moves the operator continuously from
//! full disjunction (α = 0, max) through the weighted arithmetic mean
//! (α = 0.5) to full conjunction (α = 1, min).
//!
//! | α            | formula                                              |
//! |--------------|------------------------------------------------------|
//! | 1            | `min(x)`                                             |
//! | [0.75, 1)    | weighted power mean, exponent [`hard_exponent`]`(α)` |
//! | [0.5, 0.75)  | `(3−4α)·A(x) + (4α−2)·M_R(x)`, R = 0.7201            |
//! | [0, 0.5)     | `1 − UGCD(1−α, 1−x)`                                 |
//!
//! # References
//!
//! Dujmović (2018), "Soft Computing Evaluation Logic", ch. 2.

use super::means::{arithmetic_unchecked, check_inputs, finish, power_unchecked};
use super::presets::AndnessLevel;
use crate::error::{LspError, Result};

/// Fixed power-mean exponent of the soft partial conjunction blend.
pub const SOFT_EXPONENT: f64 = 0.7201;

/// Power-mean exponent for hard partial conjunction at andness α.
///
/// Rational approximation in β = 0.5 − α:
/// `[0.25 + β(1.65811 + β(2.15388 + β(8.2844 + 6.16764β)))] / (α(1−α))`.
pub fn hard_exponent(andness: f64) -> f64 {
    let beta = 0.5 - andness;
    (0.25 + beta * (1.65811 + beta * (2.15388 + beta * (8.2844 + 6.16764 * beta))))
        / (andness * (1.0 - andness))
}

/// Aggregates `scores` with `weights` at andness `andness`.
///
/// # Errors
///
/// Configuration errors for α outside `[0, 1]`, empty input, length
/// mismatch, or weights not summing to 1; an input-domain error for a
/// score outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_lsp::aggregation::ugcd;
///
/// let scores = [0.8, 0.6, 0.9, 0.7];
/// let weights = [0.25; 4];
/// assert_eq!(ugcd(1.0, &scores, &weights).unwrap(), 0.6);
/// assert!((ugcd(0.5, &scores, &weights).unwrap() - 0.75).abs() < 1e-12);
/// ```
pub fn ugcd(andness: f64, scores: &[f64], weights: &[f64]) -> Result<f64> {
    if !(0.0..=1.0).contains(&andness) {
        return Err(LspError::InvalidAndness(andness));
    }
    check_inputs(scores, weights)?;
    finish("ugcd", ugcd_unchecked(andness, scores, weights))
}

fn ugcd_unchecked(andness: f64, scores: &[f64], weights: &[f64]) -> f64 {
    if andness == 1.0 {
        scores.iter().copied().fold(f64::INFINITY, f64::min)
    } else if andness >= 0.75 {
        power_unchecked(scores, weights, hard_exponent(andness))
    } else if andness >= 0.5 {
        (3.0 - 4.0 * andness) * arithmetic_unchecked(scores, weights)
            + (4.0 * andness - 2.0) * power_unchecked(scores, weights, SOFT_EXPONENT)
    } else {
        let complemented: Vec<f64> = scores.iter().map(|s| 1.0 - s).collect();
        1.0 - ugcd_unchecked(1.0 - andness, &complemented, weights)
    }
}

/// UGCD operator with a fixed andness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct ContinuousAggregator {
    andness: f64,
}

impl ContinuousAggregator {
    /// Creates an aggregator with the given andness.
    ///
    /// Fails with [`LspError::InvalidAndness`] outside `[0, 1]`.
    pub fn new(andness: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&andness) {
            return Err(LspError::InvalidAndness(andness));
        }
        Ok(Self { andness })
    }

    pub fn andness(&self) -> f64 {
        self.andness
    }

    /// The preset this aggregator corresponds to, if its andness is one
    /// of the fifteen standard levels.
    pub fn level(&self) -> Option<AndnessLevel> {
        AndnessLevel::from_andness(self.andness)
    }

    /// Preset symbol, or `"UGCD"` for a custom andness.
    pub fn symbol(&self) -> &'static str {
        self.level().map_or("UGCD", AndnessLevel::symbol)
    }

    pub fn evaluate(&self, scores: &[f64], weights: &[f64]) -> Result<f64> {
        ugcd(self.andness, scores, weights)
    }
}

impl From<AndnessLevel> for ContinuousAggregator {
    fn from(level: AndnessLevel) -> Self {
        Self {
            andness: level.andness(),
        }
    }
}

impl TryFrom<f64> for ContinuousAggregator {
    type Error = LspError;

    fn try_from(andness: f64) -> Result<Self> {
        Self::new(andness)
    }
}

impl From<ContinuousAggregator> for f64 {
    fn from(aggregator: ContinuousAggregator) -> Self {
        aggregator.andness
    }
}
