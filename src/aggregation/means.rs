//! Weighted means over suitability scores.
//!
//! All functions take scores in `[0, 1]` and weights that sum to 1
//! (within [`WEIGHT_TOLERANCE`]).

use crate::error::{LspError, Result};

/// Tolerance used when checking that a weight vector sums to 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Validates a (scores, weights) pair before aggregation.
pub(crate) fn check_inputs(scores: &[f64], weights: &[f64]) -> Result<()> {
    if scores.is_empty() {
        return Err(LspError::EmptyInput);
    }
    if scores.len() != weights.len() {
        return Err(LspError::LengthMismatch {
            scores: scores.len(),
            weights: weights.len(),
        });
    }
    if let Some(&bad) = scores.iter().find(|s| !(0.0..=1.0).contains(*s)) {
        return Err(LspError::ScoreOutOfRange(bad));
    }
    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(LspError::WeightSum { sum });
    }
    Ok(())
}

/// Rejects non-finite results and trims floating overshoot outside `[0, 1]`.
pub(crate) fn finish(operator: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value.clamp(0.0, 1.0))
    } else {
        Err(LspError::NonFinite(operator))
    }
}

pub(crate) fn arithmetic_unchecked(scores: &[f64], weights: &[f64]) -> f64 {
    scores.iter().zip(weights).map(|(s, w)| w * s).sum()
}

pub(crate) fn power_unchecked(scores: &[f64], weights: &[f64], r: f64) -> f64 {
    // 0^r diverges for r < 0; the mean's limit is 0.
    if r < 0.0 && scores.iter().zip(weights).any(|(&s, &w)| s == 0.0 && w > 0.0) {
        return 0.0;
    }
    // Scale by the smallest (r < 0) or largest (r > 0) weighted score so
    // every term is in [0, 1] and large |r| cannot overflow.
    let weighted = || scores.iter().zip(weights).filter(|(_, w)| **w > 0.0);
    let pivot = if r < 0.0 {
        weighted().map(|(s, _)| *s).fold(f64::INFINITY, f64::min)
    } else {
        weighted().map(|(s, _)| *s).fold(0.0, f64::max)
    };
    if pivot == 0.0 || !pivot.is_finite() {
        return 0.0;
    }
    let sum: f64 = weighted().map(|(s, w)| w * (s / pivot).powf(r)).sum();
    pivot * sum.powf(1.0 / r)
}

/// Weighted arithmetic mean `Σ wᵢ·xᵢ`.
pub fn weighted_arithmetic_mean(scores: &[f64], weights: &[f64]) -> Result<f64> {
    check_inputs(scores, weights)?;
    finish("weighted arithmetic mean", arithmetic_unchecked(scores, weights))
}

/// Weighted power mean `(Σ wᵢ·xᵢ^r)^(1/r)`.
///
/// For `r < 0` a zero score with positive weight yields exactly 0.
///
/// # Examples
///
/// ```
/// use u_lsp::aggregation::weighted_power_mean;
///
/// let m = weighted_power_mean(&[0.25, 1.0], &[0.5, 0.5], 2.0).unwrap();
/// assert!((m - (0.5f64 * 0.0625 + 0.5).sqrt()).abs() < 1e-12);
/// ```
pub fn weighted_power_mean(scores: &[f64], weights: &[f64], r: f64) -> Result<f64> {
    if r == 0.0 || !r.is_finite() {
        return Err(LspError::InvalidExponent(r));
    }
    check_inputs(scores, weights)?;
    finish("weighted power mean", power_unchecked(scores, weights, r))
}

/// Counter-harmonic mean `Σ wᵢ·xᵢ^r / Σ wᵢ·xᵢ^(r-1)`.
///
/// Fails with [`LspError::NonFinite`] when the denominator vanishes
/// (e.g. all scores zero).
pub fn counter_harmonic_mean(scores: &[f64], weights: &[f64], r: f64) -> Result<f64> {
    if !r.is_finite() {
        return Err(LspError::InvalidExponent(r));
    }
    check_inputs(scores, weights)?;
    let numerator: f64 = scores.iter().zip(weights).map(|(s, w)| w * s.powf(r)).sum();
    let denominator: f64 = scores
        .iter()
        .zip(weights)
        .map(|(s, w)| w * s.powf(r - 1.0))
        .sum();
    finish("counter-harmonic mean", numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_mean() {
        let m = weighted_arithmetic_mean(&[0.2, 0.8], &[0.25, 0.75]).unwrap();
        assert!((m - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_power_mean_r1_is_arithmetic() {
        let scores = [0.1, 0.4, 0.9];
        let weights = [0.2, 0.3, 0.5];
        let p = weighted_power_mean(&scores, &weights, 1.0).unwrap();
        let a = weighted_arithmetic_mean(&scores, &weights).unwrap();
        assert!((p - a).abs() < 1e-12);
    }

    #[test]
    fn test_power_mean_negative_exponent_with_zero() {
        let m = weighted_power_mean(&[0.0, 0.9], &[0.5, 0.5], -1.0).unwrap();
        assert_eq!(m, 0.0);
    }

    #[test]
    fn test_power_mean_harmonic() {
        // r = -1: harmonic mean 1 / (0.5/0.5 + 0.5/1.0) = 2/3
        let m = weighted_power_mean(&[0.5, 1.0], &[0.5, 0.5], -1.0).unwrap();
        assert!((m - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_mean_large_exponents_stay_finite() {
        let m = weighted_power_mean(&[0.3, 0.6], &[0.5, 0.5], -5000.0).unwrap();
        assert!((m - 0.3).abs() < 1e-3);
        let m = weighted_power_mean(&[0.3, 0.6], &[0.5, 0.5], 5000.0).unwrap();
        assert!((m - 0.6).abs() < 1e-3);
    }

    #[test]
    fn test_power_mean_rejects_zero_exponent() {
        assert_eq!(
            weighted_power_mean(&[0.5], &[1.0], 0.0),
            Err(LspError::InvalidExponent(0.0))
        );
    }

    #[test]
    fn test_counter_harmonic() {
        // r = 2: (0.5*0.25 + 0.5*1) / (0.5*0.5 + 0.5*1) = 0.625 / 0.75
        let m = counter_harmonic_mean(&[0.5, 1.0], &[0.5, 0.5], 2.0).unwrap();
        assert!((m - 0.625 / 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_counter_harmonic_all_zero_is_error() {
        assert_eq!(
            counter_harmonic_mean(&[0.0, 0.0], &[0.5, 0.5], 2.0),
            Err(LspError::NonFinite("counter-harmonic mean"))
        );
    }

    #[test]
    fn test_check_inputs() {
        assert_eq!(check_inputs(&[], &[]), Err(LspError::EmptyInput));
        assert_eq!(
            check_inputs(&[0.5], &[0.5, 0.5]),
            Err(LspError::LengthMismatch {
                scores: 1,
                weights: 2
            })
        );
        assert_eq!(
            check_inputs(&[1.5], &[1.0]),
            Err(LspError::ScoreOutOfRange(1.5))
        );
        assert!(matches!(
            check_inputs(&[0.5, 0.5], &[0.5, 0.6]),
            Err(LspError::WeightSum { .. })
        ));
        assert!(check_inputs(&[0.5, 0.5], &[0.5, 0.5 + 1e-9]).is_ok());
    }

    #[test]
    fn test_nan_score_rejected() {
        assert!(matches!(
            check_inputs(&[f64::NAN], &[1.0]),
            Err(LspError::ScoreOutOfRange(_))
        ));
    }
}
