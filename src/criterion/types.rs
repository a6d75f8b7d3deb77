//! Core trait and raw input values for elementary criteria.

use crate::error::{LspError, Result};
use std::fmt;

/// A raw attribute value fed to a criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawValue {
    Number(f64),
    Label(String),
    /// No data. A `Number(NaN)` is treated the same way.
    Missing,
}

impl RawValue {
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Number(v) => v.is_nan(),
            RawValue::Label(_) => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(v) => write!(f, "{v}"),
            RawValue::Label(label) => write!(f, "'{label}'"),
            RawValue::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Label(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Label(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// An elementary criterion: maps a raw attribute value to a suitability
/// score in `[0, 1]`.
///
/// Implementations must be pure; aggregation trees share criteria across
/// evaluations (and threads, with the `parallel` feature).
///
/// # Examples
///
/// ```
/// use u_lsp::criterion::{Criterion, RawValue};
/// use u_lsp::Result;
///
/// struct Pass;
///
/// impl Criterion for Pass {
///     fn name(&self) -> &str { "pass" }
///     fn score(&self, value: &RawValue) -> Result<Option<f64>> {
///         Ok(if value.is_missing() { None } else { Some(1.0) })
///     }
/// }
///
/// assert_eq!(Pass.score(&RawValue::Missing).unwrap(), None);
/// ```
pub trait Criterion: Send + Sync {
    /// Name of the criterion; also the key of its input value.
    fn name(&self) -> &str;

    /// Free-text description of what is measured.
    fn description(&self) -> &str {
        ""
    }

    /// Scores a raw value.
    ///
    /// Returns `Ok(None)` for a missing value and an input-domain error
    /// for a present value outside the criterion's scale.
    fn score(&self, value: &RawValue) -> Result<Option<f64>>;
}

/// Checks that a scale score lies in `[0, 1]`.
pub(crate) fn check_scale_score(criterion: &str, score: f64) -> Result<()> {
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(LspError::InvalidScale {
            criterion: criterion.to_string(),
            reason: format!("score {score} is outside [0, 1]"),
        })
    }
}

pub(crate) fn invalid_scale(criterion: &str, reason: impl Into<String>) -> LspError {
    LspError::InvalidScale {
        criterion: criterion.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_detection() {
        assert!(RawValue::Missing.is_missing());
        assert!(RawValue::Number(f64::NAN).is_missing());
        assert!(!RawValue::Number(0.0).is_missing());
        assert!(!RawValue::from("good").is_missing());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(RawValue::from(3), RawValue::Number(3.0));
        assert_eq!(RawValue::from(None::<f64>), RawValue::Missing);
        assert_eq!(RawValue::from(Some("poor")), RawValue::Label("poor".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::from(2.5).to_string(), "2.5");
        assert_eq!(RawValue::from("good").to_string(), "'good'");
    }

    #[test]
    fn test_check_scale_score() {
        assert!(check_scale_score("c", 0.0).is_ok());
        assert!(check_scale_score("c", 1.0).is_ok());
        assert!(check_scale_score("c", 100.0).is_err());
        assert!(check_scale_score("c", f64::NAN).is_err());
    }
}
