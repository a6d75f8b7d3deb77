//! Piecewise-linear criteria.

use super::types::{check_scale_score, invalid_scale, Criterion, RawValue};
use crate::error::{LspError, Result};

/// Scores a numeric value by linear interpolation between breakpoints.
///
/// Breakpoints may be declared in ascending or descending value order.
/// A value that appears twice models a step: in ascending order, the
/// second of the two points applies at that value and to its right.
///
/// # Examples
///
/// ```
/// use u_lsp::criterion::{ContinuousCriterion, Criterion, RawValue};
///
/// let distance = ContinuousCriterion::new(
///     "distance to transport",
///     vec![(0.0, 1.0), (500.0, 0.8), (1000.0, 0.5), (1500.0, 0.0)],
/// )
/// .unwrap();
/// let s = distance.score(&RawValue::from(600.0)).unwrap().unwrap();
/// assert!((s - 0.74).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ContinuousCriterion {
    name: String,
    description: String,
    points: Vec<(f64, f64)>,
}

impl ContinuousCriterion {
    /// Fails if there are no points, a value is not finite, values are not
    /// monotone, or a score is outside `[0, 1]`.
    pub fn new(name: impl Into<String>, mut points: Vec<(f64, f64)>) -> Result<Self> {
        let name = name.into();
        if points.is_empty() {
            return Err(invalid_scale(&name, "no breakpoints"));
        }
        for &(value, score) in &points {
            if !value.is_finite() {
                return Err(invalid_scale(&name, format!("breakpoint value {value} is not finite")));
            }
            check_scale_score(&name, score)?;
        }
        if !points.windows(2).all(|w| w[0].0 <= w[1].0) {
            if points.windows(2).all(|w| w[0].0 >= w[1].0) {
                points.reverse();
            } else {
                return Err(invalid_scale(&name, "breakpoint values must be monotone"));
            }
        }
        Ok(Self {
            name,
            description: String::new(),
            points,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Breakpoints in ascending value order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Accepted input range `[min, max]`.
    pub fn range(&self) -> (f64, f64) {
        let first = self.points[0].0;
        let last = self.points[self.points.len() - 1].0;
        (first, last)
    }

    fn interpolate(&self, value: f64) -> f64 {
        // Last breakpoint at or below `value`; exists because value >= min.
        let j = self
            .points
            .iter()
            .rposition(|&(x, _)| x <= value)
            .unwrap_or(0);
        let (x0, y0) = self.points[j];
        match self.points.get(j + 1) {
            Some(&(x1, y1)) if x0 != value => y0 + (y1 - y0) * (value - x0) / (x1 - x0),
            _ => y0,
        }
    }
}

impl Criterion for ContinuousCriterion {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn score(&self, value: &RawValue) -> Result<Option<f64>> {
        if value.is_missing() {
            return Ok(None);
        }
        let &RawValue::Number(v) = value else {
            return Err(LspError::WrongValueKind {
                criterion: self.name.clone(),
                expected: "numeric",
            });
        };
        let (min, max) = self.range();
        if !(min..=max).contains(&v) {
            return Err(LspError::OutOfRange {
                criterion: self.name.clone(),
                value: v,
                min,
                max,
            });
        }
        Ok(Some(self.interpolate(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school_distance() -> ContinuousCriterion {
        ContinuousCriterion::new(
            "school distance",
            vec![(0.0, 1.0), (500.0, 0.6), (2000.0, 0.0)],
        )
        .unwrap()
    }

    fn score(c: &ContinuousCriterion, v: f64) -> f64 {
        c.score(&RawValue::from(v)).unwrap().unwrap()
    }

    #[test]
    fn test_breakpoints_exact() {
        let c = school_distance();
        assert_eq!(score(&c, 0.0), 1.0);
        assert_eq!(score(&c, 500.0), 0.6);
        assert_eq!(score(&c, 2000.0), 0.0);
    }

    #[test]
    fn test_interpolation() {
        let c = school_distance();
        assert!((score(&c, 250.0) - 0.8).abs() < 1e-12);
        assert!((score(&c, 1250.0) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range() {
        let c = school_distance();
        assert_eq!(
            c.score(&RawValue::from(2500.0)),
            Err(LspError::OutOfRange {
                criterion: "school distance".into(),
                value: 2500.0,
                min: 0.0,
                max: 2000.0
            })
        );
        assert!(c.score(&RawValue::from(-1.0)).is_err());
    }

    #[test]
    fn test_descending_declaration() {
        let yard = ContinuousCriterion::new(
            "yard area",
            vec![(100.0, 1.0), (80.0, 0.85), (50.0, 0.5), (0.0, 0.0)],
        )
        .unwrap();
        assert_eq!(yard.range(), (0.0, 100.0));
        assert!((score(&yard, 25.0) - 0.25).abs() < 1e-12);
        assert!((score(&yard, 90.0) - 0.925).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_value_is_a_step() {
        // Declared top-down: 50 m² still scores 0.5, anything less fails.
        let area = ContinuousCriterion::new(
            "floor area",
            vec![(100.0, 1.0), (75.0, 0.7), (50.0, 0.5), (50.0, 0.0)],
        )
        .unwrap();
        assert_eq!(area.range(), (50.0, 100.0));
        assert_eq!(score(&area, 50.0), 0.5);
        assert!((score(&area, 62.5) - 0.6).abs() < 1e-12);

        let age = ContinuousCriterion::new(
            "building age",
            vec![(5.0, 1.0), (10.0, 0.7), (20.0, 0.5), (40.0, 0.2), (40.0, 0.0)],
        )
        .unwrap();
        assert_eq!(score(&age, 40.0), 0.0);
        assert!((score(&age, 30.0) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_non_monotone_rejected() {
        assert!(ContinuousCriterion::new("x", vec![(0.0, 0.1), (10.0, 0.5), (5.0, 0.9)]).is_err());
    }

    #[test]
    fn test_single_point() {
        let c = ContinuousCriterion::new("exact", vec![(3.0, 0.4)]).unwrap();
        assert_eq!(score(&c, 3.0), 0.4);
        assert!(c.score(&RawValue::from(3.5)).is_err());
    }

    #[test]
    fn test_invalid_scales() {
        assert!(ContinuousCriterion::new("x", vec![]).is_err());
        assert!(ContinuousCriterion::new("x", vec![(0.0, 100.0)]).is_err());
        assert!(ContinuousCriterion::new("x", vec![(f64::INFINITY, 0.5)]).is_err());
    }

    #[test]
    fn test_label_rejected() {
        assert!(matches!(
            school_distance().score(&RawValue::from("far")),
            Err(LspError::WrongValueKind { .. })
        ));
    }
}
