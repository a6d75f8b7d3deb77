//! Building criteria from scale definitions.

use super::continuous::ContinuousCriterion;
use super::discrete::{DiscreteCriterion, QualitativeCriterion};
use super::types::{invalid_scale, Criterion, RawValue};
use crate::error::Result;

/// Declarative description of an elementary criterion's scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CriterionScale {
    /// Interpolation breakpoints `(value, score)`.
    Points(Vec<(f64, f64)>),
    /// Parallel lists of values and their scores. All values must be
    /// labels (qualitative) or all numbers (discrete).
    Table {
        values: Vec<RawValue>,
        scores: Vec<f64>,
    },
}

/// Builds the criterion matching `scale`.
///
/// # Examples
///
/// ```
/// use u_lsp::criterion::{create_criterion, Criterion, CriterionScale, RawValue};
///
/// let dining = create_criterion(
///     "dining room",
///     "Size of the dining room",
///     CriterionScale::Table {
///         values: vec!["large".into(), "medium".into(), "none".into()],
///         scores: vec![1.0, 0.7, 0.0],
///     },
/// )
/// .unwrap();
/// assert_eq!(dining.score(&RawValue::from("medium")).unwrap(), Some(0.7));
/// ```
pub fn create_criterion(
    name: impl Into<String>,
    description: impl Into<String>,
    scale: CriterionScale,
) -> Result<Box<dyn Criterion>> {
    let name = name.into();
    let description = description.into();
    match scale {
        CriterionScale::Points(points) => Ok(Box::new(
            ContinuousCriterion::new(name, points)?.with_description(description),
        )),
        CriterionScale::Table { values, scores } => {
            if values.len() != scores.len() {
                return Err(invalid_scale(
                    &name,
                    format!("{} values but {} scores", values.len(), scores.len()),
                ));
            }
            if values.iter().all(|v| matches!(v, RawValue::Label(_))) {
                let table: Vec<(String, f64)> = values
                    .into_iter()
                    .zip(scores)
                    .filter_map(|(v, s)| match v {
                        RawValue::Label(label) => Some((label, s)),
                        _ => None,
                    })
                    .collect();
                Ok(Box::new(
                    QualitativeCriterion::new(name, table)?.with_description(description),
                ))
            } else if values.iter().all(|v| matches!(v, RawValue::Number(_))) {
                let table: Vec<(f64, f64)> = values
                    .iter()
                    .zip(scores)
                    .filter_map(|(v, s)| match v {
                        RawValue::Number(n) => Some((*n, s)),
                        _ => None,
                    })
                    .collect();
                Ok(Box::new(
                    DiscreteCriterion::new(name, table)?.with_description(description),
                ))
            } else {
                Err(invalid_scale(
                    &name,
                    "values must be all labels or all numbers",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LspError;

    #[test]
    fn test_points_make_continuous() {
        let c = create_criterion(
            "shop distance",
            "",
            CriterionScale::Points(vec![(50.0, 1.0), (100.0, 0.7), (200.0, 0.4), (500.0, 0.0)]),
        )
        .unwrap();
        let s = c.score(&RawValue::from(150.0)).unwrap().unwrap();
        assert!((s - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_numbers_make_discrete() {
        let c = create_criterion(
            "health facilities",
            "Facilities within two kilometres",
            CriterionScale::Table {
                values: vec![4.into(), 3.into(), 2.into(), 1.into(), 0.into()],
                scores: vec![1.0, 0.75, 0.5, 0.25, 0.0],
            },
        )
        .unwrap();
        assert_eq!(c.score(&RawValue::from(3)).unwrap(), Some(0.75));
        assert_eq!(c.description(), "Facilities within two kilometres");
    }

    #[test]
    fn test_mixed_values_rejected() {
        let err = create_criterion(
            "mixed",
            "",
            CriterionScale::Table {
                values: vec![1.into(), "two".into()],
                scores: vec![0.5, 0.5],
            },
        )
        .err()
        .unwrap();
        assert!(matches!(err, LspError::InvalidScale { .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = create_criterion(
            "renovation",
            "",
            CriterionScale::Table {
                values: vec![5.into(), 10.into()],
                scores: vec![1.0, 0.7, 0.0],
            },
        );
        assert!(result.is_err());
    }
}
