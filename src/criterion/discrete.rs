//! Exact-match criteria over numeric values and labels.

use super::types::{check_scale_score, invalid_scale, Criterion, RawValue};
use crate::error::{LspError, Result};

/// Scores a numeric value by exact lookup in a value → score table.
///
/// # Examples
///
/// ```
/// use u_lsp::criterion::{Criterion, DiscreteCriterion, RawValue};
///
/// let bedrooms = DiscreteCriterion::new("bedrooms", vec![(3.0, 1.0), (2.0, 0.5), (1.0, 0.0)]).unwrap();
/// assert_eq!(bedrooms.score(&RawValue::from(2)).unwrap(), Some(0.5));
/// assert!(bedrooms.score(&RawValue::from(4)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DiscreteCriterion {
    name: String,
    description: String,
    table: Vec<(f64, f64)>,
}

impl DiscreteCriterion {
    /// Fails if the table is empty, contains a NaN or repeated value, or a
    /// score outside `[0, 1]`.
    pub fn new(name: impl Into<String>, table: Vec<(f64, f64)>) -> Result<Self> {
        let name = name.into();
        if table.is_empty() {
            return Err(invalid_scale(&name, "value table is empty"));
        }
        for (i, &(value, score)) in table.iter().enumerate() {
            if value.is_nan() {
                return Err(invalid_scale(&name, "value table contains NaN"));
            }
            if table[..i].iter().any(|&(v, _)| v == value) {
                return Err(invalid_scale(&name, format!("value {value} is listed twice")));
            }
            check_scale_score(&name, score)?;
        }
        Ok(Self {
            name,
            description: String::new(),
            table,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn table(&self) -> &[(f64, f64)] {
        &self.table
    }
}

impl Criterion for DiscreteCriterion {
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
        let RawValue::Number(v) = value else {
            return Err(LspError::WrongValueKind {
                criterion: self.name.clone(),
                expected: "numeric",
            });
        };
        self.table
            .iter()
            .find(|(key, _)| key == v)
            .map(|&(_, score)| Some(score))
            .ok_or_else(|| LspError::UnmappedValue {
                criterion: self.name.clone(),
                value: value.to_string(),
            })
    }
}

/// Scores a label by exact lookup in a label → score table.
#[derive(Debug, Clone)]
pub struct QualitativeCriterion {
    name: String,
    description: String,
    table: Vec<(String, f64)>,
}

impl QualitativeCriterion {
    pub fn new<L: Into<String>>(name: impl Into<String>, table: Vec<(L, f64)>) -> Result<Self> {
        let name = name.into();
        if table.is_empty() {
            return Err(invalid_scale(&name, "label table is empty"));
        }
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(table.len());
        for (label, score) in table {
            let label = label.into();
            if entries.iter().any(|(l, _)| *l == label) {
                return Err(invalid_scale(&name, format!("label '{label}' is listed twice")));
            }
            check_scale_score(&name, score)?;
            entries.push((label, score));
        }
        Ok(Self {
            name,
            description: String::new(),
            table: entries,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn table(&self) -> &[(String, f64)] {
        &self.table
    }
}

impl Criterion for QualitativeCriterion {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn score(&self, value: &RawValue) -> Result<Option<f64>> {
        let label = match value {
            RawValue::Missing => return Ok(None),
            RawValue::Label(label) => label,
            RawValue::Number(v) if v.is_nan() => return Ok(None),
            RawValue::Number(_) => {
                return Err(LspError::WrongValueKind {
                    criterion: self.name.clone(),
                    expected: "label",
                })
            }
        };
        self.table
            .iter()
            .find(|(key, _)| key == label)
            .map(|&(_, score)| Some(score))
            .ok_or_else(|| LspError::UnmappedValue {
                criterion: self.name.clone(),
                value: value.to_string(),
            })
    }
}
