//! Elementary criteria.
//!
//! An elementary criterion turns one raw attribute value into a
//! suitability score in `[0, 1]`. Criteria are the leaves of an
//! aggregation tree and are addressed by name in the input map.
//!
//! - [`DiscreteCriterion`]: exact numeric value lookup
//! - [`QualitativeCriterion`]: exact label lookup
//! - [`ContinuousCriterion`]: piecewise-linear interpolation
//!
//! Custom scales implement the [`Criterion`] trait.

mod continuous;
mod discrete;
mod scale;
mod types;

pub use continuous::ContinuousCriterion;
pub use discrete::{DiscreteCriterion, QualitativeCriterion};
pub use scale::{create_criterion, CriterionScale};
pub use types::{Criterion, RawValue};
