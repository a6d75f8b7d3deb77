//! Logical aggregation operators.
//!
//! Operators combine child suitability scores in `[0, 1]` into one score:
//!
//! - **UGCD** ([`ContinuousAggregator`], [`ugcd`]): graded conjunction and
//!   disjunction controlled by an andness α, with the fifteen standard
//!   presets in [`AndnessLevel`].
//! - **Partial absorption** ([`PartialAbsorption`]): asymmetric two-input
//!   operators for mandatory/desired and sufficient/desired criteria.
//! - **Means** ([`weighted_arithmetic_mean`], [`weighted_power_mean`],
//!   [`counter_harmonic_mean`]): the building blocks of UGCD.
//!
//! [`Aggregator`] is the tagged union stored in aggregation tree nodes.
//!
//! # References
//!
//! - Dujmović (2007), "Continuous Preference Logic for System Evaluation"
//! - Dujmović (2018), "Soft Computing Evaluation Logic"

mod absorption;
mod means;
mod presets;
mod types;
mod ugcd;

pub use absorption::{AbsorptionKind, AbsorptionParams, PartialAbsorption};
pub use means::{
    counter_harmonic_mean, weighted_arithmetic_mean, weighted_power_mean, WEIGHT_TOLERANCE,
};
pub use presets::AndnessLevel;
pub use types::Aggregator;
pub use ugcd::{hard_exponent, ugcd, ContinuousAggregator, SOFT_EXPONENT};
