//! Logic Scoring of Preference (LSP) evaluation.
//!
//! Scores alternatives against a hierarchy of criteria:
//!
//! - **Criteria** ([`criterion`]): map a raw attribute value to a
//!   suitability score in `[0, 1]`.
//! - **Aggregators** ([`aggregation`]): graded conjunction/disjunction
//!   (UGCD) with a tunable andness, and conjunctive/disjunctive partial
//!   absorption.
//! - **Trees** ([`tree`]): weighted aggregation hierarchies evaluated with
//!   a missing-value tolerance policy.
//!
//! # Example
//!
//! ```
//! use u_lsp::aggregation::{Aggregator, AndnessLevel};
//! use u_lsp::criterion::{ContinuousCriterion, QualitativeCriterion};
//! use u_lsp::tree::{Inputs, TreeBuilder};
//!
//! fn main() -> u_lsp::Result<()> {
//!     let mut builder = TreeBuilder::new("1", "Home", AndnessLevel::HighSoftPartialConjunction);
//!     let root = builder.root();
//!     builder.attach_criterion(
//!         root,
//!         QualitativeCriterion::new("road", vec![("poor", 0.2), ("good", 1.0)])?,
//!         0.4,
//!     )?;
//!     builder.attach_criterion(
//!         root,
//!         ContinuousCriterion::new("area", vec![(40.0, 0.0), (120.0, 1.0)])?,
//!         0.6,
//!     )?;
//!     let tree = builder.build()?;
//!
//!     let inputs = Inputs::from([
//!         ("road".to_string(), "good".into()),
//!         ("area".to_string(), 80.0.into()),
//!     ]);
//!     let score = tree.evaluate(&inputs)?.unwrap_or(0.0);
//!     assert!(score > 0.5 && score < 1.0);
//!     Ok(())
//! }
//! ```
//!
//! Fallible operations return [`Result`]; [`LspError::kind`] groups errors
//! into configuration, input-domain and numerical failures.

pub mod aggregation;
pub mod criterion;
mod error;
pub mod tree;

pub use error::{ErrorKind, LspError, Result};
