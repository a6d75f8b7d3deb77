//! Aggregation trees.
//!
//! An aggregation tree scores an alternative by combining elementary
//! criteria bottom-up through logical aggregators. Leaves hold a
//! [`Criterion`](crate::criterion::Criterion); internal nodes hold an
//! [`Aggregator`](crate::aggregation::Aggregator) and weighted children.
//!
//! # Key Types
//!
//! - [`TreeBuilder`]: attaches nodes and validates the wiring
//! - [`AggregationTree`]: the immutable result, evaluated against [`Inputs`]
//! - [`EvalConfig`]: tolerance thresholds, all-dropped policy, parallelism
//! - [`EvaluationReport`]: per-node scores and missing-child resolutions
//!
//! # Missing values
//!
//! A missing input is not an error. Each parent decides from the missing
//! child's weight whether to score it 0, to fill it with the mean of its
//! siblings, or to drop it (see [`Tolerance`]).
//!
//! # References
//!
//! - Dujmović (2018), "Soft Computing Evaluation Logic", ch. 2.6 (missing data)

mod builder;
mod config;
mod runner;
mod tolerance;
mod types;

pub use builder::TreeBuilder;
pub use config::{AllDroppedPolicy, EvalConfig};
pub use runner::{EvaluationReport, MissingResolution, NodeReport};
pub use tolerance::Tolerance;
pub use types::{AggregationTree, Inputs, Node, NodeId, NodeKind, Payload};
