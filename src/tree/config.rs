//! Evaluation configuration.

use crate::error::{LspError, Result};

/// What an aggregation node yields when every child was missing and
/// dropped as irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllDroppedPolicy {
    /// The node itself becomes missing and its parent applies the
    /// tolerance policy to it.
    #[default]
    Missing,

    /// The node scores 0.
    Zero,
}

/// Configuration for aggregation tree evaluation.
///
/// # Examples
///
/// ```
/// use u_lsp::tree::{AllDroppedPolicy, EvalConfig};
///
/// let config = EvalConfig::default()
///     .with_thresholds(0.2, 0.8)
///     .with_all_dropped(AllDroppedPolicy::Zero);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalConfig {
    /// A missing child whose raw tolerance `1 − 2w` is below this value is
    /// scored 0 (its absence counts as failure).
    pub failure_threshold: f64,

    /// A missing child whose raw tolerance is above this value is dropped
    /// and its weight excluded before renormalization. Between the two
    /// thresholds (inclusive) the child takes the mean of its resolvable
    /// siblings.
    pub irrelevance_threshold: f64,

    /// Behaviour when every child of a node is dropped.
    pub all_dropped: AllDroppedPolicy,

    /// Whether to evaluate sibling subtrees in parallel using rayon.
    ///
    /// Only honored when built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 0.25,
            irrelevance_threshold: 0.75,
            all_dropped: AllDroppedPolicy::default(),
            parallel: false,
        }
    }
}

impl EvalConfig {
    /// Sets both tolerance thresholds.
    pub fn with_thresholds(mut self, failure: f64, irrelevance: f64) -> Self {
        self.failure_threshold = failure;
        self.irrelevance_threshold = irrelevance;
        self
    }

    pub fn with_all_dropped(mut self, policy: AllDroppedPolicy) -> Self {
        self.all_dropped = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let (low, high) = (self.failure_threshold, self.irrelevance_threshold);
        if !(0.0..=1.0).contains(&low) {
            return Err(LspError::InvalidConfig(format!(
                "failure_threshold must be in [0, 1], got {low}"
            )));
        }
        if !(0.0..=1.0).contains(&high) {
            return Err(LspError::InvalidConfig(format!(
                "irrelevance_threshold must be in [0, 1], got {high}"
            )));
        }
        if low > high {
            return Err(LspError::InvalidConfig(format!(
                "failure_threshold ({low}) exceeds irrelevance_threshold ({high})"
            )));
        }
        Ok(())
    }
}
