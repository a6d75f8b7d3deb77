//! Missingness tolerance levels.

use super::config::EvalConfig;

/// How a node treats a child whose score is missing.
///
/// The level is derived from the child's weight `w`: the raw tolerance
/// `1 − 2w` is discretized by [`EvalConfig::failure_threshold`] and
/// [`EvalConfig::irrelevance_threshold`]. Heavily weighted children cannot
/// be missing without penalty; lightly weighted ones may simply be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tolerance {
    /// Level 0: the child scores 0 and keeps its weight.
    Failure,
    /// Level 0.5: the child takes the mean of its resolvable siblings.
    Neutral,
    /// Level 1: the child and its weight are dropped.
    Irrelevant,
}

impl Tolerance {
    /// Undiscretized tolerance `1 − 2w`.
    pub fn raw(weight: f64) -> f64 {
        1.0 - 2.0 * weight
    }

    pub fn classify(weight: f64, config: &EvalConfig) -> Self {
        let raw = Self::raw(weight);
        if raw < config.failure_threshold {
            Tolerance::Failure
        } else if raw > config.irrelevance_threshold {
            Tolerance::Irrelevant
        } else {
            Tolerance::Neutral
        }
    }

    /// Numeric level: 0, 0.5 or 1.
    pub fn level(self) -> f64 {
        match self {
            Tolerance::Failure => 0.0,
            Tolerance::Neutral => 0.5,
            Tolerance::Irrelevant => 1.0,
        }
    }
}
