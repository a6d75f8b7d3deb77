//! The closed set of aggregation operators.

use super::absorption::PartialAbsorption;
use super::presets::AndnessLevel;
use super::ugcd::ContinuousAggregator;
use crate::error::Result;

/// An aggregation operator attached to an internal tree node.
///
/// Every variant is a pure function of `(scores, weights)`; weights are
/// ignored by partial absorption.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregator {
    /// Graded conjunction/disjunction with a fixed andness.
    Continuous(ContinuousAggregator),
    /// Conjunctive or disjunctive partial absorption over `[primary, desired]`.
    PartialAbsorption(PartialAbsorption),
}

impl Aggregator {
    /// Continuous aggregator with a custom andness.
    pub fn continuous(andness: f64) -> Result<Self> {
        ContinuousAggregator::new(andness).map(Aggregator::Continuous)
    }

    pub fn conjunctive_absorption(reward: f64, penalty: f64) -> Result<Self> {
        PartialAbsorption::conjunctive(reward, penalty).map(Aggregator::PartialAbsorption)
    }

    pub fn disjunctive_absorption(reward: f64, penalty: f64) -> Result<Self> {
        PartialAbsorption::disjunctive(reward, penalty).map(Aggregator::PartialAbsorption)
    }

    /// Short symbol: a preset symbol, `UGCD`, `CPA`, or `DPA`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Aggregator::Continuous(op) => op.symbol(),
            Aggregator::PartialAbsorption(op) => op.symbol(),
        }
    }

    /// Fixed number of inputs the operator accepts, if any.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Aggregator::Continuous(_) => None,
            Aggregator::PartialAbsorption(_) => Some(2),
        }
    }

    /// Combines `scores` under `weights`.
    pub fn evaluate(&self, scores: &[f64], weights: &[f64]) -> Result<f64> {
        match self {
            Aggregator::Continuous(op) => op.evaluate(scores, weights),
            Aggregator::PartialAbsorption(op) => op.aggregate(scores),
        }
    }
}

impl From<AndnessLevel> for Aggregator {
    fn from(level: AndnessLevel) -> Self {
        Aggregator::Continuous(level.into())
    }
}

impl From<ContinuousAggregator> for Aggregator {
    fn from(op: ContinuousAggregator) -> Self {
        Aggregator::Continuous(op)
    }
}

impl From<PartialAbsorption> for Aggregator {
    fn from(op: PartialAbsorption) -> Self {
        Aggregator::PartialAbsorption(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LspError;

    #[test]
    fn test_dispatch_continuous() {
        let agg = Aggregator::from(AndnessLevel::Neutrality);
        let r = agg.evaluate(&[0.2, 0.6], &[0.5, 0.5]).unwrap();
        assert!((r - 0.4).abs() < 1e-12);
        assert_eq!(agg.symbol(), "A");
        assert_eq!(agg.arity(), None);
    }

    #[test]
    fn test_dispatch_absorption_ignores_weights() {
        let agg = Aggregator::conjunctive_absorption(0.1, 0.2).unwrap();
        let a = agg.evaluate(&[0.6, 0.9], &[0.5, 0.5]).unwrap();
        let b = agg.evaluate(&[0.6, 0.9], &[0.9, 0.1]).unwrap();
        assert_eq!(a, b);
        assert_eq!(agg.symbol(), "CPA");
        assert_eq!(agg.arity(), Some(2));
    }

    #[test]
    fn test_constructors_propagate_errors() {
        assert_eq!(
            Aggregator::continuous(1.5),
            Err(LspError::InvalidAndness(1.5))
        );
        assert!(Aggregator::disjunctive_absorption(0.1, 0.3).is_err());
        assert_eq!(
            Aggregator::disjunctive_absorption(0.3, 0.1).unwrap().symbol(),
            "DPA"
        );
    }
}
