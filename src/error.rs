//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LspError>;

/// Coarse classification of an [`LspError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building aggregators, criteria, or trees.
    /// Nothing built from the failing call is usable.
    Configuration,

    /// Raised while evaluating: a present raw value that its criterion
    /// cannot score. Only the failing evaluation is aborted.
    InputDomain,

    /// An aggregation formula produced a non-finite value.
    Numerical,
}

/// Errors produced by aggregators, criteria, and aggregation trees.
///
/// A missing input is not an error; it travels as `None` and is resolved
/// by the tree's missingness tolerance policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LspError {
    // ---- configuration ----
    #[error("andness must be in [0, 1], got {0}")]
    InvalidAndness(f64),

    #[error("weights must sum to 1, got {sum}")]
    WeightSum { sum: f64 },

    #[error("{scores} scores but {weights} weights")]
    LengthMismatch { scores: usize, weights: usize },

    #[error("nothing to aggregate")]
    EmptyInput,

    #[error("power mean exponent must be finite and non-zero, got {0}")]
    InvalidExponent(f64),

    #[error("partial absorption bound must lie in (0, 0.5), got {0}")]
    BoundOutOfRange(f64),

    #[error("{variant} partial absorption requires {requirement} (reward {reward}, penalty {penalty})")]
    BoundOrdering {
        variant: &'static str,
        requirement: &'static str,
        reward: f64,
        penalty: f64,
    },

    #[error("partial absorption takes exactly 2 inputs, got {0}")]
    Arity(usize),

    #[error("child weight must be in (0, 1], got {0}")]
    InvalidWeight(f64),

    #[error("node `{0}` is a criterion leaf and cannot have children")]
    LeafParent(String),

    #[error("node handle {0} does not belong to this tree")]
    UnknownNode(usize),

    #[error("aggregation node `{0}` has no children")]
    EmptyAggregator(String),

    #[error("child weights of node `{path}` sum to {sum}, expected 1")]
    NodeWeightSum { path: String, sum: f64 },

    #[error("partial absorption node `{path}` needs exactly 2 children, has {children}")]
    AbsorptionChildren { path: String, children: usize },

    #[error("invalid scale for criterion `{criterion}`: {reason}")]
    InvalidScale { criterion: String, reason: String },

    #[error("invalid evaluation config: {0}")]
    InvalidConfig(String),

    // ---- input domain ----
    #[error("value {value} is not defined for criterion `{criterion}`")]
    UnmappedValue { criterion: String, value: String },

    #[error("value {value} for criterion `{criterion}` is outside [{min}, {max}]")]
    OutOfRange {
        criterion: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("criterion `{criterion}` expects a {expected} value")]
    WrongValueKind {
        criterion: String,
        expected: &'static str,
    },

    #[error("score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),

    // ---- numerical ----
    #[error("{0} produced a non-finite result")]
    NonFinite(&'static str),
}

impl LspError {
    /// Returns which part of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LspError::UnmappedValue { .. }
            | LspError::OutOfRange { .. }
            | LspError::WrongValueKind { .. }
            | LspError::ScoreOutOfRange(_) => ErrorKind::InputDomain,
            LspError::NonFinite(_) => ErrorKind::Numerical,
            _ => ErrorKind::Configuration,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(LspError::InvalidAndness(2.0).kind(), ErrorKind::Configuration);
        assert_eq!(
            LspError::UnmappedValue {
                criterion: "rooms".into(),
                value: "7".into()
            }
            .kind(),
            ErrorKind::InputDomain
        );
        assert_eq!(LspError::NonFinite("ugcd").kind(), ErrorKind::Numerical);
        assert!(LspError::LeafParent("1 1".into()).is_configuration());
    }

    #[test]
    fn test_display() {
        let err = LspError::BoundOrdering {
            variant: "conjunctive",
            requirement: "penalty > reward",
            reward: 0.3,
            penalty: 0.1,
        };
        assert_eq!(
            err.to_string(),
            "conjunctive partial absorption requires penalty > reward (reward 0.3, penalty 0.1)"
        );
    }
}
