//! Partial absorption (mandatory/desired) operators.
//!
//! Two-input operators where the first input `x` is mandatory (conjunctive
//! variant) or sufficient (disjunctive variant) and the second input `y`
//! is desired/optional. The operator is configured by a maximum reward
//! `R` and a maximum penalty `P`, both on the `(0, 0.5)` half-scale.
//!
//! With `r = R/0.5`, `p = P/0.5`:
//!
//! - Conjunctive (`P > R`): `W1 = 2r(1−p)/(p+r)`, `W2 = (p−r)/(p−r+2pr)`,
//!   `f(x, y) = 1 / [(1−W2)/(W1·x + (1−W1)·y) + W2/x]`
//! - Disjunctive (`R > P`): `W1 = 2p(1−r)/(r+p)`, `W2 = (r−p)/(r−p+2rp)`,
//!   `f(x, y) = 1 − 1 / [(1−W2)/(1 − W1·x − (1−W1)·y) + W2/(1−x)]`

use crate::error::{LspError, Result};

use super::means::finish;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbsorptionKind {
    /// Mandatory/desired: a failing mandatory input cannot be compensated.
    Conjunctive,
    /// Sufficient/desired: a fully satisfied sufficient input cannot be spoiled.
    Disjunctive,
}

impl AbsorptionKind {
    fn label(self) -> &'static str {
        match self {
            AbsorptionKind::Conjunctive => "conjunctive",
            AbsorptionKind::Disjunctive => "disjunctive",
        }
    }
}

/// Construction parameters of a [`PartialAbsorption`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsorptionParams {
    pub kind: AbsorptionKind,
    pub reward: f64,
    pub penalty: f64,
}

/// Partial absorption operator with precomputed mixing weights.
///
/// # Examples
///
/// ```
/// use u_lsp::aggregation::PartialAbsorption;
///
/// let cpa = PartialAbsorption::conjunctive(0.1, 0.2).unwrap();
/// // A failed mandatory input absorbs any desired excellence.
/// assert_eq!(cpa.evaluate(0.0, 1.0).unwrap(), 0.0);
/// assert!((cpa.evaluate(1.0, 1.0).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AbsorptionParams", into = "AbsorptionParams")
)]
pub struct PartialAbsorption {
    kind: AbsorptionKind,
    reward: f64,
    penalty: f64,
    w1: f64,
    w2: f64,
}

impl PartialAbsorption {
    /// Creates an operator of the given kind.
    ///
    /// # Errors
    ///
    /// - [`LspError::BoundOutOfRange`] if either bound is outside `(0, 0.5)`
    /// - [`LspError::BoundOrdering`] if conjunctive without `penalty > reward`,
    ///   or disjunctive without `reward > penalty`
    pub fn new(kind: AbsorptionKind, reward: f64, penalty: f64) -> Result<Self> {
        for bound in [reward, penalty] {
            if !(bound > 0.0 && bound < 0.5) {
                return Err(LspError::BoundOutOfRange(bound));
            }
        }

        let r = reward / 0.5;
        let p = penalty / 0.5;
        let (w1, w2) = match kind {
            AbsorptionKind::Conjunctive => {
                if penalty <= reward {
                    return Err(ordering_error(kind, "penalty > reward", reward, penalty));
                }
                (2.0 * r * (1.0 - p) / (p + r), (p - r) / (p - r + 2.0 * p * r))
            }
            AbsorptionKind::Disjunctive => {
                if reward <= penalty {
                    return Err(ordering_error(kind, "reward > penalty", reward, penalty));
                }
                (2.0 * p * (1.0 - r) / (r + p), (r - p) / (r - p + 2.0 * r * p))
            }
        };

        Ok(Self {
            kind,
            reward,
            penalty,
            w1,
            w2,
        })
    }

    /// Conjunctive partial absorption (`CPA`); requires `penalty > reward`.
    pub fn conjunctive(reward: f64, penalty: f64) -> Result<Self> {
        Self::new(AbsorptionKind::Conjunctive, reward, penalty)
    }

    /// Disjunctive partial absorption (`DPA`); requires `reward > penalty`.
    pub fn disjunctive(reward: f64, penalty: f64) -> Result<Self> {
        Self::new(AbsorptionKind::Disjunctive, reward, penalty)
    }

    pub fn kind(&self) -> AbsorptionKind {
        self.kind
    }

    pub fn reward(&self) -> f64 {
        self.reward
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Derived mixing coefficients `(W1, W2)`.
    pub fn mixing_weights(&self) -> (f64, f64) {
        (self.w1, self.w2)
    }

    pub fn symbol(&self) -> &'static str {
        match self.kind {
            AbsorptionKind::Conjunctive => "CPA",
            AbsorptionKind::Disjunctive => "DPA",
        }
    }

    /// Combines the primary input `x` (mandatory or sufficient) with the
    /// desired input `y`.
    ///
    /// The singular boundary is resolved to its limit: a conjunctive
    /// operator returns 0 for `x == 0`, a disjunctive one returns 1 for
    /// `x == 1`.
    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        for score in [x, y] {
            if !(0.0..=1.0).contains(&score) {
                return Err(LspError::ScoreOutOfRange(score));
            }
        }
        let (w1, w2) = (self.w1, self.w2);
        let value = match self.kind {
            AbsorptionKind::Conjunctive => {
                if x == 0.0 {
                    return Ok(0.0);
                }
                let mean_term = (1.0 - w2) / (w1 * x + (1.0 - w1) * y);
                let mandatory_term = w2 / x;
                1.0 / (mean_term + mandatory_term)
            }
            AbsorptionKind::Disjunctive => {
                if x == 1.0 {
                    return Ok(1.0);
                }
                let mean_term = (1.0 - w2) / (1.0 - w1 * x - (1.0 - w1) * y);
                let sufficient_term = w2 / (1.0 - x);
                1.0 - 1.0 / (mean_term + sufficient_term)
            }
        };
        finish(self.symbol(), value)
    }

    /// Slice form used by aggregation trees: `scores = [x, y]`.
    pub fn aggregate(&self, scores: &[f64]) -> Result<f64> {
        match scores {
            [x, y] => self.evaluate(*x, *y),
            _ => Err(LspError::Arity(scores.len())),
        }
    }
}

fn ordering_error(
    kind: AbsorptionKind,
    requirement: &'static str,
    reward: f64,
    penalty: f64,
) -> LspError {
    LspError::BoundOrdering {
        variant: kind.label(),
        requirement,
        reward,
        penalty,
    }
}

impl TryFrom<AbsorptionParams> for PartialAbsorption {
    type Error = LspError;

    fn try_from(params: AbsorptionParams) -> Result<Self> {
        Self::new(params.kind, params.reward, params.penalty)
    }
}

impl From<PartialAbsorption> for AbsorptionParams {
    fn from(op: PartialAbsorption) -> Self {
        Self {
            kind: op.kind,
            reward: op.reward,
            penalty: op.penalty,
        }
    }
}
