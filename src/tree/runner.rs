//! Missing-value tolerant tree evaluation.
//!
//! Evaluation is a depth-first pass with no state kept between calls.
//! A leaf is missing when its input is absent or marked missing. At an
//! aggregation node every missing child is classified by [`Tolerance`]:
//!
//! 1. **Failure**: scored 0, weight kept.
//! 2. **Neutral**: replaced by the unweighted mean of the resolvable
//!    siblings (failure zeros included), or 0 if there are none.
//! 3. **Irrelevant**: dropped together with its weight.
//!
//! The surviving weights are renormalized to sum to 1 before the node's
//! aggregator runs. A node whose children were all dropped follows
//! [`AllDroppedPolicy`].

use super::config::{AllDroppedPolicy, EvalConfig};
use super::tolerance::Tolerance;
use super::types::{AggregationTree, Inputs, Node, NodeId, Payload};
use crate::aggregation::Aggregator;
use crate::error::{LspError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// How one missing child was resolved by its parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingResolution {
    /// Path id of the missing child.
    pub child: String,
    /// The child's configured weight.
    pub weight: f64,
    pub tolerance: Tolerance,
}

/// Outcome of one node in an [`EvaluationReport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeReport {
    pub path: String,
    pub name: String,
    /// `None` if the node resolved to missing.
    pub score: Option<f64>,
    /// Missing children of this node and how each was treated. Always
    /// empty for leaves.
    pub resolutions: Vec<MissingResolution>,
}

/// Root score plus every node's outcome, children before parents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationReport {
    pub score: Option<f64>,
    pub nodes: Vec<NodeReport>,
}

impl EvaluationReport {
    pub fn node(&self, path: &str) -> Option<&NodeReport> {
        self.nodes.iter().find(|n| n.path == path)
    }
}

struct Resolved {
    score: Option<f64>,
    reports: Vec<NodeReport>,
}

impl AggregationTree {
    /// Evaluates the tree with the default [`EvalConfig`].
    ///
    /// Returns `Ok(None)` if the root itself resolves to missing.
    ///
    /// # Errors
    ///
    /// Input-domain errors from criteria (a present but unscorable value)
    /// and numerical errors from aggregators. Missing inputs are not errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_lsp::aggregation::AndnessLevel;
    /// use u_lsp::criterion::DiscreteCriterion;
    /// use u_lsp::tree::{Inputs, TreeBuilder};
    ///
    /// let scale = |name: &str| DiscreteCriterion::new(name, vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
    /// let mut builder = TreeBuilder::new("1", "root", AndnessLevel::Neutrality);
    /// let root = builder.root();
    /// builder.attach_criterion(root, scale("a"), 0.9).unwrap();
    /// builder.attach_criterion(root, scale("b"), 0.1).unwrap();
    /// let tree = builder.build().unwrap();
    ///
    /// // "a" is missing and heavily weighted, so it counts as a failure.
    /// let inputs = Inputs::from([("b".to_string(), 1.0.into())]);
    /// let score = tree.evaluate(&inputs).unwrap().unwrap();
    /// assert!((score - 0.1).abs() < 1e-10);
    /// ```
    pub fn evaluate(&self, inputs: &Inputs) -> Result<Option<f64>> {
        self.evaluate_with(inputs, &EvalConfig::default())
    }

    /// Evaluates the tree under `config`.
    pub fn evaluate_with(&self, inputs: &Inputs, config: &EvalConfig) -> Result<Option<f64>> {
        self.evaluate_node(self.root(), inputs, config)
    }

    /// Evaluates the subtree rooted at `id`.
    pub fn evaluate_node(
        &self,
        id: NodeId,
        inputs: &Inputs,
        config: &EvalConfig,
    ) -> Result<Option<f64>> {
        self.node(id).ok_or(LspError::UnknownNode(id.0))?;
        config.validate()?;
        Ok(self.resolve(id, inputs, config, false)?.score)
    }

    /// Evaluates the tree and records every node's score and the
    /// missing-child resolutions applied.
    pub fn evaluate_report(&self, inputs: &Inputs, config: &EvalConfig) -> Result<EvaluationReport> {
        config.validate()?;
        let resolved = self.resolve(self.root(), inputs, config, true)?;
        Ok(EvaluationReport {
            score: resolved.score,
            nodes: resolved.reports,
        })
    }

    fn resolve(
        &self,
        id: NodeId,
        inputs: &Inputs,
        config: &EvalConfig,
        record: bool,
    ) -> Result<Resolved> {
        let node = &self.nodes[id.0];
        let (score, resolutions, mut reports) = match &node.payload {
            Payload::Criterion(criterion) => {
                let score = match inputs.get(criterion.name()) {
                    Some(value) => criterion.score(value)?,
                    None => None,
                };
                (score, Vec::new(), Vec::new())
            }
            Payload::Aggregator(aggregator) => {
                let children = self.resolve_children(node, inputs, config, record)?;
                let mut reports = Vec::new();
                let mut scores = Vec::with_capacity(children.len());
                for child in children {
                    scores.push(child.score);
                    reports.extend(child.reports);
                }
                let (score, resolutions) = self.combine(node, aggregator, &scores, config)?;
                (score, resolutions, reports)
            }
        };

        match score {
            Some(s) => trace!(path = %node.path, score = s, "node scored"),
            None => debug!(path = %node.path, "node resolved to missing"),
        }
        if record {
            reports.push(NodeReport {
                path: node.path.clone(),
                name: node.name.clone(),
                score,
                resolutions,
            });
        }
        Ok(Resolved { score, reports })
    }

    #[cfg(feature = "parallel")]
    fn resolve_children(
        &self,
        node: &Node,
        inputs: &Inputs,
        config: &EvalConfig,
        record: bool,
    ) -> Result<Vec<Resolved>> {
        if config.parallel {
            node.edges
                .par_iter()
                .map(|&(child, _)| self.resolve(child, inputs, config, record))
                .collect()
        } else {
            node.edges
                .iter()
                .map(|&(child, _)| self.resolve(child, inputs, config, record))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve_children(
        &self,
        node: &Node,
        inputs: &Inputs,
        config: &EvalConfig,
        record: bool,
    ) -> Result<Vec<Resolved>> {
        node.edges
            .iter()
            .map(|&(child, _)| self.resolve(child, inputs, config, record))
            .collect()
    }

    fn combine(
        &self,
        node: &Node,
        aggregator: &Aggregator,
        scores: &[Option<f64>],
        config: &EvalConfig,
    ) -> Result<(Option<f64>, Vec<MissingResolution>)> {
        // `None` marks a neutral placeholder awaiting the sibling mean.
        let mut kept: Vec<(Option<f64>, f64)> = Vec::with_capacity(scores.len());
        let mut resolutions = Vec::new();

        for (&(child, weight), &score) in node.edges.iter().zip(scores) {
            if let Some(s) = score {
                kept.push((Some(s), weight));
                continue;
            }
            let tolerance = Tolerance::classify(weight, config);
            let child_path = &self.nodes[child.0].path;
            debug!(
                path = %child_path,
                weight,
                raw = Tolerance::raw(weight),
                ?tolerance,
                "missing child classified"
            );
            match tolerance {
                Tolerance::Failure => kept.push((Some(0.0), weight)),
                Tolerance::Neutral => kept.push((None, weight)),
                Tolerance::Irrelevant => {}
            }
            resolutions.push(MissingResolution {
                child: child_path.clone(),
                weight,
                tolerance,
            });
        }

        if kept.is_empty() {
            debug!(path = %node.path, policy = ?config.all_dropped, "all children dropped");
            let score = match config.all_dropped {
                AllDroppedPolicy::Missing => None,
                AllDroppedPolicy::Zero => Some(0.0),
            };
            return Ok((score, resolutions));
        }

        let (sum, count) = kept
            .iter()
            .filter_map(|&(s, _)| s)
            .fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
        let fill = if count == 0 { 0.0 } else { sum / count as f64 };

        let total: f64 = kept.iter().map(|&(_, w)| w).sum();
        let (values, weights): (Vec<f64>, Vec<f64>) = kept
            .into_iter()
            .map(|(s, w)| (s.unwrap_or(fill), w / total))
            .unzip();

        // Partial absorption reduces to its surviving input.
        if aggregator.arity().is_some_and(|n| values.len() < n) {
            return Ok((Some(values[0]), resolutions));
        }
        Ok((Some(aggregator.evaluate(&values, &weights)?), resolutions))
    }
}
