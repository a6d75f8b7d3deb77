//! Aggregation tree construction.

use super::types::{AggregationTree, Node, NodeId, Payload};
use crate::aggregation::{Aggregator, WEIGHT_TOLERANCE};
use crate::criterion::Criterion;
use crate::error::{LspError, Result};
use tracing::debug;

/// Wires criteria and aggregators into an [`AggregationTree`].
///
/// The root is always an aggregator. Child ids are assigned at attachment
/// as `"<parent id> <position>"`, positions starting at 1.
///
/// # Examples
///
/// ```
/// use u_lsp::aggregation::{Aggregator, AndnessLevel};
/// use u_lsp::criterion::QualitativeCriterion;
/// use u_lsp::tree::TreeBuilder;
///
/// let mut builder = TreeBuilder::new("1", "Home", AndnessLevel::Neutrality);
/// let root = builder.root();
/// let road = QualitativeCriterion::new("road", vec![("poor", 0.1), ("good", 0.9)]).unwrap();
/// builder.attach_criterion(root, road, 0.4).unwrap();
/// let location = builder
///     .attach_aggregator(root, Aggregator::conjunctive_absorption(0.1, 0.2).unwrap(), 0.6, "Location")
///     .unwrap();
/// assert_eq!(builder.path(location), Some("1 2"));
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    weight_tolerance: f64,
}

impl TreeBuilder {
    /// Starts a tree whose root has id `root_id`.
    pub fn new(
        root_id: impl Into<String>,
        name: impl Into<String>,
        aggregator: impl Into<Aggregator>,
    ) -> Self {
        Self {
            nodes: vec![Node {
                path: root_id.into(),
                name: name.into(),
                payload: Payload::Aggregator(aggregator.into()),
                edges: Vec::new(),
            }],
            weight_tolerance: WEIGHT_TOLERANCE,
        }
    }

    /// Sets the tolerance for "child weights sum to 1" checked by [`build`](Self::build).
    pub fn with_weight_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_tolerance = tolerance;
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Looks a node up by its hierarchical id.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.path == path).map(NodeId)
    }

    pub fn path(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.path.as_str())
    }

    /// Attaches `payload` under `parent` with `weight` in `(0, 1]`.
    ///
    /// Returns the new node's handle for an aggregator payload and `None`
    /// for a criterion, which can never take children.
    ///
    /// # Errors
    ///
    /// [`LspError::UnknownNode`], [`LspError::LeafParent`] or
    /// [`LspError::InvalidWeight`].
    pub fn attach(
        &mut self,
        parent: NodeId,
        payload: Payload,
        weight: f64,
        label: impl Into<String>,
    ) -> Result<Option<NodeId>> {
        let is_aggregator = matches!(payload, Payload::Aggregator(_));
        let id = self.push(parent, payload, weight, label.into())?;
        Ok(is_aggregator.then_some(id))
    }

    /// Attaches an aggregation node and returns its handle.
    pub fn attach_aggregator(
        &mut self,
        parent: NodeId,
        aggregator: impl Into<Aggregator>,
        weight: f64,
        label: impl Into<String>,
    ) -> Result<NodeId> {
        self.push(
            parent,
            Payload::Aggregator(aggregator.into()),
            weight,
            label.into(),
        )
    }

    /// Attaches a criterion leaf, labelled with the criterion's name.
    pub fn attach_criterion<C: Criterion + 'static>(
        &mut self,
        parent: NodeId,
        criterion: C,
        weight: f64,
    ) -> Result<()> {
        let label = criterion.name().to_string();
        self.push(parent, Payload::criterion(criterion), weight, label)
            .map(|_| ())
    }

    fn push(
        &mut self,
        parent: NodeId,
        payload: Payload,
        weight: f64,
        name: String,
    ) -> Result<NodeId> {
        let parent_node = self
            .nodes
            .get(parent.0)
            .ok_or(LspError::UnknownNode(parent.0))?;
        if parent_node.is_leaf() {
            return Err(LspError::LeafParent(parent_node.path.clone()));
        }
        if !(weight > 0.0 && weight <= 1.0) {
            return Err(LspError::InvalidWeight(weight));
        }

        let path = format!("{} {}", parent_node.path, parent_node.edges.len() + 1);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            path,
            name,
            payload,
            edges: Vec::new(),
        });
        self.nodes[parent.0].edges.push((id, weight));
        Ok(id)
    }

    /// Validates the wiring and freezes the tree.
    ///
    /// # Errors
    ///
    /// - [`LspError::EmptyAggregator`] for an aggregation node without children
    /// - [`LspError::NodeWeightSum`] if a node's child weights do not sum to 1
    /// - [`LspError::AbsorptionChildren`] for a partial absorption node
    ///   without exactly two children
    pub fn build(self) -> Result<AggregationTree> {
        for node in &self.nodes {
            let Some(aggregator) = node.aggregator() else {
                continue;
            };
            if node.edges.is_empty() {
                return Err(LspError::EmptyAggregator(node.path.clone()));
            }
            if let Some(arity) = aggregator.arity() {
                if node.edges.len() != arity {
                    return Err(LspError::AbsorptionChildren {
                        path: node.path.clone(),
                        children: node.edges.len(),
                    });
                }
            }
            let sum: f64 = node.edges.iter().map(|&(_, w)| w).sum();
            if (sum - 1.0).abs() > self.weight_tolerance {
                return Err(LspError::NodeWeightSum {
                    path: node.path.clone(),
                    sum,
                });
            }
        }

        debug!(nodes = self.nodes.len(), "aggregation tree built");
        Ok(AggregationTree { nodes: self.nodes })
    }
}
