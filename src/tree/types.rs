//! Tree nodes and the immutable aggregation tree.

use crate::aggregation::Aggregator;
use crate::criterion::{Criterion, RawValue};
use crate::error::Result;
use std::collections::HashMap;
use std::fmt;

/// Raw input values keyed by criterion name.
pub type Inputs = HashMap<String, RawValue>;

/// Handle to a node, valid for the builder that issued it and the tree
/// built from that builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the tree's arena (root is 0).
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds.
pub enum Payload {
    /// Leaf: scores one raw input.
    Criterion(Box<dyn Criterion>),
    /// Internal node: combines its children's scores.
    Aggregator(Aggregator),
}

impl Payload {
    pub fn criterion<C: Criterion + 'static>(criterion: C) -> Self {
        Payload::Criterion(Box::new(criterion))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Payload::Criterion(_) => NodeKind::Criterion,
            Payload::Aggregator(_) => NodeKind::Aggregator,
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Criterion(c) => f.debug_tuple("Criterion").field(&c.name()).finish(),
            Payload::Aggregator(a) => f.debug_tuple("Aggregator").field(a).finish(),
        }
    }
}

impl From<Aggregator> for Payload {
    fn from(aggregator: Aggregator) -> Self {
        Payload::Aggregator(aggregator)
    }
}

impl From<Box<dyn Criterion>> for Payload {
    fn from(criterion: Box<dyn Criterion>) -> Self {
        Payload::Criterion(criterion)
    }
}

impl<C: Criterion + ?Sized> Criterion for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn score(&self, value: &RawValue) -> Result<Option<f64>> {
        (**self).score(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Criterion,
    Aggregator,
}

/// A node of an aggregation tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) payload: Payload,
    pub(crate) edges: Vec<(NodeId, f64)>,
}

impl Node {
    /// Hierarchical id: the root's id, then one 1-based position per level
    /// (`"1 2 1"` is the first child of the second child of root `"1"`).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Criterion
    }

    pub fn aggregator(&self) -> Option<&Aggregator> {
        match &self.payload {
            Payload::Aggregator(a) => Some(a),
            Payload::Criterion(_) => None,
        }
    }

    pub fn criterion(&self) -> Option<&dyn Criterion> {
        match &self.payload {
            Payload::Criterion(c) => Some(c.as_ref()),
            Payload::Aggregator(_) => None,
        }
    }

    /// Children with their weights, in attachment order.
    pub fn children(&self) -> &[(NodeId, f64)] {
        &self.edges
    }
}

/// A validated, read-only aggregation tree.
///
/// Built with [`TreeBuilder`](super::TreeBuilder); evaluated with
/// [`AggregationTree::evaluate`].
#[derive(Debug)]
pub struct AggregationTree {
    pub(crate) nodes: Vec<Node>,
}

impl AggregationTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Looks a node up by its hierarchical id.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.path == path).map(NodeId)
    }

    /// Number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Names of the criteria, i.e. the input keys this tree reads.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| n.criterion().map(|c| c.name()))
            .collect()
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, id: NodeId, prefix: &str) -> fmt::Result {
        let node = &self.nodes[id.0];
        match node.aggregator() {
            Some(aggregator) => writeln!(f, "{prefix}├── [{}] {}", node.name, aggregator.symbol())?,
            None => writeln!(f, "{prefix}├── [{}]", node.name)?,
        }
        let last = node.edges.len().saturating_sub(1);
        for (i, &(child, _)) in node.edges.iter().enumerate() {
            let indent = if i == last { "    " } else { "│   " };
            self.write_outline(f, child, &format!("{prefix}{indent}"))?;
        }
        Ok(())
    }
}

impl fmt::Display for AggregationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, self.root(), "")
    }
}
