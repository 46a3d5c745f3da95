use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights are signed to allow difference computations in callers,
/// but all shortest-path routines assume non-negative weights.
pub type Weight = i64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// An edge is defined by two endpoints and an optional weight.
/// Whether the edge is directed is decided by the graph storing it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub weight: Option<Weight>,
}

impl Edge {
    /// Creates an unweighted edge
    pub fn new(source: Node, target: Node) -> Self {
        Edge {
            source,
            target,
            weight: None,
        }
    }

    /// Creates a weighted edge
    pub fn weighted(source: Node, target: Node, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight: Some(weight),
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        if self.source <= self.target {
            *self
        } else {
            self.reversed()
        }
    }

    /// Returns both endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.source, self.target)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "({},{},{})", self.source, self.target, w),
            None => write!(f, "({},{})", self.source, self.target),
        }
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2)
    }
}
