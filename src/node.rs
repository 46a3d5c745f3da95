/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
All algorithms work on **dense internal indices** `0..n`; the identifiers a
graph was described with (1-based in the edge-list format, arbitrary for
induced subgraphs) live in a [`VertexSpace`](crate::space::VertexSpace) and
only appear at the API boundary.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// An external vertex identifier as it appears in the input description.
/// External ids are dense `1..=n` for identity-numbered graphs but may be
/// arbitrary (and non-contiguous) for induced subgraphs.
pub type ExternalId = u32;
