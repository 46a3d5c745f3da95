/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **labelled** : Vertices keep the external ids they were described with, even in subgraphs
- optionally **weighted** : Edges may carry a signed weight
- optionally **directed** : Orientation is a runtime property of the graph, not of its type

# Representation

We represent **nodes** as `u32` internal indices in the range `0..n` where `n` is the
number of nodes in the graph. The [`VertexSpace`](crate::space::VertexSpace) of a graph
maps these indices back to the external ids of the input (1-based for edge-list files,
arbitrary for induced subgraphs).

A [`Graph`](crate::graph::Graph) stores its edges **three times over**: as an edge list
in insertion order, as adjacency rows per vertex, and as a sparse adjacency matrix.
All three stay synchronized on every insertion, so each algorithm can pick the
representation it is fastest on. Parallel edges and self-loops are allowed.

# Usage

There are *3* core submodules you probably want to interact with:
- [`graph`] defines the central [`Graph`](crate::graph::Graph) type together with
  induced subgraphs, transposition, and degree bookkeeping,
- [`algo`] attaches the algorithms to the graph itself: traversals
  (`graph.bfs_tree(s)`), connectivity and strongly connected components,
  topological orderings and layerings, minimum spanning trees, and
  shortest-path trees under three frontier disciplines,
- [`io`] reads and writes the whitespace-separated edge-list format.

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.

# When to use

You should only use this library if the following apply:
- Your graphs keep their input labels and may be multigraphs
- You want deterministic algorithm results (ties are broken by insertion order)
- You require only basic functionality for graphs

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod graph;
pub mod io;
pub mod node;
pub mod space;

pub use edge::{Edge, NumEdges, Weight};
pub use graph::{Graph, Orientation, Weighting};
pub use node::{ExternalId, Node, NumNodes, INVALID_NODE};
pub use space::VertexSpace;

/// `wgraphs::prelude` includes definitions for nodes, edges, the graph type,
/// and all algorithm result types.
pub mod prelude {
    pub use super::{algo::*, edge::*, graph::*, node::*, space::*};
}
