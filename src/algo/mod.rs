/*!
# Graph Algorithms

Each algorithm family lives in its own module and attaches to [`Graph`]
via an `impl` block, so callers only need the graph itself plus the result
types re-exported here.

[`Graph`]: crate::graph::Graph
*/

mod connectivity;
mod mst;
mod ordering;
mod shortest_paths;
mod traversal;

pub use connectivity::*;
pub use mst::*;
pub use shortest_paths::*;
pub use traversal::*;
