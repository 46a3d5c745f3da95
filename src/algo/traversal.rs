/*!
# Graph Traversal

BFS and DFS from a single source. Both record their result as a
[`PredecessorMap`]: the source is marked as the *root*, every other reached
vertex stores the vertex it was discovered from, and untouched vertices stay
*unvisited*. The map distinguishes "root" from "unvisited" so that a
traversal tree can be rebuilt without guessing.

Both traversals visit neighbors in adjacency-row order, so tree shapes are
deterministic for a fixed insertion order. DFS is iterative with an explicit
stack of `(vertex, next-neighbor-position)` frames and therefore safe on
deep path-shaped graphs.

A [`PredecessorMap`] can be turned back into a [`Graph`] via
[`Graph::predecessor_tree`]: a directed graph over **only the touched
vertices**, with one parent-to-child edge per non-root visited vertex.
*/

use std::collections::VecDeque;

use crate::{graph::*, node::*};

/// The traversal state of a single vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predecessor {
    /// Not reached by the traversal
    Unvisited,
    /// The traversal source
    Root,
    /// Reached from the stored vertex
    Parent(Node),
}

/// Per-vertex predecessor slots of one traversal
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    slots: Vec<Predecessor>,
}

impl PredecessorMap {
    /// Creates a map with all vertices unvisited
    pub fn new(n: NumNodes) -> Self {
        Self {
            slots: vec![Predecessor::Unvisited; n as usize],
        }
    }

    /// Returns the number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Marks a vertex as a traversal root
    pub fn set_root(&mut self, u: Node) {
        self.slots[u as usize] = Predecessor::Root;
    }

    /// Records that `v` was reached from `u`. Overwriting an earlier entry
    /// is allowed; relaxation-based searches rely on it.
    pub fn set_parent(&mut self, v: Node, u: Node) {
        self.slots[v as usize] = Predecessor::Parent(u);
    }

    /// Returns the state of a vertex.
    /// ** Panics if `u >= n` **
    pub fn get(&self, u: Node) -> Predecessor {
        self.slots[u as usize]
    }

    /// Returns the parent of a vertex, or `None` for roots and
    /// unvisited vertices
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        match self.get(u) {
            Predecessor::Parent(p) => Some(p),
            _ => None,
        }
    }

    /// Returns *true* if the vertex was reached (as root or child)
    pub fn is_visited(&self, u: Node) -> bool {
        self.get(u) != Predecessor::Unvisited
    }

    /// Returns an iterator over all visited vertices in index order
    pub fn visited(&self) -> impl Iterator<Item = Node> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Predecessor::Unvisited)
            .map(|(u, _)| u as Node)
    }
}

impl Graph {
    /// Runs a breadth-first search from `source` and returns the
    /// predecessor map of the traversal.
    /// ** Panics if `source >= n` **
    pub fn bfs_predecessors(&self, source: Node) -> PredecessorMap {
        let mut preds = PredecessorMap::new(self.number_of_nodes());
        preds.set_root(source);

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors_of(u) {
                if !preds.is_visited(v) {
                    preds.set_parent(v, u);
                    queue.push_back(v);
                }
            }
        }

        preds
    }

    /// Runs a depth-first search from `source` and returns the
    /// predecessor map of the traversal.
    /// ** Panics if `source >= n` **
    pub fn dfs_predecessors(&self, source: Node) -> PredecessorMap {
        let mut preds = PredecessorMap::new(self.number_of_nodes());
        preds.set_root(source);

        // frames hold the next adjacency position to look at
        let mut stack: Vec<(Node, usize)> = vec![(source, 0)];
        while let Some(frame) = stack.last_mut() {
            let (u, pos) = *frame;
            let row = self.adjacent_of(u);
            if pos == row.len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let v = row[pos].to;
            if !preds.is_visited(v) {
                preds.set_parent(v, u);
                stack.push((v, 0));
            }
        }

        preds
    }

    /// Returns the BFS tree from `source` as a graph
    pub fn bfs_tree(&self, source: Node) -> Graph {
        self.predecessor_tree(&self.bfs_predecessors(source))
    }

    /// Returns the DFS tree from `source` as a graph
    pub fn dfs_tree(&self, source: Node) -> Graph {
        self.predecessor_tree(&self.dfs_predecessors(source))
    }

    /// Builds the tree graph encoded by a predecessor map: a directed graph
    /// restricted to the **touched** vertices with one `parent -> child`
    /// edge per visited non-root vertex. Weights are copied from the
    /// adjacency matrix of `self` if the graph is weighted.
    /// ** Panics if the map was not produced on this graph **
    pub fn predecessor_tree(&self, preds: &PredecessorMap) -> Graph {
        assert_eq!(preds.len(), self.len());

        let touched: Vec<ExternalId> = preds
            .visited()
            .map(|u| self.space().original_of(u))
            .collect();
        let space = crate::space::VertexSpace::from_subset(touched);

        let mut tree = Graph::new(space, Orientation::Directed, self.weighting());
        for v in preds.visited() {
            if let Some(p) = preds.parent_of(v) {
                // both endpoints are touched by construction
                let tp = tree.space().index_of(self.space().original_of(p)).unwrap();
                let tv = tree.space().index_of(self.space().original_of(v)).unwrap();
                match self.weighting() {
                    Weighting::Unweighted => tree.add_edge(tp, tv),
                    Weighting::Weighted => {
                        tree.add_weighted_edge(tp, tv, self.weight_of(p, v).unwrap())
                    }
                }
            }
        }

        tree
    }
}
