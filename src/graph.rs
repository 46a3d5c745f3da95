/*!
# The Graph Store

A [`Graph`] keeps **three synchronized representations** of the same edge
multiset:

- the **edge list** in insertion order (the tie-break order for all
  algorithms that do not sort edges),
- the **adjacency list** per vertex, again in insertion order (the de facto
  tie-break for all traversal tree shapes),
- a sparse **adjacency matrix**, hash-mapped so that large sparse graphs do
  not pay quadratic memory.

Orientation and weighting are fixed at construction time; a graph is built
by replaying edge insertions from a source (file, induced subset, or
algorithm output) and is never mutated by the algorithms reading it — each
algorithm returns a fresh graph or a partition/ordering instead.

The matrix cell semantics differ by weighting: unweighted graphs store the
**edge count** (so parallel edges and loops stay representable), weighted
graphs store the **last-written weight** (parallel edges overwrite). This
asymmetry is deliberate and does not generalize to weighted multigraphs.
*/

use std::ops::Range;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{edge::*, node::*, space::VertexSpace};

/// Whether edges of a graph are directed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Directed,
    Undirected,
}

/// Whether edges of a graph carry weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    Unweighted,
    Weighted,
}

/// One adjacency entry: the neighbor and the weight of the connecting edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub to: Node,
    pub weight: Option<Weight>,
}

impl Adjacent {
    /// Returns the edge weight, treating unweighted edges as unit weight
    pub fn weight_or_unit(&self) -> Weight {
        self.weight.unwrap_or(1)
    }
}

/// A sparse adjacency-matrix cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixEntry {
    /// Edge multiplicity (unweighted graphs)
    Count(NumEdges),
    /// Last-written weight (weighted graphs)
    Weight(Weight),
}

/// A graph over a [`VertexSpace`] with synchronized edge-list,
/// adjacency-list, and adjacency-matrix representations.
#[derive(Debug, Clone)]
pub struct Graph {
    space: VertexSpace,
    orientation: Orientation,
    weighting: Weighting,
    edges: Vec<Edge>,
    adj: Vec<Vec<Adjacent>>,
    matrix: FxHashMap<(Node, Node), MatrixEntry>,
    deg_out: Vec<NumNodes>,
    deg_in: Vec<NumNodes>,
}

impl Graph {
    /// Creates an edge-less graph over the given vertex space.
    /// ** Panics if the space is empty **
    pub fn new(space: VertexSpace, orientation: Orientation, weighting: Weighting) -> Self {
        assert!(!space.is_empty());
        let n = space.len();
        Self {
            space,
            orientation,
            weighting,
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
            matrix: FxHashMap::default(),
            deg_out: vec![0; n],
            deg_in: vec![0; n],
        }
    }

    /// Creates an edge-less graph with the identity space `1..=n`
    pub fn with_identity_space(n: NumNodes, orientation: Orientation, weighting: Weighting) -> Self {
        Self::new(VertexSpace::identity(n), orientation, weighting)
    }

    /// Returns the vertex space of the graph
    pub fn space(&self) -> &VertexSpace {
        &self.space
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Returns *true* if edges are directed
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Returns *true* if edges carry weights
    pub fn is_weighted(&self) -> bool {
        self.weighting == Weighting::Weighted
    }

    /// Returns the number of nodes of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.space.number_of_vertices()
    }

    /// Return the number of nodes as usize
    pub fn len(&self) -> usize {
        self.space.len()
    }

    /// A graph always has at least one vertex
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of edges of the graph.
    /// Undirected edges count once.
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns an iterator over V
    pub fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns the edge list in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the adjacency row of a vertex in insertion order.
    /// For undirected graphs a self-loop appears twice in its row.
    /// ** Panics if `u >= n` **
    pub fn adjacent_of(&self, u: Node) -> &[Adjacent] {
        &self.adj[u as usize]
    }

    /// Returns an iterator over the (out-)neighbors of a vertex
    /// in insertion order.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].iter().map(|a| a.to)
    }

    /// Maps internal indices back to their external ids
    pub fn external_ids(&self, nodes: &[Node]) -> Vec<ExternalId> {
        nodes.iter().map(|&u| self.space.original_of(u)).collect()
    }

    /// Adds an unweighted edge. For undirected graphs the adjacency entry is
    /// mirrored; a self-loop appears twice in its row.
    /// ** Panics if the graph is weighted or `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert_eq!(self.weighting, Weighting::Unweighted);
        self.insert_edge(Edge::new(u, v));
    }

    /// Adds a weighted edge. Parallel edges overwrite the matrix cell.
    /// ** Panics if the graph is unweighted or `u >= n || v >= n` **
    pub fn add_weighted_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert_eq!(self.weighting, Weighting::Weighted);
        self.insert_edge(Edge::weighted(u, v, w));
    }

    /// Adds all edges in the collection
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for e in edges {
            self.push_edge(e.into());
        }
    }

    /// Appends an [`Edge`] record.
    /// ** Panics if the weight presence does not match the graph's weighting **
    pub fn push_edge(&mut self, e: Edge) {
        assert_eq!(e.weight.is_some(), self.is_weighted());
        self.insert_edge(e);
    }

    fn insert_edge(&mut self, e: Edge) {
        let (u, v) = e.endpoints();
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());

        self.adj[u as usize].push(Adjacent {
            to: v,
            weight: e.weight,
        });
        if !self.is_directed() {
            self.adj[v as usize].push(Adjacent {
                to: u,
                weight: e.weight,
            });
        }

        self.write_matrix(u, v, e.weight);
        if !self.is_directed() && u != v {
            self.write_matrix(v, u, e.weight);
        }

        if self.is_directed() {
            self.deg_out[u as usize] += 1;
            self.deg_in[v as usize] += 1;
        }

        self.edges.push(e);
    }

    fn write_matrix(&mut self, u: Node, v: Node, w: Option<Weight>) {
        match w {
            None => {
                let entry = self.matrix.entry((u, v)).or_insert(MatrixEntry::Count(0));
                if let MatrixEntry::Count(c) = entry {
                    *c += 1;
                }
            }
            // last writer wins on parallel edges
            Some(w) => {
                self.matrix.insert((u, v), MatrixEntry::Weight(w));
            }
        }
    }

    /// Returns *true* if the edge (u,v) exists in the graph
    /// ** Panics if `u >= n || v >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(u < self.number_of_nodes() && v < self.number_of_nodes());
        self.matrix.contains_key(&(u, v))
    }

    /// Returns the raw matrix cell for (u,v), if any
    pub fn matrix_entry(&self, u: Node, v: Node) -> Option<MatrixEntry> {
        self.matrix.get(&(u, v)).copied()
    }

    /// Returns the number of parallel (u,v) edges.
    /// Weighted graphs only record presence, so the result is capped at 1.
    pub fn multiplicity(&self, u: Node, v: Node) -> NumEdges {
        match self.matrix_entry(u, v) {
            None => 0,
            Some(MatrixEntry::Count(c)) => c,
            Some(MatrixEntry::Weight(_)) => 1,
        }
    }

    /// Returns the matrix weight of (u,v): the weight written last in case
    /// of parallel edges, or `None` if the edge is absent
    pub fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        match self.matrix_entry(u, v) {
            Some(MatrixEntry::Weight(w)) => Some(w),
            _ => None,
        }
    }

    /// Returns one dense matrix row of edge counts.
    /// ** Panics if the graph is weighted **
    pub fn count_row(&self, u: Node) -> Vec<NumEdges> {
        assert_eq!(self.weighting, Weighting::Unweighted);
        self.vertices().map(|v| self.multiplicity(u, v)).collect()
    }

    /// Returns one dense matrix row of weights; absent edges are `None`.
    /// ** Panics if the graph is unweighted **
    pub fn weight_row(&self, u: Node) -> Vec<Option<Weight>> {
        assert_eq!(self.weighting, Weighting::Weighted);
        self.vertices().map(|v| self.weight_of(u, v)).collect()
    }

    /// Returns the degree of a vertex: the length of its adjacency row.
    /// For directed graphs this equals the out-degree, for undirected
    /// graphs a self-loop contributes two.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }

    /// Returns the out-degree of a vertex.
    /// ** Panics if the graph is undirected or `u >= n` **
    pub fn out_degree_of(&self, u: Node) -> NumNodes {
        assert!(self.is_directed());
        self.deg_out[u as usize]
    }

    /// Returns the in-degree of a vertex.
    /// ** Panics if the graph is undirected or `u >= n` **
    pub fn in_degree_of(&self, u: Node) -> NumNodes {
        assert!(self.is_directed());
        self.deg_in[u as usize]
    }

    /// Out-degree plus in-degree for directed graphs, plain degree otherwise.
    /// ** Panics if `u >= n` **
    pub fn total_degree_of(&self, u: Node) -> NumNodes {
        if self.is_directed() {
            self.deg_out[u as usize] + self.deg_in[u as usize]
        } else {
            self.degree_of(u)
        }
    }

    /// Returns the sum of all edge weights.
    /// ** Panics if the graph is unweighted **
    pub fn total_weight(&self) -> Weight {
        assert_eq!(self.weighting, Weighting::Weighted);
        self.edges.iter().filter_map(|e| e.weight).sum()
    }

    /// Builds the subgraph induced by a subset of **external** vertex ids.
    /// Edges with either endpoint outside the subset are silently dropped;
    /// this is the induced-subgraph contract, not an error.
    /// ** Panics if the subset is empty or contains duplicates **
    pub fn induced<I>(&self, externals: I) -> Graph
    where
        I: IntoIterator<Item = ExternalId>,
    {
        let space = VertexSpace::from_subset(externals);
        let mut sub = Graph::new(space, self.orientation, self.weighting);

        for e in &self.edges {
            let eu = self.space.original_of(e.source);
            let ev = self.space.original_of(e.target);
            if let (Some(u), Some(v)) = (sub.space.index_of(eu), sub.space.index_of(ev)) {
                sub.insert_edge(Edge {
                    source: u,
                    target: v,
                    weight: e.weight,
                });
            }
        }

        sub
    }

    /// Builds the edge-reversed graph over the same vertex space.
    /// ** Panics if the graph is undirected **
    pub fn transpose(&self) -> Graph {
        assert!(self.is_directed());
        let mut rev = Graph::new(self.space.clone(), self.orientation, self.weighting);
        for e in &self.edges {
            rev.insert_edge(e.reversed());
        }
        rev
    }

    /// Collapses the multigraph into a simple unweighted graph over the same
    /// vertex space: loops are dropped and parallel edges merged.
    pub fn simple_graph(&self) -> Graph {
        let mut simple = Graph::new(self.space.clone(), self.orientation, Weighting::Unweighted);
        for u in self.vertices() {
            for v in self.vertices() {
                if u == v || (!self.is_directed() && v < u) {
                    continue;
                }
                if self.has_edge(u, v) {
                    simple.add_edge(u, v);
                }
            }
        }
        simple
    }

    /// Returns all vertices without any incident edge
    pub fn isolated_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.total_degree_of(u) == 0)
            .collect()
    }

    /// Returns all vertices of degree exactly one
    pub fn leaves(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.total_degree_of(u) == 1)
            .collect()
    }

    /// Returns all edges with at least one endpoint of degree one
    pub fn hanging_edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .copied()
            .filter(|e| self.total_degree_of(e.source) == 1 || self.total_degree_of(e.target) == 1)
            .collect()
    }

    /// Returns all self-loops with their multiplicity
    pub fn self_loops(&self) -> Vec<(Node, NumEdges)> {
        self.vertices()
            .filter_map(|u| {
                let c = self.multiplicity(u, u);
                (c > 0).then_some((u, c))
            })
            .collect()
    }

    /// Returns all vertex pairs connected by parallel edges together with
    /// their multiplicity, ordered by endpoints. Loops are reported by
    /// [`Graph::self_loops`] instead.
    pub fn parallel_edges(&self) -> Vec<(Node, Node, NumEdges)> {
        self.matrix
            .iter()
            .filter_map(|(&(u, v), &entry)| match entry {
                MatrixEntry::Count(c) if c > 1 && u != v => {
                    (self.is_directed() || u < v).then_some((u, v, c))
                }
                _ => None,
            })
            .sorted_unstable()
            .collect()
    }
}
