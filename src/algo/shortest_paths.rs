/*!
# Shortest-Path Trees

One relaxation loop, three frontier disciplines. The search keeps tentative
distances and a predecessor map; whenever an edge improves the distance of
its head, the head is (re-)pushed onto the frontier. What varies is only
the order the frontier hands vertices back:

- [`Graph::shortest_paths_lifo`]: a stack, label-correcting,
- [`Graph::shortest_paths_fifo`]: a queue, Bellman-Ford style,
- [`Graph::shortest_paths_dijkstra`]: a min-heap on tentative distance.

For non-negative weights all three converge to the same distances; they
differ only in how many relaxations they spend. Unweighted edges count as
unit weight, so the FIFO discipline degenerates to BFS distances.

The final predecessor map encodes the shortest-path tree, extractable as a
[`Graph`] via [`ShortestPaths::tree`].
*/

use std::collections::{BinaryHeap, VecDeque};

use crate::{algo::traversal::PredecessorMap, edge::*, graph::*, node::*};

/// A work-list of vertices pending relaxation. Implementations only differ
/// in their pop order.
pub trait Frontier {
    /// Creates a frontier holding exactly the given entry
    fn init(entry: QueueEntry) -> Self;

    /// Adds an entry; duplicates of a vertex are allowed (lazy deletion)
    fn push(&mut self, entry: QueueEntry);

    /// Removes the next entry, or `None` if the frontier is exhausted
    fn pop(&mut self) -> Option<QueueEntry>;
}

/// A frontier entry: a vertex and its tentative distance at push time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub dist: Weight,
    pub node: Node,
}

/// Reversed so that [`BinaryHeap`] pops the smallest distance first
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.dist, other.node).cmp(&(self.dist, self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// LIFO discipline: depth-first label-correcting search
impl Frontier for Vec<QueueEntry> {
    fn init(entry: QueueEntry) -> Self {
        vec![entry]
    }

    fn push(&mut self, entry: QueueEntry) {
        self.push(entry);
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        self.pop()
    }
}

/// FIFO discipline: Bellman-Ford style rounds
impl Frontier for VecDeque<QueueEntry> {
    fn init(entry: QueueEntry) -> Self {
        VecDeque::from([entry])
    }

    fn push(&mut self, entry: QueueEntry) {
        self.push_back(entry);
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        self.pop_front()
    }
}

/// Best-first discipline: Dijkstra with lazy deletion
impl Frontier for BinaryHeap<QueueEntry> {
    fn init(entry: QueueEntry) -> Self {
        BinaryHeap::from([entry])
    }

    fn push(&mut self, entry: QueueEntry) {
        self.push(entry);
    }

    fn pop(&mut self) -> Option<QueueEntry> {
        self.pop()
    }
}

/// The result of a single-source shortest-path computation
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: Node,
    dist: Vec<Weight>,
    preds: PredecessorMap,
}

impl ShortestPaths {
    /// Returns the search source
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance to a vertex, or `None` if it is unreachable.
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        let d = self.dist[u as usize];
        (d != Weight::MAX).then_some(d)
    }

    /// Returns all distances in index order; unreachable vertices are `None`
    pub fn distances(&self) -> Vec<Option<Weight>> {
        (0..self.dist.len()).map(|u| self.distance_to(u as Node)).collect()
    }

    /// Returns the predecessor map of the search
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.preds
    }

    /// Returns the vertices of a shortest path `source -> u` in walking
    /// order, or `None` if `u` is unreachable
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        if !self.preds.is_visited(u) {
            return None;
        }

        let mut path = vec![u];
        let mut walk = u;
        while let Some(p) = self.preds.parent_of(walk) {
            path.push(p);
            walk = p;
        }
        path.reverse();
        Some(path)
    }

    /// Extracts the shortest-path tree as a graph over the reached vertices
    pub fn tree(&self, graph: &Graph) -> Graph {
        graph.predecessor_tree(&self.preds)
    }
}

impl Graph {
    /// The shared relaxation loop, parameterized over the frontier
    /// discipline. Distances saturate instead of overflowing, so even
    /// near-`MAX` weights stay ordered correctly.
    fn relax_from<F: Frontier>(&self, source: Node) -> ShortestPaths {
        let mut dist = vec![Weight::MAX; self.len()];
        let mut preds = PredecessorMap::new(self.number_of_nodes());

        dist[source as usize] = 0;
        preds.set_root(source);

        let mut frontier = F::init(QueueEntry {
            dist: 0,
            node: source,
        });
        while let Some(entry) = frontier.pop() {
            let u = entry.node;
            // stale entry, a shorter route was found after the push
            if entry.dist > dist[u as usize] {
                continue;
            }

            for a in self.adjacent_of(u) {
                let next = dist[u as usize].saturating_add(a.weight_or_unit());
                if next < dist[a.to as usize] {
                    dist[a.to as usize] = next;
                    preds.set_parent(a.to, u);
                    frontier.push(QueueEntry {
                        dist: next,
                        node: a.to,
                    });
                }
            }
        }

        ShortestPaths {
            source,
            dist,
            preds,
        }
    }

    /// Single-source shortest paths with a stack frontier.
    /// ** Panics if `source >= n` **
    pub fn shortest_paths_lifo(&self, source: Node) -> ShortestPaths {
        self.relax_from::<Vec<QueueEntry>>(source)
    }

    /// Single-source shortest paths with a queue frontier.
    /// ** Panics if `source >= n` **
    pub fn shortest_paths_fifo(&self, source: Node) -> ShortestPaths {
        self.relax_from::<VecDeque<QueueEntry>>(source)
    }

    /// Single-source shortest paths with a min-heap frontier (Dijkstra).
    /// ** Panics if `source >= n` **
    pub fn shortest_paths_dijkstra(&self, source: Node) -> ShortestPaths {
        self.relax_from::<BinaryHeap<QueueEntry>>(source)
    }
}

#[cfg(test)]
mod test {
    use rand::prelude::*;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn weighted_diamond() -> Graph {
        // 0 -> 3 is shorter via 1 than directly
        let mut g = Graph::with_identity_space(5, Orientation::Directed, Weighting::Weighted);
        g.add_weighted_edge(0, 1, 1);
        g.add_weighted_edge(0, 2, 4);
        g.add_weighted_edge(1, 3, 2);
        g.add_weighted_edge(2, 3, 1);
        g.add_weighted_edge(0, 3, 9);
        g
    }

    #[test]
    fn detour_beats_direct_edge() {
        let g = weighted_diamond();
        let sp = g.shortest_paths_dijkstra(0);

        assert_eq!(sp.distance_to(0), Some(0));
        assert_eq!(sp.distance_to(1), Some(1));
        assert_eq!(sp.distance_to(2), Some(4));
        assert_eq!(sp.distance_to(3), Some(3));
        assert_eq!(sp.distance_to(4), None);

        assert_eq!(sp.path_to(3), Some(vec![0, 1, 3]));
        assert_eq!(sp.path_to(4), None);
    }

    #[test]
    fn disciplines_agree_on_distances() {
        let g = weighted_diamond();

        let lifo = g.shortest_paths_lifo(0);
        let fifo = g.shortest_paths_fifo(0);
        let dijkstra = g.shortest_paths_dijkstra(0);

        assert_eq!(lifo.distances(), dijkstra.distances());
        assert_eq!(fifo.distances(), dijkstra.distances());
    }

    #[test]
    fn unweighted_fifo_matches_bfs_levels() {
        let mut g = Graph::with_identity_space(6, Orientation::Undirected, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (0, 2), (1, 3), (2, 3), (3, 4)]);

        let sp = g.shortest_paths_fifo(0);
        assert_eq!(
            sp.distances(),
            vec![Some(0), Some(1), Some(1), Some(2), Some(3), None]
        );
    }

    #[test]
    fn tree_spans_reached_vertices() {
        let g = weighted_diamond();
        let sp = g.shortest_paths_dijkstra(0);
        let tree = sp.tree(&g);

        // vertex 4 is unreachable and excluded from the tree
        assert_eq!(tree.number_of_nodes(), 4);
        assert_eq!(tree.number_of_edges(), 3);
        assert_eq!(tree.space().originals(), &[1, 2, 3, 4]);
        assert_eq!(tree.total_weight(), sp.distance_to(1).unwrap() + 4 + 2);
    }

    #[test]
    fn source_path_is_trivial() {
        let g = weighted_diamond();
        let sp = g.shortest_paths_lifo(0);
        assert_eq!(sp.path_to(0), Some(vec![0]));
        assert_eq!(sp.source(), 0);
    }

    #[test]
    fn disciplines_agree_on_random_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xF00D);

        for _ in 0..10 {
            let n: NumNodes = rng.random_range(2..60);
            let mut g = Graph::with_identity_space(n, Orientation::Directed, Weighting::Weighted);
            for _ in 0..(4 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                g.add_weighted_edge(u, v, rng.random_range(0..1_000));
            }

            let lifo = g.shortest_paths_lifo(0);
            let fifo = g.shortest_paths_fifo(0);
            let dijkstra = g.shortest_paths_dijkstra(0);

            assert_eq!(lifo.distances(), dijkstra.distances());
            assert_eq!(fifo.distances(), dijkstra.distances());
        }
    }
}
