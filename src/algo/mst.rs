/*!
# Minimum Spanning Trees

Three classic MST algorithms over connected, undirected, weighted graphs:

- [`Graph::boruvka_mst`]: repeatedly add the cheapest outgoing edge of
  every tree component,
- [`Graph::prim_mst`]: grow a single tree from vertex `0` with a lazy
  binary heap,
- [`Graph::kruskal_mst`]: accept edges in weight order with a
  union-find structure.

All three return a tree over the same vertex space as the input with
`n - 1` edges and, for distinct weights, an identical edge set. Ties are
broken deterministically: Borůvka keeps the first cheapest edge in
edge-list order, Kruskal sorts stably by weight so insertion order decides,
Prim pops the heap entry with the smaller endpoints.
*/

use std::collections::BinaryHeap;

use crate::{edge::*, graph::*, node::*};

/// Union-Find over `0..n` with path compression
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<Node>,
}

impl DisjointSets {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the representative of the set containing `u` and compresses
    /// the walked path.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut walk = u;
        while walk != root {
            let next = self.parent[walk as usize];
            self.parent[walk as usize] = root;
            walk = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`. Returns *false* if they
    /// already were the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }
        self.parent[rv as usize] = ru;
        true
    }

    /// Returns *true* if both vertices lie in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}

/// Heap entry of Prim's algorithm; the reversed order turns
/// [`BinaryHeap`] into a min-heap on `(weight, from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEdge {
    weight: Weight,
    from: Node,
    to: Node,
}

impl Ord for HeapEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.weight, other.from, other.to).cmp(&(self.weight, self.from, self.to))
    }
}

impl PartialOrd for HeapEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    fn assert_spanning_input(&self) {
        assert!(!self.is_directed());
        assert!(self.is_weighted());
    }

    /// Computes a minimum spanning tree with Borůvka's algorithm: while the
    /// tree has more than one component, add for every component its
    /// cheapest outgoing edge (first such edge in edge-list order on ties).
    /// ** Panics if the graph is directed, unweighted, or disconnected **
    pub fn boruvka_mst(&self) -> Graph {
        self.assert_spanning_input();

        let n = self.number_of_nodes();
        let mut tree = Graph::new(self.space().clone(), self.orientation(), self.weighting());
        let mut edge_added = vec![false; self.edges().len()];

        while tree.number_of_edges() + 1 < n {
            let components = tree.connected_components();
            let before = tree.number_of_edges();

            // cheapest outgoing edge index per component
            let mut cheapest: Vec<Option<usize>> =
                vec![None; components.number_of_components() as usize];
            for (i, e) in self.edges().iter().enumerate() {
                if components.same_component(e.source, e.target) {
                    continue;
                }
                for c in [
                    components.component_of(e.source),
                    components.component_of(e.target),
                ] {
                    let slot = &mut cheapest[c as usize];
                    if slot.is_none_or(|j| self.edges()[j].weight > e.weight) {
                        *slot = Some(i);
                    }
                }
            }

            for i in cheapest.into_iter().flatten() {
                // two components may elect the same edge
                if !edge_added[i] {
                    edge_added[i] = true;
                    tree.push_edge(self.edges()[i]);
                }
            }

            assert!(tree.number_of_edges() > before, "graph is disconnected");
        }

        tree
    }

    /// Computes a minimum spanning tree with Prim's algorithm, growing from
    /// vertex `0` with a lazy heap of candidate edges.
    /// ** Panics if the graph is directed, unweighted, or disconnected **
    pub fn prim_mst(&self) -> Graph {
        self.assert_spanning_input();

        let n = self.number_of_nodes();
        let mut tree = Graph::new(self.space().clone(), self.orientation(), self.weighting());

        let mut in_tree = vec![false; n as usize];
        let mut heap = BinaryHeap::new();

        let attach = |u: Node, in_tree: &mut Vec<bool>, heap: &mut BinaryHeap<HeapEdge>| {
            in_tree[u as usize] = true;
            for a in self.adjacent_of(u) {
                if !in_tree[a.to as usize] {
                    heap.push(HeapEdge {
                        weight: a.weight_or_unit(),
                        from: u,
                        to: a.to,
                    });
                }
            }
        };

        attach(0, &mut in_tree, &mut heap);
        while let Some(e) = heap.pop() {
            // lazy deletion: entries may be stale by the time they surface
            if in_tree[e.to as usize] {
                continue;
            }
            tree.add_weighted_edge(e.from, e.to, e.weight);
            attach(e.to, &mut in_tree, &mut heap);
        }

        assert_eq!(tree.number_of_edges() + 1, n, "graph is disconnected");
        tree
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm: consider
    /// edges in non-decreasing weight order (insertion order on ties) and
    /// accept every edge joining two different tree components.
    /// ** Panics if the graph is directed, unweighted, or disconnected **
    pub fn kruskal_mst(&self) -> Graph {
        self.assert_spanning_input();

        let n = self.number_of_nodes();
        let mut tree = Graph::new(self.space().clone(), self.orientation(), self.weighting());
        let mut sets = DisjointSets::new(n);

        let mut order: Vec<usize> = (0..self.edges().len()).collect();
        order.sort_by_key(|&i| self.edges()[i].weight);

        for i in order {
            let e = self.edges()[i];
            if sets.union(e.source, e.target) {
                tree.push_edge(e);
                if tree.number_of_edges() + 1 == n {
                    break;
                }
            }
        }

        assert_eq!(tree.number_of_edges() + 1, n, "graph is disconnected");
        tree
    }
}

#[cfg(test)]
mod test {
    use rand::prelude::*;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn disjoint_sets_merge_and_compress() {
        let mut sets = DisjointSets::new(6);
        assert!(!sets.same_set(0, 5));

        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(2, 0));
        assert!(sets.union(3, 4));

        assert!(sets.same_set(0, 2));
        assert!(sets.same_set(3, 4));
        assert!(!sets.same_set(2, 3));
        assert!(!sets.same_set(0, 5));

        // compression leaves every member pointing at the representative
        let root = sets.find(2);
        assert_eq!(sets.find(0), root);
        assert_eq!(sets.find(1), root);
    }

    fn triangle_with_heavy_edge() -> Graph {
        let mut g = Graph::with_identity_space(3, Orientation::Undirected, Weighting::Weighted);
        g.add_weighted_edge(0, 1, 1);
        g.add_weighted_edge(1, 2, 1);
        g.add_weighted_edge(0, 2, 5);
        g
    }

    fn assert_spanning_tree(g: &Graph, tree: &Graph) {
        assert_eq!(tree.number_of_edges() + 1, g.number_of_nodes());
        assert_eq!(
            tree.connected_components().number_of_components(),
            1,
            "spanning tree must be connected"
        );
    }

    #[test]
    fn triangle_drops_heavy_edge() {
        let g = triangle_with_heavy_edge();
        for tree in [g.boruvka_mst(), g.prim_mst(), g.kruskal_mst()] {
            assert_spanning_tree(&g, &tree);
            assert_eq!(tree.total_weight(), 2);
            assert!(!tree.has_edge(0, 2));
        }
    }

    #[test]
    fn single_vertex_tree_is_empty() {
        let g = Graph::with_identity_space(1, Orientation::Undirected, Weighting::Weighted);
        for tree in [g.boruvka_mst(), g.prim_mst(), g.kruskal_mst()] {
            assert_eq!(tree.number_of_nodes(), 1);
            assert_eq!(tree.number_of_edges(), 0);
        }
    }

    #[test]
    fn tie_breaks_are_deterministic() {
        // all weights equal: any spanning tree is minimal, but each
        // algorithm must pick the same one on every run
        let mut g = Graph::with_identity_space(4, Orientation::Undirected, Weighting::Weighted);
        for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)] {
            g.add_weighted_edge(u, v, 7);
        }

        for (a, b) in [
            (g.boruvka_mst(), g.boruvka_mst()),
            (g.prim_mst(), g.prim_mst()),
            (g.kruskal_mst(), g.kruskal_mst()),
        ] {
            assert_eq!(a.edges(), b.edges());
            assert_eq!(a.total_weight(), 21);
        }

        // kruskal keeps insertion order on ties
        let kruskal = g.kruskal_mst();
        assert!(kruskal.has_edge(0, 1) && kruskal.has_edge(0, 2) && kruskal.has_edge(0, 3));
    }

    #[test]
    #[should_panic]
    fn disconnected_input_is_rejected() {
        let mut g = Graph::with_identity_space(4, Orientation::Undirected, Weighting::Weighted);
        g.add_weighted_edge(0, 1, 1);
        g.add_weighted_edge(2, 3, 1);
        let _ = g.kruskal_mst();
    }

    #[test]
    fn algorithms_agree_on_random_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5EED);

        for _ in 0..10 {
            let n: NumNodes = rng.random_range(2..60);
            let mut g =
                Graph::with_identity_space(n, Orientation::Undirected, Weighting::Weighted);

            // random spanning tree first, then extra edges for density
            for v in 1..n {
                let u = rng.random_range(0..v);
                g.add_weighted_edge(u, v, rng.random_range(1..1_000_000));
            }
            for _ in 0..(2 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v {
                    g.add_weighted_edge(u, v, rng.random_range(1..1_000_000));
                }
            }

            let boruvka = g.boruvka_mst();
            let prim = g.prim_mst();
            let kruskal = g.kruskal_mst();

            assert_spanning_tree(&g, &boruvka);
            assert_spanning_tree(&g, &prim);
            assert_spanning_tree(&g, &kruskal);

            assert_eq!(boruvka.total_weight(), prim.total_weight());
            assert_eq!(prim.total_weight(), kruskal.total_weight());
        }
    }
}
