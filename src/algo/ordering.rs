/*!
# Vertex Orderings

DFS-based topological ordering and the longest-path layering derived from
it.

[`Graph::topological_order`] runs an iterative DFS over all vertices in
index order and reverses the finish times. On a DAG the result is a valid
topological sort; on a cyclic graph it is still a deterministic total order
(the one Kosaraju's first pass needs), just not topological.

[`Graph::layers`] assigns every vertex of a DAG the length of the longest
directed path ending in it and groups vertices by that length. Layer `0`
holds exactly the vertices of in-degree zero.
*/

use itertools::Itertools;

use crate::{graph::*, node::*};

impl Graph {
    /// Returns all vertices in reverse DFS-finish-time order. Roots are
    /// tried in index order, neighbors in adjacency-row order, so the
    /// result is deterministic. Only a valid topological sort if the graph
    /// is acyclic.
    /// ** Panics if the graph is undirected **
    pub fn topological_order(&self) -> Vec<Node> {
        assert!(self.is_directed());

        let mut finished = Vec::with_capacity(self.len());
        let mut visited = vec![false; self.len()];

        for root in self.vertices() {
            if visited[root as usize] {
                continue;
            }
            visited[root as usize] = true;

            let mut stack: Vec<(Node, usize)> = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let (u, pos) = *frame;
                let row = self.adjacent_of(u);
                if pos == row.len() {
                    finished.push(u);
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let v = row[pos].to;
                if !visited[v as usize] {
                    visited[v as usize] = true;
                    stack.push((v, 0));
                }
            }
        }

        finished.reverse();
        finished
    }

    /// Groups the vertices of a DAG into layers by longest-path depth:
    /// a vertex lies in layer `i` iff the longest directed path ending in
    /// it has exactly `i` edges. Vertices inside each layer are in index
    /// order.
    /// ** Panics if the graph is undirected or contains a cycle **
    pub fn layers(&self) -> Vec<Vec<Node>> {
        assert!(self.is_acyclic());

        let order = self.topological_order();

        // longest-path depth propagates along the topological order
        let mut depth = vec![0 as NumNodes; self.len()];
        for &u in &order {
            let candidate = depth[u as usize] + 1;
            for v in self.neighbors_of(u) {
                depth[v as usize] = depth[v as usize].max(candidate);
            }
        }

        let number_of_layers = depth.iter().copied().max().map_or(0, |d| d + 1);
        let mut layers = vec![Vec::new(); number_of_layers as usize];
        for (u, &d) in depth.iter().enumerate() {
            layers[d as usize].push(u as Node);
        }
        layers
    }

    /// External ids of [`Graph::topological_order`]
    pub fn topological_order_external(&self) -> Vec<ExternalId> {
        self.external_ids(&self.topological_order())
    }

    /// External ids of [`Graph::layers`]
    pub fn layers_external(&self) -> Vec<Vec<ExternalId>> {
        self.layers()
            .into_iter()
            .map(|layer| self.external_ids(&layer))
            .collect_vec()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn is_topological(g: &Graph, order: &[Node]) -> bool {
        let mut position = vec![0; g.len()];
        for (i, &u) in order.iter().enumerate() {
            position[u as usize] = i;
        }
        g.edges()
            .iter()
            .all(|e| position[e.source as usize] < position[e.target as usize])
    }

    #[test]
    fn chain_orders_front_to_back() {
        let mut g = Graph::with_identity_space(4, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 2), (2, 3)]);

        assert_eq!(g.topological_order(), vec![0, 1, 2, 3]);
        assert_eq!(g.topological_order_external(), vec![1, 2, 3, 4]);
        assert_eq!(g.layers(), vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(
            g.layers_external(),
            vec![vec![1], vec![2], vec![3], vec![4]]
        );
    }

    #[test]
    fn diamond_respects_all_edges() {
        let mut g = Graph::with_identity_space(4, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (0, 2), (1, 3), (2, 3)]);

        let order = g.topological_order();
        assert!(is_topological(&g, &order));

        assert_eq!(g.layers(), vec![vec![0], vec![1, 2], vec![3]]);
    }

    #[test]
    fn longest_path_wins_over_shortcut() {
        // 0 -> 3 directly but also 0 -> 1 -> 2 -> 3
        let mut g = Graph::with_identity_space(4, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 3 as Node), (0, 1), (1, 2), (2, 3)]);

        assert_eq!(g.layers(), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn disconnected_dag_layers() {
        let mut g = Graph::with_identity_space(5, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(3 as Node, 1 as Node), (1, 0)]);

        let order = g.topological_order();
        assert!(is_topological(&g, &order));
        // sources and isolated vertices share layer 0
        assert_eq!(g.layers(), vec![vec![2, 3, 4], vec![1], vec![0]]);
    }

    #[test]
    #[should_panic]
    fn layers_reject_cycles() {
        let mut g = Graph::with_identity_space(2, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 0)]);
        let _ = g.layers();
    }
}
