/*!
# Connectivity

Component structure of graphs:
- **connected components** of undirected graphs via repeated DFS,
- **strongly connected components** of directed graphs via Kosaraju's
  two-pass algorithm (a finish-time ordering on the graph, then DFS over the
  transpose in that order),
- the **condensation**: the simple DAG obtained by contracting every
  strongly connected component to a single vertex.

Components are numbered `0..k` in the order their first vertex is found when
scanning `0..n`, so component ids are deterministic. A directed graph is
acyclic iff every strongly connected component is a singleton.
*/

use itertools::Itertools;

use crate::{graph::*, node::*};

/// An assignment of every vertex to one of `k` components
#[derive(Debug, Clone)]
pub struct ComponentPartition {
    component_of: Vec<NumNodes>,
    number_of_components: NumNodes,
}

impl ComponentPartition {
    /// Returns the component id of a vertex.
    /// ** Panics if `u >= n` **
    pub fn component_of(&self, u: Node) -> NumNodes {
        self.component_of[u as usize]
    }

    /// Returns the number of components
    pub fn number_of_components(&self) -> NumNodes {
        self.number_of_components
    }

    /// Returns *true* if both vertices lie in the same component
    pub fn same_component(&self, u: Node, v: Node) -> bool {
        self.component_of(u) == self.component_of(v)
    }

    /// Returns all components as vertex lists, indexed by component id
    pub fn classes(&self) -> Vec<Vec<Node>> {
        let mut classes = vec![Vec::new(); self.number_of_components as usize];
        for (u, &c) in self.component_of.iter().enumerate() {
            classes[c as usize].push(u as Node);
        }
        classes
    }

    /// Returns all components as external-id lists, indexed by component id.
    /// ** Panics if the partition was not produced on `graph` **
    pub fn external_classes(&self, graph: &Graph) -> Vec<Vec<ExternalId>> {
        assert_eq!(self.component_of.len(), graph.len());
        self.classes()
            .into_iter()
            .map(|class| graph.external_ids(&class))
            .collect()
    }

    /// Returns the vertices of a largest component; ties go to the
    /// smallest component id
    pub fn largest_component(&self) -> Vec<Node> {
        let mut largest: Vec<Node> = Vec::new();
        for class in self.classes() {
            // strictly larger, so the first maximum wins
            if class.len() > largest.len() {
                largest = class;
            }
        }
        largest
    }
}

impl Graph {
    /// Computes the connected components of an undirected graph.
    /// ** Panics if the graph is directed **
    pub fn connected_components(&self) -> ComponentPartition {
        assert!(!self.is_directed());

        let mut component_of = vec![INVALID_NODE; self.len()];
        let mut number_of_components = 0;

        for root in self.vertices() {
            if component_of[root as usize] != INVALID_NODE {
                continue;
            }

            let component = number_of_components;
            number_of_components += 1;

            component_of[root as usize] = component;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for v in self.neighbors_of(u) {
                    if component_of[v as usize] == INVALID_NODE {
                        component_of[v as usize] = component;
                        stack.push(v);
                    }
                }
            }
        }

        ComponentPartition {
            component_of,
            number_of_components,
        }
    }

    /// Computes the strongly connected components of a directed graph with
    /// Kosaraju's algorithm. Components are numbered in the order the
    /// second pass discovers them, i.e. in topological order of the
    /// condensation.
    /// ** Panics if the graph is undirected **
    pub fn strongly_connected_components(&self) -> ComponentPartition {
        assert!(self.is_directed());

        let order = self.topological_order();
        let transpose = self.transpose();

        let mut component_of = vec![INVALID_NODE; self.len()];
        let mut number_of_components = 0;

        for &root in &order {
            if component_of[root as usize] != INVALID_NODE {
                continue;
            }

            let component = number_of_components;
            number_of_components += 1;

            component_of[root as usize] = component;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for v in transpose.neighbors_of(u) {
                    if component_of[v as usize] == INVALID_NODE {
                        component_of[v as usize] = component;
                        stack.push(v);
                    }
                }
            }
        }

        ComponentPartition {
            component_of,
            number_of_components,
        }
    }

    /// Returns *true* if the directed graph has no cycle, i.e. every
    /// strongly connected component is a singleton.
    /// ** Panics if the graph is undirected **
    pub fn is_acyclic(&self) -> bool {
        self.strongly_connected_components().number_of_components() == self.number_of_nodes()
    }

    /// Builds the condensation: one vertex per strongly connected
    /// component, one edge per pair of distinct components connected by at
    /// least one original edge. The result is a simple unweighted DAG with
    /// identity-numbered vertices `1..=k`.
    /// ** Panics if the graph is undirected **
    pub fn condensation(&self) -> Graph {
        let sccs = self.strongly_connected_components();

        let mut dag = Graph::with_identity_space(
            sccs.number_of_components(),
            Orientation::Directed,
            Weighting::Unweighted,
        );

        for e in self.edges() {
            let cu = sccs.component_of(e.source);
            let cv = sccs.component_of(e.target);
            if cu != cv && !dag.has_edge(cu, cv) {
                dag.add_edge(cu, cv);
            }
        }

        dag
    }

    /// Returns for every vertex the set of all **other** vertices it
    /// reaches, in index order. The source itself is never contained in
    /// its own set.
    pub fn reachable_sets(&self) -> Vec<Vec<Node>> {
        self.vertices()
            .map(|source| {
                let preds = self.bfs_predecessors(source);
                preds
                    .visited()
                    .filter(|&v| preds.parent_of(v).is_some())
                    .collect_vec()
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn components_of_scattered_graph() {
        let mut g = Graph::with_identity_space(7, Orientation::Undirected, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 2), (4, 5)]);

        let comps = g.connected_components();
        assert_eq!(comps.number_of_components(), 4);
        assert_eq!(comps.classes(), vec![vec![0, 1, 2], vec![3], vec![4, 5], vec![6]]);
        assert!(comps.same_component(0, 2));
        assert!(!comps.same_component(2, 4));
        assert_eq!(comps.largest_component(), vec![0, 1, 2]);
    }

    #[test]
    fn equally_large_components_favor_the_first() {
        let mut g = Graph::with_identity_space(4, Orientation::Undirected, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (2, 3)]);

        let comps = g.connected_components();
        assert_eq!(comps.number_of_components(), 2);
        assert_eq!(comps.largest_component(), vec![0, 1]);
    }

    #[test]
    fn classes_externalize_through_the_space() {
        let mut g = Graph::with_identity_space(5, Orientation::Undirected, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 2), (3, 4)]);

        let comps = g.connected_components();
        assert_eq!(
            comps.external_classes(&g),
            vec![vec![1, 2, 3], vec![4, 5]]
        );

        // the restriction keeps its own labels
        let sub = g.induced([4, 5]);
        let sub_comps = sub.connected_components();
        assert_eq!(sub_comps.external_classes(&sub), vec![vec![4, 5]]);
    }

    #[test]
    fn scc_of_three_cycle_graph() {
        // cycles {0,1,4}, {2,3,7} and {5,6} with connecting edges between them
        let mut g = Graph::with_identity_space(8, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([
            (0 as Node, 1 as Node),
            (1, 4),
            (4, 0),
            (1, 2),
            (2, 3),
            (3, 7),
            (7, 2),
            (3, 5),
            (5, 6),
            (6, 5),
        ]);

        let sccs = g.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);
        assert!(sccs.same_component(0, 1) && sccs.same_component(1, 4));
        assert!(sccs.same_component(2, 3) && sccs.same_component(3, 7));
        assert!(sccs.same_component(5, 6));
        assert!(!sccs.same_component(0, 2));
        assert!(!sccs.same_component(2, 5));

        assert!(!g.is_acyclic());

        let dag = g.condensation();
        assert_eq!(dag.number_of_nodes(), 3);
        // {0,1,4} -> {2,3,7} -> {5,6}, deduplicated
        assert_eq!(dag.number_of_edges(), 2);
        assert!(dag.is_acyclic());
    }

    #[test]
    fn acyclic_graph_has_singleton_sccs() {
        let mut g = Graph::with_identity_space(4, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (0, 2), (1, 3), (2, 3)]);

        let sccs = g.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 4);
        assert!(g.is_acyclic());

        let dag = g.condensation();
        assert_eq!(dag.number_of_nodes(), 4);
        assert_eq!(dag.number_of_edges(), 4);
    }

    #[test]
    fn condensation_merges_parallel_component_edges() {
        // two vertices in one cycle, both pointing into vertex 2
        let mut g = Graph::with_identity_space(3, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 0), (0, 2), (1, 2)]);

        let dag = g.condensation();
        assert_eq!(dag.number_of_nodes(), 2);
        assert_eq!(dag.number_of_edges(), 1);
    }

    #[test]
    fn reachability_excludes_the_source() {
        let mut g = Graph::with_identity_space(4, Orientation::Directed, Weighting::Unweighted);
        g.add_edges([(0 as Node, 1 as Node), (1, 2), (2, 0), (3, 3)]);

        let sets = g.reachable_sets();
        assert_eq!(sets[0], vec![1, 2]);
        assert_eq!(sets[1], vec![0, 2]);
        assert_eq!(sets[2], vec![0, 1]);
        assert!(sets[3].is_empty());
    }
}
