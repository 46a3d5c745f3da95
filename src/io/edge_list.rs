//! # EdgeList
//!
//! The EdgeList-Format consists of the vertex count `N`, followed by one
//! whitespace-separated record `u v` (unweighted) or `u v w` (weighted) per
//! edge, with 1-based vertex ids. The edge stream ends at the first
//! truncated or unparsable record; everything before it is kept.

use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Read, Result, Write},
    path::Path,
};

use super::{io_error, parse_next_value, raise_error_unless};
use crate::{graph::*, node::*, space::VertexSpace};

/// A reader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    orientation: Orientation,
    weighting: Weighting,
    /// When set, only edges with both endpoints in the subset are kept
    subset: Option<Vec<ExternalId>>,
}

impl EdgeListReader {
    /// Creates a reader for the given graph kind
    pub fn new(orientation: Orientation, weighting: Weighting) -> Self {
        Self {
            orientation,
            weighting,
            subset: None,
        }
    }

    /// Restricts the read graph to the induced subgraph on the given
    /// external vertex ids; edges leaving the subset are dropped
    pub fn restrict_to(mut self, externals: impl IntoIterator<Item = ExternalId>) -> Self {
        self.subset = Some(externals.into_iter().collect());
        self
    }

    /// Reads a graph from the given reader.
    ///
    /// # Errors
    /// Returns an error if the vertex count is missing, unparsable, or zero,
    /// or if the underlying reader fails. Malformed *edge* records are not
    /// errors; they end the edge stream.
    pub fn try_read<R: Read>(&self, mut reader: R) -> Result<Graph> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut tokens = input.split_whitespace();

        let n: NumNodes = parse_next_value!(tokens, "Vertex count");
        raise_error_unless!(
            n > 0,
            ErrorKind::InvalidData,
            "Vertex count must be positive"
        );

        let space = match &self.subset {
            None => VertexSpace::identity(n),
            Some(externals) => VertexSpace::from_subset(externals.iter().copied()),
        };
        let mut graph = Graph::new(space, self.orientation, self.weighting);

        loop {
            // truncated or unparsable records end the stream gracefully
            let Some(eu) = tokens.next().and_then(|t| t.parse::<ExternalId>().ok()) else {
                break;
            };
            let Some(ev) = tokens.next().and_then(|t| t.parse::<ExternalId>().ok()) else {
                break;
            };
            let weight = if self.weighting == Weighting::Weighted {
                let Some(w) = tokens.next().and_then(|t| t.parse().ok()) else {
                    break;
                };
                Some(w)
            } else {
                None
            };

            // the induced-subgraph contract: skip edges leaving the space
            let (Some(u), Some(v)) = (graph.space().index_of(eu), graph.space().index_of(ev))
            else {
                continue;
            };
            graph.push_edge(crate::edge::Edge {
                source: u,
                target: v,
                weight,
            });
        }

        Ok(graph)
    }

    /// Reads a graph from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or [`EdgeListReader::try_read`] fails.
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph> {
        self.try_read(BufReader::new(File::open(path)?))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Writes the graph with external (1-based) vertex ids.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    pub fn try_write<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;

        for e in graph.edges() {
            let u = graph.space().original_of(e.source);
            let v = graph.space().original_of(e.target);
            match e.weight {
                Some(w) => writeln!(writer, "{u} {v} {w}")?,
                None => writeln!(writer, "{u} {v}")?,
            }
        }

        Ok(())
    }

    /// Writes the graph to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    pub fn try_write_file<P: AsRef<Path>>(&self, graph: &Graph, path: P) -> Result<()> {
        self.try_write(graph, BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_unweighted_graph() {
        let input = "4\n1 2\n2 3\n3 4\n";
        let g = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .try_read(input.as_bytes())
            .unwrap();

        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(0, 1) && g.has_edge(1, 2) && g.has_edge(2, 3));
    }

    #[test]
    fn reads_weighted_graph() {
        let input = "3\n1 2 5\n2 3 -1\n";
        let g = EdgeListReader::new(Orientation::Directed, Weighting::Weighted)
            .try_read(input.as_bytes())
            .unwrap();

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.weight_of(0, 1), Some(5));
        assert_eq!(g.weight_of(1, 2), Some(-1));
    }

    #[test]
    fn layout_is_whitespace_agnostic() {
        let input = "3 1 2\t2 3";
        let g = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .try_read(input.as_bytes())
            .unwrap();
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn truncated_record_keeps_prefix() {
        // third record misses its weight
        let input = "3\n1 2 5\n2 3 7\n1 3\n";
        let g = EdgeListReader::new(Orientation::Undirected, Weighting::Weighted)
            .try_read(input.as_bytes())
            .unwrap();

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.weight_of(1, 2), Some(7));
    }

    #[test]
    fn garbage_record_keeps_prefix() {
        let input = "3\n1 2\nx 3\n2 3\n";
        let g = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .try_read(input.as_bytes())
            .unwrap();

        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn missing_vertex_count_is_an_error() {
        let result = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .try_read("".as_bytes());
        assert!(result.is_err());

        let result = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .try_read("0".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn subset_restriction_drops_leaving_edges() {
        let input = "5\n1 2\n2 3\n3 4\n4 5\n";
        let g = EdgeListReader::new(Orientation::Undirected, Weighting::Unweighted)
            .restrict_to([2, 3, 4])
            .try_read(input.as_bytes())
            .unwrap();

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.space().originals(), &[2, 3, 4]);
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn writer_round_trips() {
        let mut g = Graph::with_identity_space(3, Orientation::Directed, Weighting::Weighted);
        g.add_weighted_edge(0, 1, 4);
        g.add_weighted_edge(2, 0, -2);

        let mut buffer = Vec::new();
        EdgeListWriter.try_write(&g, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "3\n1 2 4\n3 1 -2\n");

        let back = EdgeListReader::new(Orientation::Directed, Weighting::Weighted)
            .try_read(buffer.as_slice())
            .unwrap();
        assert_eq!(back.edges(), g.edges());
    }
}
