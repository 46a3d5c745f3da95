/*!
# Vertex Space

A [`VertexSpace`] is the bidirectional mapping between **external vertex
identifiers** (the numbers a graph was described with) and the **dense
internal indices** `0..n` that every other part of the crate indexes into.

A space is built once when a graph is constructed, either identity-numbered
`1..=n` or as the restriction to an explicit vertex subset when building an
induced subgraph, and is immutable afterwards.

The invariant `index_of(original_of(i)) == Some(i)` holds for every internal
index `i`; duplicate external ids are rejected at construction time.
*/

use fxhash::FxHashMap;

use crate::node::*;

/// Bidirectional mapping `internal index <-> external id`.
#[derive(Debug, Clone, Default)]
pub struct VertexSpace {
    /// Internal index -> external id; insertion order defines the index
    originals: Vec<ExternalId>,
    /// External id -> internal index; partial inverse of `originals`
    indices: FxHashMap<ExternalId, Node>,
}

impl VertexSpace {
    /// Creates the identity-numbered space with externals `1..=n`
    pub fn identity(n: NumNodes) -> Self {
        Self::from_subset(1..=n)
    }

    /// Creates a space restricted to the given external ids.
    /// The iteration order defines the internal indices.
    /// ** Panics if an external id occurs twice **
    pub fn from_subset<I>(externals: I) -> Self
    where
        I: IntoIterator<Item = ExternalId>,
    {
        let mut originals = Vec::new();
        let mut indices = FxHashMap::default();

        for ext in externals {
            let prev = indices.insert(ext, originals.len() as Node);
            assert!(prev.is_none(), "duplicate external vertex id {ext}");
            originals.push(ext);
        }

        Self { originals, indices }
    }

    /// Returns the number of vertices in the space
    pub fn number_of_vertices(&self) -> NumNodes {
        self.originals.len() as NumNodes
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Returns *true* if the space maps no vertices
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Returns the internal index of an external id, or `None` if the id
    /// is not part of the space
    pub fn index_of(&self, external: ExternalId) -> Option<Node> {
        self.indices.get(&external).copied()
    }

    /// Returns the external id of an internal index.
    /// ** Panics if `index >= n` **
    pub fn original_of(&self, index: Node) -> ExternalId {
        self.originals[index as usize]
    }

    /// Returns all external ids in internal-index order
    pub fn originals(&self) -> &[ExternalId] {
        &self.originals
    }
}
