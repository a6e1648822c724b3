//! Graph errors and query results.

/// Errors from graph mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint was never added to the graph.
    ///
    /// Vertices are not auto-created; add both endpoints first.
    #[error("source or destination vertex not found in the graph")]
    UnknownVertex,

    /// A negative edge weight was supplied.
    ///
    /// Dijkstra's correctness depends on non-negative weights, so the
    /// graph rejects them at insertion instead of returning wrong
    /// paths later.
    #[error("edge weight must be non-negative, got {0}")]
    InvalidWeight(i64),
}

/// A minimum-weight path between two vertices.
///
/// Returned by
/// [`WeightedGraph::shortest_path`](super::WeightedGraph::shortest_path);
/// the absence of a path is `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<V> {
    /// Vertices from start to end inclusive.
    pub vertices: Vec<V>,

    /// Sum of edge weights along `vertices`.
    pub total_weight: u64,
}
