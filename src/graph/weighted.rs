//! Undirected weighted graph structure and mutation.

use std::collections::HashMap;
use std::hash::Hash;

use super::types::GraphError;

/// A generic undirected graph with non-negative integer edge weights.
///
/// Vertices are arbitrary hashable values; edges are stored in both
/// directions of an adjacency map, so `add_edge(u, v, w)` makes `v`
/// reachable from `u` and vice versa. Re-inserting an existing pair
/// overwrites the weight (last-write-wins).
///
/// The graph is built incrementally — vertices first, then edges — and
/// queried any number of times; queries never mutate it.
///
/// # Examples
///
/// ```
/// use u_rank::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_vertex("depot");
/// graph.add_vertex("main st");
/// graph.add_edge("depot", "main st", 4)?;
///
/// assert_eq!(graph.edge_weight(&"depot", &"main st"), Some(4));
/// assert_eq!(graph.edge_weight(&"main st", &"depot"), Some(4));
/// # Ok::<(), u_rank::graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    adjacency: HashMap<V, HashMap<V, u64>>,
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Adds a vertex with no incident edges.
    ///
    /// Idempotent: re-adding an existing vertex is a no-op and keeps
    /// its edges.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Returns `true` when `vertex` has been added.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // A self-loop sits in the adjacency map once; count it twice so
        // the halving below treats it as a full edge.
        let endpoints: usize = self
            .adjacency
            .iter()
            .map(|(vertex, neighbors)| neighbors.len() + usize::from(neighbors.contains_key(vertex)))
            .sum();
        endpoints / 2
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Inserts an undirected edge between two existing vertices.
    ///
    /// Fails with [`GraphError::InvalidWeight`] for a negative weight
    /// and [`GraphError::UnknownVertex`] when either endpoint was never
    /// added. A failed call leaves the graph unchanged. An existing
    /// edge between the pair has its weight overwritten.
    pub fn add_edge(&mut self, source: V, destination: V, weight: i64) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        if !self.adjacency.contains_key(&source) || !self.adjacency.contains_key(&destination) {
            return Err(GraphError::UnknownVertex);
        }

        let weight = weight as u64;
        if let Some(neighbors) = self.adjacency.get_mut(&source) {
            neighbors.insert(destination.clone(), weight);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&destination) {
            neighbors.insert(source, weight);
        }
        Ok(())
    }

    /// Returns the weight of the edge between two vertices, if present.
    pub fn edge_weight(&self, source: &V, destination: &V) -> Option<u64> {
        self.adjacency.get(source)?.get(destination).copied()
    }

    /// Iterates over the neighbors of `vertex` with their edge weights.
    ///
    /// Yields nothing for an unknown or isolated vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, u64)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(v, &w)| (v, w)))
    }
}

impl<V: Eq + Hash + Clone> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
