//! Generic undirected weighted graph with shortest-path queries.
//!
//! [`WeightedGraph`] holds arbitrary hashable vertices and non-negative
//! integer edge weights in a doubly-stored adjacency map. The only
//! query is [`WeightedGraph::shortest_path`], a single-pair Dijkstra
//! search returning the vertex sequence and its total weight.
//!
//! # Design
//!
//! Vertex identity is whatever the consumer hashes — street names,
//! numeric ids, coordinates. Edges must reference vertices added
//! beforehand, and negative weights are rejected at insertion so the
//! search's non-negativity precondition holds by construction.
//!
//! # References
//!
//! Dijkstra (1959), "A note on two problems in connexion with graphs"

mod dijkstra;
mod types;
mod weighted;

pub use types::{GraphError, PathResult};
pub use weighted::WeightedGraph;
