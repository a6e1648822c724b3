//! Dijkstra single-pair shortest-path query.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use tracing::{debug, trace};

use super::types::PathResult;
use super::weighted::WeightedGraph;

/// Tentative distance to a vertex during the search.
///
/// `Unreachable` is a dedicated sentinel ordered above every finite
/// distance, so seeding and comparison never rely on a magic number
/// that a real path sum could collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Distance {
    Finite(u64),
    Unreachable,
}

/// Heap entry for the search frontier.
///
/// `BinaryHeap` is a max-heap, so the ordering on the distance is
/// reversed to pop the smallest tentative distance first. Entries with
/// equal distances compare equal; which one pops first does not affect
/// correctness.
struct SearchEntry<V> {
    distance: Distance,
    vertex: V,
}

impl<V> PartialEq for SearchEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<V> Eq for SearchEntry<V> {}

impl<V> PartialOrd for SearchEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for SearchEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.cmp(&self.distance)
    }
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    /// Finds a minimum-total-weight path between two vertices.
    ///
    /// Returns `None` when either vertex is absent from the graph or
    /// when no path connects them — an expected outcome, not an error.
    /// On success the result holds the vertex sequence from `start` to
    /// `end` inclusive and the summed edge weight.
    ///
    /// Plain Dijkstra with lazy decrease-key: relaxing a vertex
    /// re-inserts it into the frontier, and stale entries are skipped
    /// when popped. The search exits as soon as `end` is settled.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rank::graph::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new();
    /// for v in ["A", "B", "C", "D"] {
    ///     graph.add_vertex(v);
    /// }
    /// graph.add_edge("A", "B", 1)?;
    /// graph.add_edge("B", "C", 2)?;
    /// graph.add_edge("A", "C", 5)?;
    /// graph.add_edge("C", "D", 1)?;
    ///
    /// let path = graph.shortest_path(&"A", &"D").unwrap();
    /// assert_eq!(path.vertices, vec!["A", "B", "C", "D"]);
    /// assert_eq!(path.total_weight, 4);
    /// # Ok::<(), u_rank::graph::GraphError>(())
    /// ```
    pub fn shortest_path(&self, start: &V, end: &V) -> Option<PathResult<V>> {
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            return None;
        }

        let mut distances: HashMap<V, Distance> = HashMap::with_capacity(self.vertex_count());
        let mut previous: HashMap<V, V> = HashMap::new();
        let mut frontier = BinaryHeap::with_capacity(self.vertex_count());

        for vertex in self.vertices() {
            let distance = if vertex == start {
                Distance::Finite(0)
            } else {
                Distance::Unreachable
            };
            distances.insert(vertex.clone(), distance);
            frontier.push(SearchEntry {
                distance,
                vertex: vertex.clone(),
            });
        }

        debug!(vertices = self.vertex_count(), "shortest-path search");

        while let Some(SearchEntry { distance, vertex }) = frontier.pop() {
            // Lazy decrease-key leaves stale entries behind; skip any
            // whose distance no longer matches the best known one.
            if distances.get(&vertex).is_some_and(|&best| distance > best) {
                continue;
            }

            // The smallest remaining distance is the sentinel: nothing
            // else is reachable, including `end`.
            let Distance::Finite(settled) = distance else {
                trace!("frontier exhausted before reaching target");
                return None;
            };

            if vertex == *end {
                let vertices = reconstruct(&previous, &vertex);
                debug!(hops = vertices.len(), total_weight = settled, "path found");
                return Some(PathResult {
                    vertices,
                    total_weight: settled,
                });
            }

            for (neighbor, weight) in self.neighbors(&vertex) {
                let candidate = Distance::Finite(settled.saturating_add(weight));
                let current = distances
                    .get(neighbor)
                    .copied()
                    .unwrap_or(Distance::Unreachable);
                if candidate < current {
                    distances.insert(neighbor.clone(), candidate);
                    previous.insert(neighbor.clone(), vertex.clone());
                    frontier.push(SearchEntry {
                        distance: candidate,
                        vertex: neighbor.clone(),
                    });
                }
            }
        }

        None
    }
}

/// Walks predecessor backpointers from `end` back to the start, then
/// reverses into start-to-end order.
fn reconstruct<V: Eq + Hash + Clone>(previous: &HashMap<V, V>, end: &V) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut cursor = end;
    while let Some(prev) = previous.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();
    path
}
