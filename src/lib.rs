//! Domain-agnostic priority ranking and shortest-path routing primitives.
//!
//! Provides two independent leaf components:
//!
//! - **Ranking**: an array-backed binary max-heap
//!   ([`ranking::PriorityRanker`]) ordering opaque payloads by
//!   (priority class, tie-break key), plus a one-shot stable sort and
//!   ranked-prefix helpers for finite collections.
//! - **Graph**: a generic undirected weighted graph
//!   ([`graph::WeightedGraph`]) with a Dijkstra single-pair
//!   shortest-path query.
//!
//! # Architecture
//!
//! Both components are pure, synchronous, single-threaded data structures
//! with no I/O and no internal locking; callers accessing one instance
//! from multiple threads must serialize externally. The crate contains no
//! domain-specific concepts — service-request triage, event listings,
//! depot routing, etc. are all defined by consumers, which supply
//! payloads, a label-to-class mapping, or a vertex/edge topology, and
//! consume ranked sequences or vertex paths.

pub mod graph;
pub mod ranking;
