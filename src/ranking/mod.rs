//! Priority ranking primitives.
//!
//! Orders opaque payloads by a composite rank: an ordinal priority
//! class, then a totally ordered tie-break key where the smaller
//! (older) key wins within a class. Two consumption styles:
//!
//! - **Incremental**: [`PriorityRanker`], an array-backed binary
//!   max-heap supporting interleaved `enqueue` and `dequeue`.
//! - **One-shot**: [`rank_entries`] / [`rank_by_key`], a stable sort of
//!   a finite collection, with [`recommend`] taking a ranked prefix.
//!
//! # Design
//!
//! This module contains NO domain-specific concepts. Category tables
//! (service-request intake, event urgency labels) are consumer data,
//! supplied through a [`PriorityMap`]; the payload itself is never
//! inspected.

mod queue;
mod sort;
mod types;

pub use queue::PriorityRanker;
pub use sort::{rank_by_key, rank_entries, recommend};
pub use types::{Priority, PriorityMap, RankError};
