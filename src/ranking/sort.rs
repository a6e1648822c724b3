//! One-shot priority ranking for finite collections.
//!
//! Unlike [`PriorityRanker`](super::PriorityRanker), which is a live
//! incremental structure, these are pure functions over a collection
//! that is ranked exactly once and handed back.

use super::types::Priority;

/// Sorts `(item, class, key)` entries by priority class descending,
/// then key ascending, and returns the items in ranked order.
///
/// The sort is stable: entries equal on both fields keep their input
/// order.
///
/// # Examples
///
/// ```
/// use u_rank::ranking::{rank_entries, Priority};
///
/// let ranked = rank_entries(vec![
///     ("road closure", Priority::High, 2),
///     ("job fair", Priority::Low, 1),
///     ("council meeting", Priority::High, 1),
/// ]);
///
/// assert_eq!(ranked, vec!["council meeting", "road closure", "job fair"]);
/// ```
pub fn rank_entries<T, K: Ord>(mut entries: Vec<(T, Priority, K)>) -> Vec<T> {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    entries.into_iter().map(|(item, _, _)| item).collect()
}

/// Ranks borrowed items by a caller-supplied `(class, key)` extraction,
/// returning references in ranked order.
///
/// Same ordering and stability as [`rank_entries`], for callers that
/// keep ownership of the collection.
pub fn rank_by_key<'a, T, K, F>(items: &'a [T], mut rank: F) -> Vec<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> (Priority, K),
{
    let keyed: Vec<(Priority, K)> = items.iter().map(|item| rank(item)).collect();

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| {
        keyed[b]
            .0
            .cmp(&keyed[a].0)
            .then_with(|| keyed[a].1.cmp(&keyed[b].1))
    });

    indices.into_iter().map(|i| &items[i]).collect()
}

/// Returns the first `k` items of an already-ranked slice.
///
/// A plain prefix-take: `k` is clamped to the slice length, so asking
/// for more items than exist returns the whole slice.
pub fn recommend<T>(ranked: &[T], k: usize) -> &[T] {
    &ranked[..k.min(ranked.len())]
}
