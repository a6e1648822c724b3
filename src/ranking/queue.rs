//! Max-heap priority queue with deterministic tie-breaking.

use std::cmp::Ordering;

use super::types::{Priority, RankError};

/// Composite rank: priority class first, tie-break key second.
///
/// A greater rank dequeues first. Equal classes fall back to the key,
/// where a *smaller* key (an earlier submission) outranks a larger one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rank<K> {
    class: Priority,
    key: K,
}

impl<K: Ord> Ord for Rank<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl<K: Ord> PartialOrd for Rank<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
struct Entry<T, K> {
    item: T,
    rank: Rank<K>,
}

/// A priority queue over opaque payloads, implemented as an array-backed
/// binary max-heap.
///
/// Entries are ordered by priority class descending, then tie-break key
/// ascending, so within one urgency tier the queue is first-in-first-served
/// by key. The ranker never inspects or mutates the payload; callers derive
/// the class (e.g. through a [`PriorityMap`](super::PriorityMap)) and supply
/// any totally ordered tie-break key, typically a submission timestamp.
///
/// The heap invariant — every parent ranks at least as high as its
/// children — is restored by a sift pass after each mutation, giving
/// O(log n) `enqueue` and `dequeue`.
///
/// # Examples
///
/// ```
/// use u_rank::ranking::{Priority, PriorityRanker};
///
/// let mut ranker = PriorityRanker::new();
/// ranker.enqueue("burst pipe", Priority::Critical, 10);
/// ranker.enqueue("pothole", Priority::Medium, 5);
/// ranker.enqueue("loud party", Priority::Low, 1);
///
/// assert_eq!(ranker.dequeue(), Ok("burst pipe"));
/// assert_eq!(ranker.dequeue(), Ok("pothole"));
/// assert_eq!(ranker.dequeue(), Ok("loud party"));
/// assert!(ranker.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityRanker<T, K: Ord> {
    heap: Vec<Entry<T, K>>,
}

impl<T, K: Ord> PriorityRanker<T, K> {
    /// Creates an empty ranker.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty ranker with room for `capacity` items before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no items are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an item with its priority class and tie-break key.
    ///
    /// O(log n); never fails.
    pub fn enqueue(&mut self, item: T, class: Priority, key: K) {
        self.heap.push(Entry {
            item,
            rank: Rank { class, key },
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the highest-ranked item.
    ///
    /// O(log n). Fails with [`RankError::EmptyQueue`] when no items
    /// remain.
    pub fn dequeue(&mut self) -> Result<T, RankError> {
        if self.heap.is_empty() {
            return Err(RankError::EmptyQueue);
        }

        // Moves the last entry into the root slot and returns the old
        // root, then repairs the heap from the top.
        let entry = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.item)
    }

    /// Returns the highest-ranked item without removing it.
    ///
    /// Fails with [`RankError::EmptyQueue`] when no items remain.
    pub fn peek(&self) -> Result<&T, RankError> {
        self.heap
            .first()
            .map(|entry| &entry.item)
            .ok_or(RankError::EmptyQueue)
    }

    /// Consumes the ranker, returning every item highest-rank-first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(item) = self.dequeue() {
            out.push(item);
        }
        out
    }

    /// Swaps the entry at `index` toward the root while it outranks its
    /// parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].rank <= self.heap[parent].rank {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Swaps the entry at `index` toward the leaves while a child
    /// outranks it, always descending into the higher-ranked child.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < self.heap.len() && self.heap[left].rank > self.heap[largest].rank {
                largest = left;
            }
            if right < self.heap.len() && self.heap[right].rank > self.heap[largest].rank {
                largest = right;
            }
            if largest == index {
                break;
            }

            self.heap.swap(index, largest);
            index = largest;
        }
    }
}

impl<T, K: Ord> Default for PriorityRanker<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
