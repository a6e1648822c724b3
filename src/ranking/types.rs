//! Priority classes, label classification, and ranking errors.

use std::collections::HashMap;

/// Urgency tier of a ranked item, lowest to highest.
///
/// Ordering follows urgency (`Low < Medium < High < Critical`), so the
/// ranking comparator treats a greater class as higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Parses a textual priority label.
    ///
    /// Recognizes the variant names exactly ("Critical", "High",
    /// "Medium", "Low"); any other label maps to [`Priority::Low`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Critical" => Priority::Critical,
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

/// Deterministic label-to-[`Priority`] lookup with a default class.
///
/// The table contents are consumer data; the map only guarantees that
/// classification is a pure function of the label. Labels absent from
/// the table classify as the default class (`Low` unless overridden).
///
/// # Examples
///
/// A municipal service-request intake table:
///
/// ```
/// use u_rank::ranking::{Priority, PriorityMap};
///
/// let map = PriorityMap::new()
///     .with_category("Water Leak", Priority::Critical)
///     .with_category("Illegal Dumping", Priority::High)
///     .with_category("Street Light Out", Priority::Medium)
///     .with_category("Pothole", Priority::Medium)
///     .with_category("Noise Complaint", Priority::Low);
///
/// assert_eq!(map.classify("Water Leak"), Priority::Critical);
/// assert_eq!(map.classify("Graffiti"), Priority::Low);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityMap {
    table: HashMap<String, Priority>,
    default: Priority,
}

impl PriorityMap {
    /// Creates an empty map with [`Priority::Low`] as the default class.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            default: Priority::Low,
        }
    }

    /// Maps a category label to a priority class.
    ///
    /// Re-registering a label overwrites the previous class.
    pub fn with_category(mut self, label: impl Into<String>, class: Priority) -> Self {
        self.table.insert(label.into(), class);
        self
    }

    /// Sets the class assigned to labels absent from the table.
    pub fn with_default(mut self, class: Priority) -> Self {
        self.default = class;
        self
    }

    /// Returns the class for `label`, or the default class when the
    /// label is not in the table.
    pub fn classify(&self, label: &str) -> Priority {
        self.table.get(label).copied().unwrap_or(self.default)
    }

    /// Returns the number of registered labels.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` when no labels are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for PriorityMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from [`PriorityRanker`](super::PriorityRanker) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// `dequeue` or `peek` was called on a ranker with zero items.
    #[error("the priority queue is empty")]
    EmptyQueue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_from_label_known() {
        assert_eq!(Priority::from_label("Critical"), Priority::Critical);
        assert_eq!(Priority::from_label("High"), Priority::High);
        assert_eq!(Priority::from_label("Medium"), Priority::Medium);
        assert_eq!(Priority::from_label("Low"), Priority::Low);
    }

    #[test]
    fn test_from_label_unknown_maps_to_low() {
        assert_eq!(Priority::from_label(""), Priority::Low);
        assert_eq!(Priority::from_label("Urgent"), Priority::Low);
        // Case-sensitive on purpose: labels are exact keys.
        assert_eq!(Priority::from_label("high"), Priority::Low);
    }

    #[test]
    fn test_classify_registered_and_default() {
        let map = PriorityMap::new()
            .with_category("Water Leak", Priority::Critical)
            .with_category("Pothole", Priority::Medium);

        assert_eq!(map.classify("Water Leak"), Priority::Critical);
        assert_eq!(map.classify("Pothole"), Priority::Medium);
        assert_eq!(map.classify("Lost Cat"), Priority::Low);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_classify_custom_default() {
        let map = PriorityMap::new().with_default(Priority::Medium);
        assert_eq!(map.classify("anything"), Priority::Medium);
        assert!(map.is_empty());
    }

    #[test]
    fn test_with_category_overwrites() {
        let map = PriorityMap::new()
            .with_category("Pothole", Priority::Low)
            .with_category("Pothole", Priority::High);

        assert_eq!(map.classify("Pothole"), Priority::High);
        assert_eq!(map.len(), 1);
    }
}
