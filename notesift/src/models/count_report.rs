// src/models/count_report.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Aggregate counts for one pass over a note list.
///
/// Stores the three independent counters; the two totals are derived. The
/// serialized form is the five-key report mapping consumed downstream, and
/// `Display` prints the same five lines the report surface expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountReport {
    pub notes: usize,
    pub first_level: usize,
    pub replies: usize,
}

impl CountReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notes: 0,
            first_level: 0,
            replies: 0,
        }
    }

    /// Comments at every depth.
    #[inline]
    #[must_use]
    pub const fn all_comments(&self) -> usize {
        self.first_level.saturating_add(self.replies)
    }

    /// Notes plus comments at every depth.
    #[inline]
    #[must_use]
    pub const fn total_nodes(&self) -> usize {
        self.notes.saturating_add(self.all_comments())
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: &Self) {
        self.notes = self.notes.saturating_add(other.notes);
        self.first_level = self.first_level.saturating_add(other.first_level);
        self.replies = self.replies.saturating_add(other.replies);
    }
}

impl Serialize for CountReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("Notes", &self.notes)?;
        map.serialize_entry("First-level comments", &self.first_level)?;
        map.serialize_entry("Replies (≥2nd level)", &self.replies)?;
        map.serialize_entry("All comments", &self.all_comments())?;
        map.serialize_entry("Notes + All comments", &self.total_nodes())?;
        map.end()
    }
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notes: {}", self.notes)?;
        writeln!(f, "First-level comments: {}", self.first_level)?;
        writeln!(f, "Replies (≥2nd level): {}", self.replies)?;
        writeln!(f, "All comments: {}", self.all_comments())?;
        write!(f, "Notes + All comments: {}", self.total_nodes())
    }
}
