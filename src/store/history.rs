//! LIFO stack of completed rentals.

use crate::domain::RentalRecord;

/// Every processed rental, most recent on top.
///
/// Undo pops from here; display and recommendation scans walk the records
/// without consuming them.
#[derive(Debug, Default)]
pub struct RentalHistory {
    records: Vec<RentalRecord>,
}

impl RentalHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Pushes a record on top of the history.
    pub fn push(&mut self, record: RentalRecord) {
        self.records.push(record);
    }

    /// Removes and returns the most recent record, or `None` when the history
    /// is empty.
    pub fn pop(&mut self) -> Option<RentalRecord> {
        self.records.pop()
    }

    /// Iterates over the records from most recent to oldest.
    pub fn iter_recent(&self) -> impl Iterator<Item = &RentalRecord> + '_ {
        self.records.iter().rev()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
