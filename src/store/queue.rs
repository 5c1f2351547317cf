//! FIFO queue of pending rental requests.

use std::collections::VecDeque;

use crate::domain::RentalRequest;

/// Rental requests waiting to be processed, oldest first.
///
/// Enqueueing validates nothing; every check is deferred to processing time.
#[derive(Debug, Default)]
pub struct RentalQueue {
    requests: VecDeque<RentalRequest>,
}

impl RentalQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requests: VecDeque::new(),
        }
    }

    /// Appends a request to the back of the queue.
    pub fn enqueue(&mut self, request: RentalRequest) {
        self.requests.push_back(request);
    }

    /// Removes and returns the oldest request, or `None` when the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<RentalRequest> {
        self.requests.pop_front()
    }

    /// Returns the number of pending requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the queue holds no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
