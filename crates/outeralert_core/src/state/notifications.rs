//! In-memory notification queue.
//!
//! # Responsibility
//! - Buffer alert messages for the session in arrival order.
//! - Hand messages out one at a time, oldest first.
//!
//! # Invariants
//! - Consumption order equals push order; no priority, no reordering.
//! - No deduplication, no expiry, no bound: this is a session buffer, not a
//!   message broker.

use crate::error::{DomainError, DomainResult};
use crate::model::notification::Notification;
use std::collections::VecDeque;

/// FIFO queue of pending alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the back of the queue. Always succeeds; an
    /// empty message is still a deliverable alert.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_back(Notification::new(message));
    }

    /// Removes and returns the oldest notification.
    ///
    /// Fails with the empty-queue error when nothing is pending — callers
    /// must not assume a message is always available.
    pub fn receive(&mut self) -> DomainResult<Notification> {
        self.entries.pop_front().ok_or(DomainError::EmptyQueue)
    }

    /// Drops every pending notification.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Peeks at the oldest notification without consuming it.
    pub fn front(&self) -> Option<&Notification> {
        self.entries.front()
    }
}
