//! Notification domain model.

use serde::{Deserialize, Serialize};

/// One queued alert message.
///
/// `seen` is a forward-compatible field: it is set to `false` at creation
/// and nothing in the core reads or mutates it yet. Consumers that add
/// read-state tracking later get the field without a wire change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Alert text shown to the user.
    pub message: String,
    /// Read-state placeholder, always `false` at creation.
    pub seen: bool,
}

impl Notification {
    /// Creates an unseen notification with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            seen: false,
        }
    }
}
