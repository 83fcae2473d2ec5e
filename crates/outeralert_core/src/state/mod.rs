//! Per-session in-memory state.
//!
//! # Responsibility
//! - Own the mutable records a signed-in session works against.
//! - Keep state explicit and injectable instead of process-global.
//!
//! # Invariants
//! - Any number of independent `AppState` instances can coexist (one per
//!   test, one per session); nothing in this module touches shared statics.
//! - Operations are synchronous and single-caller; a host that introduces
//!   concurrent callers wraps the state in its own lock (the FFI layer does).

pub mod checklists;
pub mod notifications;

pub use checklists::ChecklistStore;
pub use notifications::NotificationQueue;

use crate::model::profile::UserProfile;

/// Container for everything a session mutates locally.
///
/// The remote backend remains the system of record; this state is the local
/// working copy the screens read and write between syncs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The signed-in user's account record.
    pub profile: UserProfile,
    /// Checklists owned by this session.
    pub checklists: ChecklistStore,
    /// Pending alert messages, oldest first.
    pub notifications: NotificationQueue,
}

impl AppState {
    /// Creates session state around an existing profile.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            checklists: ChecklistStore::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Drops all session-local collections and restarts quiz progression.
    ///
    /// Account identity fields (username, password, picture) survive; this
    /// is a working-copy reset, not a sign-out.
    pub fn reset(&mut self) {
        self.checklists.clear();
        self.notifications.clear();
        self.profile.reset_progress();
    }
}
