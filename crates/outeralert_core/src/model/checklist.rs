//! Checklist domain model.
//!
//! # Responsibility
//! - Define the named checklist record and its ordered task items.
//! - Provide the done-flag toggle helper used by store and repository code.
//!
//! # Invariants
//! - `items` never contains an item with an empty or blank name.
//! - Item order is insertion order; nothing in the core reorders it.

use serde::{Deserialize, Serialize};

/// A named, ordered collection of preparedness tasks.
///
/// Checklists are addressed by their position in the owning store. They carry
/// no identifier of their own; stable IDs exist only in the persistence
/// mirror, where rows can outlive a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    /// Display name, non-blank.
    pub name: String,
    /// Task items in insertion order.
    pub items: Vec<ChecklistItem>,
}

/// A single task with a name and a done/undone flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Task description, non-blank.
    pub name: String,
    /// Completion flag, `false` at creation.
    pub done: bool,
}

impl Checklist {
    /// Creates an empty checklist with the given name.
    ///
    /// Name validation happens at the store boundary; this constructor
    /// assumes a non-blank name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Returns how many items are marked done.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Returns whether every item is done. An empty checklist is not complete.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.done)
    }
}

impl ChecklistItem {
    /// Creates an undone item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }

    /// Flips the done flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}
