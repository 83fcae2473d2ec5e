//! In-memory checklist store.
//!
//! # Responsibility
//! - Own the session's ordered checklist collection.
//! - Enforce name validation and index resolution on every mutation.
//!
//! # Invariants
//! - Insertion order is preserved; there is no sorting and no deduplication.
//! - No checklist or item ever has a blank name.
//! - A failed operation leaves the store unchanged.

use crate::error::{require_filled, DomainError, DomainResult};
use crate::model::checklist::{Checklist, ChecklistItem};

/// Ordered collection of the session's checklists.
///
/// Checklists and items are addressed by position. Positions are only
/// invalidated by `clear` — the store deliberately has no removal API, so a
/// held index stays valid for the life of the session. Stable IDs exist in
/// the persistence mirror for rows that outlive a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistStore {
    checklists: Vec<Checklist>,
}

impl ChecklistStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-validated checklists, preserving their order.
    pub(crate) fn from_checklists(checklists: Vec<Checklist>) -> Self {
        Self { checklists }
    }

    /// Appends a new empty checklist and returns its index.
    ///
    /// The name is trimmed before storage. Fails with a blank-field error
    /// when the trimmed name is empty.
    pub fn insert_checklist(&mut self, name: &str) -> DomainResult<usize> {
        let name = require_filled(name, "checklist name")?;
        self.checklists.push(Checklist::new(name));
        Ok(self.checklists.len() - 1)
    }

    /// Appends an undone item to the addressed checklist, returning the new
    /// item's index within that checklist.
    ///
    /// The index is resolved before the name is validated, so callers can
    /// distinguish a missing checklist from bad input.
    pub fn insert_item(&mut self, checklist: usize, item_name: &str) -> DomainResult<usize> {
        let list = self
            .checklists
            .get_mut(checklist)
            .ok_or(DomainError::ChecklistNotFound { index: checklist })?;
        let item_name = require_filled(item_name, "item name")?;
        list.items.push(ChecklistItem::new(item_name));
        Ok(list.items.len() - 1)
    }

    /// Flips the done flag of the addressed item and returns the new value.
    pub fn toggle_item_done(&mut self, checklist: usize, item: usize) -> DomainResult<bool> {
        let list = self
            .checklists
            .get_mut(checklist)
            .ok_or(DomainError::ChecklistNotFound { index: checklist })?;
        let entry = list
            .items
            .get_mut(item)
            .ok_or(DomainError::ItemNotFound { checklist, item })?;
        Ok(entry.toggle())
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.checklists.clear();
    }

    /// Number of checklists held.
    pub fn len(&self) -> usize {
        self.checklists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checklists.is_empty()
    }

    /// Checklist at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Checklist> {
        self.checklists.get(index)
    }

    /// All checklists in insertion order.
    pub fn checklists(&self) -> &[Checklist] {
        &self.checklists
    }
}
