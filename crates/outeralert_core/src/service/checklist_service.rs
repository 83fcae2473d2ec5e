//! Checklist use-case service.
//!
//! # Responsibility
//! - Provide board-level entry points for core callers.
//! - Bridge the in-memory session board and the persisted device store.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Hydration rejects invalid persisted rows instead of repairing them.

use crate::model::checklist::{Checklist, ChecklistItem};
use crate::repo::checklist_repo::{
    ChecklistId, ChecklistRepository, ItemId, RepoError, RepoResult, StoredChecklist, StoredItem,
};
use crate::state::checklists::ChecklistStore;

/// Use-case service wrapper for checklist persistence.
pub struct ChecklistService<R: ChecklistRepository> {
    repo: R,
}

impl<R: ChecklistRepository> ChecklistService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an empty checklist and returns its stable ID.
    pub fn add_checklist(&self, title: &str) -> RepoResult<ChecklistId> {
        self.repo.create_checklist(title)
    }

    /// Appends an undone item to a checklist and returns its stable ID.
    pub fn add_item(&self, checklist: ChecklistId, name: &str) -> RepoResult<ItemId> {
        self.repo.append_item(checklist, name)
    }

    /// Flips one item's done state and returns the new state.
    pub fn toggle_item(&self, item: ItemId) -> RepoResult<bool> {
        self.repo.toggle_item(item)
    }

    /// Marks one item done regardless of its current state.
    pub fn mark_item_done(&self, item: ItemId) -> RepoResult<()> {
        self.repo.set_item_done(item, true)
    }

    /// Fetches the whole board in display order.
    pub fn board(&self) -> RepoResult<Vec<StoredChecklist>> {
        self.repo.fetch_board()
    }

    /// Fetches one checklist's items in display order.
    pub fn items(&self, checklist: ChecklistId) -> RepoResult<Vec<StoredItem>> {
        self.repo.fetch_items(checklist)
    }

    /// Builds an in-memory session board from the persisted store.
    pub fn hydrate_store(&self) -> RepoResult<ChecklistStore> {
        let board = self.repo.fetch_board()?;
        let mut checklists = Vec::with_capacity(board.len());

        for stored in board {
            if stored.title.trim().is_empty() {
                return Err(RepoError::InvalidData(format!(
                    "blank title in checklists row {}",
                    stored.id
                )));
            }

            let mut checklist = Checklist::new(stored.title);
            for item in stored.items {
                if item.name.trim().is_empty() {
                    return Err(RepoError::InvalidData(format!(
                        "blank name in checklist_items row {}",
                        item.id
                    )));
                }
                checklist.items.push(ChecklistItem {
                    name: item.name,
                    done: item.done,
                });
            }
            checklists.push(checklist);
        }

        Ok(ChecklistStore::from_checklists(checklists))
    }

    /// Replaces the persisted store with the given session board.
    pub fn mirror_store(&mut self, store: &ChecklistStore) -> RepoResult<()> {
        self.repo.store_snapshot(store)
    }

    /// Deletes every persisted checklist and item.
    pub fn clear(&mut self) -> RepoResult<()> {
        self.repo.clear()
    }
}
