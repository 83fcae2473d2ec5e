//! Checklist repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist checklists and their items with stable UUID identity.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate user-supplied text before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `position` columns define display order; fetches always sort by them.

use crate::db::DbError;
use crate::error::{require_filled, DomainError};
use crate::model::checklist::{Checklist, ChecklistItem};
use crate::state::checklists::ChecklistStore;
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a persisted checklist.
pub type ChecklistId = Uuid;
/// Stable identifier of a persisted checklist item.
pub type ItemId = Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for device-store persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Domain(DomainError),
    Db(DbError),
    NotFound(Uuid),
    /// No profile row has been saved yet.
    NoProfile,
    InvalidData(String),
    MissingTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::NoProfile => write!(f, "no profile saved"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingTable(table) => write!(f, "required table missing: {table}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for RepoError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read model for one persisted checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub id: ItemId,
    pub name: String,
    pub done: bool,
}

/// Read model for one persisted checklist with its items in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChecklist {
    pub id: ChecklistId,
    pub title: String,
    /// Creation timestamp in epoch milliseconds.
    pub created_at_ms: i64,
    pub items: Vec<StoredItem>,
}

/// Repository interface for checklist persistence.
pub trait ChecklistRepository {
    /// Creates an empty checklist at the end of the board.
    fn create_checklist(&self, title: &str) -> RepoResult<ChecklistId>;
    /// Appends an undone item to the end of a checklist.
    fn append_item(&self, checklist: ChecklistId, name: &str) -> RepoResult<ItemId>;
    /// Flips an item's done state and returns the new state.
    fn toggle_item(&self, item: ItemId) -> RepoResult<bool>;
    /// Sets an item's done state explicitly.
    fn set_item_done(&self, item: ItemId, done: bool) -> RepoResult<()>;
    /// Fetches every checklist with items, in board order.
    fn fetch_board(&self) -> RepoResult<Vec<StoredChecklist>>;
    /// Fetches one checklist's items in display order.
    fn fetch_items(&self, checklist: ChecklistId) -> RepoResult<Vec<StoredItem>>;
    /// Replaces all persisted rows with the given in-memory board.
    fn store_snapshot(&mut self, store: &ChecklistStore) -> RepoResult<()>;
    /// Deletes every checklist and item.
    fn clear(&mut self) -> RepoResult<()>;
}

/// SQLite-backed checklist repository.
pub struct SqliteChecklistRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteChecklistRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_checklist_tables(conn)?;
        Ok(Self { conn })
    }

    fn checklist_exists(&self, id: ChecklistId) -> RepoResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM checklists WHERE uuid = ?1;",
            [id.to_string()],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn item_done_state(&self, id: ItemId) -> RepoResult<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT done FROM checklist_items WHERE uuid = ?1;")?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => parse_done_flag(row.get::<_, i64>(0)?),
            None => Err(RepoError::NotFound(id)),
        }
    }
}

impl ChecklistRepository for SqliteChecklistRepository<'_> {
    fn create_checklist(&self, title: &str) -> RepoResult<ChecklistId> {
        let title = require_filled(title, "checklist name")?;
        let id = Uuid::new_v4();

        self.conn.execute(
            "INSERT INTO checklists (uuid, title, position, created_at)
             VALUES (
                ?1,
                ?2,
                (SELECT COALESCE(MAX(position) + 1, 0) FROM checklists),
                (strftime('%s', 'now') * 1000)
             );",
            params![id.to_string(), title],
        )?;

        Ok(id)
    }

    fn append_item(&self, checklist: ChecklistId, name: &str) -> RepoResult<ItemId> {
        if !self.checklist_exists(checklist)? {
            return Err(RepoError::NotFound(checklist));
        }
        let name = require_filled(name, "item name")?;
        let id = Uuid::new_v4();

        self.conn.execute(
            "INSERT INTO checklist_items (uuid, checklist_uuid, name, done, position)
             VALUES (
                ?1,
                ?2,
                ?3,
                0,
                (SELECT COALESCE(MAX(position) + 1, 0) FROM checklist_items
                 WHERE checklist_uuid = ?2)
             );",
            params![id.to_string(), checklist.to_string(), name],
        )?;

        Ok(id)
    }

    fn toggle_item(&self, item: ItemId) -> RepoResult<bool> {
        let next = !self.item_done_state(item)?;
        self.conn.execute(
            "UPDATE checklist_items SET done = ?2 WHERE uuid = ?1;",
            params![item.to_string(), done_to_int(next)],
        )?;
        Ok(next)
    }

    fn set_item_done(&self, item: ItemId, done: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE checklist_items SET done = ?2 WHERE uuid = ?1;",
            params![item.to_string(), done_to_int(done)],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(item));
        }
        Ok(())
    }

    fn fetch_board(&self) -> RepoResult<Vec<StoredChecklist>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, created_at FROM checklists ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut board = Vec::new();

        while let Some(row) = rows.next()? {
            board.push(parse_checklist_row(row)?);
        }

        for checklist in &mut board {
            checklist.items = self.fetch_items(checklist.id)?;
        }

        Ok(board)
    }

    fn fetch_items(&self, checklist: ChecklistId) -> RepoResult<Vec<StoredItem>> {
        if !self.checklist_exists(checklist)? {
            return Err(RepoError::NotFound(checklist));
        }

        let mut stmt = self.conn.prepare(
            "SELECT uuid, name, done FROM checklist_items
             WHERE checklist_uuid = ?1
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([checklist.to_string()])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn store_snapshot(&mut self, store: &ChecklistStore) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM checklist_items;", [])?;
        tx.execute("DELETE FROM checklists;", [])?;

        for (position, checklist) in store.checklists().iter().enumerate() {
            let checklist_id = insert_snapshot_checklist(&tx, checklist, position)?;
            for (item_position, item) in checklist.items.iter().enumerate() {
                insert_snapshot_item(&tx, checklist_id, item, item_position)?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn clear(&mut self) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM checklist_items;", [])?;
        tx.execute("DELETE FROM checklists;", [])?;
        tx.commit()?;
        Ok(())
    }
}

fn insert_snapshot_checklist(
    tx: &Transaction<'_>,
    checklist: &Checklist,
    position: usize,
) -> RepoResult<ChecklistId> {
    let id = Uuid::new_v4();
    tx.execute(
        "INSERT INTO checklists (uuid, title, position, created_at)
         VALUES (?1, ?2, ?3, (strftime('%s', 'now') * 1000));",
        params![id.to_string(), checklist.name.as_str(), position as i64],
    )?;
    Ok(id)
}

fn insert_snapshot_item(
    tx: &Transaction<'_>,
    checklist_id: ChecklistId,
    item: &ChecklistItem,
    position: usize,
) -> RepoResult<ItemId> {
    let id = Uuid::new_v4();
    tx.execute(
        "INSERT INTO checklist_items (uuid, checklist_uuid, name, done, position)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            id.to_string(),
            checklist_id.to_string(),
            item.name.as_str(),
            done_to_int(item.done),
            position as i64,
        ],
    )?;
    Ok(id)
}

fn parse_checklist_row(row: &Row<'_>) -> RepoResult<StoredChecklist> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in checklists.uuid"))
    })?;

    Ok(StoredChecklist {
        id,
        title: row.get("title")?,
        created_at_ms: row.get("created_at")?,
        items: Vec::new(),
    })
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<StoredItem> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in checklist_items.uuid"
        ))
    })?;

    Ok(StoredItem {
        id,
        name: row.get("name")?,
        done: parse_done_flag(row.get::<_, i64>("done")?)?,
    })
}

fn parse_done_flag(value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid done value `{other}` in checklist_items.done"
        ))),
    }
}

fn done_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let found: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [table],
        |row| row.get(0),
    )?;
    Ok(found == 1)
}

fn ensure_checklist_tables(conn: &Connection) -> RepoResult<()> {
    for table in ["checklists", "checklist_items"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingTable(table));
        }
    }
    Ok(())
}
