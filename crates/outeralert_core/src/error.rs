//! Domain error surface shared by the in-memory core operations.
//!
//! # Responsibility
//! - Define one precise error variant per failure condition in the core.
//! - Classify every variant into a stable caller-facing kind.
//!
//! # Invariants
//! - Every failure is raised at the offending call; nothing is swallowed.
//! - An operation that fails applies no mutation (no partial states).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DomainResult<T> = Result<T, DomainError>;

/// Caller-facing classification of core failures.
///
/// Callers that only branch on the failure class (UI error toasts, retry
/// decisions) match on this instead of the payload variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was missing, empty, or blank.
    InvalidArgument,
    /// An index or key did not resolve to an existing record.
    NotFound,
    /// A consume operation ran against an empty queue.
    EmptyQueue,
}

/// Error for checklist, quiz, notification, profile, and dialer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required text input was empty or whitespace-only.
    BlankField(&'static str),
    /// Checklist index does not resolve to a stored checklist.
    ChecklistNotFound { index: usize },
    /// Item index does not resolve inside the addressed checklist.
    ItemNotFound { checklist: usize, item: usize },
    /// Quiz topic outside the supported topic set.
    UnknownTopic(String),
    /// A quiz round cannot be built from an empty question set.
    NoQuestions,
    /// `receive` was called on an empty notification queue.
    EmptyQueue,
}

impl DomainError {
    /// Returns the stable kind for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankField(_) | Self::NoQuestions => ErrorKind::InvalidArgument,
            Self::ChecklistNotFound { .. } | Self::ItemNotFound { .. } | Self::UnknownTopic(_) => {
                ErrorKind::NotFound
            }
            Self::EmptyQueue => ErrorKind::EmptyQueue,
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} is required"),
            Self::ChecklistNotFound { index } => {
                write!(f, "checklist not found at index {index}")
            }
            Self::ItemNotFound { checklist, item } => {
                write!(f, "item {item} not found in checklist {checklist}")
            }
            Self::UnknownTopic(topic) => write!(f, "quiz topic not found: `{topic}`"),
            Self::NoQuestions => write!(f, "quiz round requires at least one question"),
            Self::EmptyQueue => write!(f, "no notification available"),
        }
    }
}

impl Error for DomainError {}

/// Rejects blank text for a required field, returning the trimmed value.
pub(crate) fn require_filled<'a>(value: &'a str, field: &'static str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::BlankField(field));
    }
    Ok(trimmed)
}
