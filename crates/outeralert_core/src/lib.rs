//! Core domain logic for OuterAlert.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod dialer;
pub mod error;
pub mod logging;
pub mod model;
pub mod quiz;
pub mod repo;
pub mod service;
pub mod state;

pub use dialer::{call_first_responder, call_other_responder, DialRequest, Responder};
pub use error::{DomainError, DomainResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::checklist::{Checklist, ChecklistItem};
pub use model::notification::Notification;
pub use model::profile::UserProfile;
pub use model::quiz::{AnswerFeedback, AnswerKey, QuizQuestion, QuizTopic};
pub use quiz::{answer_question, select_topic, QuizRound, QuizSummary, RewardPolicy};
pub use repo::checklist_repo::{
    ChecklistId, ChecklistRepository, ItemId, RepoError, RepoResult, SqliteChecklistRepository,
    StoredChecklist, StoredItem,
};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use service::checklist_service::ChecklistService;
pub use service::profile_service::ProfileService;
pub use state::{AppState, ChecklistStore, NotificationQueue};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
