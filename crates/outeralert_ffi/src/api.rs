//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the process-wide signed-in session the screens mutate.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures surface as `ok = false` plus a human-readable message.
//! - Session state is serialized behind one lock; callers never see a
//!   half-applied mutation.

use outeralert_core::db::open_db;
use outeralert_core::{
    answer_question, call_first_responder, call_other_responder, core_version as core_version_inner,
    init_logging as init_logging_inner, ping as ping_inner, select_topic, AppState,
    ChecklistService, Responder, RewardPolicy, SqliteChecklistRepository, UserProfile,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const BOARD_DB_FILE_NAME: &str = "outeralert_board.sqlite3";
static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Signed-in session shared by every screen. `None` until `session_start`.
static SESSION: Mutex<Option<AppState>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for session command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Position assigned to a newly inserted checklist or item.
    pub index: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            index: None,
            message: message.into(),
        }
    }

    fn success_at(message: impl Into<String>, index: usize) -> Self {
        Self {
            ok: true,
            index: u32::try_from(index).ok(),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            index: None,
            message: message.into(),
        }
    }
}

/// Toggle response envelope carrying the new done state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// New done state after the flip (set on success).
    pub done: Option<bool>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ToggleResponse {
    fn success(done: bool) -> Self {
        Self {
            ok: true,
            done: Some(done),
            message: if done {
                "Item marked done.".to_string()
            } else {
                "Item marked not done.".to_string()
            },
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            done: None,
            message: message.into(),
        }
    }
}

/// One checklist item as rendered by the checklist screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub name: String,
    pub done: bool,
}

/// One checklist with its items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistView {
    pub name: String,
    pub items: Vec<ItemView>,
}

/// Session board response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBoardResponse {
    /// Whether the session was available.
    pub ok: bool,
    /// Checklists in insertion order (empty on failure).
    pub checklists: Vec<ChecklistView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Profile snapshot for the header and settings screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    /// Whether the session was available.
    pub ok: bool,
    pub username: String,
    /// Uploaded picture reference, if any.
    pub profile_pic: Option<String>,
    /// First-letter fallback rendered when no picture is set.
    pub avatar_initial: String,
    pub xp: u32,
    pub level: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Poll response envelope for the notification screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResponse {
    /// Whether a notification was delivered.
    pub ok: bool,
    /// Delivered alert text (set on success).
    pub notification: Option<String>,
    /// Read-state of the delivered alert (set on success).
    pub seen: Option<bool>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Answer response envelope carrying updated quiz progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    /// Whether the session was available.
    pub ok: bool,
    /// `Correct` or `Wrong` signal for the quiz screen.
    pub feedback: String,
    pub xp: u32,
    pub level: u32,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One SOS roster entry as rendered by the emergency call screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderView {
    /// Display label, e.g. `PARAMEDIC`.
    pub label: String,
    /// Hotline number the tile dials.
    pub hotline: String,
}

/// Replaces the process session with a fresh signed-in state.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Blank username or password fails without touching an existing session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_start(username: String, password: String) -> ActionResponse {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() {
        return ActionResponse::failure("session_start failed: username is required");
    }
    if password.is_empty() {
        return ActionResponse::failure("session_start failed: password is required");
    }

    let state = AppState::new(UserProfile::new(username, password));
    *session_guard() = Some(state);
    log::info!("event=session_start module=ffi status=ok");
    ActionResponse::success(format!("Signed in as {username}."))
}

/// Reads the signed-in profile for header/settings rendering.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Fails with `ok = false` before `session_start`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_profile() -> ProfileResponse {
    match session_guard().as_ref() {
        Some(state) => ProfileResponse {
            ok: true,
            username: state.profile.username.clone(),
            profile_pic: state.profile.profile_pic.clone(),
            avatar_initial: state.profile.avatar_initial().to_string(),
            xp: state.profile.xp,
            level: state.profile.level,
            message: String::new(),
        },
        None => ProfileResponse {
            ok: false,
            username: String::new(),
            profile_pic: None,
            avatar_initial: "?".to_string(),
            xp: 0,
            level: 1,
            message: NO_SESSION.to_string(),
        },
    }
}

/// Appends a new checklist to the session board.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Returns the new checklist's index on success.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_insert_checklist(name: String) -> ActionResponse {
    with_session(|state| match state.checklists.insert_checklist(&name) {
        Ok(index) => ActionResponse::success_at("Checklist created.", index),
        Err(err) => ActionResponse::failure(format!("session_insert_checklist failed: {err}")),
    })
}

/// Appends an item to one of the session board's checklists.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Returns the new item's index within its checklist on success.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_insert_item(checklist: u32, name: String) -> ActionResponse {
    with_session(
        |state| match state.checklists.insert_item(checklist as usize, &name) {
            Ok(index) => ActionResponse::success_at("Item added.", index),
            Err(err) => ActionResponse::failure(format!("session_insert_item failed: {err}")),
        },
    )
}

/// Flips one session item's done state.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Returns the new done state on success.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_toggle_item(checklist: u32, item: u32) -> ToggleResponse {
    let mut guard = session_guard();
    let Some(state) = guard.as_mut() else {
        return ToggleResponse::failure(NO_SESSION);
    };
    match state
        .checklists
        .toggle_item_done(checklist as usize, item as usize)
    {
        Ok(done) => ToggleResponse::success(done),
        Err(err) => ToggleResponse::failure(format!("session_toggle_item failed: {err}")),
    }
}

/// Reads the whole session board for the checklist screen.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Fails with `ok = false` before `session_start`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_board() -> SessionBoardResponse {
    match session_guard().as_ref() {
        Some(state) => {
            let checklists = state
                .checklists
                .checklists()
                .iter()
                .map(|checklist| ChecklistView {
                    name: checklist.name.clone(),
                    items: checklist
                        .items
                        .iter()
                        .map(|item| ItemView {
                            name: item.name.clone(),
                            done: item.done,
                        })
                        .collect(),
                })
                .collect();
            SessionBoardResponse {
                ok: true,
                checklists,
                message: String::new(),
            }
        }
        None => SessionBoardResponse {
            ok: false,
            checklists: Vec::new(),
            message: NO_SESSION.to_string(),
        },
    }
}

/// Empties the session board.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_clear_checklists() -> ActionResponse {
    with_session(|state| {
        state.checklists.clear();
        ActionResponse::success("Checklists cleared.")
    })
}

/// Queues an alert message for the notification screen.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Always succeeds once a session exists.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_push(message: String) -> ActionResponse {
    with_session(|state| {
        state.notifications.push(message);
        ActionResponse::success("Notification queued.")
    })
}

/// Delivers the oldest pending alert, removing it from the queue.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Fails with `ok = false` when nothing is pending.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_poll() -> PollResponse {
    let mut guard = session_guard();
    let Some(state) = guard.as_mut() else {
        return PollResponse {
            ok: false,
            notification: None,
            seen: None,
            message: NO_SESSION.to_string(),
        };
    };
    match state.notifications.receive() {
        Ok(notification) => PollResponse {
            ok: true,
            notification: Some(notification.message),
            seen: Some(notification.seen),
            message: String::new(),
        },
        Err(err) => PollResponse {
            ok: false,
            notification: None,
            seen: None,
            message: format!("notify_poll failed: {err}"),
        },
    }
}

/// Drops every pending alert.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notify_clear() -> ActionResponse {
    with_session(|state| {
        state.notifications.clear();
        ActionResponse::success("Notifications cleared.")
    })
}

/// Changes the signed-in user's username.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Blank input fails without mutating the session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_set_username(value: String) -> ActionResponse {
    with_session(|state| match state.profile.change_username(&value) {
        Ok(()) => ActionResponse::success("Username updated."),
        Err(err) => ActionResponse::failure(format!("profile_set_username failed: {err}")),
    })
}

/// Changes the signed-in user's password.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Blank input fails without mutating the session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_set_password(value: String) -> ActionResponse {
    with_session(|state| match state.profile.change_password(&value) {
        Ok(()) => ActionResponse::success("Password updated."),
        Err(err) => ActionResponse::failure(format!("profile_set_password failed: {err}")),
    })
}

/// Changes the signed-in user's profile picture reference.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Blank input fails without mutating the session.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_set_profile_pic(value: String) -> ActionResponse {
    with_session(|state| match state.profile.change_profile_pic(&value) {
        Ok(()) => ActionResponse::success("Profile picture updated."),
        Err(err) => ActionResponse::failure(format!("profile_set_profile_pic failed: {err}")),
    })
}

/// Resolves a quiz topic selection against the supported topic set.
///
/// # FFI contract
/// - Sync call; no I/O; no session required.
/// - Tolerates case and padding; unknown topics fail.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_select_topic(topic: String) -> ActionResponse {
    match select_topic(&topic) {
        Ok(resolved) => ActionResponse::success(resolved.as_str()),
        Err(err) => ActionResponse::failure(format!("quiz_select_topic failed: {err}")),
    }
}

/// Applies one answered quiz question to the signed-in profile.
///
/// # FFI contract
/// - Sync call; no I/O.
/// - Uses the standard reward policy (10 XP per correct, promotion at 50).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_answer(correct: bool) -> AnswerResponse {
    let mut guard = session_guard();
    let Some(state) = guard.as_mut() else {
        return AnswerResponse {
            ok: false,
            feedback: String::new(),
            xp: 0,
            level: 1,
            message: NO_SESSION.to_string(),
        };
    };
    let feedback = answer_question(&mut state.profile, correct, &RewardPolicy::default());
    AnswerResponse {
        ok: true,
        feedback: feedback.as_str().to_string(),
        xp: state.profile.xp,
        level: state.profile.level,
        message: String::new(),
    }
}

/// Confirms a call to the user's first emergency contact.
///
/// # FFI contract
/// - Sync call; no I/O; no session required. Dialing itself stays on the
///   platform side.
/// - Blank numbers fail.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn sos_first_responder(number: String) -> ActionResponse {
    match call_first_responder(&number) {
        Ok(confirmation) => ActionResponse::success(confirmation),
        Err(err) => ActionResponse::failure(format!("sos_first_responder failed: {err}")),
    }
}

/// Confirms a call to any other emergency contact.
///
/// # FFI contract
/// - Sync call; no I/O; no session required.
/// - Blank numbers fail.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn sos_other_responder(number: String) -> ActionResponse {
    match call_other_responder(&number) {
        Ok(confirmation) => ActionResponse::success(confirmation),
        Err(err) => ActionResponse::failure(format!("sos_other_responder failed: {err}")),
    }
}

/// Lists the emergency services shown on the SOS screen, in tile order.
///
/// # FFI contract
/// - Sync call; no I/O; no session required.
/// - Never panics; the roster is fixed.
#[flutter_rust_bridge::frb(sync)]
pub fn sos_roster() -> Vec<ResponderView> {
    Responder::ALL
        .into_iter()
        .map(|responder| ResponderView {
            label: responder.label().to_string(),
            hotline: responder.hotline().to_string(),
        })
        .collect()
}

/// Record response envelope for device-store command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Stable ID of the created record.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordResponse {
    fn success(message: impl Into<String>, record_id: Uuid) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// One persisted checklist item with its stable ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItemView {
    pub item_id: String,
    pub name: String,
    pub done: bool,
}

/// One persisted checklist with its items in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChecklistView {
    pub checklist_id: String,
    pub title: String,
    pub items: Vec<StoredItemView>,
}

/// Device-store board response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the fetch succeeded.
    pub ok: bool,
    /// Checklists in board order (empty on failure).
    pub checklists: Vec<StoredChecklistView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Creates a checklist in the on-device store.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the created checklist's stable ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn board_insert_checklist(title: String) -> RecordResponse {
    match with_checklist_service(|service| service.add_checklist(title.trim())) {
        Ok(id) => RecordResponse::success("Checklist created.", id),
        Err(err) => RecordResponse::failure(format!("board_insert_checklist failed: {err}")),
    }
}

/// Appends an item to a persisted checklist.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the created item's stable ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn board_append_item(checklist_id: String, name: String) -> RecordResponse {
    let id = match parse_record_id(&checklist_id, "checklist_id") {
        Ok(id) => id,
        Err(message) => return RecordResponse::failure(message),
    };
    match with_checklist_service(|service| service.add_item(id, name.trim())) {
        Ok(item_id) => RecordResponse::success("Item added.", item_id),
        Err(err) => RecordResponse::failure(format!("board_append_item failed: {err}")),
    }
}

/// Flips one persisted item's done state.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the new done state on success.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_item(item_id: String) -> ToggleResponse {
    let id = match parse_record_id(&item_id, "item_id") {
        Ok(id) => id,
        Err(message) => return ToggleResponse::failure(message),
    };
    match with_checklist_service(|service| service.toggle_item(id)) {
        Ok(done) => ToggleResponse::success(done),
        Err(err) => ToggleResponse::failure(format!("board_toggle_item failed: {err}")),
    }
}

/// Fetches the persisted board for the checklist screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns checklists with their items in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_fetch() -> BoardResponse {
    match with_checklist_service(|service| service.board()) {
        Ok(board) => BoardResponse {
            ok: true,
            checklists: board
                .into_iter()
                .map(|checklist| StoredChecklistView {
                    checklist_id: checklist.id.to_string(),
                    title: checklist.title,
                    items: checklist
                        .items
                        .into_iter()
                        .map(|item| StoredItemView {
                            item_id: item.id.to_string(),
                            name: item.name,
                            done: item.done,
                        })
                        .collect(),
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => BoardResponse {
            ok: false,
            checklists: Vec::new(),
            message: format!("board_fetch failed: {err}"),
        },
    }
}

/// Deletes every persisted checklist and item.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_clear() -> ActionResponse {
    let db_path = resolve_board_db_path();
    let mut conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => return ActionResponse::failure(format!("board DB open failed: {err}")),
    };
    let repo = match SqliteChecklistRepository::try_new(&mut conn) {
        Ok(repo) => repo,
        Err(err) => return ActionResponse::failure(format!("board repo init failed: {err}")),
    };
    let mut service = ChecklistService::new(repo);
    match service.clear() {
        Ok(()) => ActionResponse::success("Board cleared."),
        Err(err) => ActionResponse::failure(format!("board_clear failed: {err}")),
    }
}

const NO_SESSION: &str = "no active session; call session_start first";

fn session_guard() -> MutexGuard<'static, Option<AppState>> {
    // A panicking FFI caller must not brick every later call.
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_session(f: impl FnOnce(&mut AppState) -> ActionResponse) -> ActionResponse {
    let mut guard = session_guard();
    match guard.as_mut() {
        Some(state) => f(state),
        None => ActionResponse::failure(NO_SESSION),
    }
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("OUTERALERT_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

fn parse_record_id(value: &str, field: &'static str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid {field}: `{value}`"))
}

fn with_checklist_service<T>(
    f: impl FnOnce(&ChecklistService<SqliteChecklistRepository<'_>>) -> outeralert_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_board_db_path();
    let mut conn = open_db(&db_path).map_err(|err| format!("board DB open failed: {err}"))?;
    let repo = SqliteChecklistRepository::try_new(&mut conn)
        .map_err(|err| format!("board repo init failed: {err}"))?;
    let service = ChecklistService::new(repo);
    f(&service).map_err(|err| err.to_string())
}

// Session state lives in one process-wide static, so everything that touches
// it runs inside a single test; the board tests use unique titles against the
// shared database file instead.
#[cfg(test)]
mod tests {
    use super::{
        board_append_item, board_clear, board_fetch, board_insert_checklist, board_toggle_item,
        core_version, init_logging, notify_clear, notify_poll, notify_push, ping,
        profile_set_password, profile_set_profile_pic, profile_set_username, quiz_answer,
        quiz_select_topic, session_board, session_clear_checklists, session_insert_checklist,
        session_insert_item, session_profile, session_start, session_toggle_item,
        sos_first_responder, sos_other_responder, sos_roster,
    };
    use outeralert_core::db::open_db;
    use rusqlite::params;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn quiz_select_topic_resolves_known_topics_only() {
        let response = quiz_select_topic(" flood ".to_string());
        assert!(response.ok);
        assert_eq!(response.message, "Flood");

        let response = quiz_select_topic("Tornado".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("Tornado"));
    }

    #[test]
    fn sos_confirmations_embed_the_number() {
        let response = sos_first_responder("999".to_string());
        assert!(response.ok);
        assert_eq!(response.message, "Calling first responder at 999");

        let response = sos_other_responder("0137056504".to_string());
        assert!(response.ok);
        assert_eq!(response.message, "Calling other responder at 0137056504");

        let response = sos_first_responder("  ".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("number"));
    }

    #[test]
    fn sos_roster_lists_six_services_in_tile_order() {
        let roster = sos_roster();
        let labels: Vec<&str> = roster.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "PARAMEDIC",
                "POLICE",
                "FIRE FIGHTERS",
                "PUBLIC SERVICE",
                "MARITIMES",
                "ST.JOHN"
            ]
        );
        assert!(roster[..5].iter().all(|entry| entry.hotline == "999"));
        assert_eq!(roster[5].hotline, "0137056504");
    }

    #[test]
    fn session_lifecycle_covers_checklists_quiz_and_notifications() {
        // Pre-session calls fail with a readable message.
        assert!(!session_profile().ok);
        assert!(session_insert_checklist("Go Bag".to_string())
            .message
            .contains("session_start"));
        assert!(!notify_poll().ok);
        assert!(!quiz_answer(true).ok);

        // Blank credentials never create a session.
        assert!(!session_start("  ".to_string(), "abcd1234".to_string()).ok);
        assert!(!session_start("testUser".to_string(), "".to_string()).ok);
        assert!(!session_profile().ok);

        let started = session_start("testUser".to_string(), "abcd1234".to_string());
        assert!(started.ok, "{}", started.message);

        // Checklist flow mirrors the checklist screen.
        let list = session_insert_checklist("Secure Safety Location".to_string());
        assert!(list.ok, "{}", list.message);
        assert_eq!(list.index, Some(0));
        assert!(session_insert_item(0, "Find Shelter".to_string()).ok);
        assert!(session_insert_item(0, "Buy Medicine Kit".to_string()).ok);
        assert!(!session_insert_item(9, "Whistle".to_string()).ok);
        assert!(!session_insert_checklist("   ".to_string()).ok);

        let toggled = session_toggle_item(0, 0);
        assert_eq!(toggled.done, Some(true));
        let toggled = session_toggle_item(0, 0);
        assert_eq!(toggled.done, Some(false));
        assert!(!session_toggle_item(0, 9).ok);

        let board = session_board();
        assert!(board.ok);
        assert_eq!(board.checklists.len(), 1);
        assert_eq!(board.checklists[0].name, "Secure Safety Location");
        assert_eq!(board.checklists[0].items.len(), 2);
        assert_eq!(board.checklists[0].items[1].name, "Buy Medicine Kit");

        // Quiz answers move the signed-in profile.
        for expected_xp in [10, 20, 30, 40] {
            let answer = quiz_answer(true);
            assert_eq!(answer.feedback, "Correct");
            assert_eq!(answer.xp, expected_xp);
            assert_eq!(answer.level, 1);
        }
        let promoted = quiz_answer(true);
        assert_eq!((promoted.xp, promoted.level), (50, 2));
        let wrong = quiz_answer(false);
        assert_eq!(wrong.feedback, "Wrong");
        assert_eq!((wrong.xp, wrong.level), (50, 2));

        // Profile setters validate and report through the snapshot.
        assert!(profile_set_username("coastalwatch".to_string()).ok);
        assert!(!profile_set_username("  ".to_string()).ok);
        assert!(profile_set_password("stormy-night-9".to_string()).ok);
        assert!(!profile_set_password("".to_string()).ok);
        assert!(profile_set_profile_pic("userPicture.png".to_string()).ok);
        let profile = session_profile();
        assert_eq!(profile.username, "coastalwatch");
        assert_eq!(profile.profile_pic.as_deref(), Some("userPicture.png"));
        assert_eq!(profile.avatar_initial, "C");
        assert_eq!((profile.xp, profile.level), (50, 2));

        // Notifications deliver in arrival order, then report empty.
        assert!(notify_push("Earthquake hit 2.4".to_string()).ok);
        assert!(notify_push("Flood Hit Habour".to_string()).ok);
        let first = notify_poll();
        assert_eq!(first.notification.as_deref(), Some("Earthquake hit 2.4"));
        assert_eq!(first.seen, Some(false));
        let second = notify_poll();
        assert_eq!(second.notification.as_deref(), Some("Flood Hit Habour"));
        let drained = notify_poll();
        assert!(!drained.ok);
        assert!(drained.message.contains("notify_poll failed"));

        assert!(notify_push("stale".to_string()).ok);
        assert!(notify_clear().ok);
        assert!(!notify_poll().ok);

        assert!(session_clear_checklists().ok);
        assert!(session_board().checklists.is_empty());
    }

    #[test]
    fn board_endpoints_persist_through_the_device_store() {
        let title = unique_token("board-list");
        let created = board_insert_checklist(title.clone());
        assert!(created.ok, "{}", created.message);
        let checklist_id = created
            .record_id
            .clone()
            .expect("created checklist should return record_id");

        let item = board_append_item(checklist_id.clone(), "Bottled water".to_string());
        assert!(item.ok, "{}", item.message);
        let item_id = item.record_id.expect("created item should return record_id");

        let toggled = board_toggle_item(item_id.clone());
        assert_eq!(toggled.done, Some(true));
        let toggled = board_toggle_item(item_id.clone());
        assert_eq!(toggled.done, Some(false));

        let board = board_fetch();
        assert!(board.ok, "{}", board.message);
        let fetched = board
            .checklists
            .iter()
            .find(|checklist| checklist.checklist_id == checklist_id)
            .expect("created checklist should appear in fetched board");
        assert_eq!(fetched.title, title);
        assert_eq!(fetched.items.len(), 1);
        assert_eq!(fetched.items[0].item_id, item_id);
        assert!(!fetched.items[0].done);

        let conn = open_db(super::resolve_board_db_path()).expect("open db");
        let (stored_title, done): (String, i64) = conn
            .query_row(
                "SELECT c.title, i.done
                 FROM checklists c JOIN checklist_items i ON i.checklist_uuid = c.uuid
                 WHERE i.uuid = ?1",
                params![item_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("query item row");
        assert_eq!(stored_title, title);
        assert_eq!(done, 0);

        let rejected = board_append_item("not-a-uuid".to_string(), "Water".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("checklist_id"));

        let blank = board_insert_checklist("   ".to_string());
        assert!(!blank.ok);
        assert!(blank.message.contains("checklist name"));

        let cleared = board_clear();
        assert!(cleared.ok, "{}", cleared.message);
        assert!(board_fetch()
            .checklists
            .iter()
            .all(|checklist| checklist.checklist_id != checklist_id));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
