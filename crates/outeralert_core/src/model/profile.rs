//! User profile domain model and its validated mutators.
//!
//! # Responsibility
//! - Define the singleton account record for the signed-in user.
//! - Provide field setters that reject blank input before mutating.
//!
//! # Invariants
//! - `xp` never decreases except through `reset_progress`.
//! - `level` starts at 1 and only ever increases.
//! - A failed setter leaves the record untouched.

use crate::error::{require_filled, DomainResult};
use serde::{Deserialize, Serialize};

/// Account record for the signed-in user.
///
/// One instance exists per session. Quiz progression mutates `xp`/`level`
/// through the transition in [`crate::quiz`]; everything else goes through
/// the setters below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display and login name, non-blank.
    pub username: String,
    /// Stored credential. Hashing is the backend's job; the core only
    /// mirrors whatever reference the caller supplies.
    pub password: String,
    /// Uploaded picture reference. `None` renders as a first-letter avatar.
    pub profile_pic: Option<String>,
    /// Accumulated quiz experience.
    pub xp: u32,
    /// Current level, starting at 1.
    pub level: u32,
}

impl UserProfile {
    /// Creates a fresh profile with no picture, zero XP, level 1.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            profile_pic: None,
            xp: 0,
            level: 1,
        }
    }

    /// Replaces the username. Fails on blank input without mutating.
    pub fn change_username(&mut self, new_username: &str) -> DomainResult<()> {
        let trimmed = require_filled(new_username, "username")?;
        self.username = trimmed.to_string();
        Ok(())
    }

    /// Replaces the password. Fails on blank input without mutating.
    ///
    /// Confirmation matching is a screen-level concern and deliberately not
    /// checked here.
    pub fn change_password(&mut self, new_password: &str) -> DomainResult<()> {
        let trimmed = require_filled(new_password, "password")?;
        self.password = trimmed.to_string();
        Ok(())
    }

    /// Replaces the profile picture reference. Fails on blank input.
    pub fn change_profile_pic(&mut self, new_profile_pic: &str) -> DomainResult<()> {
        let trimmed = require_filled(new_profile_pic, "profile picture")?;
        self.profile_pic = Some(trimmed.to_string());
        Ok(())
    }

    /// Resets quiz progression to the starting state.
    ///
    /// This is the only sanctioned way `xp` goes down; callers use it when a
    /// session is restarted or a fresh account is seeded.
    pub fn reset_progress(&mut self) {
        self.xp = 0;
        self.level = 1;
    }

    /// First-letter fallback the screens render when no picture is set.
    ///
    /// Uppercased first character of the username, or `'?'` when the
    /// username is empty.
    pub fn avatar_initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('?')
    }
}
