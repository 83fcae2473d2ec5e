//! Profile repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the single device profile row with quiz progress counters.
//!
//! # Invariants
//! - At most one profile row exists; writes always target row id 1.
//! - Read paths reject invalid persisted counters instead of masking them.

use crate::model::profile::UserProfile;
use crate::repo::checklist_repo::{table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for device profile persistence.
pub trait ProfileRepository {
    /// Inserts or fully replaces the profile row.
    fn save(&self, profile: &UserProfile) -> RepoResult<()>;
    /// Loads the profile row, or `None` before first save.
    fn load(&self) -> RepoResult<Option<UserProfile>>;
    /// Writes quiz progress counters without touching identity fields.
    fn record_progress(&self, xp: u32, level: u32) -> RepoResult<()>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "profile")? {
            return Err(RepoError::MissingTable("profile"));
        }
        Ok(Self { conn })
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn save(&self, profile: &UserProfile) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO profile (id, username, password, profile_pic, xp, level, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, (strftime('%s', 'now') * 1000))
             ON CONFLICT(id) DO UPDATE SET
                username = excluded.username,
                password = excluded.password,
                profile_pic = excluded.profile_pic,
                xp = excluded.xp,
                level = excluded.level,
                updated_at = excluded.updated_at;",
            params![
                profile.username.as_str(),
                profile.password.as_str(),
                profile.profile_pic.as_deref(),
                i64::from(profile.xp),
                i64::from(profile.level),
            ],
        )?;
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<UserProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT username, password, profile_pic, xp, level
                 FROM profile WHERE id = 1;",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>("username")?,
                        row.get::<_, String>("password")?,
                        row.get::<_, Option<String>>("profile_pic")?,
                        row.get::<_, i64>("xp")?,
                        row.get::<_, i64>("level")?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some(parts) => Ok(Some(profile_from_parts(parts)?)),
            None => Ok(None),
        }
    }

    fn record_progress(&self, xp: u32, level: u32) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE profile
             SET xp = ?1, level = ?2, updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = 1;",
            params![i64::from(xp), i64::from(level)],
        )?;
        if changed == 0 {
            return Err(RepoError::NoProfile);
        }
        Ok(())
    }
}

type ProfileParts = (String, String, Option<String>, i64, i64);

fn profile_from_parts(parts: ProfileParts) -> RepoResult<UserProfile> {
    let (username, password, profile_pic, xp, level) = parts;

    let xp = u32::try_from(xp)
        .map_err(|_| RepoError::InvalidData(format!("invalid xp value `{xp}` in profile.xp")))?;
    let level = u32::try_from(level).map_err(|_| {
        RepoError::InvalidData(format!("invalid level value `{level}` in profile.level"))
    })?;
    if level == 0 {
        return Err(RepoError::InvalidData(
            "invalid level value `0` in profile.level".to_string(),
        ));
    }

    Ok(UserProfile {
        username,
        password,
        profile_pic,
        xp,
        level,
    })
}
