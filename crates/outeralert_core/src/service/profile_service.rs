//! Profile use-case service.
//!
//! # Responsibility
//! - Orchestrate profile registration, settings changes and quiz rewards
//!   against the persisted device store.
//!
//! # Invariants
//! - A failed settings change never reaches persistence.
//! - Quiz rewards mutate the in-memory profile first, then mirror the
//!   counters to storage.

use crate::error::require_filled;
use crate::model::profile::UserProfile;
use crate::model::quiz::AnswerFeedback;
use crate::quiz::{answer_question, QuizRound, QuizSummary, RewardPolicy};
use crate::repo::checklist_repo::RepoResult;
use crate::repo::profile_repo::ProfileRepository;

/// Use-case service wrapper for profile persistence.
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a fresh profile and persists it.
    ///
    /// The new profile starts at zero XP, level one, with no picture.
    pub fn register(&self, username: &str, password: &str) -> RepoResult<UserProfile> {
        let username = require_filled(username, "username")?;
        let password = require_filled(password, "password")?;
        let profile = UserProfile::new(username, password);
        self.repo.save(&profile)?;
        Ok(profile)
    }

    /// Loads the persisted profile, or `None` before registration.
    pub fn load(&self) -> RepoResult<Option<UserProfile>> {
        self.repo.load()
    }

    /// Changes the username and persists the whole profile.
    pub fn update_username(&self, profile: &mut UserProfile, value: &str) -> RepoResult<()> {
        profile.change_username(value)?;
        self.repo.save(profile)?;
        Ok(())
    }

    /// Changes the password and persists the whole profile.
    pub fn update_password(&self, profile: &mut UserProfile, value: &str) -> RepoResult<()> {
        profile.change_password(value)?;
        self.repo.save(profile)?;
        Ok(())
    }

    /// Changes the profile picture and persists the whole profile.
    pub fn update_profile_pic(&self, profile: &mut UserProfile, value: &str) -> RepoResult<()> {
        profile.change_profile_pic(value)?;
        self.repo.save(profile)?;
        Ok(())
    }

    /// Applies one answered question and mirrors the counters to storage.
    pub fn apply_answer(
        &self,
        profile: &mut UserProfile,
        correct: bool,
        policy: &RewardPolicy,
    ) -> RepoResult<AnswerFeedback> {
        let feedback = answer_question(profile, correct, policy);
        self.repo.record_progress(profile.xp, profile.level)?;
        Ok(feedback)
    }

    /// Grades a finished round and mirrors the counters to storage.
    pub fn finish_round(
        &self,
        profile: &mut UserProfile,
        round: QuizRound,
        policy: &RewardPolicy,
    ) -> RepoResult<QuizSummary> {
        let summary = round.finish(profile, policy);
        self.repo.record_progress(profile.xp, profile.level)?;
        Ok(summary)
    }
}
