//! Quiz progression rules.
//!
//! # Responsibility
//! - Resolve quiz topic selections against the known topic set.
//! - Apply XP rewards and level promotion for answered questions.
//!
//! # Invariants
//! - XP never decreases here; only a profile reset lowers it.
//! - Promotion is evaluated after every rewarded answer: each correct answer
//!   that lands the XP total at or above the threshold raises the level by
//!   one.

pub mod round;

pub use round::{QuizRound, QuizSummary, RoundProgress};

use crate::error::DomainResult;
use crate::model::profile::UserProfile;
use crate::model::quiz::{AnswerFeedback, QuizTopic};

/// Reward parameters applied when a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPolicy {
    /// XP granted for one correct answer.
    pub xp_per_correct: u32,
    /// XP total at or above which a correct answer also raises the level.
    pub level_up_threshold: u32,
}

impl RewardPolicy {
    pub const fn new(xp_per_correct: u32, level_up_threshold: u32) -> Self {
        Self {
            xp_per_correct,
            level_up_threshold,
        }
    }
}

impl Default for RewardPolicy {
    /// Ten XP per correct answer, promotion checked against fifty XP.
    fn default() -> Self {
        Self::new(10, 50)
    }
}

/// Applies one answered question to the profile.
///
/// A wrong answer leaves the profile untouched. A correct answer adds
/// `xp_per_correct`, then raises the level by one when the new XP total is at
/// or above `level_up_threshold`. The check runs per answer, so every correct
/// answer past the threshold keeps promoting.
pub fn answer_question(
    profile: &mut UserProfile,
    correct: bool,
    policy: &RewardPolicy,
) -> AnswerFeedback {
    if !correct {
        return AnswerFeedback::Wrong;
    }

    profile.xp = profile.xp.saturating_add(policy.xp_per_correct);
    if profile.xp >= policy.level_up_threshold {
        profile.level = profile.level.saturating_add(1);
    }
    AnswerFeedback::Correct
}

/// Resolves a topic selection by display name.
pub fn select_topic(input: &str) -> DomainResult<QuizTopic> {
    QuizTopic::parse(input)
}
