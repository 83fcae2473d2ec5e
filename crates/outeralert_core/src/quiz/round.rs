//! Interactive quiz round flow.
//!
//! # Responsibility
//! - Walk a fixed question list with a movable cursor.
//! - Record at most one picked option per question, revisable until grading.
//! - Grade the round and apply the reward policy to the profile.
//!
//! # Invariants
//! - A round always holds at least one question.
//! - Grading treats an unanswered question as wrong.
//! - Rewards are applied exactly once, when the round is finished.

use crate::error::{DomainError, DomainResult};
use crate::model::profile::UserProfile;
use crate::model::quiz::{AnswerKey, QuizQuestion, QuizTopic};
use crate::quiz::{answer_question, RewardPolicy};

/// One in-progress quiz session for a single topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    topic: QuizTopic,
    questions: Vec<QuizQuestion>,
    chosen: Vec<Option<AnswerKey>>,
    cursor: usize,
}

/// Cursor and completion snapshot for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    /// Zero-based index of the question under the cursor.
    pub position: usize,
    /// Total questions in the round.
    pub total: usize,
    /// Questions with a recorded pick.
    pub answered: usize,
}

impl RoundProgress {
    pub fn remaining(&self) -> usize {
        self.total - self.answered
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Grading outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub topic: QuizTopic,
    pub correct: u32,
    pub wrong: u32,
    /// XP granted by this round alone.
    pub xp_earned: u32,
    /// Profile XP total after the round was applied.
    pub xp: u32,
    /// Profile level after the round was applied.
    pub level: u32,
}

impl QuizRound {
    /// Starts a round over the given questions.
    ///
    /// Fails when the question list is empty; a round with nothing to ask
    /// cannot be graded meaningfully.
    pub fn new(topic: QuizTopic, questions: Vec<QuizQuestion>) -> DomainResult<Self> {
        if questions.is_empty() {
            return Err(DomainError::NoQuestions);
        }
        let chosen = vec![None; questions.len()];
        Ok(Self {
            topic,
            questions,
            chosen,
            cursor: 0,
        })
    }

    pub fn topic(&self) -> QuizTopic {
        self.topic
    }

    /// Number of questions in the round.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question currently under the cursor.
    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.cursor]
    }

    /// Pick recorded for the current question, if any.
    pub fn chosen(&self) -> Option<AnswerKey> {
        self.chosen[self.cursor]
    }

    /// Records a pick for the current question, replacing any earlier pick.
    pub fn choose(&mut self, key: AnswerKey) {
        self.chosen[self.cursor] = Some(key);
    }

    /// Moves the cursor to the next question. Returns false at the last one.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor back one question. Returns false at the first one.
    pub fn rewind(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn progress(&self) -> RoundProgress {
        RoundProgress {
            position: self.cursor,
            total: self.questions.len(),
            answered: self.chosen.iter().filter(|pick| pick.is_some()).count(),
        }
    }

    fn score(&self) -> (u32, u32) {
        let mut correct = 0u32;
        let mut wrong = 0u32;
        for (question, pick) in self.questions.iter().zip(&self.chosen) {
            if *pick == Some(question.answer) {
                correct += 1;
            } else {
                wrong += 1;
            }
        }
        (correct, wrong)
    }

    /// Grades the round and applies its rewards to the profile.
    ///
    /// Consumes the round so a finished session cannot be re-graded. Every
    /// correct pick runs through the same reward transition as a one-off
    /// answer, so round play and single answers level up identically.
    pub fn finish(self, profile: &mut UserProfile, policy: &RewardPolicy) -> QuizSummary {
        let (correct, wrong) = self.score();
        for (question, pick) in self.questions.iter().zip(&self.chosen) {
            answer_question(profile, *pick == Some(question.answer), policy);
        }

        QuizSummary {
            topic: self.topic,
            correct,
            wrong,
            xp_earned: policy.xp_per_correct.saturating_mul(correct),
            xp: profile.xp,
            level: profile.level,
        }
    }
}
