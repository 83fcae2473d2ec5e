//! Quiz domain model: topics, questions, answer keys, feedback signals.
//!
//! # Responsibility
//! - Define the closed topic set offered by the quiz.
//! - Define the four-option question shape used by the question bank.
//!
//! # Invariants
//! - Topic parsing accepts exactly the supported set, nothing else.
//! - Answer keys map 1:1 onto option slots A through D.

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Disaster topics the quiz currently covers.
///
/// The set is closed on purpose: question banks, topic art, and copy exist
/// per topic, so an unknown topic is a `NotFound` failure rather than a
/// pass-through string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizTopic {
    Earthquake,
    Flood,
    Fire,
}

impl QuizTopic {
    /// All supported topics in presentation order.
    pub const ALL: [QuizTopic; 3] = [QuizTopic::Earthquake, QuizTopic::Flood, QuizTopic::Fire];

    /// Stable display string, also the accepted parse form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Earthquake => "Earthquake",
            Self::Flood => "Flood",
            Self::Fire => "Fire",
        }
    }

    /// Parses one topic from user/UI input.
    ///
    /// Matching ignores surrounding whitespace and letter case so screen
    /// labels and stored values both resolve.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let normalized = value.trim();
        for topic in Self::ALL {
            if topic.as_str().eq_ignore_ascii_case(normalized) {
                return Ok(topic);
            }
        }
        Err(DomainError::UnknownTopic(value.to_string()))
    }
}

/// Option slot for a four-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// All keys in option order.
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    /// Zero-based option slot for this key.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Key for a zero-based option slot, `None` outside 0..=3.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses the single-letter form the question bank stores ("A".."D").
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            _ => None,
        }
    }

    /// Stable single-letter form.
    pub fn as_letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// One four-choice question from the topic question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text shown to the user.
    pub prompt: String,
    /// Option texts in slot order A through D.
    pub options: [String; 4],
    /// The correct option slot.
    pub answer: AnswerKey,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: [String; 4], answer: AnswerKey) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            answer,
        }
    }

    /// Returns the text of the correct option.
    pub fn answer_text(&self) -> &str {
        &self.options[self.answer.index()]
    }
}

/// Outcome signal for a single answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFeedback {
    Correct,
    Wrong,
}

impl AnswerFeedback {
    /// Stable signal string shown by the quiz screen.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Wrong => "Wrong",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}
