use std::{fmt, str::FromStr};

use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One of the four fixed answer labels shown under every question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "a",
            Choice::B => "b",
            Choice::C => "c",
            Choice::D => "d",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Choice::A),
            'b' => Some(Choice::B),
            'c' => Some(Choice::C),
            'd' => Some(Choice::D),
            _ => None,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => None,
        }
        .ok_or_else(|| {
            AppError::ValidationError(format!("'{}' is not one of a, b, c, d", s.trim()))
        })
    }
}

/// A question stem together with its lettered choices, kept as the model wrote it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuestionBlock {
    pub number: u32, // 1-based position in the quiz
    pub text: String,
}

impl QuestionBlock {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}
