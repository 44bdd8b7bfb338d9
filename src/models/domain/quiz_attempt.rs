use std::fmt;

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Choice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuestionResult {
    pub number: u32,
    pub selected: Choice,
    pub correct_answer: Choice,
    pub is_correct: bool,
}

/// A graded set of selections for one quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub answers: Vec<Choice>,
    pub score: QuizScore,
    pub results: Vec<QuestionResult>,
    pub submitted_at: DateTime<Utc>,
}
