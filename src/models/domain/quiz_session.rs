use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{quiz::ParsedQuiz, quiz_attempt::QuizAttempt};

/// What the quiz page should currently show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ViewState {
    pub quiz_generated: bool,
    pub quiz_submitted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub topic: String,
    pub requested_question_count: u8,
    pub quiz: ParsedQuiz,
    pub warnings: Vec<String>,
    pub view_state: ViewState,
    pub attempt: Option<QuizAttempt>,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(
        topic: &str,
        requested_question_count: u8,
        quiz: ParsedQuiz,
        warnings: Vec<String>,
    ) -> Self {
        QuizSession {
            id: Uuid::new_v4(),
            topic: topic.to_string(),
            requested_question_count,
            quiz,
            warnings,
            view_state: ViewState {
                quiz_generated: true,
                quiz_submitted: false,
            },
            attempt: None,
            created_at: Utc::now(),
        }
    }

    pub fn record_attempt(&mut self, attempt: QuizAttempt) {
        self.attempt = Some(attempt);
        self.view_state.quiz_submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{
        quiz_attempt::QuizScore,
        quiz_question::Choice,
    };

    fn make_session() -> QuizSession {
        QuizSession::new(
            "graphs",
            1,
            ParsedQuiz::new(vec!["1. Q?".to_string()], vec![Choice::A]),
            Vec::new(),
        )
    }

    #[test]
    fn new_session_is_generated_but_not_submitted() {
        let session = make_session();
        assert!(session.view_state.quiz_generated);
        assert!(!session.view_state.quiz_submitted);
        assert!(session.attempt.is_none());
    }

    #[test]
    fn recording_attempt_marks_submitted() {
        let mut session = make_session();
        session.record_attempt(QuizAttempt {
            answers: vec![Choice::A],
            score: QuizScore {
                correct: 1,
                total: 1,
            },
            results: Vec::new(),
            submitted_at: Utc::now(),
        });

        assert!(session.view_state.quiz_submitted);
        assert_eq!(session.attempt.as_ref().map(|a| a.score.correct), Some(1));
    }
}
