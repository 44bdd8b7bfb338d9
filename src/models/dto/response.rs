use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Choice, QuestionResult, QuizScore, QuizSession, ViewState};

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionDto {
    pub number: u32,
    pub text: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizDto {
    pub id: String,
    pub topic: String,
    pub requested_question_count: u8,
    pub questions: Vec<QuestionDto>,
    pub warnings: Vec<String>,
    pub view_state: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResultDto>,
    pub created_at: DateTime<Utc>,
}

impl From<QuizSession> for QuizDto {
    fn from(session: QuizSession) -> Self {
        let result = session
            .attempt
            .as_ref()
            .map(|attempt| QuizResultDto::new(&session, attempt.score, attempt.results.clone()));

        QuizDto {
            id: session.id.to_string(),
            topic: session.topic,
            requested_question_count: session.requested_question_count,
            questions: session
                .quiz
                .questions
                .into_iter()
                .map(|q| QuestionDto {
                    number: q.number,
                    text: q.text,
                    choices: Choice::ALL.to_vec(),
                })
                .collect(),
            warnings: session.warnings,
            view_state: session.view_state,
            result,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizResultDto {
    pub quiz_id: String,
    pub score: QuizScore,
    pub summary: String,
    pub results: Vec<QuestionResult>,
    pub view_state: ViewState,
}

impl QuizResultDto {
    fn new(session: &QuizSession, score: QuizScore, results: Vec<QuestionResult>) -> Self {
        QuizResultDto {
            quiz_id: session.id.to_string(),
            score,
            summary: format!("Your score is: {}", score),
            results,
            view_state: session.view_state,
        }
    }
}

impl TryFrom<QuizSession> for QuizResultDto {
    type Error = crate::errors::AppError;

    fn try_from(session: QuizSession) -> Result<Self, Self::Error> {
        let attempt = session.attempt.as_ref().ok_or_else(|| {
            crate::errors::AppError::ValidationError(format!(
                "Quiz '{}' has not been submitted yet",
                session.id
            ))
        })?;
        Ok(QuizResultDto::new(
            &session,
            attempt.score,
            attempt.results.clone(),
        ))
    }
}

#[derive(Debug, Serialize, SimpleObject)]
pub struct DiscardQuizResponse {
    pub message: String,
}
