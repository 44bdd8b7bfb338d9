use std::collections::HashMap;

use async_graphql::InputObject;
use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Choice;

pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 10;
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

fn default_question_count() -> u8 {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 2000))]
    pub topic: String,

    #[serde(default = "default_question_count")]
    #[graphql(default = 5)]
    #[validate(range(min = 1, max = 10))]
    pub question_count: u8,
}

impl GenerateQuizRequest {
    pub fn new(topic: impl Into<String>, question_count: u8) -> Self {
        Self {
            topic: topic.into(),
            question_count,
        }
    }

    /// Field validation plus the checks `validator` cannot express.
    pub fn validate_request(&self) -> AppResult<()> {
        self.validate()?;
        if self.topic.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Quiz topic must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitAnswersRequest {
    #[validate(length(min = 1, max = 10))]
    pub answers: Vec<Choice>,
}

/// Fields posted by the browser start form.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizForm {
    pub topic: String,
    pub question_count: Option<String>,
    pub previous_quiz_id: Option<String>,
}

impl GenerateQuizForm {
    pub fn question_count(&self) -> AppResult<u8> {
        match self.question_count.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_QUESTION_COUNT),
            Some(raw) => raw.parse::<u8>().map_err(|_| {
                AppError::ValidationError(format!(
                    "Number of questions must be between {} and {}",
                    MIN_QUESTION_COUNT, MAX_QUESTION_COUNT
                ))
            }),
        }
    }

    pub fn into_request(self) -> AppResult<GenerateQuizRequest> {
        let question_count = self.question_count()?;
        Ok(GenerateQuizRequest::new(self.topic, question_count))
    }
}

/// Collects radio selections named `q0`, `q1`, ... into positional order.
pub fn answers_from_form(
    fields: &HashMap<String, String>,
    question_count: usize,
) -> AppResult<Vec<Choice>> {
    (0..question_count)
        .map(|i| {
            let value = fields.get(&format!("q{}", i)).ok_or_else(|| {
                AppError::ValidationError(format!("Question {} has no answer selected", i + 1))
            })?;
            value.parse::<Choice>()
        })
        .collect()
}
