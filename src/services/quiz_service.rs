use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Choice, QuizSession},
        dto::request::GenerateQuizRequest,
    },
    repositories::QuizSessionRepository,
    services::{
        model_service::QuizModel, prompt_builder::build_quiz_prompt,
        quiz_attempt_service::QuizAttemptService, quiz_parser::parse_quiz,
    },
};

pub struct QuizService {
    model: Arc<dyn QuizModel>,
    repository: Arc<dyn QuizSessionRepository>,
    session_ttl: Duration,
}

impl QuizService {
    pub fn new(
        model: Arc<dyn QuizModel>,
        repository: Arc<dyn QuizSessionRepository>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            model,
            repository,
            session_ttl,
        }
    }

    /// Asks the model for a quiz, parses it and opens a new session for it.
    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<QuizSession> {
        request.validate_request()?;

        let topic = request.topic.trim();
        let prompt = build_quiz_prompt(request.question_count, topic);

        log::info!(
            "Generating {} question quiz about '{}'",
            request.question_count,
            topic
        );

        let quiz_response = self.model.complete(&prompt).await.map_err(|e| {
            log::error!("Model call failed: {}", e);
            e
        })?;

        let outcome = parse_quiz(&quiz_response, request.question_count).map_err(|e| {
            log::warn!("Discarding unparseable model reply: {}", e);
            e
        })?;

        self.purge_expired().await?;

        let session = QuizSession::new(
            topic,
            request.question_count,
            outcome.quiz,
            outcome.warnings,
        );
        let session = self.repository.create(session).await?;

        log::info!(
            "Created quiz session {} with {} questions",
            session.id,
            session.quiz.question_count()
        );
        Ok(session)
    }

    /// Generates a new quiz and discards the one it replaces.
    pub async fn regenerate_quiz(
        &self,
        request: GenerateQuizRequest,
        previous: Option<&Uuid>,
    ) -> AppResult<QuizSession> {
        let session = self.generate_quiz(request).await?;
        if let Some(previous_id) = previous {
            if self.repository.delete(previous_id).await? {
                log::debug!("Discarded quiz session {}", previous_id);
            }
        }
        Ok(session)
    }

    pub async fn get_quiz(&self, id: &Uuid) -> AppResult<QuizSession> {
        let session = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        if self.is_expired(&session) {
            self.repository.delete(id).await?;
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' has expired",
                id
            )));
        }

        Ok(session)
    }

    /// Scores the selections and keeps the graded view on the session.
    /// Submitting again replaces the earlier result.
    pub async fn submit_answers(&self, id: &Uuid, answers: &[Choice]) -> AppResult<QuizSession> {
        let mut session = self.get_quiz(id).await?;

        let attempt = QuizAttemptService::grade_attempt(&session.quiz, answers)?;
        log::info!("Quiz session {} scored {}", session.id, attempt.score);

        session.record_attempt(attempt);
        self.repository.update(session).await
    }

    pub async fn discard_quiz(&self, id: &Uuid) -> AppResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)))
        }
    }

    fn is_expired(&self, session: &QuizSession) -> bool {
        session.created_at < Utc::now() - self.session_ttl
    }

    async fn purge_expired(&self) -> AppResult<()> {
        let removed = self
            .repository
            .purge_created_before(Utc::now() - self.session_ttl)
            .await?;
        if removed > 0 {
            log::debug!("Purged {} expired quiz sessions", removed);
        }
        Ok(())
    }
}
