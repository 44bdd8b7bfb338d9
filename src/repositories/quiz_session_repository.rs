use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

#[async_trait]
pub trait QuizSessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>>;
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession>;
    /// Replaces a stored session. A session deleted in the meantime stays deleted.
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
    async fn purge_created_before(&self, cutoff: DateTime<Utc>) -> AppResult<usize>;
}

/// Process-local session store; sessions vanish on restart.
#[derive(Default)]
pub struct InMemoryQuizSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, QuizSession>>>,
}

impl InMemoryQuizSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizSessionRepository for InMemoryQuizSessionRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn create(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&session.id).ok_or_else(|| {
            AppError::NotFound(format!("Quiz with id '{}' not found", session.id))
        })?;
        *stored = session.clone();
        Ok(session)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn purge_created_before(&self, cutoff: DateTime<Utc>) -> AppResult<usize> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.created_at >= cutoff);
        Ok(before - sessions.len())
    }
}
