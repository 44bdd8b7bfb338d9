use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::InMemoryQuizSessionRepository,
    services::{
        model_service::{OpenAiQuizModel, QuizModel},
        quiz_service::QuizService,
    },
    views::PageRenderer,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model = Arc::new(OpenAiQuizModel::new(&config));
        Self::with_model(config, model)
    }

    pub fn with_model(config: Config, model: Arc<dyn QuizModel>) -> AppResult<Self> {
        config.validate()?;

        let session_repository = Arc::new(InMemoryQuizSessionRepository::new());
        let quiz_service = Arc::new(QuizService::new(
            model,
            session_repository,
            chrono::Duration::minutes(config.session_ttl_minutes),
        ));

        Ok(Self {
            quiz_service,
            pages: Arc::new(PageRenderer::new()?),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockQuizModel;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_with_openai_model() {
        assert!(AppState::new(Config::test_config()).is_ok());
    }

    #[test]
    fn test_app_state_rejects_invalid_config() {
        let mut config = Config::test_config();
        config.session_ttl_minutes = 0;
        assert!(AppState::with_model(config, Arc::new(MockQuizModel::new())).is_err());
    }
}
