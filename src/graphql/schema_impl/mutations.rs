use async_graphql::{Context, Object, ResultExt, ID};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    graphql::helpers::parse_id,
    models::dto::{
        request::{GenerateQuizRequest, SubmitAnswersRequest},
        response::{DiscardQuizResponse, QuizDto, QuizResultDto},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_quiz(
        &self,
        ctx: &Context<'_>,
        input: GenerateQuizRequest,
    ) -> async_graphql::Result<QuizDto> {
        let state = ctx.data::<AppState>()?;

        let session = state.quiz_service.generate_quiz(input).await.extend()?;

        Ok(QuizDto::from(session))
    }

    async fn submit_quiz(
        &self,
        ctx: &Context<'_>,
        quiz_id: ID,
        input: SubmitAnswersRequest,
    ) -> async_graphql::Result<QuizResultDto> {
        let state = ctx.data::<AppState>()?;

        input.validate().map_err(AppError::from).extend()?;
        let quiz_id = parse_id(&quiz_id).extend()?;

        let session = state
            .quiz_service
            .submit_answers(&quiz_id, &input.answers)
            .await
            .extend()?;

        QuizResultDto::try_from(session).extend()
    }

    async fn discard_quiz(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<DiscardQuizResponse> {
        let state = ctx.data::<AppState>()?;

        let quiz_id = parse_id(&id).extend()?;
        state.quiz_service.discard_quiz(&quiz_id).await.extend()?;

        Ok(DiscardQuizResponse {
            message: format!("Quiz '{}' discarded", quiz_id),
        })
    }
}
