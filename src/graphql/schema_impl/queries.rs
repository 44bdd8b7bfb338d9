use async_graphql::{Context, Object, ResultExt, ID};

use crate::{
    app_state::AppState, graphql::helpers::parse_id, models::dto::response::QuizDto,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A generated quiz without its answer key.
    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<QuizDto> {
        let state = ctx.data::<AppState>()?;

        let quiz_id = parse_id(&id).extend()?;
        let session = state.quiz_service.get_quiz(&quiz_id).await.extend()?;

        Ok(QuizDto::from(session))
    }

    async fn health(&self) -> &'static str {
        "healthy"
    }
}
