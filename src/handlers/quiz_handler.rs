use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuizRequest, SubmitAnswersRequest},
        response::{DiscardQuizResponse, QuizDto, QuizResultDto},
    },
};

#[post("/api/quizzes")]
async fn create_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] quiz generation requested", request_id);

    let session = state
        .quiz_service
        .generate_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(QuizDto::from(session)))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizDto::from(session)))
}

#[post("/api/quizzes/{id}/submissions")]
async fn submit_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] answers submitted for quiz {}", request_id, id);

    let session = state
        .quiz_service
        .submit_answers(&id, &request.answers)
        .await?;
    Ok(HttpResponse::Ok().json(QuizResultDto::try_from(session)?))
}

#[delete("/api/quizzes/{id}")]
async fn discard_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.discard_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(DiscardQuizResponse {
        message: format!("Quiz '{}' discarded", id),
    }))
}
