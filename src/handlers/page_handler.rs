use std::collections::HashMap;

use actix_web::{
    error::{InternalError, UrlencodedError},
    get,
    http::{header, StatusCode},
    post, web, HttpRequest, HttpResponse, ResponseError,
};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    graphql::helpers::parse_optional_id,
    middleware::get_request_id,
    models::dto::request::{answers_from_form, GenerateQuizForm, DEFAULT_QUESTION_COUNT},
    views::QuizPageView,
};

fn html(state: &AppState, view: &QuizPageView, status: StatusCode) -> AppResult<HttpResponse> {
    let body = state.pages.render_quiz_page(view)?;
    Ok(HttpResponse::build(status)
        .content_type(header::ContentType::html())
        .body(body))
}

/// Malformed form posts come back as the start page with a notice.
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    let app_err = AppError::ValidationError(format!("The submitted form is invalid: {}", err));
    log::warn!("[{}] {}", get_request_id(req).unwrap_or_default(), app_err);

    let page = req.app_data::<web::Data<AppState>>().and_then(|state| {
        html(
            state,
            &QuizPageView::default().with_notice(&app_err),
            app_err.status_code(),
        )
        .ok()
    });

    match page {
        Some(response) => InternalError::from_response(err, response).into(),
        None => app_err.into(),
    }
}

#[get("/")]
async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    html(&state, &QuizPageView::default(), StatusCode::OK)
}

#[post("/quiz")]
async fn generate_quiz_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<GenerateQuizForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let topic = form.topic.clone();
    let requested = form.question_count().unwrap_or(DEFAULT_QUESTION_COUNT);
    let request_id = get_request_id(&req).unwrap_or_default();

    let result = async {
        let previous = parse_optional_id(form.previous_quiz_id.as_deref())?;
        let request = form.into_request()?;
        state
            .quiz_service
            .regenerate_quiz(request, previous.as_ref())
            .await
    }
    .await;

    match result {
        Ok(session) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/quiz/{}", session.id)))
            .finish()),
        Err(err) => {
            log::warn!("[{}] quiz generation failed: {}", request_id, err);
            let view = QuizPageView::start(&topic, requested).with_notice(&err);
            html(&state, &view, err.status_code())
        }
    }
}

#[get("/quiz/{id}")]
async fn show_quiz_page(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match state.quiz_service.get_quiz(&id).await {
        Ok(session) => html(&state, &QuizPageView::for_session(&session), StatusCode::OK),
        Err(err) => html(
            &state,
            &QuizPageView::default().with_notice(&err),
            err.status_code(),
        ),
    }
}

#[post("/quiz/{id}/submit")]
async fn submit_quiz_page(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let session = match state.quiz_service.get_quiz(&id).await {
        Ok(session) => session,
        Err(err) => {
            return html(
                &state,
                &QuizPageView::default().with_notice(&err),
                err.status_code(),
            )
        }
    };

    let graded = match answers_from_form(&form, session.quiz.question_count()) {
        Ok(answers) => state.quiz_service.submit_answers(&session.id, &answers).await,
        Err(err) => Err(err),
    };

    match graded {
        Ok(graded) => html(&state, &QuizPageView::for_session(&graded), StatusCode::OK),
        Err(err) => {
            let request_id = get_request_id(&req).unwrap_or_default();
            log::warn!("[{}] submission for quiz {} rejected: {}", request_id, id, err);
            let view = QuizPageView::for_session(&session).with_notice(&err);
            html(&state, &view, err.status_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::configure,
        test_utils::{
            fixtures::{BST_QUIZ_RESPONSE, NO_MARKER_RESPONSE},
            test_helpers::{model_failing, model_replying, test_state},
        },
    };
    use actix_web::{dev::ServiceResponse, test, App};

    async fn body_text(resp: ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    fn generate_request(topic: &str, count: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/quiz")
            .set_form([("topic", topic), ("question_count", count)])
    }

    #[actix_web::test]
    async fn test_index_renders_start_form() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "text/html; charset=utf-8"
        );

        let html = body_text(resp).await;
        assert!(html.contains(r#"action="/quiz""#));
        assert!(!html.contains("Question 1"));
    }

    #[actix_web::test]
    async fn test_generate_redirects_then_renders_quiz() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = generate_request("binary search trees", "3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let req = test::TestRequest::get().uri(&location).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("Question 1"));
        assert!(html.contains("Question 3"));
        assert!(html.contains(r#"name="q2""#));
        assert!(html.contains(r#"name="previous_quiz_id""#));
        assert!(!html.contains("Your score is"));
    }

    #[actix_web::test]
    async fn test_submit_renders_score_and_correct_answers() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = generate_request("binary search trees", "3").to_request();
        let resp = test::call_service(&app, req).await;
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let req = test::TestRequest::post()
            .uri(&format!("{}/submit", location))
            .set_form([("q0", "b"), ("q1", "a"), ("q2", "c")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("Quiz Completed"));
        assert!(html.contains("Your score is: 2/3"));
        assert!(html.contains("The correct answer is c"));
    }

    #[actix_web::test]
    async fn test_submit_with_missing_selection_keeps_quiz() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = generate_request("binary search trees", "3").to_request();
        let resp = test::call_service(&app, req).await;
        let location = resp
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let req = test::TestRequest::post()
            .uri(&format!("{}/submit", location))
            .set_form([("q0", "b")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let html = body_text(resp).await;
        assert!(html.contains("Question 2 has no answer selected"));
        assert!(html.contains("Question 3"));
        assert!(!html.contains("Quiz Completed"));
    }

    #[actix_web::test]
    async fn test_unparseable_reply_shows_retry_notice() {
        let state = test_state(model_replying(NO_MARKER_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = generate_request("binary search trees", "3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let html = body_text(resp).await;
        assert!(html.contains("Please generate it again"));
        assert!(html.contains("binary search trees"));
        assert!(!html.contains("Question 1"));
    }

    #[actix_web::test]
    async fn test_backend_failure_shows_notice() {
        let state = test_state(model_failing());
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = generate_request("graphs", "2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert!(body_text(resp).await.contains("temporarily unavailable"));
    }

    #[actix_web::test]
    async fn test_malformed_form_renders_page_with_notice() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::post()
            .uri("/quiz")
            .set_form([("question_count", "3")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "text/html; charset=utf-8"
        );

        let html = body_text(resp).await;
        assert!(html.contains(r#"class="notice""#));
        assert!(html.contains("The submitted form is invalid"));
        assert!(html.contains(r#"action="/quiz""#));
    }

    #[actix_web::test]
    async fn test_unknown_quiz_page_is_not_found() {
        let state = test_state(model_replying(BST_QUIZ_RESPONSE));
        let app =
            test::init_service(App::new().app_data(web::Data::new(state)).configure(configure))
                .await;

        let req = test::TestRequest::get()
            .uri(&format!("/quiz/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains("not found"));
    }
}
