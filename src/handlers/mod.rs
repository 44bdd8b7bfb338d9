pub mod graphql_handler;
pub mod health_handler;
pub mod page_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::health_check;
pub use page_handler::{generate_quiz_page, index, show_quiz_page, submit_quiz_page};
pub use quiz_handler::{create_quiz, discard_quiz, get_quiz, submit_quiz};

/// Registers every route. The GraphQL pair expects a `Schema` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(web::FormConfig::default().error_handler(page_handler::form_error_handler))
    .service(health_check)
    .service(graphql)
    .service(graphiql)
    .service(index)
    .service(generate_quiz_page)
    .service(show_quiz_page)
    .service(submit_quiz_page)
    .service(create_quiz)
    .service(get_quiz)
    .service(submit_quiz)
    .service(discard_quiz);
}
