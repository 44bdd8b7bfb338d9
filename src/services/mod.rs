pub mod model_service;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod quiz_parser;
pub mod quiz_service;
