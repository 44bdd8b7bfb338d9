#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Choice;

    /// A well-formed three question reply in the format the prompt asks for.
    pub const BST_QUIZ_RESPONSE: &str = "Questions:
1. What is the time complexity of searching a balanced binary search tree?
    a. O(n)
    b. O(log n)
    c. O(n^2)
    d. O(1)

2. Which property holds for every node of a binary search tree?
    a. Left subtree keys are greater than the node key
    b. Both subtrees have equal height
    c. Left subtree keys are smaller than the node key
    d. The node has exactly two children

3. Which traversal visits the keys of a binary search tree in sorted order?
    a. Pre-order
    b. Post-order
    c. In-order
    d. Level-order

Answers:
    1. b
    2. c
    3. c
";

    pub const BST_QUIZ_ANSWERS: [Choice; 3] = [Choice::B, Choice::C, Choice::C];

    pub const BST_WRONG_ANSWERS: [Choice; 3] = [Choice::A, Choice::A, Choice::A];

    /// A well-formed reply with `count` questions whose answers are all `a`.
    pub fn numbered_quiz_response(count: usize) -> String {
        let questions: Vec<String> = (1..=count)
            .map(|n| {
                format!(
                    "{}. Question number {}?\n    a. yes\n    b. no\n    c. maybe\n    d. never",
                    n, n
                )
            })
            .collect();
        let answers: Vec<String> = (1..=count).map(|n| format!("{}. a", n)).collect();
        format!(
            "Questions:\n{}\n\nAnswers:\n{}\n",
            questions.join("\n\n"),
            answers.join("\n")
        )
    }

    pub const NO_MARKER_RESPONSE: &str =
        "I'm sorry, but I can only produce quizzes about technical topics.";
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::AppError,
        services::model_service::{MockQuizModel, QuizModel},
    };

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// A model mock that always answers with `reply`.
    pub fn model_replying(reply: &'static str) -> MockQuizModel {
        let mut model = MockQuizModel::new();
        model
            .expect_complete()
            .returning(move |_| Ok(reply.to_string()));
        model
    }

    /// A model mock whose every call fails like an unreachable backend.
    pub fn model_failing() -> MockQuizModel {
        let mut model = MockQuizModel::new();
        model.expect_complete().returning(|_| {
            Err(AppError::ModelBackendError(
                "connection refused".to_string(),
            ))
        });
        model
    }

    pub fn test_state(model: impl QuizModel + 'static) -> AppState {
        AppState::with_model(Config::test_config(), Arc::new(model))
            .expect("test state should build")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_has_three_questions() {
        assert_eq!(BST_QUIZ_RESPONSE.matches("?\n").count(), 3);
        assert_eq!(BST_QUIZ_ANSWERS.len(), 3);
    }

    #[test]
    fn test_no_marker_fixture_lacks_marker() {
        assert!(!NO_MARKER_RESPONSE.contains("Answers:"));
    }
}
