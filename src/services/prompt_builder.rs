use crate::constants::quiz_prompt::{
    NUM_QUESTIONS_PLACEHOLDER, QUIZ_CONTEXT_PLACEHOLDER, QUIZ_PROMPT_TEMPLATE,
};

/// Fills the quiz instruction template with the question count and topic.
///
/// The count is substituted first so that a topic containing a literal
/// placeholder is passed through verbatim.
pub fn build_quiz_prompt(num_questions: u8, quiz_context: &str) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace(NUM_QUESTIONS_PLACEHOLDER, &num_questions.to_string())
        .replace(QUIZ_CONTEXT_PLACEHOLDER, quiz_context)
}
