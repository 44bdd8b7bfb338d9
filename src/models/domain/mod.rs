pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod quiz_session;

pub use quiz::ParsedQuiz;
pub use quiz_attempt::{QuestionResult, QuizAttempt, QuizScore};
pub use quiz_question::{Choice, QuestionBlock};
pub use quiz_session::{QuizSession, ViewState};
