use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Choice, ParsedQuiz, QuestionResult, QuizAttempt, QuizScore};

/// Counts positions where the selection matches the answer key.
///
/// Comparison stops at the shorter of the two sequences.
pub fn score(answer_key: &[Choice], user_answers: &[Choice]) -> usize {
    answer_key
        .iter()
        .zip(user_answers)
        .filter(|(correct, selected)| correct == selected)
        .count()
}

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade one selection per question against the quiz's answer key.
    pub fn grade_attempt(quiz: &ParsedQuiz, submitted_answers: &[Choice]) -> AppResult<QuizAttempt> {
        if submitted_answers.len() != quiz.question_count() {
            return Err(AppError::ValidationError(format!(
                "Expected {} answers but received {}",
                quiz.question_count(),
                submitted_answers.len()
            )));
        }

        let results: Vec<QuestionResult> = quiz
            .questions
            .iter()
            .zip(quiz.answer_key.iter().zip(submitted_answers))
            .map(|(question, (correct, selected))| QuestionResult {
                number: question.number,
                selected: *selected,
                correct_answer: *correct,
                is_correct: correct == selected,
            })
            .collect();

        let correct = score(&quiz.answer_key, submitted_answers);

        Ok(QuizAttempt {
            answers: submitted_answers.to_vec(),
            score: QuizScore {
                correct: correct as u32,
                total: quiz.question_count() as u32,
            },
            results,
            submitted_at: Utc::now(),
        })
    }
}
