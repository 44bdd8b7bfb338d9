use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::{Choice, QuestionBlock};

/// Questions and answer key recovered from one model reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedQuiz {
    pub questions: Vec<QuestionBlock>,
    pub answer_key: Vec<Choice>,
}

impl ParsedQuiz {
    pub fn new(questions: Vec<String>, answer_key: Vec<Choice>) -> Self {
        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(i, text)| QuestionBlock::new(i as u32 + 1, text))
            .collect();

        Self {
            questions,
            answer_key,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
