use handlebars::Handlebars;
use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Choice, QuizSession},
        dto::request::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT},
    },
};

const QUIZ_PAGE: &str = "quiz_page";

#[derive(Debug, Serialize)]
pub struct NoticeView {
    pub message: String,
    pub retryable: bool,
}

impl From<&AppError> for NoticeView {
    fn from(err: &AppError) -> Self {
        NoticeView {
            message: err.user_message(),
            retryable: err.is_retryable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChoiceView {
    pub field: String,
    pub letter: &'static str,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub number: u32,
    pub text: String,
    pub choices: Vec<ChoiceView>,
    pub revealed: bool,
    pub is_correct: bool,
    pub correct_answer: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct QuizView {
    pub id: String,
    pub questions: Vec<QuestionView>,
    pub warnings: Vec<String>,
    pub submitted: bool,
    pub score: Option<String>,
}

impl From<&QuizSession> for QuizView {
    fn from(session: &QuizSession) -> Self {
        let attempt = session.attempt.as_ref();

        let questions = session
            .quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let selected = attempt.and_then(|a| a.answers.get(i).copied());
                let result = attempt.and_then(|a| a.results.get(i));

                QuestionView {
                    number: question.number,
                    text: question.text.clone(),
                    choices: Choice::ALL
                        .iter()
                        .map(|choice| ChoiceView {
                            field: format!("q{}", i),
                            letter: choice.as_str(),
                            checked: selected == Some(*choice),
                        })
                        .collect(),
                    revealed: result.is_some(),
                    is_correct: result.is_some_and(|r| r.is_correct),
                    correct_answer: result.map(|r| r.correct_answer.as_str()),
                }
            })
            .collect();

        QuizView {
            id: session.id.to_string(),
            questions,
            warnings: session.warnings.clone(),
            submitted: session.view_state.quiz_submitted,
            score: attempt.map(|a| a.score.to_string()),
        }
    }
}

/// Everything the quiz page template reads.
#[derive(Debug, Serialize)]
pub struct QuizPageView {
    pub notice: Option<NoticeView>,
    pub topic: String,
    pub question_count: u8,
    pub min_questions: u8,
    pub max_questions: u8,
    pub quiz: Option<QuizView>,
}

impl Default for QuizPageView {
    fn default() -> Self {
        Self::start("", DEFAULT_QUESTION_COUNT)
    }
}

impl QuizPageView {
    pub fn start(topic: &str, question_count: u8) -> Self {
        QuizPageView {
            notice: None,
            topic: topic.to_string(),
            question_count: question_count.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT),
            min_questions: MIN_QUESTION_COUNT,
            max_questions: MAX_QUESTION_COUNT,
            quiz: None,
        }
    }

    pub fn for_session(session: &QuizSession) -> Self {
        QuizPageView {
            quiz: Some(QuizView::from(session)),
            ..Self::start(&session.topic, session.requested_question_count)
        }
    }

    pub fn with_notice(mut self, err: &AppError) -> Self {
        self.notice = Some(NoticeView::from(err));
        self
    }
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> AppResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_template_string(
            QUIZ_PAGE,
            include_str!("../templates/quiz_page.hbs"),
        )?;
        Ok(Self { handlebars })
    }

    pub fn render_quiz_page(&self, view: &QuizPageView) -> AppResult<String> {
        Ok(self.handlebars.render(QUIZ_PAGE, view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{ParsedQuiz, QuizSession},
        services::quiz_attempt_service::QuizAttemptService,
        test_utils::fixtures::{BST_QUIZ_ANSWERS, BST_WRONG_ANSWERS},
    };

    fn make_session() -> QuizSession {
        QuizSession::new(
            "binary search trees",
            3,
            ParsedQuiz::new(
                vec![
                    "1. Is <root> a node?\n a. yes".to_string(),
                    "2. Second?".to_string(),
                    "3. Third?".to_string(),
                ],
                BST_QUIZ_ANSWERS.to_vec(),
            ),
            Vec::new(),
        )
    }

    #[test]
    fn start_page_has_form_and_default_count() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_quiz_page(&QuizPageView::default()).unwrap();

        assert!(html.contains("AI Powered Quiz Generator"));
        assert!(html.contains(r#"value="5""#));
        assert!(html.contains(r#"min="1""#));
        assert!(html.contains(r#"max="10""#));
        assert!(!html.contains("Question 1"));
    }

    #[test]
    fn quiz_page_escapes_model_text() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_quiz_page(&QuizPageView::for_session(&make_session()))
            .unwrap();

        assert!(html.contains("Question 3"));
        assert!(html.contains("&lt;root&gt;"));
        assert!(!html.contains("<root>"));
        assert!(html.contains(r#"name="q2""#));
        assert!(!html.contains("Quiz Completed"));
    }

    #[test]
    fn submitted_page_shows_score_and_answers() {
        let mut session = make_session();
        let attempt = QuizAttemptService::grade_attempt(&session.quiz, &BST_WRONG_ANSWERS).unwrap();
        session.record_attempt(attempt);

        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render_quiz_page(&QuizPageView::for_session(&session))
            .unwrap();

        assert!(html.contains("Quiz Completed"));
        assert!(html.contains("Your score is: 0/3"));
        assert!(html.contains("The correct answer is b"));
        assert!(html.contains(r#"value="a" checked"#));
    }

    #[test]
    fn notice_uses_user_message() {
        let view = QuizPageView::start("trees", 3)
            .with_notice(&AppError::QuizParseError("no marker".to_string()));

        let notice = view.notice.unwrap();
        assert!(notice.retryable);
        assert!(notice.message.contains("Could not parse"));
    }

    #[test]
    fn start_clamps_question_count() {
        assert_eq!(QuizPageView::start("x", 0).question_count, 1);
        assert_eq!(QuizPageView::start("x", 42).question_count, 10);
    }
}
