use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::quiz_prompt::{ANSWERS_MARKER, QUESTIONS_HEADING},
    errors::{AppError, AppResult},
    models::{
        domain::{Choice, ParsedQuiz},
        dto::request::MAX_QUESTION_COUNT,
    },
};

fn is_markup(c: char) -> bool {
    matches!(c, '*' | '#' | '_')
}

/// Lines made only of markup such as `**` carry no content.
fn has_content(entry: &str) -> bool {
    entry.chars().any(char::is_alphanumeric)
}

static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n[ \t]*\r?\n").expect("BLANK_LINE_REGEX is a valid regex pattern")
});

// Either numbered ("1. b", "Answer 1: b", "<Answer1>: (b)") or a line holding only the letter.
static ANSWER_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[^\s\d]*\s*\d+>?\s*[.:)\-]\s*[(\[*_]*([a-dA-D])(?:$|[^A-Za-z0-9])|[(\[*_]*([a-dA-D])[)\].*_]*$)",
    )
    .expect("ANSWER_LINE_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuizOutcome {
    pub quiz: ParsedQuiz,
    pub warnings: Vec<String>,
}

/// Splits a model reply at the first `Answers:` marker.
pub fn split_questions_answers(quiz_response: &str) -> AppResult<(&str, &str)> {
    quiz_response.split_once(ANSWERS_MARKER).ok_or_else(|| {
        AppError::QuizParseError(format!(
            "the model reply does not contain an '{}' section",
            ANSWERS_MARKER
        ))
    })
}

/// Turns the two segments into question blocks and answer lines, dropping
/// entries that are empty or pure markup.
pub fn convert_to_lists(questions: &str, answers: &str) -> (Vec<String>, Vec<String>) {
    let questions = questions.trim_start();
    let questions = questions
        .trim_start_matches(is_markup)
        .strip_prefix(QUESTIONS_HEADING)
        .map(|rest| rest.trim_start_matches(is_markup))
        .unwrap_or(questions);

    let questions_list = BLANK_LINE_REGEX
        .split(questions)
        .map(str::trim)
        .filter(|block| has_content(block))
        .map(str::to_string)
        .collect();

    let answers_list = answers
        .lines()
        .map(str::trim)
        .filter(|line| has_content(line))
        .map(str::to_string)
        .collect();

    (questions_list, answers_list)
}

/// Reads the choice letter out of one answer line such as `1. b`.
pub fn parse_answer_line(line: &str) -> Option<Choice> {
    ANSWER_LINE_REGEX
        .captures(line.trim())
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|m| m.as_str().chars().next())
        .and_then(Choice::from_letter)
}

pub fn extract_answer_key(answer_lines: &[String]) -> AppResult<Vec<Choice>> {
    answer_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            parse_answer_line(line).ok_or_else(|| {
                AppError::QuizParseError(format!(
                    "answer line {} ('{}') does not name a choice a-d",
                    i + 1,
                    line
                ))
            })
        })
        .collect()
}

/// Parses a full model reply and checks the question and answer counts.
///
/// Questions and answers must pair up one to one and stay within
/// `MAX_QUESTION_COUNT`. A quiz whose size differs from the requested count is
/// still usable and comes back with a warning.
pub fn parse_quiz(quiz_response: &str, requested_count: u8) -> AppResult<ParsedQuizOutcome> {
    let (questions, answers) = split_questions_answers(quiz_response)?;
    let (questions_list, answers_list) = convert_to_lists(questions, answers);

    if questions_list.is_empty() {
        return Err(AppError::QuizParseError(
            "the model reply contains no questions".to_string(),
        ));
    }

    let answer_key = extract_answer_key(&answers_list)?;

    if questions_list.len() != answer_key.len() {
        return Err(AppError::QuizParseError(format!(
            "the model returned {} questions but {} answers",
            questions_list.len(),
            answer_key.len()
        )));
    }

    if questions_list.len() > MAX_QUESTION_COUNT as usize {
        return Err(AppError::QuizParseError(format!(
            "the model returned {} questions, more than the maximum of {}",
            questions_list.len(),
            MAX_QUESTION_COUNT
        )));
    }

    let mut warnings = Vec::new();
    if questions_list.len() != requested_count as usize {
        let warning = format!(
            "Requested {} questions but the model produced {}; the quiz is scored out of {}.",
            requested_count,
            questions_list.len(),
            questions_list.len()
        );
        log::warn!("{}", warning);
        warnings.push(warning);
    }

    Ok(ParsedQuizOutcome {
        quiz: ParsedQuiz::new(questions_list, answer_key),
        warnings,
    })
}
