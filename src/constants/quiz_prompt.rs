pub const NUM_QUESTIONS_PLACEHOLDER: &str = "{num_questions}";
pub const QUIZ_CONTEXT_PLACEHOLDER: &str = "{quiz_context}";

/// Marker separating the question list from the answer key in a model reply.
pub const ANSWERS_MARKER: &str = "Answers:";
pub const QUESTIONS_HEADING: &str = "Questions:";

pub const QUIZ_PROMPT_TEMPLATE: &str = "
You are an expert quiz maker for technical fields. Let's think step by step and
create a multiple choice quiz questions with {num_questions} questions about the following concept/content: {quiz_context}.

The format of the quiz as the following:
 Questions:
    <Question1>: 
    <a. Answer 1>, <b. Answer 2>, <c. Answer 3>, <d. Answer 4>
    
    <Question2>: 
    <a. Answer 1>, <b. Answer 2>, <c. Answer 3>, <d. Answer 4>
    ....
 Answers:
    <Answer1>: <a|b|c|d>
    <Answer2>: <a|b|c|d>
    ....
    Example:
    Questions:
    1. What is the time complexity of a binary search tree?
        a. O(n)
        b. O(log n)
        c. O(n^2)
        d. O(1)
    Answers: 
        1. b

";
