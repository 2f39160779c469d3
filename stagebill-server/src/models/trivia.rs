//! Validated trivia input

use super::ValidationError;

macro_rules! non_empty_text {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: &str) -> Result<Self, ValidationError> {
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: $field });
                }
                Ok(Self(s.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

non_empty_text!(
    /// Question text; duplicates are rejected by the database
    QuestionText,
    "question"
);
non_empty_text!(
    /// Answer text
    AnswerText,
    "answer"
);
non_empty_text!(
    /// Category name; duplicates are rejected by the database
    CategoryName,
    "category"
);

/// A question ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

impl NewQuestion {
    /// Build from optional request fields.
    ///
    /// Empty text is `Empty`; absent text is `Missing`.
    pub fn new(
        question: Option<&str>,
        answer: Option<&str>,
        difficulty: Option<i32>,
        category: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let question = QuestionText::new(question.ok_or(ValidationError::Missing { field: "question" })?)?;
        let answer = AnswerText::new(answer.ok_or(ValidationError::Missing { field: "answer" })?)?;

        Ok(Self {
            question,
            answer,
            difficulty,
            category,
        })
    }
}
