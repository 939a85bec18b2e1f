//! Answer value objects

use serde::{Deserialize, Serialize};

/// A candidate's answer to one question (Value Object)
///
/// Always non-empty after trimming. The original text is kept verbatim,
/// including surrounding whitespace, because it is quoted back to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    content: String,
}

impl Answer {
    /// Try to create an answer, returning None if it is empty or only whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the answer content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// An answered question together with its evaluation (Entity)
///
/// Immutable once created; the session only ever appends records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    question: String,
    answer: String,
    evaluation: String,
}

impl AnswerRecord {
    pub fn new(question: impl Into<String>, answer: Answer, evaluation: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into_content(),
            evaluation: evaluation.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn evaluation(&self) -> &str {
        &self.evaluation
    }
}
