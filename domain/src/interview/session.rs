//! Interview session state machine

use crate::interview::answer::{Answer, AnswerRecord};
use crate::interview::catalog::InterviewDomain;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a session is in the question flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewState {
    /// The current question has not been answered yet
    AwaitingAnswer,
    /// The current question was answered and evaluated
    AwaitingAdvance,
    /// Every question is answered; only the report remains
    Completed,
}

impl InterviewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewState::AwaitingAnswer => "awaiting answer",
            InterviewState::AwaitingAdvance => "awaiting advance",
            InterviewState::Completed => "completed",
        }
    }
}

impl std::fmt::Display for InterviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejected session operations. None of them change the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Please provide an answer before submitting.")]
    EmptyAnswer,

    #[error("Cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: InterviewState,
    },
}

/// One user's progress through an interview domain (Entity)
///
/// Invariants:
/// - `question_index < domain.question_count()`
/// - `answers.len() == question_index` while awaiting an answer,
///   `question_index + 1` otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    domain: InterviewDomain,
    question_index: usize,
    candidate_name: String,
    answers: Vec<AnswerRecord>,
    state: InterviewState,
}

impl InterviewSession {
    /// Start a session at the first question of `domain`
    pub fn new(domain: InterviewDomain) -> Self {
        Self {
            domain,
            question_index: 0,
            candidate_name: String::new(),
            answers: Vec::new(),
            state: InterviewState::AwaitingAnswer,
        }
    }

    pub fn with_candidate_name(mut self, name: impl Into<String>) -> Self {
        self.set_candidate_name(name);
        self
    }

    pub fn domain(&self) -> InterviewDomain {
        self.domain
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn question_count(&self) -> usize {
        self.domain.question_count()
    }

    /// Text of the question the session points at
    pub fn current_question(&self) -> &'static str {
        self.domain.questions()[self.question_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.question_index + 1 >= self.question_count()
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    /// Set the display name used on the report cover. Allowed in every state.
    pub fn set_candidate_name(&mut self, name: impl Into<String>) {
        self.candidate_name = name.into().trim().to_string();
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// The most recently recorded answer, if any
    pub fn last_answer(&self) -> Option<&AnswerRecord> {
        self.answers.last()
    }

    pub fn state(&self) -> InterviewState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == InterviewState::Completed
    }

    /// Check that an answer may be submitted now.
    pub fn ensure_can_submit(&self) -> Result<(), SessionError> {
        match self.state {
            InterviewState::AwaitingAnswer => Ok(()),
            state => Err(SessionError::InvalidTransition {
                action: "submit an answer",
                state,
            }),
        }
    }

    /// Append the evaluated answer for the current question.
    ///
    /// Moves the session to [`InterviewState::AwaitingAdvance`].
    pub fn record_answer(
        &mut self,
        answer: Answer,
        evaluation: impl Into<String>,
    ) -> Result<&AnswerRecord, SessionError> {
        self.ensure_can_submit()?;

        let question = self.current_question();
        self.answers
            .push(AnswerRecord::new(question, answer, evaluation));
        self.state = InterviewState::AwaitingAdvance;

        Ok(&self.answers[self.answers.len() - 1])
    }

    /// Move past an answered question.
    ///
    /// Returns the new state: [`InterviewState::AwaitingAnswer`] on the next
    /// question, or [`InterviewState::Completed`] after the last one.
    pub fn advance(&mut self) -> Result<InterviewState, SessionError> {
        if self.state != InterviewState::AwaitingAdvance {
            return Err(SessionError::InvalidTransition {
                action: "advance",
                state: self.state,
            });
        }

        if self.question_index + 1 < self.question_count() {
            self.question_index += 1;
            self.state = InterviewState::AwaitingAnswer;
        } else {
            self.state = InterviewState::Completed;
        }

        Ok(self.state)
    }

    /// Start over with `domain`: first question, no answers.
    ///
    /// The candidate name survives the restart.
    pub fn restart(&mut self, domain: InterviewDomain) {
        let candidate_name = std::mem::take(&mut self.candidate_name);
        *self = Self::new(domain);
        self.candidate_name = candidate_name;
    }
}
