//! Read-only projection of a session for rendering.
//!
//! The presentation layer renders a [`SessionView`] after every transition
//! instead of inspecting the session directly.

use crate::interview::catalog::InterviewDomain;
use crate::interview::session::{InterviewSession, InterviewState};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionView {
    /// Show the current question and wait for an answer
    AwaitingAnswer {
        domain: InterviewDomain,
        /// 1-based question number
        number: usize,
        total: usize,
        question: String,
    },
    /// Show the evaluation and offer to move on
    AwaitingAdvance {
        domain: InterviewDomain,
        number: usize,
        total: usize,
        question: String,
        evaluation: String,
        is_last: bool,
    },
    /// Offer the report
    Completed {
        domain: InterviewDomain,
        answered: usize,
    },
}

impl SessionView {
    pub fn project(session: &InterviewSession) -> Self {
        let domain = session.domain();
        let number = session.question_index() + 1;
        let total = session.question_count();
        let question = session.current_question().to_string();

        match session.state() {
            InterviewState::AwaitingAnswer => SessionView::AwaitingAnswer {
                domain,
                number,
                total,
                question,
            },
            InterviewState::AwaitingAdvance => SessionView::AwaitingAdvance {
                domain,
                number,
                total,
                question,
                evaluation: session
                    .last_answer()
                    .map(|r| r.evaluation().to_string())
                    .unwrap_or_default(),
                is_last: session.is_last_question(),
            },
            InterviewState::Completed => SessionView::Completed {
                domain,
                answered: session.answers().len(),
            },
        }
    }

    pub fn domain(&self) -> InterviewDomain {
        match self {
            SessionView::AwaitingAnswer { domain, .. }
            | SessionView::AwaitingAdvance { domain, .. }
            | SessionView::Completed { domain, .. } => *domain,
        }
    }
}
