//! Interview domain.
//!
//! - [`catalog::InterviewDomain`]: the fixed interview tracks and their questions
//! - [`answer::AnswerRecord`]: an answered question with its evaluation
//! - [`session::InterviewSession`]: the session state machine
//! - [`view::SessionView`]: read-only projection of a session for display

pub mod answer;
pub mod catalog;
pub mod session;
pub mod view;
