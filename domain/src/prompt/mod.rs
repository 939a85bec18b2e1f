//! Prompt domain
//!
//! Templates for the evaluation requests sent to the model.

mod template;

pub use template::PromptTemplate;
