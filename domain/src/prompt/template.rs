//! Prompt templates for answer evaluation

use crate::interview::catalog::InterviewDomain;

/// Templates for generating evaluation prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Role the model plays for every evaluation
    pub fn coach_role() -> &'static str {
        "You are an AI interview coach. Provide a detailed evaluation for the candidate's answer."
    }

    /// Sections the evaluation must contain, in order
    pub fn evaluation_sections() -> &'static [&'static str] {
        &[
            "Summary",
            "Strengths",
            "Areas of Improvement",
            "Score out of 10 with reasoning",
            "An improved version of the answer",
        ]
    }

    /// Full evaluation request for one answer.
    ///
    /// The answer is embedded verbatim between double quotes.
    pub fn evaluation_prompt(domain: InterviewDomain, question: &str, answer: &str) -> String {
        let mut prompt = format!("{}\n\nInclude:\n", Self::coach_role());

        for (i, section) in Self::evaluation_sections().iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", i + 1, section));
        }

        prompt.push_str(&format!(
            r#"
Interview Domain: {}
Interview Question: {}
Candidate's Answer: "{}"
"#,
            domain.name(),
            question,
            answer
        ));

        prompt
    }
}
