//! Interview domain catalog
//!
//! The set of interview tracks is closed: each variant owns an ordered,
//! immutable question list.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named interview track with its own fixed question list (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterviewDomain {
    DataScience,
    WebDevelopment,
    HumanResources,
    Marketing,
    SoftwareEngineering,
}

const DATA_SCIENCE: &[&str] = &[
    "Tell me about yourself.",
    "What are your favorite ML algorithms and why?",
    "Explain a data project you've worked on.",
];

const WEB_DEVELOPMENT: &[&str] = &[
    "Tell me about yourself.",
    "What frameworks have you worked with?",
    "How do you optimize a web app's performance?",
];

const HUMAN_RESOURCES: &[&str] = &[
    "Tell me about yourself.",
    "How do you resolve conflicts in a team?",
    "What strategies do you use for employee retention?",
];

const MARKETING: &[&str] = &[
    "Tell me about yourself.",
    "Describe a successful campaign you've worked on.",
    "How do you analyze customer behavior?",
];

const SOFTWARE_ENGINEERING: &[&str] = &[
    "Tell me about yourself.",
    "How do you approach debugging a complex issue?",
    "Describe a time you worked on a team project.",
];

impl InterviewDomain {
    /// All domains, in the order they are offered to the user
    pub const ALL: [InterviewDomain; 5] = [
        InterviewDomain::DataScience,
        InterviewDomain::WebDevelopment,
        InterviewDomain::HumanResources,
        InterviewDomain::Marketing,
        InterviewDomain::SoftwareEngineering,
    ];

    /// Display name of the domain
    pub fn name(&self) -> &'static str {
        match self {
            InterviewDomain::DataScience => "Data Science",
            InterviewDomain::WebDevelopment => "Web Development",
            InterviewDomain::HumanResources => "Human Resources",
            InterviewDomain::Marketing => "Marketing",
            InterviewDomain::SoftwareEngineering => "Software Engineering",
        }
    }

    /// Ordered questions for this domain
    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            InterviewDomain::DataScience => DATA_SCIENCE,
            InterviewDomain::WebDevelopment => WEB_DEVELOPMENT,
            InterviewDomain::HumanResources => HUMAN_RESOURCES,
            InterviewDomain::Marketing => MARKETING,
            InterviewDomain::SoftwareEngineering => SOFTWARE_ENGINEERING,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Check that every domain has at least one question.
    ///
    /// Called once at startup; the session state machine relies on it.
    pub fn validate_catalog() -> Result<(), DomainError> {
        for domain in Self::ALL {
            if domain.questions().is_empty() {
                return Err(DomainError::EmptyDomain(domain.name().to_string()));
            }
        }
        Ok(())
    }
}

impl Default for InterviewDomain {
    fn default() -> Self {
        InterviewDomain::DataScience
    }
}

impl std::fmt::Display for InterviewDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for InterviewDomain {
    type Err = DomainError;

    /// Accepts the display name case-insensitively, with `_`, `-` or spaces
    /// between words (`"web development"`, `"Web_Development"`, `"web-development"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|d| normalize(d.name()) == wanted)
            .ok_or_else(|| DomainError::UnknownDomain(s.trim().to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Serialize for InterviewDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for InterviewDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
