//! Model value object representing the evaluating LLM

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models that can evaluate interview answers (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15ProLatest,
    Gemini15FlashLatest,
    Gemini20Flash,
    Gemini25Pro,
    /// Any other model id accepted by the provider
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15ProLatest => "gemini-1.5-pro-latest",
            Model::Gemini15FlashLatest => "gemini-1.5-flash-latest",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// Path segment used by the Generative Language API (`models/<id>`)
    pub fn resource_name(&self) -> String {
        let id = self.as_str();
        if id.starts_with("models/") {
            id.to_string()
        } else {
            format!("models/{}", id)
        }
    }

    /// Known models, in the order they are offered to the user
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini15ProLatest,
            Model::Gemini15FlashLatest,
            Model::Gemini20Flash,
            Model::Gemini25Pro,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 1.5 Pro)
    fn default() -> Self {
        Model::Gemini15ProLatest
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let id = s.strip_prefix("models/").unwrap_or(s);
        Ok(match id {
            "" => return Err(DomainError::InvalidModel(s.to_string())),
            "gemini-1.5-pro-latest" => Model::Gemini15ProLatest,
            "gemini-1.5-flash-latest" => Model::Gemini15FlashLatest,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
