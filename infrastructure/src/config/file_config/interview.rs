//! Interview defaults from TOML (`[interview]` section)

use coach_domain::{DomainError, InterviewDomain};
use serde::{Deserialize, Serialize};

/// Raw interview configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInterviewConfig {
    /// Domain selected at startup (display name, case-insensitive)
    pub default_domain: Option<String>,
    /// Name printed on the report cover
    pub candidate_name: Option<String>,
}

impl FileInterviewConfig {
    /// Parse `default_domain`; `Ok(None)` when unset.
    pub fn parse_default_domain(&self) -> Result<Option<InterviewDomain>, DomainError> {
        self.default_domain
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_domain() {
        let config = FileInterviewConfig {
            default_domain: Some("software engineering".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.parse_default_domain().unwrap(),
            Some(InterviewDomain::SoftwareEngineering)
        );
    }

    #[test]
    fn test_unset_domain() {
        assert_eq!(FileInterviewConfig::default().parse_default_domain().unwrap(), None);
    }

    #[test]
    fn test_unknown_domain() {
        let config = FileInterviewConfig {
            default_domain: Some("Cooking".to_string()),
            ..Default::default()
        };
        assert!(config.parse_default_domain().is_err());
    }
}
