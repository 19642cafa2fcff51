//! Configuration module for loading TOML config files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::debate_format::DebateFormat;
use crate::error::ScoreError;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub formats: FormatsConfig,
    pub prompts: PromptsConfig,
}

/// Role lists for all supported formats.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatsConfig {
    pub parliamentary: FormatConfig,
    pub british_parliamentary: FormatConfig,
}

/// Configuration for one debate format.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    pub name: String,
    pub display_name: String,
    /// Expected speaking roles, in speaking order.
    pub roles: Vec<String>,
}

/// Adjudication prompt configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    pub adjudicator_template: String,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoreError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ScoreError::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ScoreError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from string content.
    pub fn from_str(content: &str) -> Result<Self, ScoreError> {
        toml::from_str(content)
            .map_err(|e| ScoreError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Expected roles for a format.
    pub fn roles_for(&self, format: DebateFormat) -> &[String] {
        match format {
            DebateFormat::Parliamentary => &self.formats.parliamentary.roles,
            DebateFormat::BritishParliamentary => &self.formats.british_parliamentary.roles,
        }
    }

    /// Build the adjudication prompt, with placeholders replaced.
    pub fn adjudication_prompt(&self, motion: &str, transcript: &str) -> String {
        self.prompts
            .adjudicator_template
            .replace("{motion}", motion)
            .replace("{transcript}", transcript)
    }
}

/// Default configuration embedded in the binary.
pub fn default_config() -> Config {
    Config {
        formats: FormatsConfig {
            parliamentary: FormatConfig {
                name: "parliamentary".to_string(),
                display_name: "Parliamentary Debate".to_string(),
                roles: DebateFormat::Parliamentary
                    .roles()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            british_parliamentary: FormatConfig {
                name: "british-parliamentary".to_string(),
                display_name: "British Parliamentary Debate".to_string(),
                roles: DebateFormat::BritishParliamentary
                    .roles()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
        },
        prompts: PromptsConfig {
            adjudicator_template: DEFAULT_ADJUDICATOR_TEMPLATE.to_string(),
        },
    }
}

const DEFAULT_ADJUDICATOR_TEMPLATE: &str = r#"Adjudicate the following parliamentary debate.

MOTION: {motion}

TRANSCRIPT:
{transcript}

Reply with a single JSON object containing:
- "winner": "Government" or "Opposition"
- "margin": "clear", "close", or "unanimous"
- "governmentScore" and "oppositionScore": integers from 0 to 100
- "overallFeedback": one or two sentences for the speakers

Output ONLY the JSON object, with no commentary or markdown fences.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roles() {
        let config = default_config();
        assert_eq!(config.roles_for(DebateFormat::Parliamentary).len(), 6);
        assert_eq!(
            config.roles_for(DebateFormat::BritishParliamentary).len(),
            8
        );
    }

    #[test]
    fn test_adjudication_prompt_substitution() {
        let config = default_config();
        let prompt = config.adjudication_prompt("This House would X", "[Government — PM]\n...");
        assert!(prompt.contains("MOTION: This House would X"));
        assert!(prompt.contains("[Government — PM]"));
        assert!(!prompt.contains("{motion}"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_from_str_parses_custom_roles() {
        let toml = r#"
[formats.parliamentary]
name = "parliamentary"
display_name = "Parliamentary Debate"
roles = ["Prime Minister", "Leader of Opposition"]

[formats.british_parliamentary]
name = "british-parliamentary"
display_name = "British Parliamentary Debate"
roles = ["Prime Minister"]

[prompts]
adjudicator_template = "Judge {motion}: {transcript}"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.roles_for(DebateFormat::Parliamentary).len(), 2);
        assert_eq!(
            config.adjudication_prompt("M", "T"),
            "Judge M: T"
        );
    }

    #[test]
    fn test_from_str_rejects_invalid_toml() {
        assert!(Config::from_str("not toml [").is_err());
    }
}
