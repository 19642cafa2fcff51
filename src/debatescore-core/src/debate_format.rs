//! Debate format definitions.
//!
//! A format is a plain enum carried through the scoring pipeline. Scoring
//! does not branch on it yet; it is reserved for per-format rule variation.

use serde::{Deserialize, Serialize};

/// Supported parliamentary debate formats.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DebateFormat {
    /// Two-team parliamentary debate (three speakers a side).
    #[default]
    Parliamentary,
    /// Four-team British Parliamentary debate.
    BritishParliamentary,
}

impl DebateFormat {
    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            DebateFormat::Parliamentary => "parliamentary",
            DebateFormat::BritishParliamentary => "british-parliamentary",
        }
    }

    /// Display name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            DebateFormat::Parliamentary => "Parliamentary Debate",
            DebateFormat::BritishParliamentary => "British Parliamentary Debate",
        }
    }

    /// Speaking roles expected in this format, in speaking order.
    pub fn roles(&self) -> Vec<&'static str> {
        match self {
            DebateFormat::Parliamentary => vec![
                "Prime Minister",
                "Leader of Opposition",
                "Deputy Prime Minister",
                "Deputy Leader of Opposition",
                "Government Whip",
                "Opposition Whip",
            ],
            DebateFormat::BritishParliamentary => vec![
                "Prime Minister",
                "Leader of Opposition",
                "Deputy Prime Minister",
                "Deputy Leader of Opposition",
                "Member of Government",
                "Member of Opposition",
                "Government Whip",
                "Opposition Whip",
            ],
        }
    }
}

/// Get a debate format by name.
pub fn get_format(name: &str) -> Option<DebateFormat> {
    match name.to_lowercase().as_str() {
        "parliamentary" => Some(DebateFormat::Parliamentary),
        "bp" | "british-parliamentary" | "british_parliamentary" => {
            Some(DebateFormat::BritishParliamentary)
        }
        _ => None,
    }
}

/// List all available debate format names.
pub fn available_formats() -> Vec<&'static str> {
    vec!["parliamentary", "british-parliamentary"]
}

/// Infer the bench for a role label.
///
/// Four-team BP benches (Opening/Closing Government/Opposition) collapse to
/// the two side labels the clash counter filters on, so closing-half
/// speeches tagged with long-form bench labels are undercounted there.
pub fn side_for_role(role: &str) -> &'static str {
    if role.contains("Opposition") {
        "Opposition"
    } else {
        "Government"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parliamentary_roles() {
        let roles = DebateFormat::Parliamentary.roles();
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0], "Prime Minister");
        assert_eq!(roles[1], "Leader of Opposition");
        assert_eq!(roles[5], "Opposition Whip");
    }

    #[test]
    fn test_bp_roles() {
        let roles = DebateFormat::BritishParliamentary.roles();
        assert_eq!(roles.len(), 8);
        assert_eq!(roles[4], "Member of Government");
    }

    #[test]
    fn test_get_format_known() {
        assert_eq!(get_format("parliamentary"), Some(DebateFormat::Parliamentary));
        assert_eq!(get_format("BP"), Some(DebateFormat::BritishParliamentary));
    }

    #[test]
    fn test_get_format_unknown() {
        assert!(get_format("oxford").is_none());
    }

    #[test]
    fn test_side_for_role() {
        assert_eq!(side_for_role("Prime Minister"), "Government");
        assert_eq!(side_for_role("Leader of Opposition"), "Opposition");
        assert_eq!(side_for_role("Opposition Whip"), "Opposition");
        assert_eq!(side_for_role("Government Whip"), "Government");
    }
}
