//! Lexical feature extraction for a single speech.
//!
//! Deliberately naive: substring presence against fixed vocabularies, so
//! the rest of the scoring pipeline stays deterministic and testable
//! without a language model. Do not upgrade to semantic matching; that
//! would change scoring outcomes.

/// Terms signalling evidentiary support.
const EVIDENCE_TERMS: &[&str] = &[
    "research",
    "study",
    "studies",
    "data",
    "evidence",
    "statistics",
    "according to",
];

/// Terms signalling direct engagement with the opposing side.
const REBUTTAL_TERMS: &[&str] = &[
    "opposition",
    "they claim",
    "they argue",
    "however",
    "my opponent",
    "on the contrary",
];

/// Terms signalling explicit organisational markers.
const STRUCTURE_TERMS: &[&str] = &[
    "first",
    "second",
    "third",
    "finally",
    "therefore",
    "in conclusion",
];

/// Cheap lexical signals extracted from one speech's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechFeatures {
    /// Character count of the text (0 if absent).
    pub length: usize,
    /// Text contains evidentiary language.
    pub has_evidence: bool,
    /// Text engages the opposing side directly.
    pub has_rebuttal: bool,
    /// Text carries explicit structural markers.
    pub has_structure: bool,
}

impl SpeechFeatures {
    /// Features for absent or empty text.
    pub fn empty() -> Self {
        Self {
            length: 0,
            has_evidence: false,
            has_rebuttal: false,
            has_structure: false,
        }
    }
}

/// Extract features from a speech's text. Absent text yields all-false/zero.
pub fn extract_features(text: Option<&str>) -> SpeechFeatures {
    let Some(text) = text else {
        return SpeechFeatures::empty();
    };
    if text.is_empty() {
        return SpeechFeatures::empty();
    }

    let lower = text.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));

    SpeechFeatures {
        length: text.chars().count(),
        has_evidence: contains_any(EVIDENCE_TERMS),
        has_rebuttal: contains_any(REBUTTAL_TERMS),
        has_structure: contains_any(STRUCTURE_TERMS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_yields_empty_features() {
        let features = extract_features(None);
        assert_eq!(features, SpeechFeatures::empty());
    }

    #[test]
    fn test_empty_text_yields_empty_features() {
        let features = extract_features(Some(""));
        assert_eq!(features, SpeechFeatures::empty());
    }

    #[test]
    fn test_evidence_detection_is_case_insensitive() {
        let features = extract_features(Some("Our RESEARCH proves the point."));
        assert!(features.has_evidence);
        assert!(!features.has_rebuttal);
    }

    #[test]
    fn test_rebuttal_detection() {
        let features = extract_features(Some("They claim costs will fall, yet offer no plan."));
        assert!(features.has_rebuttal);
        assert!(!features.has_evidence);
    }

    #[test]
    fn test_structure_detection() {
        let features = extract_features(Some("First, consider the principle at stake."));
        assert!(features.has_structure);
    }

    #[test]
    fn test_length_is_character_count() {
        let features = extract_features(Some("abcde"));
        assert_eq!(features.length, 5);
    }

    #[test]
    fn test_worked_example_flags() {
        // "First, our research shows..." from the arena flow.
        let features = extract_features(Some("First, our research shows..."));
        assert!(features.has_evidence);
        assert!(features.has_structure);
        assert!(!features.has_rebuttal);
    }
}
