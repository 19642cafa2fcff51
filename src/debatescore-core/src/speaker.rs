//! Per-speaker rubric evaluation.
//!
//! Converts one role/side's speech (if any) and its extracted features into
//! a four-component rubric score: Matter, Manner, Method, Role Fulfilment.
//! Every sub-score is a simple additive function of independent features,
//! so each contributing flag can be unit tested in isolation.

use serde::{Deserialize, Serialize};

use crate::debate_format::DebateFormat;
use crate::features::extract_features;
use crate::speech::{RoundContext, Speaker, Speech};

/// Scoring result for one role/side pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerEvaluation {
    pub role: String,
    pub side: String,
    pub speaker: Speaker,
    /// Content quality (0-100).
    pub matter: u32,
    /// Delivery style (0-100).
    pub manner: u32,
    /// Structural strategy (0-100).
    pub method: u32,
    /// Adherence to the role's expected function (0-100).
    pub role_fulfillment: u32,
    /// Rounded arithmetic mean of the four sub-scores.
    pub total_score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: String,
}

/// Fixed evaluation returned when no speech exists for a role/side pair,
/// e.g. when the round ended early.
fn default_evaluation(role: &str, side: &str, speaker: Speaker) -> SpeakerEvaluation {
    SpeakerEvaluation {
        role: role.to_string(),
        side: side.to_string(),
        speaker,
        matter: 75,
        manner: 75,
        method: 75,
        role_fulfillment: 75,
        total_score: 75,
        strengths: vec![
            "Clear delivery".to_string(),
            "Confident tone".to_string(),
            "Respectful engagement".to_string(),
        ],
        improvements: vec![
            "Support claims with research, data, or examples".to_string(),
            "Signpost arguments more clearly".to_string(),
            "Engage directly with the opposing case".to_string(),
        ],
        feedback: format!(
            "No speech was recorded for {role}, so a baseline assessment was applied."
        ),
    }
}

/// Evaluate the first speech matching the given role and side.
///
/// Returns the fixed default evaluation when no matching speech exists.
/// `format` is accepted for future per-format rule variation and does not
/// branch behaviour yet.
pub fn evaluate_speaker(
    speeches: &[Speech],
    role: &str,
    side: &str,
    _format: DebateFormat,
    ctx: &RoundContext,
) -> SpeakerEvaluation {
    let speaker = ctx.speaker_for_role(role);

    let Some(speech) = speeches.iter().find(|s| s.role == role && s.side == side) else {
        return default_evaluation(role, side, speaker);
    };

    let features = extract_features(Some(speech.text()));

    let matter = 70
        + if features.has_evidence { 20 } else { 0 }
        + if features.has_rebuttal { 10 } else { 0 };
    let manner = 75
        + if features.length > 500 { 15 } else { 0 }
        + if features.has_structure { 10 } else { 0 };
    let method = 75
        + if features.has_structure { 15 } else { 0 }
        + if features.has_rebuttal { 10 } else { 0 };
    // Opening-speaker roles carry extra positional weight. Case-sensitive
    // on the role label.
    let role_fulfillment = 80
        + if role.contains("Prime") || role.contains("Leader") {
            10
        } else {
            0
        };

    let total_score =
        ((matter + manner + method + role_fulfillment) as f64 / 4.0).round() as u32;

    let strengths = vec![
        if features.has_evidence {
            "Strong use of evidence and examples".to_string()
        } else {
            "Clear argument presentation".to_string()
        },
        if features.has_structure {
            "Well-structured speech with clear signposting".to_string()
        } else {
            "Confident delivery".to_string()
        },
        if features.has_rebuttal {
            "Direct engagement with the opposing case".to_string()
        } else {
            "Consistent advocacy for your side".to_string()
        },
    ];

    let improvements = vec![
        if !features.has_evidence {
            "Support claims with research, data, or examples".to_string()
        } else {
            "Deepen analysis of your existing evidence".to_string()
        },
        if !features.has_structure {
            "Signpost arguments more clearly (first, second, finally)".to_string()
        } else {
            "Tighten transitions between points".to_string()
        },
        if !features.has_rebuttal {
            "Engage directly with the opposing case".to_string()
        } else {
            "Anticipate how the other bench will answer your rebuttal".to_string()
        },
    ];

    let feedback = match (features.has_evidence, features.has_rebuttal) {
        (true, true) => format!(
            "A convincing {role} speech that marshals evidence and meets the opposing case head-on."
        ),
        (true, false) => format!(
            "A well-supported {role} speech; engaging the opposition's case directly would lift it further."
        ),
        (false, true) => format!(
            "A combative {role} speech; grounding your claims in evidence would make the rebuttal land harder."
        ),
        (false, false) => format!(
            "A reasonable {role} speech; add supporting evidence and direct rebuttal to strengthen it."
        ),
    };

    SpeakerEvaluation {
        role: role.to_string(),
        side: side.to_string(),
        speaker,
        matter,
        manner,
        method,
        role_fulfillment,
        total_score,
        strengths,
        improvements,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RoundContext {
        RoundContext::new("This House would ban targeted advertising")
    }

    #[test]
    fn test_missing_speech_returns_fixed_default() {
        let eval = evaluate_speaker(
            &[],
            "Leader of Opposition",
            "Opposition",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(eval.matter, 75);
        assert_eq!(eval.manner, 75);
        assert_eq!(eval.method, 75);
        assert_eq!(eval.role_fulfillment, 75);
        assert_eq!(eval.total_score, 75);
        assert_eq!(eval.strengths.len(), 3);
        assert_eq!(eval.improvements.len(), 3);
        assert_eq!(eval.strengths[0], "Clear delivery");
    }

    #[test]
    fn test_worked_prime_minister_example() {
        let speeches = vec![Speech::new(
            "Prime Minister",
            "Government",
            "First, our research shows...",
        )];
        let eval = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(eval.matter, 90);
        assert_eq!(eval.manner, 85);
        assert_eq!(eval.method, 90);
        assert_eq!(eval.role_fulfillment, 90);
        assert_eq!(eval.total_score, 89);
    }

    #[test]
    fn test_total_score_bounds_across_all_flag_combinations() {
        let cases: &[(&str, bool)] = &[
            ("", false),
            ("our data and research back this", false),
            ("however, they claim otherwise", false),
            ("first and second and therefore", false),
            ("first, the data shows; however they claim otherwise", true),
        ];
        for (text, long) in cases {
            let mut body = text.to_string();
            if *long {
                body.push_str(&"x".repeat(600));
            }
            let speeches = vec![Speech::new("Government Whip", "Government", body)];
            let eval = evaluate_speaker(
                &speeches,
                "Government Whip",
                "Government",
                DebateFormat::Parliamentary,
                &ctx(),
            );
            assert!((70..=100).contains(&eval.total_score), "total {}", eval.total_score);
            assert!((70..=100).contains(&eval.matter));
            assert!((75..=100).contains(&eval.manner));
            assert!((75..=100).contains(&eval.method));
        }
    }

    #[test]
    fn test_role_fulfillment_bonus_for_opening_roles() {
        let speeches = vec![
            Speech::new("Prime Minister", "Government", "case"),
            Speech::new("Government Whip", "Government", "summary"),
        ];
        let pm = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        let whip = evaluate_speaker(
            &speeches,
            "Government Whip",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(pm.role_fulfillment, 90);
        assert_eq!(whip.role_fulfillment, 80);
    }

    #[test]
    fn test_long_speech_manner_bonus() {
        let speeches = vec![Speech::new("Prime Minister", "Government", "y".repeat(501))];
        let eval = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(eval.manner, 90);
    }

    #[test]
    fn test_speaker_sentinel_tagging() {
        let speeches = vec![Speech::new("Prime Minister", "Government", "case")];
        let context = ctx().with_user_role("Prime Minister");
        let eval = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &context,
        );
        assert_eq!(eval.speaker, Speaker::User);
    }

    #[test]
    fn test_side_must_match_as_well_as_role() {
        // Same role label on the wrong bench must not match.
        let speeches = vec![Speech::new("Prime Minister", "Opposition", "misfiled")];
        let eval = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(eval.total_score, 75);
    }

    #[test]
    fn test_improvements_mirror_missing_flags() {
        let speeches = vec![Speech::new("Prime Minister", "Government", "plain assertion")];
        let eval = evaluate_speaker(
            &speeches,
            "Prime Minister",
            "Government",
            DebateFormat::Parliamentary,
            &ctx(),
        );
        assert_eq!(
            eval.improvements[0],
            "Support claims with research, data, or examples"
        );
        assert!(eval.feedback.contains("Prime Minister"));
    }
}
