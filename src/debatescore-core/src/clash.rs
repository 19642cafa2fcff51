//! Clash comparison across the whole transcript.
//!
//! Produces one weighted comparison per canonical clash topic by counting
//! how often each bench names the topic. Topic detection is a literal
//! case-sensitive substring match, a deliberate placeholder for real
//! argument clustering; changing it would change scoring outcomes.

use serde::{Deserialize, Serialize};

use crate::debate_format::DebateFormat;
use crate::speech::Speech;

/// Canonical clash topics, in fixed order. Earlier clashes weigh more.
pub const CLASH_TOPICS: [&str; 5] = [
    "Democratic Integrity",
    "Freedom of Speech",
    "Practical Implementation",
    "Economic Impact",
    "International Precedent",
];

/// A side's argument count saturates its clash score at this many speeches.
const SATURATION_COUNT: usize = 3;

/// Weighted comparison of the two benches on one clash topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashEvaluation {
    /// Stable identifier derived from topic position.
    pub clash_id: String,
    pub topic: String,
    /// Importance in [1, 10]; earlier clashes matter more.
    pub weight: u32,
    /// Government's score for this topic, in [0, 1].
    pub government_score: f64,
    /// Opposition's score for this topic, in [0, 1].
    pub opposition_score: f64,
    pub reasoning: String,
    pub evidence: Vec<String>,
}

fn count_for_side(speeches: &[Speech], side: &str, topic: &str) -> usize {
    // Hardcoded two-side filter; four-team BP bench labels are not
    // matched here (see side_for_role).
    speeches
        .iter()
        .filter(|s| s.side == side && s.text().contains(topic))
        .count()
}

fn saturating_score(count: usize) -> f64 {
    (count as f64 / SATURATION_COUNT as f64).min(1.0)
}

/// Evaluate every canonical clash topic over the full transcript.
///
/// Always returns exactly [`CLASH_TOPICS`]'s length of evaluations, in
/// canonical order, regardless of transcript content. `format` is reserved.
pub fn evaluate_clashes(speeches: &[Speech], _format: DebateFormat) -> Vec<ClashEvaluation> {
    CLASH_TOPICS
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let gov_count = count_for_side(speeches, "Government", topic);
            let opp_count = count_for_side(speeches, "Opposition", topic);

            ClashEvaluation {
                clash_id: format!("clash-{}", i + 1),
                topic: topic.to_string(),
                weight: (8i64 - i as i64).clamp(1, 10) as u32,
                government_score: saturating_score(gov_count),
                opposition_score: saturating_score(opp_count),
                reasoning: format!(
                    "On {topic}, Government raised {gov_count} argument(s) against Opposition's {opp_count}."
                ),
                evidence: vec![
                    format!("{gov_count} gov arguments"),
                    format!("{opp_count} opp arguments"),
                ],
            }
        })
        .collect()
}
