//! Aggregate verdict construction.
//!
//! Combines speaker and clash evaluations into one [`DebateResult`],
//! preferring fields from an external adjudication payload when present
//! and falling back to the local heuristic model otherwise. External
//! payload shapes are not contractually fixed, so every field read goes
//! through an explicit multi-path resolver with a local default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::clash::{evaluate_clashes, ClashEvaluation};
use crate::debate_format::{side_for_role, DebateFormat};
use crate::speaker::{evaluate_speaker, SpeakerEvaluation};
use crate::speech::{RoundContext, Speech};

/// Qualitative closeness of the final result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Margin {
    Clear,
    Close,
    Unanimous,
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Margin::Clear => "clear",
            Margin::Close => "close",
            Margin::Unanimous => "unanimous",
        };
        f.write_str(s)
    }
}

/// The aggregate verdict for one completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateResult {
    pub winner: String,
    pub margin: Margin,
    pub government_score: u32,
    pub opposition_score: u32,
    pub speaker_scores: Vec<SpeakerEvaluation>,
    pub clash_evaluations: Vec<ClashEvaluation>,
    pub chain_of_thought: Vec<String>,
    pub overall_feedback: String,
}

const DEFAULT_FEEDBACK: &str =
    "A hard-fought round on both benches. Keep building on this performance.";

/// A score gap strictly above this is a clear win; at or below, close.
const CLEAR_MARGIN_GAP: u32 = 10;
/// A gap at or above this, with every winning-side speaker outscoring
/// every losing-side speaker, is unanimous.
const UNANIMOUS_MARGIN_GAP: u32 = 20;

/// Resolve the first value present at any of the given dot-paths.
fn lookup<'a>(payload: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| {
        path.split('.')
            .try_fold(payload, |value, key| value.get(key))
    })
}

fn lookup_str<'a>(payload: &'a Value, paths: &[&str]) -> Option<&'a str> {
    lookup(payload, paths).and_then(Value::as_str)
}

fn lookup_score(payload: &Value, paths: &[&str], default: u32) -> u32 {
    lookup(payload, paths)
        .and_then(Value::as_f64)
        .map(|n| n.round().max(0.0) as u32)
        .unwrap_or(default)
}

/// Deserialize a list field, treating anything malformed as absent.
fn lookup_list<T: DeserializeOwned>(payload: &Value, paths: &[&str]) -> Vec<T> {
    lookup(payload, paths)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

fn parse_margin(s: &str) -> Margin {
    match s.to_lowercase().as_str() {
        "close" => Margin::Close,
        "unanimous" => Margin::Unanimous,
        _ => Margin::Clear,
    }
}

/// Build a result from an external adjudication payload, field by field,
/// with local defaults for everything the payload omits.
fn from_external(winner: &str, payload: &Value) -> DebateResult {
    DebateResult {
        winner: winner.to_string(),
        margin: lookup_str(payload, &["margin", "result.margin"])
            .map(parse_margin)
            .unwrap_or(Margin::Clear),
        government_score: lookup_score(payload, &["governmentScore", "scores.government"], 75),
        opposition_score: lookup_score(payload, &["oppositionScore", "scores.opposition"], 70),
        speaker_scores: lookup_list(payload, &["speakerScores", "result.speakerScores"]),
        clash_evaluations: lookup_list(payload, &["clashEvaluations", "result.clashEvaluations"]),
        chain_of_thought: lookup_list(payload, &["chainOfThought", "result.chainOfThought"]),
        overall_feedback: lookup_str(payload, &["overallFeedback", "result.overallFeedback"])
            .unwrap_or(DEFAULT_FEEDBACK)
            .to_string(),
    }
}

fn mean_or(totals: &[u32], fallback: u32) -> u32 {
    if totals.is_empty() {
        fallback
    } else {
        (totals.iter().sum::<u32>() as f64 / totals.len() as f64).round() as u32
    }
}

/// Winner and margin from the two sides' evaluated totals.
///
/// Thresholds are a deliberate design choice: gap > 10 is clear, a
/// non-zero gap up to 10 is close, and a gap of at least 20 where every
/// winning-side speaker outscores every losing-side speaker is unanimous.
/// An exact tie goes to the Opposition (benefit of the doubt to the
/// status quo) as a close call.
fn decide(
    gov_totals: &[u32],
    opp_totals: &[u32],
    gov_score: u32,
    opp_score: u32,
) -> (String, Margin) {
    if gov_score == opp_score {
        return ("Opposition".to_string(), Margin::Close);
    }

    let gov_wins = gov_score > opp_score;
    let (winner, winner_totals, loser_totals) = if gov_wins {
        ("Government", gov_totals, opp_totals)
    } else {
        ("Opposition", opp_totals, gov_totals)
    };

    let gap = gov_score.abs_diff(opp_score);
    let loser_best = loser_totals.iter().copied().max().unwrap_or(0);
    let sweep = !winner_totals.is_empty()
        && winner_totals.iter().all(|&t| t > loser_best);

    let margin = if gap >= UNANIMOUS_MARGIN_GAP && sweep {
        Margin::Unanimous
    } else if gap > CLEAR_MARGIN_GAP {
        Margin::Clear
    } else {
        Margin::Close
    };

    (winner.to_string(), margin)
}

/// Produce the final [`DebateResult`] for a completed round.
///
/// When `external` carries a usable winner (at `winner` or
/// `result.winner`), its fields take precedence field by field; otherwise
/// everything is computed locally from the transcript. Never panics on
/// malformed or partial payloads.
pub fn aggregate_result(
    speeches: &[Speech],
    format: DebateFormat,
    roles: &[String],
    ctx: &RoundContext,
    external: Option<&Value>,
) -> DebateResult {
    if let Some(payload) = external {
        if let Some(winner) = lookup_str(payload, &["winner", "result.winner"]) {
            return from_external(winner, payload);
        }
    }

    let speaker_scores: Vec<SpeakerEvaluation> = roles
        .iter()
        .map(|role| evaluate_speaker(speeches, role, side_for_role(role), format, ctx))
        .collect();

    let gov_totals: Vec<u32> = speaker_scores
        .iter()
        .filter(|e| e.side == "Government")
        .map(|e| e.total_score)
        .collect();
    let opp_totals: Vec<u32> = speaker_scores
        .iter()
        .filter(|e| e.side == "Opposition")
        .map(|e| e.total_score)
        .collect();

    // A bench with no expected roles scores the baseline 75, matching the
    // default speaker evaluation.
    let government_score = mean_or(&gov_totals, 75);
    let opposition_score = mean_or(&opp_totals, 75);

    let (winner, margin) = decide(&gov_totals, &opp_totals, government_score, opposition_score);

    let clash_evaluations = evaluate_clashes(speeches, format);

    let mut chain_of_thought = vec![
        format!(
            "Government averaged {government_score} across {} evaluated role(s).",
            gov_totals.len()
        ),
        format!(
            "Opposition averaged {opposition_score} across {} evaluated role(s).",
            opp_totals.len()
        ),
    ];
    if let Some(top) = clash_evaluations.first() {
        let direction = if top.government_score > top.opposition_score {
            "favoured Government"
        } else if top.opposition_score > top.government_score {
            "favoured Opposition"
        } else {
            "was even"
        };
        chain_of_thought.push(format!(
            "The top-weighted clash '{}' {direction}.",
            top.topic
        ));
    }
    chain_of_thought.push(format!("{winner} takes the round with a {margin} margin."));

    let overall_feedback = format!(
        "{winner} carried the round on overall speaker quality. Review the clash breakdown to see where each bench gained ground."
    );

    DebateResult {
        winner,
        margin,
        government_score,
        opposition_score,
        speaker_scores,
        clash_evaluations,
        chain_of_thought,
        overall_feedback,
    }
}
