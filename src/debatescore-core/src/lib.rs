//! DebateScore Core Library
//!
//! Provides the debate scoring and adjudication model: lexical feature
//! extraction, per-speaker rubric evaluation, clash comparison, and
//! aggregate verdict construction, with an optional external AI adjudicator.

pub mod adjudicator;
pub mod clash;
pub mod config;
pub mod debate_format;
pub mod error;
pub mod features;
pub mod speaker;
pub mod speech;
pub mod verdict;

pub use adjudicator::{AdjudicatorConfig, ExternalAdjudicator};
pub use clash::{evaluate_clashes, ClashEvaluation, CLASH_TOPICS};
pub use config::Config;
pub use debate_format::{side_for_role, DebateFormat};
pub use error::ScoreError;
pub use features::{extract_features, SpeechFeatures};
pub use speaker::{evaluate_speaker, SpeakerEvaluation};
pub use speech::{RoundContext, Speaker, Speech};
pub use verdict::{aggregate_result, DebateResult, Margin};
