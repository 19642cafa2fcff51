//! DebateScore CLI - Debate Adjudication Tool
//!
//! A command-line tool for scoring parliamentary debate transcripts,
//! optionally consulting an external AI adjudicator.

use clap::Parser;
use colored::Colorize;
use debatescore_core::{
    adjudicator::{render_transcript, AdjudicatorConfig, ExternalAdjudicator},
    config::default_config,
    debate_format, Config, RoundContext, Speaker, Speech,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "debatescore",
    version,
    about = "Debate Adjudication Tool - score parliamentary debate rounds",
    long_about = "Scores a debate transcript with the local rubric model, optionally \
consulting an external AI adjudicator over an OpenAI-compatible API."
)]
struct Cli {
    /// Path to the transcript JSON file (an array of {role, side, text})
    #[arg(value_name = "TRANSCRIPT")]
    transcript: PathBuf,

    /// The motion that was debated
    #[arg(short = 'M', long, default_value = "", value_name = "MOTION")]
    motion: String,

    /// Debate format to score against
    #[arg(long, default_value = "parliamentary", value_name = "FORMAT")]
    debate_format: String,

    /// Role the human user spoke in (tags that evaluation as yours)
    #[arg(long, value_name = "ROLE")]
    user_role: Option<String>,

    /// Model to use for external adjudication
    #[arg(short, long, default_value = "gpt-4o-mini", value_name = "MODEL")]
    model: String,

    /// Skip the external adjudicator and score locally only
    #[arg(long)]
    offline: bool,

    /// Path to a TOML config file (role lists, prompt template)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = debate_format::get_format(&cli.debate_format).ok_or_else(|| {
        format!(
            "Unknown debate format: '{}'. Available formats: {}",
            cli.debate_format,
            debate_format::available_formats().join(", ")
        )
    })?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => default_config(),
    };

    let content = std::fs::read_to_string(&cli.transcript)
        .map_err(|e| format!("Failed to read transcript {}: {e}", cli.transcript.display()))?;
    let speeches: Vec<Speech> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse transcript: {e}"))?;

    let mut ctx = RoundContext::new(cli.motion.as_str());
    if let Some(role) = &cli.user_role {
        ctx = ctx.with_user_role(role.as_str());
    }

    // Print header
    println!();
    println!("{}", "═".repeat(70).bright_blue());
    println!(
        "{}",
        format!("  {} - {}", "DebateScore".bold(), format.display_name())
            .bright_blue()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_blue());
    println!();
    if !cli.motion.is_empty() {
        println!("{} {}", "Motion:".bold(), cli.motion.bright_white());
    }
    println!(
        "{} {} speeches loaded from {}",
        "Transcript:".bold(),
        speeches.len(),
        cli.transcript.display().to_string().dimmed()
    );
    println!();

    // Consult the external adjudicator unless running offline
    let external = if cli.offline {
        None
    } else {
        let api_base = env::var("OPENAI_API_BASE")
            .or_else(|_| env::var("OPENAI_BASE_URL"))
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
            eprintln!(
                "{}",
                "Warning: OPENAI_API_KEY not set. Falling back to local scoring.".yellow()
            );
            String::new()
        });

        println!("{}", "Consulting external adjudicator...".dimmed());
        let prompt = config.adjudication_prompt(&cli.motion, &render_transcript(&speeches));
        let adjudicator =
            ExternalAdjudicator::new(AdjudicatorConfig::new(api_base, api_key, cli.model.as_str()));
        adjudicator.adjudicate(&prompt).await
    };

    let roles = config.roles_for(format).to_vec();
    let result =
        debatescore_core::aggregate_result(&speeches, format, &roles, &ctx, external.as_ref());

    // Print the verdict
    println!();
    println!("{}", "═".repeat(70).bright_magenta());
    println!("{}", "  VERDICT".bright_magenta().bold());
    println!("{}", "═".repeat(70).bright_magenta());
    println!();
    println!(
        "{} {} {}",
        "Winner:".bold(),
        result.winner.bright_green().bold(),
        format!("({} margin)", result.margin).yellow()
    );
    println!(
        "{} Government {} — Opposition {}",
        "Scores:".bold(),
        result.government_score.to_string().bright_cyan(),
        result.opposition_score.to_string().bright_cyan()
    );

    if !result.speaker_scores.is_empty() {
        println!();
        println!("{}", "Speakers:".bold());
        for eval in &result.speaker_scores {
            let who = match eval.speaker {
                Speaker::User => "you".bright_green(),
                Speaker::Ai => "ai".dimmed(),
            };
            println!(
                "  {} ({}) [{}] — matter {}, manner {}, method {}, role {} → {}",
                eval.role.bright_cyan(),
                eval.side.yellow(),
                who,
                eval.matter,
                eval.manner,
                eval.method,
                eval.role_fulfillment,
                eval.total_score.to_string().bold()
            );
            println!("    {}", eval.feedback.dimmed());
        }
    }

    if !result.clash_evaluations.is_empty() {
        println!();
        println!("{}", "Clashes:".bold());
        for clash in &result.clash_evaluations {
            println!(
                "  [w{}] {} — Gov {:.2} vs Opp {:.2}",
                clash.weight,
                clash.topic.bright_cyan(),
                clash.government_score,
                clash.opposition_score
            );
        }
    }

    if !result.chain_of_thought.is_empty() {
        println!();
        println!("{}", "Reasoning:".bold());
        for step in &result.chain_of_thought {
            println!("  {}", step.dimmed());
        }
    }

    println!();
    println!("{}", "─".repeat(70).dimmed());
    println!("{}", result.overall_feedback.bright_white());
    println!();

    Ok(())
}
