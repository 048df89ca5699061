use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use moodmatch_cli::config::{self, MoodmatchConfig, OutputFormat};
use moodmatch_cli::{report, sheet};
use moodmatch_instruments::all_instruments;
use moodmatch_instruments::scoring::{Item, LIKERT_OPTIONS, ResponseOption};
use moodmatch_instruments::triage::{TriageQuestion, triage_questions};
use moodmatch_ranking::catalog::{Candidate, checked_catalog};

#[derive(Parser, Debug)]
#[command(
    name = "moodmatch",
    about = "Educational PHQ-9 / GAD-7 screening with a ranked list of options to discuss",
    version
)]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, env = "MOODMATCH_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scale items, response options and triage questions
    Questions,
    /// Print the candidate catalog
    Catalog,
    /// Evaluate an answer sheet
    Evaluate(EvaluateArgs),
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON answer sheet: { "symptoms": {...}, "triage": {...} }
    path: PathBuf,
    /// Override the configured output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Evaluate even when some questions are unanswered
    #[arg(long)]
    allow_incomplete: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}

#[derive(Serialize)]
struct QuestionCatalog<'a> {
    symptom_items: Vec<&'a Item>,
    response_options: &'a [ResponseOption],
    triage: &'a [TriageQuestion],
}

fn init_tracing(config: &MoodmatchConfig, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref())?;
    let config = config::load_config(&config_path)?;
    init_tracing(&config, cli.log_json);

    match cli.command {
        Command::Questions => {
            let instruments = all_instruments();
            let questions = QuestionCatalog {
                symptom_items: instruments.iter().flat_map(|i| i.items()).collect(),
                response_options: &LIKERT_OPTIONS,
                triage: triage_questions(),
            };
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        Command::Catalog => {
            let candidates: &[Candidate] = checked_catalog()?;
            println!("{}", serde_json::to_string_pretty(candidates)?);
        }
        Command::Evaluate(args) => {
            let mut session = sheet::load_sheet(&args.path)?;
            if config.require_complete && !args.allow_incomplete {
                sheet::submit(&mut session)?;
            } else if !session.is_complete() {
                tracing::warn!(
                    missing = session.missing_answers().len(),
                    "evaluating incomplete answer sheet"
                );
            }

            let result = moodmatch_ranking::evaluate_session(&session)?;
            let output = match args.format.unwrap_or(config.format) {
                OutputFormat::Json => report::render_json(&result)?,
                OutputFormat::Text => report::render_text(&result, config.show_disclaimer)?,
            };
            println!("{output}");
        }
        Command::Config { command } => match command {
            ConfigCommand::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&MoodmatchConfig::default(), &config_path)?;
                println!("wrote {}", config_path.display());
            }
            ConfigCommand::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}
