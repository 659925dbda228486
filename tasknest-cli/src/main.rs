use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasknest_core::{ClassifierConfig, HeuristicClassifier, SupportedLanguage, TaskAnalysis};
use tasknest_ingest::load_tasks;
use tracing_subscriber::EnvFilter;

mod config;
mod patterns_cmd;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tasknest",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TASKNEST_BUILD_SHA"), ")"),
    about = "Task suggestions and heuristic task analysis"
)]
struct Cli {
    /// User id for per-user pattern storage (default namespace if omitted)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one task text: language, sentiment, category, duration, priority
    Classify {
        text: String,

        /// Force a language instead of detecting it (ru, en, kz)
        #[arg(long)]
        lang: Option<SupportedLanguage>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Analyze a whole task list (.json or .csv) and print aggregates
    Analyze {
        #[arg(long)]
        tasks: PathBuf,

        #[arg(long)]
        lang: Option<SupportedLanguage>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Learned time-slot patterns and suggestions
    Patterns {
        #[command(subcommand)]
        command: patterns_cmd::PatternsCommand,
    },

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write default ~/.tasknest/config.toml
    Init,

    /// Print the effective configuration
    Show,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TASKNEST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let user = cli.user.as_deref();

    match cli.command {
        Command::Classify { text, lang, json } => {
            let classifier = HeuristicClassifier::new(classifier_config(lang)?);
            let analysis = classifier.analyze(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&text, &analysis);
            }
        }

        Command::Analyze { tasks, lang, json } => {
            let records = load_tasks(&tasks)?;
            let inputs: Vec<_> = records.iter().map(|r| r.as_input()).collect();
            let classifier = HeuristicClassifier::new(classifier_config(lang)?);
            let report = classifier.analyze_list(&inputs);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}\n", report.summary);
                for (record, t) in records.iter().zip(&report.tasks) {
                    let a = &t.analysis;
                    println!(
                        "- [{}] {} | {} | {:?} {:.2} | ~{} min | {:?}",
                        if t.completed { "x" } else { " " },
                        record.title,
                        a.category,
                        a.sentiment.sentiment,
                        a.sentiment.confidence,
                        a.estimated_minutes,
                        a.priority
                    );
                }
                println!(
                    "\nAverage confidence {:.2}, average duration {:.0} min",
                    report.average_confidence, report.average_minutes
                );
            }
        }

        Command::Patterns { command } => {
            patterns_cmd::run(command, user)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

/// `--lang` wins over the config file.
fn classifier_config(lang: Option<SupportedLanguage>) -> Result<ClassifierConfig> {
    let mut cfg = config::load_config()?
        .classifier_config()
        .context("invalid [classifier] config")?;
    if lang.is_some() {
        cfg.language = lang;
    }
    Ok(cfg)
}

fn print_analysis(text: &str, a: &TaskAnalysis) {
    println!("Task:       {}", text);
    println!("Language:   {}", a.language);
    println!(
        "Sentiment:  {:?} ({:.2})",
        a.sentiment.sentiment, a.sentiment.confidence
    );
    println!("Category:   {}", a.category);
    println!(
        "Duration:   ~{} min ({:?}, base {} min)",
        a.estimated_minutes,
        a.duration_tier,
        a.duration_tier.base_minutes()
    );
    println!("Priority:   {:?}", a.priority);
    println!("Suggestion: {}", a.sentiment.suggestion);
}
