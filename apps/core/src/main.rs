// Rail Madad command-line entry point
// Runs the complaint brain on ad-hoc input and prints JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use railmadad_core::brain::{ChatContext, ChatResponder, ComplaintClassifier, SentimentScorer};
use railmadad_core::config::AppConfig;
use railmadad_core::telemetry;

#[derive(Parser, Debug)]
#[command(name = "railmadad", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize and prioritize a complaint
    Classify {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Number of attached photos or videos
        #[arg(long, default_value_t = 0)]
        media: usize,
    },
    /// Score the sentiment of a feedback comment
    Sentiment { text: String },
    /// Get the chatbot reply to a message
    Chat {
        message: String,
        /// The user already has a complaint on record
        #[arg(long, default_value_t = false)]
        has_complaint: bool,
    },
    /// List the department catalog in use
    Departments,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("invalid configuration")?;
    telemetry::init(&config).context("failed to initialise logging")?;
    debug!("Configuration: {:?}", config);

    let departments = config
        .load_departments()
        .context("failed to load department catalog")?;

    match cli.command {
        Command::Classify {
            title,
            description,
            media,
        } => {
            let classifier = ComplaintClassifier::with_departments(departments);
            print_json(&classifier.classify(&title, &description, media))
        }
        Command::Sentiment { text } => print_json(&SentimentScorer::new().score(&text)),
        Command::Chat {
            message,
            has_complaint,
        } => {
            let reply = ChatResponder::new().respond(&message, &ChatContext { has_complaint });
            print_json(&serde_json::json!({ "reply": reply }))
        }
        Command::Departments => print_json(&departments),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
