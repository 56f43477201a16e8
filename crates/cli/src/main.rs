//! Vanakkam CLI - Command-line client for the Tamil AI assistant.
//!
//! # Usage
//!
//! ```bash
//! # Send a message; the skill is classified from the text
//! vanakkam chat "Tell me a story about a fox"
//!
//! # Force a specific skill
//! vanakkam chat -s grammar "வினைச்சொல் என்றால் என்ன?"
//!
//! # See which skill a message would route to, without sending it
//! vanakkam classify "பொங்கல் பண்டிகை பற்றி சொல்லுங்கள்"
//!
//! # Check whether the backend is up
//! vanakkam health
//! ```
//!
//! # Environment Variables
//!
//! - `VANAKKAM_BASE_URL` - Backend base URL (default: `http://localhost:8000`)
//! - `VANAKKAM_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vanakkam")]
#[command(author, version, about = "Vanakkam Tamil AI command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message to the assistant
    Chat {
        /// The message text
        message: String,

        /// Skill to use (`generate`, `story`, `culture`, `grammar`,
        /// `explain`); classified from the text when omitted
        #[arg(short, long)]
        skill: Option<String>,
    },
    /// Show which skill a message routes to, without sending it
    Classify {
        /// The message text
        text: String,
    },
    /// Check whether the backend reports itself healthy
    Health,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Chat { message, skill } => {
            commands::chat::send(&message, skill.as_deref()).await?;
        }
        Commands::Classify { text } => commands::classify::show(&text),
        Commands::Health => commands::health::check().await?,
    }
    Ok(())
}
