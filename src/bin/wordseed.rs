//! `wordseed` - derive daily seeds and word sets from the command line.
//!
//! - `wordseed seed --date 2025-10-15` - print the day's seed record
//! - `wordseed words --user alice --date 2025-10-15` - print a user's words

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use wordseed::seeding::DEFAULT_WORD_COUNT;
use wordseed::types::CalendarDate;
use wordseed::EngineConfig;

#[derive(Parser)]
#[command(name = "wordseed")]
#[command(about = "Deterministic daily word sets", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show (and create if needed) the seed record for a date
    Seed {
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Generate a user's word set for a date
    Words {
        #[arg(long)]
        user: String,

        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Number of words, 1 to 100
        #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
        count: usize,

        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_env().context("reading configuration")?;
    let orchestrator = config
        .build_orchestrator()
        .context("loading word documents")?;

    match cli.command {
        Commands::Seed { date } => {
            let date = CalendarDate::parse(&date)?;
            let record = orchestrator.get_or_create_daily_seed(&date)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Words {
            user,
            date,
            count,
            json,
        } => {
            let words = orchestrator.generate_user_word_set(&user, &date, count)?;
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                for word in words {
                    println!("{word}");
                }
            }
        }
    }

    Ok(())
}
