mod cli;
mod config;
mod display;
mod error;
mod models;
mod storage;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};

use config::Config;
use models::date::parse_date;

#[derive(Parser)]
#[command(name = "elo-tracker")]
#[command(about = "Track Pokémon GO GBL Elo progression for each daily set", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the Elo after a set
    Record {
        /// Elo rating after the set
        #[arg(allow_negative_numbers = true)]
        elo: i64,

        /// Day to record the set for (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show a summary for a date or recent days
    Summary {
        /// Specific date to summarize (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Number of recent days to include in the summary
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
    },
    /// Show all recorded Elo history
    History {
        /// Only display the most recent N days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
    /// Delete all Elo history
    Reset,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let result = Config::from_env().and_then(|config| match command {
        Commands::Record { elo, date } => cli::record::run(&config, elo, date),
        Commands::Summary { date, days } => cli::summary::run(&config, date, days),
        Commands::History { limit } => cli::history::run(&config, limit),
        Commands::Reset => cli::reset::run(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
