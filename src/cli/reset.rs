use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::models::EloHistory;
use crate::storage;

const PROMPT: &str = "This will delete all tracked Elo data. Type 'yes' to confirm: ";

/// Delete all Elo history after typed confirmation on stdin
pub fn run(config: &Config) -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let stdin = io::stdin();
    if reset(config, &mut stdin.lock())? {
        println!("All Elo data has been cleared.");
    } else {
        println!("Reset cancelled.");
    }

    Ok(())
}

/// Read one answer line; on confirmation overwrite the history with an empty one
fn reset(config: &Config, input: &mut impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if !is_confirmed(&answer) {
        log::debug!("Reset not confirmed");
        return Ok(false);
    }

    storage::save(&EloHistory::new(), &config.data_file())?;
    log::info!("Cleared history at {}", config.data_file().display());
    Ok(true)
}

fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
