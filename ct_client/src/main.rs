//! A terminal craps table.
//!
//! One player bets against the house at a single table. Dice come from a
//! thread RNG, or from a seeded RNG when a seed is configured.

use anyhow::{Context, Result};
use craps_table::DiceSource;
use ct_client::{
    config::ClientConfig,
    session::{Reply, Session},
};
use pico_args::Arguments;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Play craps at a terminal table

USAGE:
  ct_client [OPTIONS]

OPTIONS:
  --name NAME           Table name              [default: env CT_TABLE_NAME or Main Table]
  --balance N           Starting balance        [default: env CT_STARTING_BALANCE or 1000]
  --min-bet N           Table minimum per bet   [default: env CT_MIN_BET or 1]
  --max-bet N           Table maximum per bet   [default: env CT_MAX_BET or 10000]
  --seed N              Seed the dice           [default: env CT_SEED]
  --shooters A,B,C      Shooter rotation        [default: your username]

FLAGS:
  --true-odds           Pay propositions at true odds [env CT_ODDS=true_odds]
  --json                Print roll reports as JSON
  -h, --help            Print help information
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let config = ClientConfig::from_env(&mut pargs).context("Invalid configuration")?;
    let leftover = pargs.finish();
    if !leftover.is_empty() {
        anyhow::bail!("Unexpected arguments: {leftover:?}");
    }

    // Catching signals for exit.
    ctrlc::set_handler(|| {
        println!("\nLeaving the table.");
        std::process::exit(0)
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    run(config)
}

fn run(mut config: ClientConfig) -> Result<()> {
    if config.shooters.is_empty() {
        config.shooters.push(whoami::username());
    }
    let dice = DiceSource::from_seed(config.seed);
    let mut session = Session::new(config, dice).context("Failed to open table")?;

    println!("{}", session.status());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line)? {
            Reply::Say(text) => println!("{text}"),
            Reply::Quit => break,
        }
    }

    println!("{}", session.farewell());
    Ok(())
}
