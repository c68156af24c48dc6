//! One player's seat at a table, driven a command at a time.

use crate::{
    commands::{BET_TOKENS, Command, parse_command},
    config::ClientConfig,
    render,
};
use craps_table::{
    CrapsTable, LedgerError, RollReport, RollSource, SessionLedger, ShooterRotation,
    table::ConfigError,
};
use thiserror::Error;

pub const COMMANDS: &str = "\
Commands:
  bet BET AMOUNT    stage chips on a bet
  remove BET        take a bet down
  takedown          take down everything but a pass line with a point on
  clear             reset the whole layout to zero
  roll              throw the dice
  status            show the layout
  history           show recent rolls
  help              show this message
  quit              leave the table";

/// Ledger rows shown by `history`.
pub const HISTORY_LENGTH: usize = 10;

/// Failures that end a session. Player mistakes are replies, not errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Table(#[from] ConfigError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("failed to encode roll report: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Say(String),
    Quit,
}

pub struct Session<R> {
    table: CrapsTable,
    dice: R,
    ledger: SessionLedger,
    rotation: ShooterRotation,
    json: bool,
}

impl<R: RollSource> Session<R> {
    /// Open the configured table. Shooter names that don't fit are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// `SessionError::Table` if the table config is invalid.
    pub fn new(config: ClientConfig, dice: R) -> Result<Self, SessionError> {
        let table = CrapsTable::new(config.table)?;
        let mut rotation = ShooterRotation::new();
        for shooter in &config.shooters {
            if let Err(e) = rotation.join(shooter) {
                log::warn!("Skipping shooter: {e}");
            }
        }
        Ok(Self {
            table,
            dice,
            ledger: SessionLedger::new(),
            rotation,
            json: config.json,
        })
    }

    #[must_use]
    pub fn table(&self) -> &CrapsTable {
        &self.table
    }

    #[must_use]
    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    #[must_use]
    pub fn status(&self) -> String {
        render::render_status(&self.table, &self.rotation)
    }

    /// Closing line with the session result.
    #[must_use]
    pub fn farewell(&self) -> String {
        format!(
            "Leaving with {} ({:+} this session over {} rolls).",
            self.table.balance(),
            self.ledger.session_net(),
            self.ledger.rolls()
        )
    }

    /// Parse and run one line of input. Parse errors come back as a reply.
    ///
    /// # Errors
    ///
    /// See [`Session::handle`].
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, SessionError> {
        match parse_command(line) {
            Ok(command) => self.handle(command),
            Err(e) => Ok(Reply::Say(e.to_string())),
        }
    }

    /// Run one command against the table.
    ///
    /// # Errors
    ///
    /// * `SessionError::Ledger` - the ledger refused a roll report
    /// * `SessionError::Json` - a report could not be encoded
    pub fn handle(&mut self, command: Command) -> Result<Reply, SessionError> {
        let text = match command {
            Command::Bet { category, amount } => match self.table.add(category, amount) {
                Ok(total) => format!(
                    "{category}: {total} (available {})",
                    self.table.available()
                ),
                Err(e) => e.client_message(),
            },
            Command::Remove(category) => match self.table.remove(category) {
                Ok(stake) => format!("Took down {category} ({stake})"),
                Err(e) => e.client_message(),
            },
            Command::TakeDown => match self.table.take_down_all() {
                Ok(()) => format!("Bets down; {} still staked", self.table.total_staked()),
                Err(e) => e.client_message(),
            },
            Command::Clear => match self.table.clear() {
                Ok(()) => "Layout cleared".to_string(),
                Err(e) => e.client_message(),
            },
            Command::Roll => match self.table.begin_roll(&mut self.dice) {
                Ok(report) => self.after_roll(&report)?,
                Err(e) => e.client_message(),
            },
            Command::Status => self.status(),
            Command::History => render::render_history(&self.ledger, HISTORY_LENGTH),
            Command::Help => format!("{COMMANDS}\nBets: {BET_TOKENS}"),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Say(text))
    }

    fn after_roll(&mut self, report: &RollReport) -> Result<String, SessionError> {
        self.ledger.record(report)?;
        let mut text = if self.json {
            serde_json::to_string(report)?
        } else {
            render::render_report(report, self.ledger.session_net())
        };
        if let Some(shooter) = self.rotation.record_roll(report) {
            text.push_str(&format!("\nDice pass to {shooter}"));
        }
        Ok(text)
    }
}
