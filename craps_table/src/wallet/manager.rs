//! Host-side running totals for a playing session.

use serde::{Deserialize, Serialize};

use super::{
    errors::{LedgerError, LedgerResult},
    models::LedgerEntry,
};
use crate::table::RollReport;

/// Append-only record of every roll applied to one table during a session.
///
/// The table only reports the net of a single roll; the cumulative session
/// net lives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLedger {
    entries: Vec<LedgerEntry>,
    session_net: i64,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll report.
    ///
    /// The first report may start at any roll number; after that rolls must
    /// arrive in sequence.
    ///
    /// # Errors
    ///
    /// * `LedgerError::DuplicateRoll` - the roll was already recorded
    /// * `LedgerError::OutOfOrder` - one or more rolls were skipped
    pub fn record(&mut self, report: &RollReport) -> LedgerResult<&LedgerEntry> {
        if let Some(last) = self.entries.last() {
            if report.roll <= last.roll {
                return Err(LedgerError::DuplicateRoll(report.roll));
            }
            let expected = last.roll + 1;
            if report.roll != expected {
                return Err(LedgerError::OutOfOrder {
                    expected,
                    got: report.roll,
                });
            }
        }

        let entry = LedgerEntry::from(report);
        self.session_net = self.session_net.saturating_add(entry.net);
        log::debug!(
            "Ledger roll {}: {} {:+} (session {:+})",
            entry.roll,
            entry.kind,
            entry.net,
            self.session_net
        );
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Sum of every recorded roll's net change.
    pub fn session_net(&self) -> i64 {
        self.session_net
    }

    pub fn rolls(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[LedgerEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Largest single-roll gain, if any roll came out ahead.
    pub fn biggest_win(&self) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.net > 0)
            .max_by_key(|entry| entry.net)
    }

    /// Largest single-roll loss, if any roll came out behind.
    pub fn biggest_loss(&self) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.net < 0)
            .min_by_key(|entry| entry.net)
    }
}
