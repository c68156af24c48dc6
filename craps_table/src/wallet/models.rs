//! Session ledger data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{game::entities::Chips, table::RollReport};

/// How a roll went for the player as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Win,
    Loss,
    /// Bets were decided but the player broke even.
    Push,
    /// Nothing was decided; every bet rides.
    Carry,
}

impl EntryKind {
    fn of(report: &RollReport) -> Self {
        if report.outcomes.is_empty() {
            Self::Carry
        } else if report.net_change > 0 {
            Self::Win
        } else if report.net_change < 0 {
            Self::Loss
        } else {
            Self::Push
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Win => write!(f, "win"),
            EntryKind::Loss => write!(f, "loss"),
            EntryKind::Push => write!(f, "push"),
            EntryKind::Carry => write!(f, "carry"),
        }
    }
}

/// One settled roll as seen by the player's bankroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub roll: u64,
    pub staked: Chips,
    pub returned: Chips,
    pub net: i64,
    pub balance_after: Chips,
    pub kind: EntryKind,
    pub recorded_at: DateTime<Utc>,
}

impl From<&RollReport> for LedgerEntry {
    fn from(report: &RollReport) -> Self {
        Self {
            roll: report.roll,
            staked: report.total_staked,
            returned: report.gross_returned,
            net: report.net_change,
            balance_after: report.balance_after,
            kind: EntryKind::of(report),
            recorded_at: Utc::now(),
        }
    }
}
