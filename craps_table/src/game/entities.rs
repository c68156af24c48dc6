use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::constants::{self, DIE_FACES, SEVEN};
use super::errors::RollError;

/// Type alias for whole chips. All stakes and payouts are whole chips;
/// breakage from fractional odds stays with the house.
pub type Chips = u64;

/// Every wager category a player can stage at the table.
///
/// `Place` and `Hard` carry the number they are riding on. Only the numbers
/// in [`constants::POINT_NUMBERS`] are valid place numbers and only the
/// numbers in [`constants::HARD_NUMBERS`] are valid hardways; anything else
/// is rejected when staged.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum BetCategory {
    PassLine,
    DontPass,
    Field,
    AnySeven,
    Yo11,
    SnakeEyes,
    Boxcars,
    AceDeuce,
    Place(u8),
    Hard(u8),
}

impl BetCategory {
    /// All valid categories in display order.
    pub const ALL: [Self; 18] = [
        Self::PassLine,
        Self::DontPass,
        Self::Field,
        Self::AnySeven,
        Self::Yo11,
        Self::SnakeEyes,
        Self::Boxcars,
        Self::AceDeuce,
        Self::Place(4),
        Self::Place(5),
        Self::Place(6),
        Self::Place(8),
        Self::Place(9),
        Self::Place(10),
        Self::Hard(4),
        Self::Hard(6),
        Self::Hard(8),
        Self::Hard(10),
    ];

    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Place(n) => constants::is_point_number(*n),
            Self::Hard(n) => constants::is_hard_number(*n),
            _ => true,
        }
    }

    /// One-roll bets are settled by the very next roll, whatever the point.
    #[must_use]
    pub fn is_one_roll(&self) -> bool {
        matches!(
            self,
            Self::Field
                | Self::AnySeven
                | Self::Yo11
                | Self::SnakeEyes
                | Self::Boxcars
                | Self::AceDeuce
        )
    }

    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::PassLine | Self::DontPass)
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassLine => write!(f, "pass line"),
            Self::DontPass => write!(f, "don't pass"),
            Self::Field => write!(f, "field"),
            Self::AnySeven => write!(f, "any seven"),
            Self::Yo11 => write!(f, "yo 11"),
            Self::SnakeEyes => write!(f, "snake eyes"),
            Self::Boxcars => write!(f, "boxcars"),
            Self::AceDeuce => write!(f, "ace-deuce"),
            Self::Place(n) => write!(f, "place {n}"),
            Self::Hard(n) => write!(f, "hard {n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bet category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for BetCategory {
    type Err = ParseCategoryError;

    /// Parses the short tokens hosts use for bet entry, e.g. `pass`,
    /// `any7`, `place6`, `hard10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase().replace(['-', '_', '\''], "");
        let category = match token.as_str() {
            "pass" | "passline" => Self::PassLine,
            "dontpass" | "dp" => Self::DontPass,
            "field" => Self::Field,
            "any7" | "anyseven" | "seven" => Self::AnySeven,
            "yo" | "yo11" | "eleven" => Self::Yo11,
            "snake" | "snakeeyes" | "aces" | "two" => Self::SnakeEyes,
            "boxcars" | "midnight" | "twelve" => Self::Boxcars,
            "acedeuce" | "three" => Self::AceDeuce,
            other => {
                let parsed = if let Some(n) = other.strip_prefix("place") {
                    n.parse().ok().map(Self::Place)
                } else if let Some(n) = other.strip_prefix("hard") {
                    n.parse().ok().map(Self::Hard)
                } else {
                    None
                };
                return parsed
                    .filter(Self::is_valid)
                    .ok_or_else(|| ParseCategoryError(s.trim().to_string()));
            }
        };
        Ok(category)
    }
}

/// Table phase. Bets may only change while the table is `Betting`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Phase {
    #[default]
    Betting,
    Rolling,
    Resolving,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Betting => "betting",
            Self::Rolling => "rolling",
            Self::Resolving => "resolving",
        };
        write!(f, "{repr}")
    }
}

/// A single throw of two dice. Both faces are always in `1..=6`, including
/// for outcomes read back through serde.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "DicePair", into = "DicePair")]
pub struct RollOutcome {
    d1: u8,
    d2: u8,
}

/// Unchecked wire form of [`RollOutcome`].
#[derive(Deserialize, Serialize)]
struct DicePair {
    d1: u8,
    d2: u8,
}

impl TryFrom<DicePair> for RollOutcome {
    type Error = RollError;

    fn try_from(pair: DicePair) -> Result<Self, Self::Error> {
        Self::new(pair.d1, pair.d2)
    }
}

impl From<RollOutcome> for DicePair {
    fn from(outcome: RollOutcome) -> Self {
        Self {
            d1: outcome.d1,
            d2: outcome.d2,
        }
    }
}

impl RollOutcome {
    /// # Errors
    ///
    /// Returns [`RollError::InvalidDice`] unless both dice are in `1..=6`.
    pub fn new(d1: u8, d2: u8) -> Result<Self, RollError> {
        let face = 1..=DIE_FACES;
        if !face.contains(&d1) || !face.contains(&d2) {
            return Err(RollError::InvalidDice { d1, d2 });
        }
        Ok(Self { d1, d2 })
    }

    #[must_use]
    pub fn dice(&self) -> (u8, u8) {
        (self.d1, self.d2)
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.d1 + self.d2
    }

    /// Both dice show the same face. Only meaningful for 4, 6, 8 and 10.
    #[must_use]
    pub fn is_hard(&self) -> bool {
        self.d1 == self.d2
    }

    #[must_use]
    pub fn is_seven(&self) -> bool {
        self.total() == SEVEN
    }

    /// 7 or 11.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        matches!(self.total(), 7 | 11)
    }

    /// 2, 3 or 12.
    #[must_use]
    pub fn is_craps(&self) -> bool {
        matches!(self.total(), 2 | 3 | 12)
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}={}", self.d1, self.d2, self.total())
    }
}

/// How a single bet fared on a roll.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BetResult {
    Win,
    Lose,
    Push,
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
        };
        write!(f, "{repr}")
    }
}
