//! Exact payout odds for every bet category.
//!
//! Odds are kept as integer fractions of profit to stake (9:5 on a place 4
//! is `Odds::new(9, 5)`), so every payout is reproducible to the chip.
//! Fractional profits are rounded down.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::entities::{BetCategory, Chips};

/// Profit odds expressed as `numerator : denominator`.
///
/// The denominator is never zero, including for odds read back through
/// serde.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "OddsRepr", into = "OddsRepr")]
pub struct Odds {
    numerator: u32,
    denominator: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("odds denominator must be positive")]
pub struct ZeroDenominator;

/// Wire form of [`Odds`], checked on the way in.
#[derive(Deserialize, Serialize)]
struct OddsRepr {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<OddsRepr> for Odds {
    type Error = ZeroDenominator;

    fn try_from(repr: OddsRepr) -> Result<Self, Self::Error> {
        Self::try_new(repr.numerator, repr.denominator)
    }
}

impl From<Odds> for OddsRepr {
    fn from(odds: Odds) -> Self {
        Self {
            numerator: odds.numerator,
            denominator: odds.denominator,
        }
    }
}

impl Odds {
    pub const EVEN: Self = Self::new(1, 1);

    /// # Panics
    ///
    /// Panics if `denominator` is zero. Use [`Odds::try_new`] for values
    /// that aren't compile-time constants.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        assert!(denominator > 0, "odds denominator must be positive");
        Self {
            numerator,
            denominator,
        }
    }

    /// # Errors
    ///
    /// `ZeroDenominator` if `denominator` is zero.
    pub const fn try_new(numerator: u32, denominator: u32) -> Result<Self, ZeroDenominator> {
        if denominator == 0 {
            return Err(ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    #[must_use]
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Winnings on `stake`, excluding the stake itself.
    #[must_use]
    pub fn profit(&self, stake: Chips) -> Chips {
        let profit = (u128::from(stake) * u128::from(self.numerator))
            .checked_div(u128::from(self.denominator))
            .unwrap_or(0);
        Chips::try_from(profit).unwrap_or(Chips::MAX)
    }

    /// Stake plus winnings.
    #[must_use]
    pub fn total_return(&self, stake: Chips) -> Chips {
        stake.saturating_add(self.profit(stake))
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Which schedule one-roll propositions pay on.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropOdds {
    /// The usual layout: any seven 4:1, yo and ace-deuce 15:1, 2 and 12 30:1.
    #[default]
    Standard,
    /// Fair odds with no house edge: 5:1, 17:1, 35:1.
    TrueOdds,
}

impl fmt::Display for PropOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropOdds::Standard => write!(f, "standard"),
            PropOdds::TrueOdds => write!(f, "true_odds"),
        }
    }
}

impl FromStr for PropOdds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(PropOdds::Standard),
            "true" | "true_odds" | "true-odds" => Ok(PropOdds::TrueOdds),
            other => Err(format!("unknown odds schedule '{other}'")),
        }
    }
}

/// Complete payout schedule for a table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PayoutTable {
    pub line: Odds,
    pub field: Odds,
    pub field_two: Odds,
    pub field_twelve: Odds,
    pub any_seven: Odds,
    pub yo_eleven: Odds,
    pub snake_eyes: Odds,
    pub boxcars: Odds,
    pub ace_deuce: Odds,
    pub place_four_ten: Odds,
    pub place_five_nine: Odds,
    pub place_six_eight: Odds,
    pub hard_four_ten: Odds,
    pub hard_six_eight: Odds,
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PayoutTable {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            line: Odds::EVEN,
            field: Odds::EVEN,
            field_two: Odds::new(2, 1),
            field_twelve: Odds::new(3, 1),
            any_seven: Odds::new(4, 1),
            yo_eleven: Odds::new(15, 1),
            snake_eyes: Odds::new(30, 1),
            boxcars: Odds::new(30, 1),
            ace_deuce: Odds::new(15, 1),
            place_four_ten: Odds::new(9, 5),
            place_five_nine: Odds::new(7, 5),
            place_six_eight: Odds::new(7, 6),
            hard_four_ten: Odds::new(7, 1),
            hard_six_eight: Odds::new(9, 1),
        }
    }

    /// Standard table with propositions paid at their true odds.
    #[must_use]
    pub const fn true_odds() -> Self {
        let standard = Self::standard();
        Self {
            any_seven: Odds::new(5, 1),
            yo_eleven: Odds::new(17, 1),
            snake_eyes: Odds::new(35, 1),
            boxcars: Odds::new(35, 1),
            ace_deuce: Odds::new(17, 1),
            ..standard
        }
    }

    #[must_use]
    pub fn for_odds(odds: PropOdds) -> Self {
        match odds {
            PropOdds::Standard => Self::standard(),
            PropOdds::TrueOdds => Self::true_odds(),
        }
    }

    /// Place odds for `number`, or `None` if it isn't a place number.
    #[must_use]
    pub fn place(&self, number: u8) -> Option<Odds> {
        match number {
            4 | 10 => Some(self.place_four_ten),
            5 | 9 => Some(self.place_five_nine),
            6 | 8 => Some(self.place_six_eight),
            _ => None,
        }
    }

    #[must_use]
    pub fn hard(&self, number: u8) -> Option<Odds> {
        match number {
            4 | 10 => Some(self.hard_four_ten),
            6 | 8 => Some(self.hard_six_eight),
            _ => None,
        }
    }

    /// Field odds for `total`, or `None` when the field loses.
    #[must_use]
    pub fn field(&self, total: u8) -> Option<Odds> {
        match total {
            2 => Some(self.field_two),
            12 => Some(self.field_twelve),
            3 | 4 | 9 | 10 | 11 => Some(self.field),
            _ => None,
        }
    }

    /// Odds and winning total for a single-number proposition.
    #[must_use]
    pub fn proposition(&self, category: BetCategory) -> Option<(u8, Odds)> {
        match category {
            BetCategory::AnySeven => Some((7, self.any_seven)),
            BetCategory::Yo11 => Some((11, self.yo_eleven)),
            BetCategory::SnakeEyes => Some((2, self.snake_eyes)),
            BetCategory::Boxcars => Some((12, self.boxcars)),
            BetCategory::AceDeuce => Some((3, self.ace_deuce)),
            _ => None,
        }
    }
}
