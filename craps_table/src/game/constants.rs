//! Table-wide constants.

use super::entities::Chips;

/// Totals that establish a point on a come-out roll.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

/// Totals that can be bet the hard way.
pub const HARD_NUMBERS: [u8; 4] = [4, 6, 8, 10];

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// Total that ends a hand once a point is established.
pub const SEVEN: u8 = 7;

pub const DEFAULT_MIN_BET: Chips = 1;
pub const DEFAULT_MAX_BET: Chips = 10_000;
pub const DEFAULT_STARTING_BALANCE: Chips = 1_000;

/// Longest shooter name accepted before truncation.
pub const MAX_SHOOTER_NAME_LENGTH: usize = 24;

/// Returns whether `total` can be the point.
#[must_use]
pub fn is_point_number(total: u8) -> bool {
    POINT_NUMBERS.contains(&total)
}

/// Returns whether `total` can be bet the hard way.
#[must_use]
pub fn is_hard_number(total: u8) -> bool {
    HARD_NUMBERS.contains(&total)
}
