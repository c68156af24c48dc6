//! Roll settlement.
//!
//! [`settle`] is a pure function of the roll, the staged book, the point and
//! the payout schedule. It never fails: every staged bet either wins, loses,
//! pushes or carries over to the next roll.

use serde::{Deserialize, Serialize};

use super::bet_book::BetBook;
use super::constants::{self, SEVEN};
use super::entities::{BetCategory, BetResult, Chips, RollOutcome};
use super::payouts::{Odds, PayoutTable};

/// What happened to one staged bet on a roll.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CategoryOutcome {
    pub category: BetCategory,
    /// Chips that were at risk on this roll.
    pub stake: Chips,
    pub result: BetResult,
    /// Chips handed back to the player: stake plus winnings on a win, the
    /// stake alone on a push.
    pub won: Chips,
    pub lost: Chips,
    /// Whether the bet came off the layout. Place bets that win stay up.
    pub cleared: bool,
}

/// Full result of settling one roll against a book.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settlement {
    pub outcome: RollOutcome,
    pub next_book: BetBook,
    pub next_point: Option<u8>,
    /// Sum of `won` across all outcomes.
    pub gross_returned: Chips,
    /// Sum of `stake` across all outcomes.
    pub total_staked: Chips,
    /// `gross_returned - total_staked`.
    pub net_change: i64,
    /// One entry per bet that was decided this roll, in layout order.
    pub outcomes: Vec<CategoryOutcome>,
}

impl Settlement {
    /// Outcomes for bets that came off the layout.
    pub fn cleared(&self) -> impl Iterator<Item = &CategoryOutcome> + '_ {
        self.outcomes.iter().filter(|outcome| outcome.cleared)
    }
}

/// Per-bet decision before stakes are applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Resolution {
    /// Paid in full and taken down.
    Win(Odds),
    /// Paid in full and the same stake is bet again.
    WinAndRide(Odds),
    Lose,
    Push,
    /// Undecided, stays on the layout untouched.
    Carry,
}

/// Settles every bet in `book` against `outcome`.
///
/// `point` is the point in effect when the dice were thrown; `None` means
/// this was a come-out roll.
#[must_use]
pub fn settle(
    outcome: RollOutcome,
    book: &BetBook,
    point: Option<u8>,
    payouts: &PayoutTable,
) -> Settlement {
    let mut next_book = book.clone();
    let mut outcomes = Vec::with_capacity(book.len());
    let mut gross_returned: Chips = 0;
    let mut total_staked: Chips = 0;

    for (category, stake) in book.iter() {
        let resolution = resolve(category, outcome, point, payouts);
        let (result, won, lost, cleared) = match resolution {
            Resolution::Carry => continue,
            Resolution::Win(odds) => (BetResult::Win, odds.total_return(stake), 0, true),
            Resolution::WinAndRide(odds) => (BetResult::Win, odds.total_return(stake), 0, false),
            Resolution::Lose => (BetResult::Lose, 0, stake, true),
            Resolution::Push => (BetResult::Push, stake, 0, true),
        };

        log::trace!("{category} {stake} on {outcome}: {result} (returned {won})");

        if cleared {
            next_book.remove(category);
        }
        gross_returned = gross_returned.saturating_add(won);
        total_staked = total_staked.saturating_add(stake);
        outcomes.push(CategoryOutcome {
            category,
            stake,
            result,
            won,
            lost,
            cleared,
        });
    }

    Settlement {
        outcome,
        next_book,
        next_point: next_point(outcome.total(), point),
        gross_returned,
        total_staked,
        net_change: signed_delta(gross_returned, total_staked),
        outcomes,
    }
}

/// Point after a roll of `total` with `point` in effect.
///
/// Only a come-out roll of 4, 5, 6, 8, 9 or 10 turns the point on; only the
/// point itself or a seven turns it off.
#[must_use]
pub fn next_point(total: u8, point: Option<u8>) -> Option<u8> {
    match point {
        None if constants::is_point_number(total) => Some(total),
        None => None,
        Some(p) if total == p || total == SEVEN => None,
        Some(p) => Some(p),
    }
}

fn resolve(
    category: BetCategory,
    outcome: RollOutcome,
    point: Option<u8>,
    payouts: &PayoutTable,
) -> Resolution {
    let total = outcome.total();
    match category {
        BetCategory::PassLine => resolve_pass_line(total, point, payouts.line),
        BetCategory::DontPass => resolve_dont_pass(total, point, payouts.line),
        BetCategory::Field => payouts
            .field(total)
            .map_or(Resolution::Lose, Resolution::Win),
        BetCategory::AnySeven
        | BetCategory::Yo11
        | BetCategory::SnakeEyes
        | BetCategory::Boxcars
        | BetCategory::AceDeuce => match payouts.proposition(category) {
            Some((target, odds)) if target == total => Resolution::Win(odds),
            _ => Resolution::Lose,
        },
        BetCategory::Place(number) => match payouts.place(number) {
            Some(odds) => resolve_place(number, total, point, odds),
            None => Resolution::Carry,
        },
        BetCategory::Hard(number) => match payouts.hard(number) {
            Some(odds) => resolve_hard(number, outcome, odds),
            None => Resolution::Carry,
        },
    }
}

fn resolve_pass_line(total: u8, point: Option<u8>, odds: Odds) -> Resolution {
    match point {
        None => match total {
            7 | 11 => Resolution::Win(odds),
            2 | 3 | 12 => Resolution::Lose,
            _ => Resolution::Carry,
        },
        Some(p) if total == p => Resolution::Win(odds),
        Some(_) if total == SEVEN => Resolution::Lose,
        Some(_) => Resolution::Carry,
    }
}

fn resolve_dont_pass(total: u8, point: Option<u8>, odds: Odds) -> Resolution {
    match point {
        None => match total {
            2 | 3 => Resolution::Win(odds),
            7 | 11 => Resolution::Lose,
            // bar 12
            12 => Resolution::Push,
            _ => Resolution::Carry,
        },
        Some(_) if total == SEVEN => Resolution::Win(odds),
        Some(p) if total == p => Resolution::Lose,
        Some(_) => Resolution::Carry,
    }
}

// Place bets are off on the come-out.
fn resolve_place(number: u8, total: u8, point: Option<u8>, odds: Odds) -> Resolution {
    if point.is_none() {
        return Resolution::Carry;
    }
    if total == number {
        Resolution::WinAndRide(odds)
    } else if total == SEVEN {
        Resolution::Lose
    } else {
        Resolution::Carry
    }
}

fn resolve_hard(number: u8, outcome: RollOutcome, odds: Odds) -> Resolution {
    let total = outcome.total();
    if total == number && outcome.is_hard() {
        Resolution::Win(odds)
    } else if total == number || total == SEVEN {
        Resolution::Lose
    } else {
        Resolution::Carry
    }
}

fn signed_delta(gross: Chips, staked: Chips) -> i64 {
    let delta = i128::from(gross) - i128::from(staked);
    delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(d1: u8, d2: u8) -> RollOutcome {
        RollOutcome::new(d1, d2).unwrap()
    }

    fn book(bets: &[(BetCategory, Chips)]) -> BetBook {
        let mut book = BetBook::new();
        for &(category, amount) in bets {
            book.stage(category, amount, Chips::MAX).unwrap();
        }
        book
    }

    fn settle_standard(outcome: RollOutcome, book: &BetBook, point: Option<u8>) -> Settlement {
        settle(outcome, book, point, &PayoutTable::standard())
    }

    fn outcome_for(settlement: &Settlement, category: BetCategory) -> &CategoryOutcome {
        settlement
            .outcomes
            .iter()
            .find(|outcome| outcome.category == category)
            .expect("category should have been decided")
    }

    // === Line bets ===

    #[test]
    fn test_pass_line_come_out_natural() {
        let book = book(&[(BetCategory::PassLine, 10), (BetCategory::DontPass, 10)]);
        for (d1, d2) in [(3, 4), (5, 6)] {
            let settlement = settle_standard(roll(d1, d2), &book, None);
            assert_eq!(
                outcome_for(&settlement, BetCategory::PassLine).result,
                BetResult::Win
            );
            assert_eq!(
                outcome_for(&settlement, BetCategory::DontPass).result,
                BetResult::Lose
            );
            assert_eq!(settlement.next_point, None);
            assert!(settlement.next_book.is_empty());
            assert_eq!(settlement.net_change, 0);
        }
    }

    #[test]
    fn test_come_out_craps() {
        let book = book(&[(BetCategory::PassLine, 10), (BetCategory::DontPass, 20)]);
        for (d1, d2) in [(1, 1), (1, 2)] {
            let settlement = settle_standard(roll(d1, d2), &book, None);
            assert_eq!(
                outcome_for(&settlement, BetCategory::PassLine).lost,
                10
            );
            assert_eq!(outcome_for(&settlement, BetCategory::DontPass).won, 40);
            assert_eq!(settlement.net_change, 10);
        }
    }

    #[test]
    fn test_dont_pass_bars_twelve() {
        let book = book(&[(BetCategory::PassLine, 10), (BetCategory::DontPass, 10)]);
        let settlement = settle_standard(roll(6, 6), &book, None);
        let dont = outcome_for(&settlement, BetCategory::DontPass);
        assert_eq!(dont.result, BetResult::Push);
        assert_eq!(dont.won, 10);
        assert!(dont.cleared);
        assert_eq!(settlement.net_change, -10);
    }

    #[test]
    fn test_come_out_point_numbers_carry_line_bets() {
        let book = book(&[(BetCategory::PassLine, 10), (BetCategory::DontPass, 10)]);
        for (d1, d2, total) in [(1, 3, 4), (2, 3, 5), (3, 3, 6), (4, 4, 8), (4, 5, 9), (5, 5, 10)] {
            let settlement = settle_standard(roll(d1, d2), &book, None);
            assert!(settlement.outcomes.is_empty());
            assert_eq!(settlement.next_book, book);
            assert_eq!(settlement.next_point, Some(total));
            assert_eq!(settlement.net_change, 0);
        }
    }

    #[test]
    fn test_point_made_and_seven_out() {
        let book = book(&[(BetCategory::PassLine, 10), (BetCategory::DontPass, 10)]);

        let made = settle_standard(roll(4, 5), &book, Some(9));
        assert_eq!(outcome_for(&made, BetCategory::PassLine).won, 20);
        assert_eq!(outcome_for(&made, BetCategory::DontPass).lost, 10);
        assert_eq!(made.next_point, None);

        let seven_out = settle_standard(roll(1, 6), &book, Some(9));
        assert_eq!(outcome_for(&seven_out, BetCategory::PassLine).lost, 10);
        assert_eq!(outcome_for(&seven_out, BetCategory::DontPass).won, 20);
        assert_eq!(seven_out.next_point, None);
    }

    #[test]
    fn test_line_bets_ignore_other_totals_on_point() {
        let book = book(&[(BetCategory::PassLine, 10)]);
        // 11 and craps numbers mean nothing once the point is on.
        for (d1, d2) in [(5, 6), (1, 1), (6, 6), (3, 3)] {
            let settlement = settle_standard(roll(d1, d2), &book, Some(4));
            assert!(settlement.outcomes.is_empty());
            assert_eq!(settlement.next_point, Some(4));
            assert_eq!(settlement.next_book.get(BetCategory::PassLine), 10);
        }
    }

    // === One-roll bets ===

    #[test]
    fn test_field_pays_by_total() {
        let book = book(&[(BetCategory::Field, 5)]);
        let cases = [
            ((1, 1), 15),
            ((1, 2), 10),
            ((2, 2), 10),
            ((2, 3), 0),
            ((3, 4), 0),
            ((4, 4), 0),
            ((4, 5), 10),
            ((5, 5), 10),
            ((5, 6), 10),
            ((6, 6), 20),
        ];
        for ((d1, d2), returned) in cases {
            let settlement = settle_standard(roll(d1, d2), &book, Some(6));
            assert_eq!(settlement.gross_returned, returned, "roll {d1}+{d2}");
            assert!(settlement.next_book.is_empty());
            assert_eq!(settlement.next_point, next_point(d1 + d2, Some(6)));
        }
    }

    #[test]
    fn test_propositions_hit_and_miss() {
        let cases = [
            (BetCategory::AnySeven, (2, 5), 25),
            (BetCategory::Yo11, (5, 6), 80),
            (BetCategory::SnakeEyes, (1, 1), 155),
            (BetCategory::Boxcars, (6, 6), 155),
            (BetCategory::AceDeuce, (2, 1), 80),
        ];
        for (category, (d1, d2), returned) in cases {
            let book = book(&[(category, 5)]);
            let hit = settle_standard(roll(d1, d2), &book, None);
            assert_eq!(hit.gross_returned, returned, "{category}");
            assert!(hit.next_book.is_empty());

            let miss = settle_standard(roll(4, 4), &book, None);
            assert_eq!(miss.gross_returned, 0, "{category}");
            assert_eq!(miss.net_change, -5);
            assert!(miss.next_book.is_empty());
        }
    }

    #[test]
    fn test_true_odds_propositions() {
        let book = book(&[(BetCategory::AnySeven, 5)]);
        let settlement = settle(roll(3, 4), &book, None, &PayoutTable::true_odds());
        assert_eq!(settlement.gross_returned, 30);
    }

    // === Place bets ===

    #[test]
    fn test_place_bets_off_on_come_out() {
        let book = book(&[(BetCategory::Place(6), 6), (BetCategory::Place(8), 6)]);
        let settlement = settle_standard(roll(3, 4), &book, None);
        assert!(settlement.outcomes.is_empty());
        assert_eq!(settlement.next_book, book);

        let settlement = settle_standard(roll(3, 3), &book, None);
        assert!(settlement.outcomes.is_empty());
        assert_eq!(settlement.next_point, Some(6));
    }

    #[test]
    fn test_place_win_rides() {
        let book = book(&[(BetCategory::Place(6), 12), (BetCategory::Place(5), 10)]);
        let settlement = settle_standard(roll(2, 4), &book, Some(8));

        let place = outcome_for(&settlement, BetCategory::Place(6));
        assert_eq!(place.result, BetResult::Win);
        assert_eq!(place.won, 26);
        assert!(!place.cleared);

        assert_eq!(settlement.next_book.get(BetCategory::Place(6)), 12);
        assert_eq!(settlement.next_book.get(BetCategory::Place(5)), 10);
        assert_eq!(settlement.net_change, 14);
        assert_eq!(settlement.cleared().count(), 0);
    }

    #[test]
    fn test_place_multipliers() {
        for (number, dice, returned) in [(4, (1, 3), 14), (10, (4, 6), 14), (5, (1, 4), 12), (9, (3, 6), 12)] {
            let book = book(&[(BetCategory::Place(number), 5)]);
            let settlement = settle_standard(roll(dice.0, dice.1), &book, Some(6));
            assert_eq!(settlement.gross_returned, returned, "place {number}");
        }
    }

    #[test]
    fn test_place_loses_on_seven() {
        let book = book(&[(BetCategory::Place(4), 5), (BetCategory::Place(10), 5)]);
        let settlement = settle_standard(roll(6, 1), &book, Some(5));
        assert!(settlement.next_book.is_empty());
        assert_eq!(settlement.net_change, -10);
    }

    // === Hardways ===

    #[test]
    fn test_hardway_wins_hard_only() {
        let book = book(&[(BetCategory::Hard(8), 5)]);

        let hard = settle_standard(roll(4, 4), &book, Some(5));
        assert_eq!(hard.gross_returned, 50);
        assert!(hard.next_book.is_empty());

        let easy = settle_standard(roll(2, 6), &book, Some(5));
        assert_eq!(outcome_for(&easy, BetCategory::Hard(8)).result, BetResult::Lose);
        assert!(easy.next_book.is_empty());

        let other = settle_standard(roll(2, 3), &book, Some(6));
        assert!(other.outcomes.is_empty());
        assert_eq!(other.next_book, book);
    }

    #[test]
    fn test_hardway_works_on_come_out() {
        let book = book(&[(BetCategory::Hard(10), 5)]);
        let settlement = settle_standard(roll(5, 5), &book, None);
        assert_eq!(settlement.gross_returned, 40);
        assert_eq!(settlement.next_point, Some(10));

        let settlement = settle_standard(roll(3, 4), &book, None);
        assert_eq!(settlement.gross_returned, 0);
        assert!(settlement.next_book.is_empty());
    }

    // === Accounting ===

    #[test]
    fn test_net_is_gross_minus_staked() {
        let book = book(&[
            (BetCategory::PassLine, 10),
            (BetCategory::Field, 5),
            (BetCategory::Place(6), 12),
            (BetCategory::Hard(4), 5),
            (BetCategory::AnySeven, 1),
        ]);
        let settlement = settle_standard(roll(3, 3), &book, Some(4));
        assert_eq!(
            settlement.net_change,
            settlement.gross_returned as i64 - settlement.total_staked as i64
        );
        // Field loses 5, any seven loses 1, place 6 pays 14 profit, hard 4 rides.
        assert_eq!(settlement.net_change, 8);
        assert_eq!(settlement.next_book.get(BetCategory::PassLine), 10);
        assert_eq!(settlement.next_book.get(BetCategory::Hard(4)), 5);
    }

    #[test]
    fn test_next_point_transitions() {
        assert_eq!(next_point(4, None), Some(4));
        assert_eq!(next_point(7, None), None);
        assert_eq!(next_point(12, None), None);
        assert_eq!(next_point(6, Some(6)), None);
        assert_eq!(next_point(7, Some(6)), None);
        assert_eq!(next_point(8, Some(6)), Some(6));
        assert_eq!(next_point(2, Some(6)), Some(6));
    }

    #[test]
    fn test_signed_delta_clamps() {
        assert_eq!(signed_delta(10, 4), 6);
        assert_eq!(signed_delta(4, 10), -6);
        assert_eq!(signed_delta(Chips::MAX, 0), i64::MAX);
    }
}
