//! A single craps table: one player's bets, balance and the puck.

use serde::{Deserialize, Serialize};

use super::config::{ConfigError, TableConfig};
use crate::game::{
    bet_book::BetBook,
    constants::SEVEN,
    dice::RollSource,
    entities::{BetCategory, Chips, Phase, RollOutcome},
    errors::{BetError, RollError},
    payouts::PayoutTable,
    settlement::{self, CategoryOutcome},
    state_machine::TableStateMachine,
};

/// Everything a host needs to show and audit one roll.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RollReport {
    /// 1-based sequence number of this roll at the table.
    pub roll: u64,
    pub outcome: RollOutcome,
    /// Point in effect when the dice were thrown.
    pub previous_point: Option<u8>,
    pub next_point: Option<u8>,
    pub total_staked: Chips,
    pub gross_returned: Chips,
    pub net_change: i64,
    pub balance_after: Chips,
    /// Every bet decided by this roll, in layout order.
    pub outcomes: Vec<CategoryOutcome>,
}

impl RollReport {
    /// Bets that came off the layout this roll.
    pub fn cleared_categories(&self) -> impl Iterator<Item = &CategoryOutcome> + '_ {
        self.outcomes.iter().filter(|outcome| outcome.cleared)
    }

    #[must_use]
    pub fn was_come_out(&self) -> bool {
        self.previous_point.is_none()
    }

    /// A seven thrown with a point on. The dice pass to the next shooter.
    #[must_use]
    pub fn is_seven_out(&self) -> bool {
        self.previous_point.is_some() && self.outcome.total() == SEVEN
    }

    #[must_use]
    pub fn point_made(&self) -> bool {
        self.previous_point == Some(self.outcome.total())
    }

    #[must_use]
    pub fn point_established(&self) -> bool {
        self.previous_point.is_none() && self.next_point.is_some()
    }
}

/// One player's seat at a craps table.
///
/// Stakes stay part of `balance` until a roll settles them, so the book can
/// never hold more than the player owns.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CrapsTable {
    config: TableConfig,
    payouts: PayoutTable,
    state: TableStateMachine,
    book: BetBook,
    balance: Chips,
    rolls: u64,
}

impl CrapsTable {
    /// Create a table seated with the config's starting balance.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        let balance = config.starting_balance;
        Self::with_balance(config, balance)
    }

    /// Create a table seated with an explicit balance.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error.
    pub fn with_balance(config: TableConfig, balance: Chips) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            payouts: config.payout_table(),
            config,
            state: TableStateMachine::new(),
            book: BetBook::new(),
            balance,
            rolls: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn payouts(&self) -> &PayoutTable {
        &self.payouts
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn point(&self) -> Option<u8> {
        self.state.point()
    }

    pub fn book(&self) -> &BetBook {
        &self.book
    }

    /// Player's chips, including those staked on the layout.
    pub fn balance(&self) -> Chips {
        self.balance
    }

    /// Chips not yet committed to a bet.
    pub fn available(&self) -> Chips {
        self.balance.saturating_sub(self.book.total_staked())
    }

    pub fn total_staked(&self) -> Chips {
        self.book.total_staked()
    }

    /// Rolls settled at this table so far.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Stage `amount` on `category`, returning the category's new total.
    ///
    /// # Errors
    ///
    /// * `BetError::WrongPhase` - a roll is in flight
    /// * `BetError::InvalidCategory` / `BetError::InvalidAmount`
    /// * `BetError::BelowTableMinimum` / `BetError::AboveTableMaximum`
    /// * `BetError::InsufficientBalance` - the book would exceed the balance
    pub fn add(&mut self, category: BetCategory, amount: Chips) -> Result<Chips, BetError> {
        self.state.ensure_betting()?;
        if !category.is_valid() {
            return Err(BetError::InvalidCategory(category));
        }
        if amount == 0 {
            return Err(BetError::InvalidAmount);
        }

        let resulting = self.book.get(category).saturating_add(amount);
        if resulting < self.config.min_bet {
            return Err(BetError::BelowTableMinimum {
                category,
                min: self.config.min_bet,
            });
        }
        if resulting > self.config.max_bet {
            return Err(BetError::AboveTableMaximum {
                category,
                max: self.config.max_bet,
            });
        }

        let staked = self.book.stage(category, amount, self.balance)?;
        log::debug!("{}: {category} now {staked}", self.config.name);
        Ok(staked)
    }

    /// Take a single bet down, returning its stake.
    ///
    /// # Errors
    ///
    /// * `BetError::WrongPhase` - a roll is in flight
    /// * `BetError::ContractBet` - pass line with a point on
    /// * `BetError::NotStaged` - nothing on `category`
    pub fn remove(&mut self, category: BetCategory) -> Result<Chips, BetError> {
        self.state.ensure_betting()?;
        if self.is_contract(category) {
            return Err(BetError::ContractBet(category));
        }
        let amount = self
            .book
            .remove(category)
            .ok_or(BetError::NotStaged(category))?;
        log::debug!("{}: took down {category} {amount}", self.config.name);
        Ok(amount)
    }

    /// Reset every category to zero, pass line included.
    ///
    /// # Errors
    ///
    /// `BetError::WrongPhase` while a roll is in flight.
    pub fn clear(&mut self) -> Result<(), BetError> {
        self.state.ensure_betting()?;
        self.book.clear();
        log::debug!("{}: cleared the layout", self.config.name);
        Ok(())
    }

    /// Take down every bet a player may remove. A pass line bet with a
    /// point on stays.
    ///
    /// # Errors
    ///
    /// `BetError::WrongPhase` while a roll is in flight.
    pub fn take_down_all(&mut self) -> Result<(), BetError> {
        self.state.ensure_betting()?;
        let point_on = !self.state.is_come_out();
        self.book
            .retain(|category, _| point_on && category == BetCategory::PassLine);
        log::debug!("{}: took down all removable bets", self.config.name);
        Ok(())
    }

    /// Throw the dice and settle every bet in one step.
    ///
    /// Nothing is drawn from `source` unless the roll is accepted. If the
    /// source throws something that isn't a pair of dice, the roll is refused
    /// and the table returns to betting untouched.
    ///
    /// # Errors
    ///
    /// * `RollError::NothingStaged` / `RollError::InsufficientBalance` /
    ///   `RollError::WrongPhase` - raised before drawing
    /// * `RollError::InvalidDice` - the source misbehaved
    pub fn begin_roll<R>(&mut self, source: &mut R) -> Result<RollReport, RollError>
    where
        R: RollSource + ?Sized,
    {
        self.lock_for_roll()?;
        let (d1, d2) = source.roll();
        self.resolve_roll(d1, d2).inspect_err(|_| {
            self.state.abort_roll();
        })
    }

    /// Close betting ahead of a roll whose dice arrive later.
    ///
    /// # Errors
    ///
    /// Same pre-draw checks as [`CrapsTable::begin_roll`].
    pub fn lock_for_roll(&mut self) -> Result<(), RollError> {
        self.state
            .begin_roll(self.book.total_staked(), self.balance)
            .inspect_err(|e| log::warn!("{}: roll refused: {e}", self.config.name))
    }

    /// Settle a locked roll against the dice `(d1, d2)`.
    ///
    /// Invalid dice leave the table locked so the host can resolve again.
    ///
    /// # Errors
    ///
    /// * `RollError::WrongPhase` - no roll is locked
    /// * `RollError::InvalidDice` - a die outside `1..=6`
    pub fn resolve_roll(&mut self, d1: u8, d2: u8) -> Result<RollReport, RollError> {
        if self.state.phase() != Phase::Rolling {
            return Err(RollError::WrongPhase {
                phase: self.state.phase(),
            });
        }
        let outcome = RollOutcome::new(d1, d2)?;
        let previous_point = self.state.point();
        let settlement = settlement::settle(outcome, &self.book, previous_point, &self.payouts);

        self.state.roll_resolved(settlement.next_point)?;
        self.balance = self
            .balance
            .saturating_sub(settlement.total_staked)
            .saturating_add(settlement.gross_returned);
        self.book = settlement.next_book;
        self.rolls += 1;

        log::info!(
            "{}: roll {} {outcome} net {:+} balance {}",
            self.config.name,
            self.rolls,
            settlement.net_change,
            self.balance
        );

        Ok(RollReport {
            roll: self.rolls,
            outcome,
            previous_point,
            next_point: settlement.next_point,
            total_staked: settlement.total_staked,
            gross_returned: settlement.gross_returned,
            net_change: settlement.net_change,
            balance_after: self.balance,
            outcomes: settlement.outcomes,
        })
    }

    /// Add chips to the player's balance, e.g. a buy-in top up.
    pub fn deposit(&mut self, amount: Chips) -> Chips {
        self.balance = self.balance.saturating_add(amount);
        self.balance
    }

    /// Take chips off the table. Staked chips can't be withdrawn.
    ///
    /// # Errors
    ///
    /// * `BetError::WrongPhase` - a roll is in flight
    /// * `BetError::InvalidAmount` - `amount` is zero
    /// * `BetError::InsufficientBalance` - more than the uncommitted chips
    pub fn withdraw(&mut self, amount: Chips) -> Result<Chips, BetError> {
        self.state.ensure_betting()?;
        if amount == 0 {
            return Err(BetError::InvalidAmount);
        }
        let available = self.available();
        if amount > available {
            return Err(BetError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    fn is_contract(&self, category: BetCategory) -> bool {
        category == BetCategory::PassLine && !self.state.is_come_out()
    }
}
