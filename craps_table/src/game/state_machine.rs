//! Table phase and point tracking.
//!
//! The table cycles `Betting -> Rolling -> Resolving -> Betting`. The point
//! is orthogonal to the phase and only moves when a roll resolves.

use serde::{Deserialize, Serialize};

use super::constants;
use super::entities::{Chips, Phase};
use super::errors::{BetError, RollError};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableStateMachine {
    phase: Phase,
    point: Option<u8>,
}

impl TableStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `None` while the point is off.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.point
    }

    /// The next roll is a come-out roll.
    #[must_use]
    pub fn is_come_out(&self) -> bool {
        self.point.is_none()
    }

    /// Fails unless bets may currently be changed.
    pub fn ensure_betting(&self) -> Result<(), BetError> {
        match self.phase {
            Phase::Betting => Ok(()),
            phase => Err(BetError::WrongPhase { phase }),
        }
    }

    /// `Betting -> Rolling`.
    ///
    /// # Errors
    ///
    /// * `RollError::WrongPhase` - a roll is already in flight
    /// * `RollError::NothingStaged` - `total_staked` is zero
    /// * `RollError::InsufficientBalance` - stakes exceed `balance`
    pub fn begin_roll(&mut self, total_staked: Chips, balance: Chips) -> Result<(), RollError> {
        if self.phase != Phase::Betting {
            return Err(RollError::WrongPhase { phase: self.phase });
        }
        if total_staked == 0 {
            return Err(RollError::NothingStaged);
        }
        if total_staked > balance {
            return Err(RollError::InsufficientBalance {
                available: balance,
                required: total_staked,
            });
        }
        self.phase = Phase::Rolling;
        log::debug!("dice out, point {:?}", self.point);
        Ok(())
    }

    /// `Rolling -> Resolving -> Betting`, moving the point to `next_point`.
    ///
    /// A `next_point` that isn't a point number turns the point off.
    ///
    /// # Errors
    ///
    /// `RollError::WrongPhase` unless a roll is in flight.
    pub fn roll_resolved(&mut self, next_point: Option<u8>) -> Result<(), RollError> {
        if self.phase != Phase::Rolling {
            return Err(RollError::WrongPhase { phase: self.phase });
        }
        self.phase = Phase::Resolving;

        let next_point = next_point.filter(|p| constants::is_point_number(*p));
        match (self.point, next_point) {
            (None, Some(p)) => log::info!("point is {p}"),
            (Some(p), None) => log::info!("point {p} resolved, puck off"),
            _ => {}
        }
        self.point = next_point;
        self.phase = Phase::Betting;
        Ok(())
    }

    /// `Rolling -> Betting` without touching the point. Used when a roll is
    /// refused before anything was settled.
    pub(crate) fn abort_roll(&mut self) {
        if self.phase == Phase::Rolling {
            self.phase = Phase::Betting;
        }
    }
}
