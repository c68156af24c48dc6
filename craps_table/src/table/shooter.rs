//! Shooter rotation.
//!
//! The dice move to the next shooter in line after a seven-out. Each
//! shooter's turn with the dice is one hand.

use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};
use thiserror::Error;

use super::craps_table::RollReport;
use crate::game::constants::MAX_SHOOTER_NAME_LENGTH;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ShooterName(String);

impl ShooterName {
    /// Whitespace becomes `_` and long names are truncated.
    pub fn new(s: &str) -> Self {
        let mut name: String = s
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        if let Some((idx, _)) = name.char_indices().nth(MAX_SHOOTER_NAME_LENGTH) {
            name.truncate(idx);
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShooterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ShooterName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("{0} is already in the rotation")]
    AlreadySeated(ShooterName),
    #[error("{0} is not in the rotation")]
    NotSeated(ShooterName),
    #[error("shooter name can't be empty")]
    EmptyName,
}

/// Ordered queue of shooters at a table. The front of the queue holds the
/// dice.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShooterRotation {
    shooters: VecDeque<ShooterName>,
    /// Hands started at this table, counting the current one.
    hand: u64,
    rolls_this_hand: u32,
}

impl ShooterRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new shooter at the back of the line.
    ///
    /// # Errors
    ///
    /// * `RotationError::EmptyName` - the name is blank
    /// * `RotationError::AlreadySeated` - the name is taken
    pub fn join(&mut self, name: &str) -> Result<(), RotationError> {
        let name = ShooterName::new(name);
        if name.as_str().is_empty() {
            return Err(RotationError::EmptyName);
        }
        if self.shooters.contains(&name) {
            return Err(RotationError::AlreadySeated(name));
        }
        if self.shooters.is_empty() {
            self.hand += 1;
            self.rolls_this_hand = 0;
        }
        log::debug!("{name} joined the rotation");
        self.shooters.push_back(name);
        Ok(())
    }

    /// Remove a shooter. If they held the dice, the dice pass on.
    ///
    /// Returns whether the leaving shooter held the dice.
    ///
    /// # Errors
    ///
    /// `RotationError::NotSeated` if the name isn't in the rotation.
    pub fn leave(&mut self, name: &str) -> Result<bool, RotationError> {
        let name = ShooterName::new(name);
        let idx = self
            .shooters
            .iter()
            .position(|shooter| *shooter == name)
            .ok_or_else(|| RotationError::NotSeated(name.clone()))?;
        self.shooters.remove(idx);
        let had_dice = idx == 0;
        if had_dice && !self.shooters.is_empty() {
            self.hand += 1;
            self.rolls_this_hand = 0;
        }
        log::debug!("{name} left the rotation");
        Ok(had_dice)
    }

    /// Shooter holding the dice.
    pub fn current(&self) -> Option<&ShooterName> {
        self.shooters.front()
    }

    pub fn hand(&self) -> u64 {
        self.hand
    }

    pub fn rolls_this_hand(&self) -> u32 {
        self.rolls_this_hand
    }

    pub fn len(&self) -> usize {
        self.shooters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shooters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShooterName> + '_ {
        self.shooters.iter()
    }

    /// Pass the dice to the next shooter in line.
    pub fn pass_dice(&mut self) -> Option<&ShooterName> {
        if self.shooters.is_empty() {
            return None;
        }
        self.shooters.rotate_left(1);
        self.hand += 1;
        self.rolls_this_hand = 0;
        self.shooters.front()
    }

    /// Count a roll against the current hand, passing the dice on a
    /// seven-out.
    ///
    /// Returns the new shooter when the dice changed hands.
    pub fn record_roll(&mut self, report: &RollReport) -> Option<&ShooterName> {
        self.rolls_this_hand = self.rolls_this_hand.saturating_add(1);
        if !report.is_seven_out() {
            return None;
        }
        if let Some(shooter) = self.current() {
            log::info!(
                "{shooter} sevened out after {} rolls",
                self.rolls_this_hand
            );
        }
        self.pass_dice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::ScriptedDice;
    use crate::game::entities::BetCategory;
    use crate::table::{CrapsTable, TableConfig};

    fn rotation(names: &[&str]) -> ShooterRotation {
        let mut rotation = ShooterRotation::new();
        for name in names {
            rotation.join(name).unwrap();
        }
        rotation
    }

    #[test]
    fn test_shooter_name_sanitized() {
        assert_eq!(ShooterName::new(" big  al ").as_str(), "big__al");
        let long = "x".repeat(100);
        assert_eq!(
            ShooterName::new(&long).as_str().len(),
            MAX_SHOOTER_NAME_LENGTH
        );
    }

    #[test]
    fn test_join_and_duplicates() {
        let mut rotation = rotation(&["alice", "bob"]);
        assert_eq!(rotation.len(), 2);
        assert_eq!(rotation.current().map(ShooterName::as_str), Some("alice"));
        assert_eq!(rotation.hand(), 1);
        assert!(matches!(
            rotation.join("alice"),
            Err(RotationError::AlreadySeated(_))
        ));
        assert_eq!(rotation.join("  "), Err(RotationError::EmptyName));
    }

    #[test]
    fn test_pass_dice_wraps_around() {
        let mut rotation = rotation(&["alice", "bob", "carol"]);
        assert_eq!(rotation.pass_dice().map(ShooterName::as_str), Some("bob"));
        assert_eq!(rotation.pass_dice().map(ShooterName::as_str), Some("carol"));
        assert_eq!(rotation.pass_dice().map(ShooterName::as_str), Some("alice"));
        assert_eq!(rotation.hand(), 4);
    }

    #[test]
    fn test_leave_with_dice_passes_them() {
        let mut rotation = rotation(&["alice", "bob"]);
        assert_eq!(rotation.leave("alice"), Ok(true));
        assert_eq!(rotation.current().map(ShooterName::as_str), Some("bob"));
        assert_eq!(rotation.hand(), 2);
        assert_eq!(rotation.leave("carol"), Err(RotationError::NotSeated("carol".into())));
        assert_eq!(rotation.leave("bob"), Ok(true));
        assert!(rotation.is_empty());
        assert!(rotation.pass_dice().is_none());
    }

    #[test]
    fn test_leave_without_dice_keeps_shooter() {
        let mut rotation = rotation(&["alice", "bob", "carol"]);
        assert_eq!(rotation.leave("bob"), Ok(false));
        assert_eq!(rotation.current().map(ShooterName::as_str), Some("alice"));
        assert_eq!(rotation.hand(), 1);
    }

    #[test]
    fn test_dice_pass_only_on_seven_out() {
        let mut rotation = rotation(&["alice", "bob"]);
        let mut table = CrapsTable::with_balance(TableConfig::default(), 100).unwrap();
        table.add(BetCategory::PassLine, 10).unwrap();
        // Come-out 7 wins and keeps the dice; point 6, then 8, then seven-out.
        let mut dice = ScriptedDice::new([(3, 4), (3, 3), (4, 4), (5, 2)]);

        let natural = table.begin_roll(&mut dice).unwrap();
        assert!(rotation.record_roll(&natural).is_none());

        table.add(BetCategory::PassLine, 10).unwrap();
        for _ in 0..2 {
            let report = table.begin_roll(&mut dice).unwrap();
            assert!(rotation.record_roll(&report).is_none());
        }
        assert_eq!(rotation.rolls_this_hand(), 3);

        let seven_out = table.begin_roll(&mut dice).unwrap();
        assert_eq!(
            rotation.record_roll(&seven_out).map(ShooterName::as_str),
            Some("bob")
        );
        assert_eq!(rotation.rolls_this_hand(), 0);
        assert_eq!(rotation.hand(), 2);
    }
}
