//! Staged wagers keyed by category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entities::{BetCategory, Chips};
use super::errors::BetError;

/// A single staged wager, used for the book's wire form.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BetEntry {
    pub category: BetCategory,
    pub amount: Chips,
}

/// Every wager currently on the layout.
///
/// Adding to a category that already holds chips merges into it, so staging
/// 5 on the field twice is the same as staging 10 once. Zero amounts are
/// never stored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "Vec<BetEntry>", into = "Vec<BetEntry>")]
pub struct BetBook {
    bets: BTreeMap<BetCategory, Chips>,
}

impl BetBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `amount` into `category`, refusing to let the book's total
    /// exceed `available`.
    ///
    /// Returns the category's new staged amount.
    ///
    /// # Errors
    ///
    /// * `BetError::InvalidCategory` - `Place`/`Hard` on a number they can't ride
    /// * `BetError::InvalidAmount` - `amount` is zero
    /// * `BetError::InsufficientBalance` - the book would exceed `available`
    pub fn stage(
        &mut self,
        category: BetCategory,
        amount: Chips,
        available: Chips,
    ) -> Result<Chips, BetError> {
        if !category.is_valid() {
            return Err(BetError::InvalidCategory(category));
        }
        if amount == 0 {
            return Err(BetError::InvalidAmount);
        }
        let required = self
            .total_staked()
            .checked_add(amount)
            .ok_or(BetError::InsufficientBalance {
                available,
                required: Chips::MAX,
            })?;
        if required > available {
            return Err(BetError::InsufficientBalance {
                available,
                required,
            });
        }

        let staked = self.bets.entry(category).or_insert(0);
        *staked += amount;
        Ok(*staked)
    }

    /// Takes a bet down, returning what was staged on it.
    pub fn remove(&mut self, category: BetCategory) -> Option<Chips> {
        self.bets.remove(&category)
    }

    pub fn clear(&mut self) {
        self.bets.clear();
    }

    /// Drops every bet for which `keep` returns false.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(BetCategory, Chips) -> bool,
    {
        self.bets.retain(|category, amount| keep(*category, *amount));
    }

    /// Amount staged on `category`; zero if nothing is.
    #[must_use]
    pub fn get(&self, category: BetCategory) -> Chips {
        self.bets.get(&category).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, category: BetCategory) -> bool {
        self.bets.contains_key(&category)
    }

    #[must_use]
    pub fn total_staked(&self) -> Chips {
        self.bets
            .values()
            .fold(0, |total: Chips, amount| total.saturating_add(*amount))
    }

    /// Staged bets in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (BetCategory, Chips)> + '_ {
        self.bets.iter().map(|(category, amount)| (*category, *amount))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

impl From<Vec<BetEntry>> for BetBook {
    fn from(entries: Vec<BetEntry>) -> Self {
        let mut bets = BTreeMap::new();
        for entry in entries
            .into_iter()
            .filter(|entry| entry.amount > 0 && entry.category.is_valid())
        {
            let staked: &mut Chips = bets.entry(entry.category).or_insert(0);
            *staked = staked.saturating_add(entry.amount);
        }
        Self { bets }
    }
}

impl From<BetBook> for Vec<BetEntry> {
    fn from(book: BetBook) -> Self {
        book.iter()
            .map(|(category, amount)| BetEntry { category, amount })
            .collect()
    }
}
