//! Coin denominations and the purse that accumulates them

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    Gold,
    Silver,
    Copper,
}

impl Denomination {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Denomination::Gold => "GP",
            Denomination::Silver => "SP",
            Denomination::Copper => "CP",
        }
    }

    /// Worth of one coin in copper pieces
    pub fn copper_value(&self) -> u64 {
        match self {
            Denomination::Gold => 100,
            Denomination::Silver => 10,
            Denomination::Copper => 1,
        }
    }
}

/// Coin totals; every grant adds, nothing overwrites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purse {
    pub gold: u32,
    pub silver: u32,
    pub copper: u32,
}

impl Purse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, denomination: Denomination, amount: u32) {
        let slot = match denomination {
            Denomination::Gold => &mut self.gold,
            Denomination::Silver => &mut self.silver,
            Denomination::Copper => &mut self.copper,
        };
        *slot = slot.saturating_add(amount);
    }

    pub fn get(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Gold => self.gold,
            Denomination::Silver => self.silver,
            Denomination::Copper => self.copper,
        }
    }

    /// Whole purse expressed in copper pieces
    pub fn total_copper(&self) -> u64 {
        [Denomination::Gold, Denomination::Silver, Denomination::Copper]
            .iter()
            .map(|d| u64::from(self.get(*d)) * d.copper_value())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.silver == 0 && self.copper == 0
    }
}

impl fmt::Display for Purse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0 GP");
        }
        let parts: Vec<String> = [Denomination::Gold, Denomination::Silver, Denomination::Copper]
            .iter()
            .filter(|d| self.get(**d) > 0)
            .map(|d| format!("{} {}", self.get(*d), d.abbreviation()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
