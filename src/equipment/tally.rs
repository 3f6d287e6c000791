//! Quantity collapse for item lists

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::ItemCategory;

/// One collapsed item entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub name: String,
    pub count: u32,
    /// Catalog the name was found in; None for inventory
    pub category: Option<ItemCategory>,
}

impl fmt::Display for ItemStack {
    /// `"<name>"` for a single item, `"<name> x <count>"` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} x {}", self.name, self.count)
        }
    }
}

/// Counts items by name, keeping the order names were first seen
#[derive(Debug, Clone, Default)]
pub struct Tally {
    stacks: Vec<ItemStack>,
    /// name -> position in `stacks`
    index: AHashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` more of `name`; a zero count records nothing
    pub fn add(&mut self, name: &str, count: u32, category: Option<ItemCategory>) {
        if count == 0 {
            return;
        }
        match self.index.get(name) {
            Some(&slot) => {
                let stack = &mut self.stacks[slot];
                stack.count = stack.count.saturating_add(count);
            }
            None => {
                self.index.insert(name.to_string(), self.stacks.len());
                self.stacks.push(ItemStack {
                    name: name.to_string(),
                    count,
                    category,
                });
            }
        }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map(|&slot| self.stacks[slot].count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn into_stacks(self) -> Vec<ItemStack> {
        self.stacks
    }
}
