//! Ability score block

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Ability;

/// Highest score a starting character may have
pub const MAX_SCORE: u8 = 20;

/// Ability modifier for a score: floor((score - 10) / 2)
pub fn modifier(score: u8) -> i32 {
    (i32::from(score) - 10).div_euclid(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AbilityScores {
    /// Scores in `Ability::ALL` order
    pub fn from_array(values: [u8; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = values;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn to_array(&self) -> [u8; 6] {
        Ability::ALL.map(|ability| self.get(ability))
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, value: u8) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier(self.get(ability))
    }
}

impl fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Ability::ALL
            .iter()
            .map(|a| format!("{} {} ({:+})", a.abbreviation(), self.get(*a), self.modifier(*a)))
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}
