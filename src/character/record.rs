//! The assembled character

use serde::Serialize;
use std::fmt;

use crate::abilities::AbilityScores;
use crate::core::types::{Ability, CharacterId};
use crate::equipment::{ItemStack, Purse};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proficiencies {
    pub saving_throws: Vec<Ability>,
    pub skills: Vec<String>,
}

/// A first-level character with resolved starting equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub species: String,
    pub class: String,
    pub background: String,
    pub level: u32,
    pub abilities: AbilityScores,
    pub max_hp: u32,
    pub armor_class: u32,
    pub speed: u32,
    pub proficiencies: Proficiencies,
    pub feat: String,
    pub traits: Vec<String>,
    pub equipment: Vec<ItemStack>,
    pub inventory: Vec<ItemStack>,
    pub purse: Purse,
}

impl fmt::Display for CharacterRecord {
    /// Plain-text character sheet
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "Level {} {} {} ({})",
            self.level, self.species, self.class, self.background
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.abilities)?;
        writeln!(
            f,
            "HP {}   AC {}   Speed {} ft",
            self.max_hp, self.armor_class, self.speed
        )?;
        writeln!(f)?;

        let saves: Vec<&str> = self
            .proficiencies
            .saving_throws
            .iter()
            .map(Ability::abbreviation)
            .collect();
        writeln!(f, "Saving throws: {}", saves.join(", "))?;
        writeln!(f, "Skills: {}", self.proficiencies.skills.join(", "))?;
        writeln!(f, "Feat: {}", self.feat)?;
        writeln!(f, "Traits: {}", self.traits.join(", "))?;
        writeln!(f)?;

        write_list(f, "Equipment", &self.equipment)?;
        write_list(f, "Inventory", &self.inventory)?;
        write!(f, "Coin: {}", self.purse)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, stacks: &[ItemStack]) -> fmt::Result {
    writeln!(f, "{}:", heading)?;
    if stacks.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for stack in stacks {
        writeln!(f, "  - {}", stack)?;
    }
    Ok(())
}
