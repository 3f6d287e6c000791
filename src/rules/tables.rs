//! Rules table entries: species, classes, backgrounds

use serde::{Deserialize, Serialize};

use crate::core::types::{Ability, Size};

/// One alternative starting bundle of equipment option strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingKit {
    /// Short label shown in menus ("A", "B", ...)
    pub label: String,
    /// Option strings, e.g. `["Greataxe", "4 Handaxes", "15 GP"]`
    pub items: Vec<String>,
}

impl StartingKit {
    pub fn new(label: &str, items: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Menu line: `"A: Greataxe, 4 Handaxes, 15 GP"`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.label, self.items.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub name: String,
    pub size: Size,
    /// Walking speed in feet
    pub speed: u32,
    #[serde(default)]
    pub traits: Vec<String>,
    /// Extra hit points per level (Dwarven Toughness)
    #[serde(default)]
    pub hit_point_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    /// Hit die size, e.g. 12 for d12
    pub hit_die: u32,
    pub primary_ability: Ability,
    pub saving_throws: Vec<Ability>,
    /// Skills the class may pick from
    pub skill_choices: Vec<String>,
    /// How many of `skill_choices` are picked
    pub skill_count: usize,
    pub starting_kits: Vec<StartingKit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundDef {
    pub name: String,
    /// The three abilities the background may raise
    pub ability_options: Vec<Ability>,
    /// Skill proficiencies granted outright
    pub skills: Vec<String>,
    /// Origin feat
    pub feat: String,
    pub starting_kits: Vec<StartingKit>,
}
