//! Read-only registry of the rules tables

use serde::{Deserialize, Serialize};

use super::defaults;
use super::tables::{BackgroundDef, ClassDef, SpeciesDef};
use crate::core::error::Result;

/// Species, classes and backgrounds, built once at start-up
///
/// Lookups by name ignore ASCII case. Table order is preserved for menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesRegistry {
    pub species: Vec<SpeciesDef>,
    pub classes: Vec<ClassDef>,
    pub backgrounds: Vec<BackgroundDef>,
}

impl RulesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self {
            species: defaults::species(),
            classes: defaults::classes(),
            backgrounds: defaults::backgrounds(),
        }
    }

    /// Parse tables from TOML (`[[species]]`, `[[classes]]`, `[[backgrounds]]`)
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Add every entry of `other`; an entry whose name already exists replaces it in place
    pub fn merge(&mut self, other: RulesRegistry) {
        merge_by_name(&mut self.species, other.species, |s| &s.name);
        merge_by_name(&mut self.classes, other.classes, |c| &c.name);
        merge_by_name(&mut self.backgrounds, other.backgrounds, |b| &b.name);
    }

    pub fn find_species(&self, name: &str) -> Option<&SpeciesDef> {
        self.species.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn find_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn find_background(&self, name: &str) -> Option<&BackgroundDef> {
        self.backgrounds
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }
}

fn merge_by_name<T>(existing: &mut Vec<T>, incoming: Vec<T>, name: impl Fn(&T) -> &String) {
    for entry in incoming {
        match existing
            .iter()
            .position(|e| name(e).eq_ignore_ascii_case(name(&entry)))
        {
            Some(slot) => existing[slot] = entry,
            None => existing.push(entry),
        }
    }
}
