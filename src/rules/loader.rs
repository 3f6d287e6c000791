//! Load rules tables from the data directory

use std::fs;
use std::path::Path;

use super::registry::RulesRegistry;
use crate::core::error::Result;

/// File name looked up inside the configured data directory
pub const RULES_FILE: &str = "rules.toml";

/// Built-in tables, extended by `rules.toml` from the data directory when present
pub fn load_rules(data_dir: Option<&Path>) -> Result<RulesRegistry> {
    let mut registry = RulesRegistry::with_defaults();

    let Some(dir) = data_dir else {
        return Ok(registry);
    };

    let path = dir.join(RULES_FILE);
    if !path.exists() {
        tracing::warn!("No {} in {}, using built-in rules", RULES_FILE, dir.display());
        return Ok(registry);
    }

    let content = fs::read_to_string(&path)?;
    let extra = RulesRegistry::parse_toml(&content)?;
    tracing::debug!(
        "Merging {} species, {} classes, {} backgrounds from {}",
        extra.species.len(),
        extra.classes.len(),
        extra.backgrounds.len(),
        path.display()
    );
    registry.merge(extra);

    Ok(registry)
}
