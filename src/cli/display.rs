//! Text rendering for CLI output

use std::fmt::Write;

use crate::catalog::{CatalogSet, ItemCategory};
use crate::equipment::{ItemStack, Resolution};
use crate::rules::RulesRegistry;

/// Equipment, inventory and coin, one section each
pub fn render_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    render_stacks(&mut out, "Equipment", &resolution.equipment, true);
    render_stacks(&mut out, "Inventory", &resolution.inventory, false);
    let _ = writeln!(out, "Coin: {}", resolution.purse);
    out
}

fn render_stacks(out: &mut String, heading: &str, stacks: &[ItemStack], with_category: bool) {
    let _ = writeln!(out, "{}:", heading);
    if stacks.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for stack in stacks {
        match stack.category {
            Some(category) if with_category => {
                let _ = writeln!(out, "  {:<28} {}", stack.to_string(), category);
            }
            _ => {
                let _ = writeln!(out, "  {}", stack);
            }
        }
    }
}

pub fn render_species(registry: &RulesRegistry) -> String {
    let mut out = String::new();
    for species in &registry.species {
        let _ = writeln!(
            out,
            "{:<12} {:<7} {:>2} ft  {}",
            species.name,
            species.size.to_string(),
            species.speed,
            species.traits.join(", ")
        );
    }
    out
}

pub fn render_classes(registry: &RulesRegistry) -> String {
    let mut out = String::new();
    for class in &registry.classes {
        let saves: Vec<&str> = class.saving_throws.iter().map(|a| a.abbreviation()).collect();
        let _ = writeln!(
            out,
            "{:<10} d{:<3} {:<13} saves {}",
            class.name,
            class.hit_die,
            class.primary_ability.name(),
            saves.join("/")
        );
        for kit in &class.starting_kits {
            let _ = writeln!(out, "    {}", kit.summary());
        }
    }
    out
}

pub fn render_backgrounds(registry: &RulesRegistry) -> String {
    let mut out = String::new();
    for background in &registry.backgrounds {
        let abilities: Vec<&str> = background
            .ability_options
            .iter()
            .map(|a| a.abbreviation())
            .collect();
        let _ = writeln!(
            out,
            "{:<10} {:<12} {} | {}",
            background.name,
            abilities.join("/"),
            background.skills.join(", "),
            background.feat
        );
        for kit in &background.starting_kits {
            let _ = writeln!(out, "    {}", kit.summary());
        }
    }
    out
}

/// Every catalog, in classification order
pub fn render_items(catalogs: &CatalogSet) -> String {
    let mut out = String::new();
    for category in ItemCategory::CHECK_ORDER {
        let names = catalogs.names(category);
        let _ = writeln!(out, "{} ({}):", category, names.len());
        for name in names {
            let detail = match category {
                ItemCategory::LightArmor
                | ItemCategory::MediumArmor
                | ItemCategory::HeavyArmor
                | ItemCategory::Shield => catalogs
                    .armor(category, name)
                    .map(|stats| format!("AC {}", stats.base_ac)),
                ItemCategory::SimpleWeapon | ItemCategory::MartialWeapon => catalogs
                    .weapon(name)
                    .map(|stats| format!("{} {}", stats.damage, stats.damage_type)),
                ItemCategory::Ammunition => None,
            };
            match detail {
                Some(detail) => {
                    let _ = writeln!(out, "  {:<24} {}", name, detail);
                }
                None => {
                    let _ = writeln!(out, "  {}", name);
                }
            }
        }
    }
    out
}
