//! Stats derived from the assembled choices

use crate::catalog::{CatalogSet, ItemCategory};
use crate::equipment::ItemStack;

/// Unarmored base AC
const UNARMORED_AC: i32 = 10;

/// First-level hit points: full hit die plus CON modifier, at least 1, plus species bonus
pub fn max_hit_points(hit_die: u32, con_modifier: i32, species_bonus: u32) -> u32 {
    let hit_die = i32::try_from(hit_die).unwrap_or(i32::MAX);
    let base = hit_die.saturating_add(con_modifier).max(1) as u32;
    base.saturating_add(species_bonus)
}

/// Best AC the equipment allows
///
/// Body armor replaces the unarmored formula, a shield adds its bonus on
/// top. Heavy armor (Dex cap 0) ignores the Dexterity modifier entirely.
pub fn armor_class(equipment: &[ItemStack], catalogs: &CatalogSet, dex_modifier: i32) -> u32 {
    let mut best = UNARMORED_AC + dex_modifier;

    for stack in equipment {
        let Some(category) = stack.category.filter(ItemCategory::is_body_armor) else {
            continue;
        };
        let Some(stats) = catalogs.armor(category, &stack.name) else {
            continue;
        };
        let dex = match stats.dex_cap {
            Some(0) => 0,
            Some(cap) => dex_modifier.min(i32::from(cap)),
            None => dex_modifier,
        };
        best = best.max(i32::from(stats.base_ac) + dex);
    }

    let shield = equipment
        .iter()
        .filter(|s| s.category == Some(ItemCategory::Shield))
        .filter_map(|s| catalogs.armor(ItemCategory::Shield, &s.name))
        .map(|stats| i32::from(stats.base_ac))
        .max()
        .unwrap_or(0);

    (best + shield).max(0) as u32
}
