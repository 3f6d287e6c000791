//! Resolves starting-equipment option strings into equipment, inventory and coin

use serde::{Deserialize, Serialize};

use super::currency::Purse;
use super::grammar::{parse_option, singularize, OptionToken};
use super::tally::{ItemStack, Tally};
use crate::catalog::{CatalogGroup, ItemCategory, ItemClassifier};

/// Classified, quantity-collapsed outcome of one option list
///
/// Rendered strings (`"Dagger x 2"`) are for display only; feeding them back
/// into [`resolve`] does not reproduce the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Items found in a catalog, in first-seen order
    pub equipment: Vec<ItemStack>,
    /// Items found in no catalog, in first-seen order
    pub inventory: Vec<ItemStack>,
    pub purse: Purse,
}

impl Resolution {
    pub fn equipment_labels(&self) -> Vec<String> {
        self.equipment.iter().map(ToString::to_string).collect()
    }

    pub fn inventory_labels(&self) -> Vec<String> {
        self.inventory.iter().map(ToString::to_string).collect()
    }

    /// `(equipment, inventory, gold, silver, copper)`
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, u32, u32, u32) {
        let equipment = self.equipment_labels();
        let inventory = self.inventory_labels();
        (
            equipment,
            inventory,
            self.purse.gold,
            self.purse.silver,
            self.purse.copper,
        )
    }
}

/// Resolve an option list against the catalogs
///
/// Every string is classified exactly once: currency adds to the purse,
/// catalog hits go to equipment, everything else to inventory. There is no
/// error path.
pub fn resolve<S, C>(options: &[S], classifier: &C) -> Resolution
where
    S: AsRef<str>,
    C: ItemClassifier + ?Sized,
{
    let mut equipment = Tally::new();
    let mut inventory = Tally::new();
    let mut purse = Purse::new();

    for option in options {
        let raw = option.as_ref();
        match parse_option(raw) {
            OptionToken::Currency {
                denomination,
                amount,
            } => {
                tracing::debug!("'{}' -> {} {}", raw, amount, denomination.abbreviation());
                purse.add(denomination, amount);
            }
            OptionToken::Quantified { count, item } => {
                let singular = singularize(item);
                match find_in_catalogs(classifier, &[item, singular]) {
                    Some((name, category)) => {
                        tracing::debug!("'{}' -> {} x {} ({})", raw, name, count, category);
                        equipment.add(name, count, Some(category));
                    }
                    None => {
                        tracing::debug!("'{}' -> inventory {} x {}", raw, item, count);
                        inventory.add(item, count, None);
                    }
                }
            }
            OptionToken::Single(item) => match find_in_catalogs(classifier, &[item]) {
                Some((name, category)) => {
                    tracing::debug!("'{}' -> {} ({})", raw, name, category);
                    equipment.add(name, 1, Some(category));
                }
                None => {
                    tracing::debug!("'{}' -> inventory", raw);
                    inventory.add(item, 1, None);
                }
            },
        }
    }

    Resolution {
        equipment: equipment.into_stacks(),
        inventory: inventory.into_stacks(),
        purse,
    }
}

/// First `(candidate, category)` hit, trying every candidate against the
/// armor group before any candidate against the weapon group
fn find_in_catalogs<'n, C>(classifier: &C, candidates: &[&'n str]) -> Option<(&'n str, ItemCategory)>
where
    C: ItemClassifier + ?Sized,
{
    CatalogGroup::ALL.iter().find_map(|group| {
        candidates.iter().find_map(|name| {
            classifier
                .classify_in(*group, name)
                .map(|category| (*name, category))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSet;

    fn catalogs() -> CatalogSet {
        CatalogSet::with_defaults()
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        let resolution = resolve(&empty, &catalogs());
        assert_eq!(resolution.into_parts(), (vec![], vec![], 0, 0, 0));
    }

    #[test]
    fn test_barbarian_kit() {
        let kit = ["Greataxe", "4 Handaxes", "Explorer's Pack", "15 GP"];
        let (equipment, inventory, gold, silver, copper) = resolve(&kit, &catalogs()).into_parts();
        assert_eq!(equipment, vec!["Greataxe", "Handaxe x 4"]);
        assert_eq!(inventory, vec!["Explorer's Pack"]);
        assert_eq!((gold, silver, copper), (15, 0, 0));
    }

    #[test]
    fn test_unknown_plural_keeps_written_form() {
        let resolution = resolve(&["2 Pouches"], &catalogs());
        assert!(resolution.equipment.is_empty());
        assert_eq!(resolution.inventory_labels(), vec!["Pouches x 2"]);
    }

    #[test]
    fn test_literal_name_preferred_over_singular() {
        // Both "Bolts" and "Bolt" are tried; only the singular is a key
        let resolution = resolve(&["20 Bolts"], &catalogs());
        assert_eq!(resolution.equipment_labels(), vec!["Bolt x 20"]);
        assert_eq!(resolution.equipment[0].category, Some(ItemCategory::Ammunition));
    }

    #[test]
    fn test_armor_group_beats_weapon_group_for_either_candidate() {
        // "Shields" singularizes to an armor key; a weapon key under the
        // literal name must not win over it
        let mut set = catalogs();
        let club = set.simple_weapons["Club"].clone();
        set.simple_weapons.insert("Shields".into(), club);
        let resolution = resolve(&["2 Shields"], &set);
        assert_eq!(resolution.equipment_labels(), vec!["Shield x 2"]);
        assert_eq!(resolution.equipment[0].category, Some(ItemCategory::Shield));
    }

    #[test]
    fn test_quantified_and_bare_entries_merge() {
        let resolution = resolve(&["Dagger", "2 Daggers"], &catalogs());
        assert_eq!(resolution.equipment_labels(), vec!["Dagger x 3"]);
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let resolution = resolve(&["0 Daggers", "0 Candles"], &catalogs());
        assert!(resolution.equipment.is_empty());
        assert!(resolution.inventory.is_empty());
    }

    #[test]
    fn test_currency_with_trailing_whitespace_is_coin() {
        let resolution = resolve(&["10 GP ", "Dagger "], &catalogs());
        assert_eq!(resolution.purse.gold, 10);
        // Bare names are not trimmed, so this one misses the catalog
        assert_eq!(resolution.inventory_labels(), vec!["Dagger "]);
    }

    #[test]
    fn test_oversized_amount_saturates_purse() {
        let resolution = resolve(&["4294967296 GP", "5 GP"], &catalogs());
        assert_eq!(resolution.purse.gold, u32::MAX);
        assert!(resolution.inventory.is_empty());
    }
}
