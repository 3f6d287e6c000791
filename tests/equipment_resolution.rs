//! Starting-equipment resolution integration tests

use std::collections::HashMap;

use charforge::catalog::{CatalogSet, ItemCategory, ItemClassifier};
use charforge::equipment::{resolve, Purse, Resolution};
use proptest::prelude::*;

/// Classifier over a fixed name table
struct Fixture(HashMap<&'static str, ItemCategory>);

impl Fixture {
    fn new(entries: &[(&'static str, ItemCategory)]) -> Self {
        Self(entries.iter().copied().collect())
    }
}

impl ItemClassifier for Fixture {
    fn contains(&self, category: ItemCategory, name: &str) -> bool {
        self.0.get(name) == Some(&category)
    }
}

fn srd() -> CatalogSet {
    CatalogSet::with_defaults()
}

#[test]
fn test_empty_options() {
    let parts = resolve::<&str, _>(&[], &srd()).into_parts();
    assert_eq!(parts, (vec![], vec![], 0, 0, 0));
}

#[test]
fn test_mixed_list() {
    let parts = resolve(&["Leather Armor", "2 Daggers", "Holy Symbol", "8 GP"], &srd()).into_parts();
    assert_eq!(
        parts,
        (
            vec!["Leather Armor".to_string(), "Dagger x 2".to_string()],
            vec!["Holy Symbol".to_string()],
            8,
            0,
            0
        )
    );
}

#[test]
fn test_currency_adds_per_denomination() {
    let resolution = resolve(&["8 GP", "15 GP", "3 SP", "30 CP", "2 SP"], &srd());
    assert_eq!(
        resolution.purse,
        Purse {
            gold: 23,
            silver: 5,
            copper: 30
        }
    );
    assert!(resolution.equipment.is_empty());
    assert!(resolution.inventory.is_empty());
}

#[test]
fn test_quantity_collapse() {
    let resolution = resolve(&["Dagger", "Dagger", "Dagger"], &srd());
    assert_eq!(resolution.equipment_labels(), vec!["Dagger x 3"]);
}

#[test]
fn test_collapse_across_forms() {
    let resolution = resolve(&["Dagger", "2 Daggers", "Javelin"], &srd());
    assert_eq!(resolution.equipment_labels(), vec!["Dagger x 3", "Javelin"]);
}

#[test]
fn test_plural_quantity_uses_singular_key() {
    let resolution = resolve(&["4 Handaxes"], &srd());
    assert_eq!(resolution.equipment_labels(), vec!["Handaxe x 4"]);
    assert_eq!(
        resolution.equipment[0].category,
        Some(ItemCategory::SimpleWeapon)
    );
}

#[test]
fn test_ammunition_bundle() {
    let resolution = resolve(&["Light Crossbow", "20 Bolts"], &srd());
    assert_eq!(
        resolution.equipment_labels(),
        vec!["Light Crossbow", "Bolt x 20"]
    );
}

#[test]
fn test_double_s_is_not_singularized() {
    let brass = Fixture::new(&[("Brass", ItemCategory::LightArmor)]);
    let resolution = resolve(&["2 Brass"], &brass);
    assert_eq!(resolution.equipment_labels(), vec!["Brass x 2"]);

    // "Bras" is never tried
    let bras = Fixture::new(&[("Bras", ItemCategory::LightArmor)]);
    let resolution = resolve(&["2 Brass"], &bras);
    assert!(resolution.equipment.is_empty());
    assert_eq!(resolution.inventory_labels(), vec!["Brass x 2"]);
}

#[test]
fn test_unknown_item_goes_to_inventory() {
    let resolution = resolve(&["Holy Symbol"], &srd());
    assert!(resolution.equipment.is_empty());
    assert_eq!(resolution.inventory_labels(), vec!["Holy Symbol"]);
}

#[test]
fn test_unknown_quantified_keeps_written_name() {
    let resolution = resolve(&["2 Pouches", "Pouches"], &srd());
    assert_eq!(resolution.inventory_labels(), vec!["Pouches x 3"]);
}

#[test]
fn test_armor_group_wins_over_weapons() {
    let fixture = Fixture::new(&[
        ("Spiked Shield", ItemCategory::Shield),
        ("Spiked Shields", ItemCategory::MartialWeapon),
    ]);
    // The singular armor key beats the plural weapon key
    let resolution = resolve(&["2 Spiked Shields"], &fixture);
    assert_eq!(resolution.equipment_labels(), vec!["Spiked Shield x 2"]);
    assert_eq!(resolution.equipment[0].category, Some(ItemCategory::Shield));
}

#[test]
fn test_currency_needs_exact_suffix() {
    let resolution = resolve(&["10 gp", "5 PP", "GP"], &srd());
    assert!(resolution.purse.is_empty());
    assert_eq!(resolution.inventory_labels(), vec!["gp x 10", "PP x 5", "GP"]);
}

#[test]
fn test_first_seen_order() {
    let resolution = resolve(
        &["Shield", "Mace", "Rope", "Chain Shirt", "Mace", "Torch", "Rope"],
        &srd(),
    );
    assert_eq!(
        resolution.equipment_labels(),
        vec!["Shield", "Mace x 2", "Chain Shirt"]
    );
    assert_eq!(resolution.inventory_labels(), vec!["Rope x 2", "Torch"]);
}

#[test]
fn test_rendered_strings_do_not_round_trip() {
    let first = resolve(&["Dagger", "Dagger"], &srd());
    let again = resolve(&first.equipment_labels(), &srd());
    // "Dagger x 2" is not a catalog key and carries no quantity prefix
    assert!(again.equipment.is_empty());
    assert_eq!(again.inventory_labels(), vec!["Dagger x 2"]);
}

#[test]
fn test_resolution_serializes() {
    let resolution = resolve(&["Shield", "5 SP"], &srd());
    let json = serde_json::to_string(&resolution).unwrap();
    let back: Resolution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resolution);
}

const DENOMINATIONS: [&str; 3] = ["GP", "SP", "CP"];

const NAMES: [&str; 6] = ["Dagger", "Mace", "Shield", "Rope", "Torch", "Chain Mail"];

proptest! {
    #[test]
    fn prop_currency_is_additive(grants in prop::collection::vec((0usize..3, 0u32..10_000), 0..20)) {
        let options: Vec<String> = grants
            .iter()
            .map(|(d, amount)| format!("{} {}", amount, DENOMINATIONS[*d]))
            .collect();

        let mut expected = [0u32; 3];
        for (d, amount) in &grants {
            expected[*d] += amount;
        }

        let purse = resolve(&options, &srd()).purse;
        prop_assert_eq!([purse.gold, purse.silver, purse.copper], expected);
    }

    #[test]
    fn prop_repeats_collapse(picks in prop::collection::vec(0usize..6, 0..30)) {
        let catalogs = srd();
        let options: Vec<&str> = picks.iter().map(|i| NAMES[*i]).collect();
        let resolution = resolve(&options, &catalogs);

        let mut first_seen: Vec<&str> = Vec::new();
        for name in &options {
            if !first_seen.contains(name) {
                first_seen.push(name);
            }
        }

        let stacks: Vec<_> = resolution.equipment.iter().chain(&resolution.inventory).collect();
        prop_assert_eq!(stacks.len(), first_seen.len());
        for stack in stacks {
            let occurrences = options.iter().filter(|n| **n == stack.name).count();
            prop_assert_eq!(stack.count as usize, occurrences);
        }

        let equipment_order: Vec<&str> = first_seen
            .iter()
            .copied()
            .filter(|n| catalogs.classify(n).is_some())
            .collect();
        let names: Vec<&str> = resolution.equipment.iter().map(|s| s.name.as_str()).collect();
        prop_assert_eq!(names, equipment_order);
    }
}
