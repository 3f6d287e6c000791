//! The armor, weapon and ammunition catalogs as one read-only set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::classifier::ItemClassifier;
use super::items::{AmmunitionStats, ArmorStats, DamageType, ItemCategory, WeaponProperty, WeaponStats};
use crate::core::error::Result;

/// Name-keyed catalog
pub type Catalog<T> = BTreeMap<String, T>;

/// File name looked up inside the configured data directory
pub const CATALOGS_FILE: &str = "catalogs.toml";

/// All item catalogs, built once at start-up and never mutated afterwards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSet {
    pub light_armor: Catalog<ArmorStats>,
    pub medium_armor: Catalog<ArmorStats>,
    pub heavy_armor: Catalog<ArmorStats>,
    pub shields: Catalog<ArmorStats>,
    pub simple_weapons: Catalog<WeaponStats>,
    pub martial_weapons: Catalog<WeaponStats>,
    pub ammunition: Catalog<AmmunitionStats>,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Armor and weapon tables from the basic rules
    pub fn with_defaults() -> Self {
        use DamageType::*;
        use WeaponProperty::*;

        let mut set = Self::new();

        for (name, base_ac, stealth) in [
            ("Padded Armor", 11, true),
            ("Leather Armor", 11, false),
            ("Studded Leather Armor", 12, false),
        ] {
            set.light_armor.insert(name.into(), armor(base_ac, None, None, stealth));
        }

        for (name, base_ac, stealth) in [
            ("Hide Armor", 12, false),
            ("Chain Shirt", 13, false),
            ("Scale Mail", 14, true),
            ("Breastplate", 14, false),
            ("Half Plate Armor", 15, true),
        ] {
            set.medium_armor.insert(name.into(), armor(base_ac, Some(2), None, stealth));
        }

        for (name, base_ac, strength) in [
            ("Ring Mail", 14, None),
            ("Chain Mail", 16, Some(13)),
            ("Splint Armor", 17, Some(15)),
            ("Plate Armor", 18, Some(15)),
        ] {
            set.heavy_armor.insert(name.into(), armor(base_ac, Some(0), strength, true));
        }

        set.shields.insert("Shield".into(), armor(2, None, None, false));

        let simple: [(&str, &str, DamageType, &[WeaponProperty]); 14] = [
            ("Club", "1d4", Bludgeoning, &[Light]),
            ("Dagger", "1d4", Piercing, &[Finesse, Light, Thrown]),
            ("Greatclub", "1d8", Bludgeoning, &[TwoHanded]),
            ("Handaxe", "1d6", Slashing, &[Light, Thrown]),
            ("Javelin", "1d6", Piercing, &[Thrown]),
            ("Light Hammer", "1d4", Bludgeoning, &[Light, Thrown]),
            ("Mace", "1d6", Bludgeoning, &[]),
            ("Quarterstaff", "1d6", Bludgeoning, &[Versatile]),
            ("Sickle", "1d4", Slashing, &[Light]),
            ("Spear", "1d6", Piercing, &[Thrown, Versatile]),
            ("Dart", "1d4", Piercing, &[Finesse, Thrown]),
            ("Light Crossbow", "1d8", Piercing, &[Ammunition, Loading, TwoHanded]),
            ("Shortbow", "1d6", Piercing, &[Ammunition, TwoHanded]),
            ("Sling", "1d4", Bludgeoning, &[Ammunition]),
        ];
        for (name, damage, damage_type, properties) in simple {
            set.simple_weapons.insert(name.into(), weapon(damage, damage_type, properties));
        }

        let martial: [(&str, &str, DamageType, &[WeaponProperty]); 24] = [
            ("Battleaxe", "1d8", Slashing, &[Versatile]),
            ("Flail", "1d8", Bludgeoning, &[]),
            ("Glaive", "1d10", Slashing, &[Heavy, Reach, TwoHanded]),
            ("Greataxe", "1d12", Slashing, &[Heavy, TwoHanded]),
            ("Greatsword", "2d6", Slashing, &[Heavy, TwoHanded]),
            ("Halberd", "1d10", Slashing, &[Heavy, Reach, TwoHanded]),
            ("Lance", "1d10", Piercing, &[Heavy, Reach]),
            ("Longsword", "1d8", Slashing, &[Versatile]),
            ("Maul", "2d6", Bludgeoning, &[Heavy, TwoHanded]),
            ("Morningstar", "1d8", Piercing, &[]),
            ("Pike", "1d10", Piercing, &[Heavy, Reach, TwoHanded]),
            ("Rapier", "1d8", Piercing, &[Finesse]),
            ("Scimitar", "1d6", Slashing, &[Finesse, Light]),
            ("Shortsword", "1d6", Piercing, &[Finesse, Light]),
            ("Trident", "1d8", Piercing, &[Thrown, Versatile]),
            ("Warhammer", "1d8", Bludgeoning, &[Versatile]),
            ("War Pick", "1d8", Piercing, &[Versatile]),
            ("Whip", "1d4", Slashing, &[Finesse, Reach]),
            ("Blowgun", "1", Piercing, &[Ammunition, Loading]),
            ("Hand Crossbow", "1d6", Piercing, &[Ammunition, Light, Loading]),
            ("Heavy Crossbow", "1d10", Piercing, &[Ammunition, Heavy, Loading, TwoHanded]),
            ("Longbow", "1d8", Piercing, &[Ammunition, Heavy, TwoHanded]),
            ("Musket", "1d12", Piercing, &[Ammunition, Loading, TwoHanded]),
            ("Pistol", "1d10", Piercing, &[Ammunition, Loading]),
        ];
        for (name, damage, damage_type, properties) in martial {
            set.martial_weapons.insert(name.into(), weapon(damage, damage_type, properties));
        }

        for (name, bundle) in [
            ("Arrow", 20),
            ("Bolt", 20),
            ("Firearm Bullet", 10),
            ("Needle", 50),
            ("Sling Bullet", 20),
        ] {
            set.ammunition.insert(name.into(), AmmunitionStats { bundle });
        }

        set
    }

    /// Parse catalogs from TOML, e.g. `[light_armor."Leather Armor"]` tables
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load catalogs from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Add every entry of `other`, replacing same-named entries
    pub fn merge(&mut self, other: CatalogSet) {
        self.light_armor.extend(other.light_armor);
        self.medium_armor.extend(other.medium_armor);
        self.heavy_armor.extend(other.heavy_armor);
        self.shields.extend(other.shields);
        self.simple_weapons.extend(other.simple_weapons);
        self.martial_weapons.extend(other.martial_weapons);
        self.ammunition.extend(other.ammunition);
    }

    /// Armor or shield stats for an item of the given category
    pub fn armor(&self, category: ItemCategory, name: &str) -> Option<&ArmorStats> {
        match category {
            ItemCategory::LightArmor => self.light_armor.get(name),
            ItemCategory::MediumArmor => self.medium_armor.get(name),
            ItemCategory::HeavyArmor => self.heavy_armor.get(name),
            ItemCategory::Shield => self.shields.get(name),
            _ => None,
        }
    }

    /// Weapon stats from either weapon catalog
    pub fn weapon(&self, name: &str) -> Option<&WeaponStats> {
        self.simple_weapons
            .get(name)
            .or_else(|| self.martial_weapons.get(name))
    }

    /// Item names of one catalog, sorted
    pub fn names(&self, category: ItemCategory) -> Vec<&str> {
        let keys: Box<dyn Iterator<Item = &String> + '_> = match category {
            ItemCategory::LightArmor => Box::new(self.light_armor.keys()),
            ItemCategory::MediumArmor => Box::new(self.medium_armor.keys()),
            ItemCategory::HeavyArmor => Box::new(self.heavy_armor.keys()),
            ItemCategory::Shield => Box::new(self.shields.keys()),
            ItemCategory::SimpleWeapon => Box::new(self.simple_weapons.keys()),
            ItemCategory::MartialWeapon => Box::new(self.martial_weapons.keys()),
            ItemCategory::Ammunition => Box::new(self.ammunition.keys()),
        };
        keys.map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        ItemCategory::CHECK_ORDER
            .iter()
            .map(|category| self.names(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ItemClassifier for CatalogSet {
    fn contains(&self, category: ItemCategory, name: &str) -> bool {
        match category {
            ItemCategory::LightArmor => self.light_armor.contains_key(name),
            ItemCategory::MediumArmor => self.medium_armor.contains_key(name),
            ItemCategory::HeavyArmor => self.heavy_armor.contains_key(name),
            ItemCategory::Shield => self.shields.contains_key(name),
            ItemCategory::SimpleWeapon => self.simple_weapons.contains_key(name),
            ItemCategory::MartialWeapon => self.martial_weapons.contains_key(name),
            ItemCategory::Ammunition => self.ammunition.contains_key(name),
        }
    }
}

/// Built-in catalogs, extended by `catalogs.toml` from the data directory when present
pub fn load_catalogs(data_dir: Option<&Path>) -> Result<CatalogSet> {
    let mut catalogs = CatalogSet::with_defaults();

    if let Some(dir) = data_dir {
        let path = dir.join(CATALOGS_FILE);
        if path.is_file() {
            let extra = CatalogSet::load_from_toml(&path)?;
            tracing::debug!("Merging {} catalog entries from {}", extra.len(), path.display());
            catalogs.merge(extra);
        } else {
            tracing::warn!("No {} in {}, using built-in catalogs", CATALOGS_FILE, dir.display());
        }
    }

    Ok(catalogs)
}

fn armor(base_ac: u8, dex_cap: Option<u8>, strength_req: Option<u8>, stealth: bool) -> ArmorStats {
    ArmorStats {
        base_ac,
        dex_cap,
        strength_req,
        stealth_disadvantage: stealth,
    }
}

fn weapon(damage: &str, damage_type: DamageType, properties: &[WeaponProperty]) -> WeaponStats {
    WeaponStats {
        damage: damage.to_string(),
        damage_type,
        properties: properties.to_vec(),
    }
}
