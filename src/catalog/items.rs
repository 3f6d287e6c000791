//! Item stat blocks and catalog categories
//!
//! Armor and weapons are described the way the rules tables print them.
//! The equipment resolver never reads these fields; it only asks which
//! catalog a name belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which catalog an item name was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    LightArmor,
    MediumArmor,
    HeavyArmor,
    Shield,
    SimpleWeapon,
    MartialWeapon,
    Ammunition,
}

impl ItemCategory {
    /// Lookup order; the first catalog holding a name decides its category
    pub const CHECK_ORDER: [ItemCategory; 7] = [
        ItemCategory::LightArmor,
        ItemCategory::MediumArmor,
        ItemCategory::HeavyArmor,
        ItemCategory::Shield,
        ItemCategory::SimpleWeapon,
        ItemCategory::MartialWeapon,
        ItemCategory::Ammunition,
    ];

    pub fn group(&self) -> CatalogGroup {
        match self {
            ItemCategory::LightArmor
            | ItemCategory::MediumArmor
            | ItemCategory::HeavyArmor
            | ItemCategory::Shield => CatalogGroup::Armor,
            ItemCategory::SimpleWeapon | ItemCategory::MartialWeapon | ItemCategory::Ammunition => {
                CatalogGroup::Weapons
            }
        }
    }

    /// Body armor, i.e. anything that replaces the unarmored AC formula
    pub fn is_body_armor(&self) -> bool {
        matches!(
            self,
            ItemCategory::LightArmor | ItemCategory::MediumArmor | ItemCategory::HeavyArmor
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::LightArmor => "Light Armor",
            ItemCategory::MediumArmor => "Medium Armor",
            ItemCategory::HeavyArmor => "Heavy Armor",
            ItemCategory::Shield => "Shield",
            ItemCategory::SimpleWeapon => "Simple Weapon",
            ItemCategory::MartialWeapon => "Martial Weapon",
            ItemCategory::Ammunition => "Ammunition",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two catalog groups the resolver consults, armor first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogGroup {
    Armor,
    Weapons,
}

impl CatalogGroup {
    pub const ALL: [CatalogGroup; 2] = [CatalogGroup::Armor, CatalogGroup::Weapons];

    /// Categories of this group, in lookup order
    pub fn categories(&self) -> &'static [ItemCategory] {
        match self {
            CatalogGroup::Armor => &ItemCategory::CHECK_ORDER[..4],
            CatalogGroup::Weapons => &ItemCategory::CHECK_ORDER[4..],
        }
    }
}

/// Armor and shield stat block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStats {
    /// Base AC for body armor, AC bonus for shields
    pub base_ac: u8,
    /// Maximum Dexterity modifier added (None = uncapped)
    #[serde(default)]
    pub dex_cap: Option<u8>,
    #[serde(default)]
    pub strength_req: Option<u8>,
    #[serde(default)]
    pub stealth_disadvantage: bool,
}

/// Damage category dealt by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Bludgeoning => write!(f, "bludgeoning"),
            DamageType::Piercing => write!(f, "piercing"),
            DamageType::Slashing => write!(f, "slashing"),
        }
    }
}

/// Weapon properties printed in the weapon table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponProperty {
    Ammunition,
    Finesse,
    Heavy,
    Light,
    Loading,
    Reach,
    Thrown,
    TwoHanded,
    Versatile,
}

/// Weapon stat block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Damage dice, e.g. "1d6"
    pub damage: String,
    pub damage_type: DamageType,
    #[serde(default)]
    pub properties: Vec<WeaponProperty>,
}

impl WeaponStats {
    pub fn has_property(&self, property: WeaponProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// Ammunition stat block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmunitionStats {
    /// Pieces sold together as one bundle
    pub bundle: u32,
}
