//! Item catalogs: armor, shields, weapons and ammunition

pub mod classifier;
pub mod items;
mod set;

pub use classifier::ItemClassifier;
pub use items::{
    AmmunitionStats, ArmorStats, CatalogGroup, DamageType, ItemCategory, WeaponProperty,
    WeaponStats,
};
pub use set::{load_catalogs, Catalog, CatalogSet, CATALOGS_FILE};
