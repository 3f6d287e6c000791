//! Classification capability consumed by the equipment resolver

use super::items::{CatalogGroup, ItemCategory};

/// Membership oracle over the item catalogs
///
/// Implementors only answer `contains`; lookup order is fixed by the
/// provided methods so every classifier agrees on which catalog wins when a
/// name appears in more than one.
pub trait ItemClassifier {
    /// Whether `name` is a key of the catalog for `category` (exact match)
    fn contains(&self, category: ItemCategory, name: &str) -> bool;

    /// First category of `group` holding `name`
    fn classify_in(&self, group: CatalogGroup, name: &str) -> Option<ItemCategory> {
        group
            .categories()
            .iter()
            .copied()
            .find(|category| self.contains(*category, name))
    }

    /// First category holding `name`, armor group before weapon group
    fn classify(&self, name: &str) -> Option<ItemCategory> {
        CatalogGroup::ALL
            .iter()
            .find_map(|group| self.classify_in(*group, name))
    }
}

impl<T: ItemClassifier + ?Sized> ItemClassifier for &T {
    fn contains(&self, category: ItemCategory, name: &str) -> bool {
        (**self).contains(category, name)
    }
}
