//! Static rules tables: species, classes, backgrounds

mod defaults;
mod loader;
pub mod registry;
pub mod tables;

pub use loader::{load_rules, RULES_FILE};
pub use registry::RulesRegistry;
pub use tables::{BackgroundDef, ClassDef, SpeciesDef, StartingKit};
