//! Character assembly and derived stats

mod builder;
pub mod derived;
mod record;

pub use builder::CharacterBuilder;
pub use derived::{armor_class, max_hit_points};
pub use record::{CharacterRecord, Proficiencies};
