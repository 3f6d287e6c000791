//! Starting-equipment resolution
//!
//! Turns option strings like `"4 Handaxes"`, `"110 GP"` and `"Leather Armor"`
//! into collapsed equipment and inventory lists plus a coin purse.

pub mod currency;
pub mod grammar;
mod resolver;
pub mod tally;

pub use currency::{Denomination, Purse};
pub use grammar::{parse_option, singularize, OptionToken};
pub use resolver::{resolve, Resolution};
pub use tally::{ItemStack, Tally};
