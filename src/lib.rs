//! charforge - First-level character builder
//!
//! The core is the starting-equipment resolver in [`equipment`]; the rest
//! assembles a character around it.

pub mod abilities;
pub mod catalog;
pub mod character;
pub mod cli;
pub mod core;
pub mod equipment;
pub mod rules;
