//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::abilities::AbilityMethod;

/// Character builder with starting-equipment resolution
#[derive(Parser, Debug)]
#[command(name = "charforge", version)]
#[command(about = "Build first-level characters and resolve starting equipment")]
pub struct Cli {
    /// Config file (defaults to ./charforge.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a character interactively and print the sheet
    Build {
        /// Ability score method (overrides the config)
        #[arg(long, value_enum)]
        method: Option<AbilityMethod>,

        /// Seed for dice rolls (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the character as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve equipment option strings, e.g. "4 Handaxes" or "15 GP"
    Resolve {
        #[arg(required = true)]
        options: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one of the loaded tables
    List {
        #[arg(value_enum)]
        table: Table,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Species,
    Classes,
    Backgrounds,
    Items,
}
