//! Command dispatch for the `charforge` binary

pub mod args;
pub mod display;
pub mod prompt;
mod session;

pub use args::{Cli, Command, Table};
pub use prompt::{ChoiceProvider, TerminalPrompter};
pub use session::run_build_session;

use std::io::{self, Write};
use std::sync::Arc;

use crate::catalog::{load_catalogs, CatalogSet};
use crate::core::config::BuilderConfig;
use crate::core::error::Result;
use crate::equipment::resolve;
use crate::rules::{load_rules, RulesRegistry};

/// Tables loaded once per run and shared read-only
#[derive(Debug, Clone)]
pub struct Tables {
    pub rules: Arc<RulesRegistry>,
    pub catalogs: Arc<CatalogSet>,
}

impl Tables {
    pub fn load(config: &BuilderConfig) -> Result<Self> {
        let data_dir = config.data_dir.as_deref();
        let rules = load_rules(data_dir)?;
        let catalogs = load_catalogs(data_dir)?;
        tracing::debug!(
            "Loaded {} species, {} classes, {} backgrounds, {} catalog items",
            rules.species.len(),
            rules.classes.len(),
            rules.backgrounds.len(),
            catalogs.len()
        );
        Ok(Self {
            rules: Arc::new(rules),
            catalogs: Arc::new(catalogs),
        })
    }
}

/// Run one subcommand, writing results to stdout
///
/// Prompts from `build` go to stderr so stdout carries only the sheet.
pub fn run(command: Command, config: &BuilderConfig, tables: &Tables) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Build { method, seed, json } => {
            let mut config = config.clone();
            if let Some(method) = method {
                config.ability_method = method;
            }
            if seed.is_some() {
                config.seed = seed;
            }

            let stdin = io::stdin();
            let mut prompter = TerminalPrompter::new(stdin.lock(), io::stderr());
            let record = run_build_session(&mut prompter, &tables.rules, &tables.catalogs, &config)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            } else {
                writeln!(out, "{}", record)?;
            }
        }
        Command::Resolve { options, json } => {
            let resolution = resolve(&options, tables.catalogs.as_ref());
            if json {
                let (equipment, inventory, gold, silver, copper) = resolution.into_parts();
                let payload = serde_json::json!({
                    "equipment": equipment,
                    "inventory": inventory,
                    "gold": gold,
                    "silver": silver,
                    "copper": copper,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            } else {
                write!(out, "{}", display::render_resolution(&resolution))?;
            }
        }
        Command::List { table } => {
            let text = match table {
                Table::Species => display::render_species(&tables.rules),
                Table::Classes => display::render_classes(&tables.rules),
                Table::Backgrounds => display::render_backgrounds(&tables.rules),
                Table::Items => display::render_items(&tables.catalogs),
            };
            write!(out, "{}", text)?;
        }
    }

    out.flush()?;
    Ok(())
}
