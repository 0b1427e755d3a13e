//! Command implementations

mod draw;
mod roster;
mod serve;

pub use draw::draw;
pub use roster::roster;
pub use serve::serve;

use std::path::Path;

use anyhow::Context;

use secret_santa::config::{Config, ConfigOverrides};
use secret_santa::pairing::{self, Pairings};
use secret_santa::roster as names;

/// Resolve config from file and flags
fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path)?.with_overrides(overrides)?;
    log::debug!("effective config: {config:?}");
    Ok(config)
}

/// Read the roster named by `config`
fn load_roster(config: &Config) -> anyhow::Result<Vec<String>> {
    names::load_names(&config.names_file).with_context(|| {
        format!("failed to load participants from {}", config.names_file.display())
    })
}

/// Load the roster and draw pairings once
fn prepare_draw(config: &Config) -> anyhow::Result<Pairings> {
    let roster = load_roster(config)?;
    log::info!("loaded {} participant(s) from {}", roster.len(), config.names_file.display());

    let pairings = pairing::draw(&roster, config.draw.seed, &config.pairing_options())
        .context("failed to generate pairings")?;
    Ok(pairings)
}
