//! Roster command - show who is taking part

use std::path::Path;

use secret_santa::config::ConfigOverrides;
use secret_santa::output::{OutputMode, RosterResult};

use super::{load_config, load_roster};

/// Print the names read from the roster file
pub fn roster(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let names = load_roster(&config)?;

    RosterResult {
        source: config.names_file.display().to_string(),
        count: names.len(),
        names,
    }
    .render(mode);
    Ok(())
}
