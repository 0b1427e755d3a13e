//! Draw command - print every pairing

use std::path::Path;

use secret_santa::config::ConfigOverrides;
use secret_santa::output::{DrawResult, OutputMode};

use super::{load_config, prepare_draw};

/// Draw pairings and print them all
pub fn draw(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let pairings = prepare_draw(&config)?;

    DrawResult::new(&pairings, config.draw.seed).render(mode);
    Ok(())
}
