//! Serve command - draw once, then answer lookups

use std::path::Path;

use secret_santa::config::ConfigOverrides;
use secret_santa::server;

use super::{load_config, prepare_draw};

/// Draw pairings and serve the lookup form until interrupted
pub fn serve(config_path: Option<&Path>, overrides: &ConfigOverrides) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let pairings = prepare_draw(&config)?;

    let listener = server::bind(&config)?;

    println!("Secret Santa is running at http://{}", server::local_address(&listener));
    println!("Press Ctrl+C to stop");

    server::run(&listener, &pairings, config.server.workers);
    Ok(())
}
