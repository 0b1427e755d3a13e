//! Centralized path definitions
//!
//! ## Lookup Layout
//!
//! ```text
//! ./students.txt                           # Default roster
//! ./secret-santa.toml                      # Local config (preferred)
//! ~/.config/secret-santa/config.toml       # User config (fallback)
//! ```

use std::path::PathBuf;

/// Roster read when neither config nor flags name one
pub const DEFAULT_NAMES_FILE: &str = "students.txt";

/// Config filename looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "secret-santa.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "secret-santa";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `./secret-santa.toml`.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Get the user-level config directory.
///
/// Returns the platform config dir (e.g. `~/.config/secret-santa/`), or
/// `~/.secret-santa/` when the platform has none.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(format!(".{GLOBAL_DIR}"))
        },
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the user-level config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
