//! CLI command handlers.

/// Shell completion script generation.
pub mod completions;
/// Descriptor generation and staleness checks.
pub mod generate;
/// Starter configuration file creation.
pub mod init;
/// Matcher listing and inspection.
pub mod list;

use std::path::Path;

use anyhow::{Context, bail};
use diagmatch_core::Config;

use crate::CONFIG_FILENAME;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;

/// Loads the configuration for a command.
///
/// An explicit path must exist; the default `.diagmatch.toml` may be absent,
/// in which case the defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit.filter(|p| !p.exists()) {
        bail!("config file not found: {}", path.display());
    }

    let path = explicit.unwrap_or(Path::new(CONFIG_FILENAME));
    Config::load(path).context("loading config")
}
