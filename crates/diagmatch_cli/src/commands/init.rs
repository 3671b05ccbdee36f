//! Init command - creates a starter `.diagmatch.toml` configuration file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use diagmatch_core::Config;

use crate::CONFIG_FILENAME;
use crate::ui::{colors, print_command_header, print_success, print_warning};

/// Descriptor path written into new configuration files.
pub const DEFAULT_OUTPUT: &str = "problem-matchers.json";

/// Executes the `diagmatch init` command.
///
/// An existing file is left alone unless `force` is set.
pub fn run(path: Option<PathBuf>, force: bool) -> super::Result {
    print_command_header("init");

    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    if path.exists() && !force {
        print_warning(&format!("{} already exists", style(path.display()).bold()));
        println!("  {}", colors::secondary().apply_to("pass --force to overwrite"));
        return Ok(());
    }

    starter_config()
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    print_created(&path);
    Ok(())
}

fn starter_config() -> Config {
    Config {
        output: Some(PathBuf::from(DEFAULT_OUTPUT)),
        ..Config::new()
    }
}

fn print_created(path: &Path) {
    print_success(&format!("created {}", colors::emphasis().apply_to(path.display())));
    println!(
        "  {} {}",
        colors::secondary().apply_to("next:"),
        colors::code().apply_to("diagmatch generate")
    );
}
