//! Generate command - compiles matchers and writes the descriptor file.

use std::path::Path;

use anyhow::{Context, bail};
use diagmatch_core::fs_util;
use diagmatch_core::prelude::*;

use crate::ui::{colors, exit, pluralise_word, print_command_header, print_success, print_warning};
use crate::{CONFIG_FILENAME, GenerateArgs};

/// Executes the `diagmatch generate` command.
///
/// Without an output path the JSON goes to stdout undecorated, so it can be
/// piped. With `--check` nothing is written; the process exits with
/// [`exit::STALE`] when the file on disk differs from the generated JSON.
pub fn run(args: &GenerateArgs) -> super::Result {
    let config = super::load_config(args.config.as_deref())?;
    let registry = build_registry(&config, &args.only)?;

    let set = registry.compile().context("compiling matchers")?;
    let json = set.to_json().context("serialising descriptors")?;

    let output = args.output.as_deref().or(config.output.as_deref());

    match (output, args.check) {
        (None, true) => bail!("--check needs an output path (pass --output or set `output` in {CONFIG_FILENAME})"),
        (None, false) => {
            print!("{json}");
            Ok(())
        }
        (Some(path), true) => check(path, &json),
        (Some(path), false) => write(path, &set),
    }
}

fn build_registry(config: &Config, only: &[String]) -> super::Result<MatcherRegistry> {
    let mut registry = MatcherRegistry::from_config(config).context("applying config")?;

    if !only.is_empty() {
        registry
            .retain_owners(only)
            .context("selecting --only matchers")?;
    }

    Ok(registry)
}

fn write(path: &Path, set: &MatcherSet) -> super::Result {
    print_command_header("generate");

    set.save(path)?;

    let count = set.len();
    print_success(&format!(
        "wrote {count} {} to {}",
        pluralise_word(count, "matcher", "matchers"),
        colors::emphasis().apply_to(path.display())
    ));

    Ok(())
}

fn check(path: &Path, json: &str) -> super::Result {
    print_command_header("generate --check");

    let fresh = fs_util::is_up_to_date(path, json).with_context(|| format!("reading {}", path.display()))?;

    if fresh {
        print_success(&format!("{} is up to date", colors::emphasis().apply_to(path.display())));
        return Ok(());
    }

    print_warning(&format!(
        "{} is out of date; run `diagmatch generate -o {}`",
        path.display(),
        path.display()
    ));
    std::process::exit(exit::STALE);
}
