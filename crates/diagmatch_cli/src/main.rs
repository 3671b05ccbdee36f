//! # Commands
//!
//! - `diagmatch generate` - Compile matchers and write the descriptor file
//! - `diagmatch list` - List available matchers
//! - `diagmatch init` - Create a starter `.diagmatch.toml`
//! - `diagmatch completions` - Print shell completion scripts

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use console::style;
pub use diagmatch_core::CONFIG_FILENAME;
use diagmatch_tools::Family;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/diagmatch/diagmatch";

#[derive(Debug, Parser)]
#[command(
    name = "diagmatch",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    #[command(visible_alias = "l")]
    List(ListArgs),

    Init(InitArgs),

    Completions(CompletionsArgs),
}

/// Arguments for the `diagmatch generate` command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Write descriptors to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to `.diagmatch.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 if the output file is missing or out of date.
    #[arg(long)]
    pub check: bool,

    /// Only emit matchers with these owners.
    #[arg(long, value_name = "OWNER", num_args = 1..)]
    pub only: Vec<String>,
}

/// Arguments for the `diagmatch list` command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter matchers by family.
    #[arg(short, long)]
    pub family: Option<Family>,

    /// Path to `.diagmatch.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the compiled pattern and fields of every line.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `diagmatch init` command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Where to create the configuration file.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `diagmatch completions` command.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

/// Builds the full command definition, including the long help text.
fn cli_command() -> clap::Command {
    Cli::command().about(build_about()).after_help(build_after_help())
}

fn parse_cli() -> Cli {
    let matches = cli_command().get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Generate(args) => commands::generate::run(&args),
        Command::List(args) => commands::list::run(args.family, args.config.as_deref(), args.verbose),
        Command::Init(args) => commands::init::run(args.path, args.force),
        Command::Completions(args) => {
            commands::completions::run(args.shell);
            Ok(())
        }
    }
}

fn build_about() -> String {
    format!(
        r"
  {} compiles compiler and engine diagnostic formats into
  problem matcher descriptors.

  Patterns tolerate colour codes and padding, and named groups
  are rewritten into positional capture indices.",
        colors::accent().apply_to("diagmatch").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    diagmatch generate                      Print descriptors to stdout
    diagmatch generate -o matchers.json     Write descriptors to a file
    diagmatch generate -o m.json --check    Fail if m.json is out of date
    diagmatch generate --only gcc clang     Emit selected matchers only
    diagmatch list --verbose                Show compiled patterns
    diagmatch init                          Create .diagmatch.toml

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
