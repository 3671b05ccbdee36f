//! List command - shows available matchers, optionally with compiled patterns.

use std::path::Path;

use anyhow::Context;
use console::style;
use diagmatch_core::prelude::*;
use diagmatch_tools::{Family, ToolRegistry};

use crate::ui::{colors, pluralise_word, print_command_header};

/// Lists configured matchers, optionally filtered by family.
pub fn run(family: Option<Family>, config_path: Option<&Path>, verbose: bool) -> super::Result {
    print_command_header("list");

    let config = super::load_config(config_path)?;
    let registry = MatcherRegistry::from_config(&config).context("applying config")?;

    let matchers: Vec<&MatcherDef> = match family {
        Some(f) => registry.by_family(f).collect(),
        None => registry.matchers().iter().collect(),
    };

    if matchers.is_empty() {
        print_no_matches(family);
        return Ok(());
    }

    print_count(matchers.len());

    if verbose {
        print_verbose(&matchers)
    } else {
        print_table(&matchers);
        Ok(())
    }
}

fn print_count(count: usize) {
    println!(
        "{}",
        colors::muted().apply_to(format!("{count} {}", pluralise_word(count, "matcher", "matchers")))
    );
}

fn print_no_matches(family: Option<Family>) {
    match family {
        Some(f) => println!(
            "{} {} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no matchers match"),
            colors::emphasis().apply_to(format!("--family {f}"))
        ),
        None => println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no matchers")
        ),
    }
}

fn print_table(matchers: &[&MatcherDef]) {
    let tools = ToolRegistry::builtin();

    for family in Family::ALL {
        let in_family: Vec<_> = matchers.iter().filter(|m| m.family == family).collect();
        if in_family.is_empty() {
            continue;
        }

        println!();
        println!(
            "{} {}",
            style(family.name()).bold(),
            colors::muted().apply_to(format!("({})", in_family.len()))
        );

        for matcher in in_family {
            let display_name = tools.get(&matcher.owner).map_or(matcher.owner.as_str(), |t| t.name());
            let lines = matcher.lines.len();
            println!(
                "  {}  {}  {}",
                colors::accent().apply_to(format!("{:<10}", matcher.owner)),
                colors::secondary().apply_to(format!("{display_name:<12}")),
                colors::muted().apply_to(format!("{lines} {}", pluralise_word(lines, "line", "lines")))
            );
        }
    }
}

fn print_verbose(matchers: &[&MatcherDef]) -> super::Result {
    for matcher in matchers {
        let descriptor = matcher
            .compile()
            .with_context(|| format!("compiling matcher '{}'", matcher.owner))?;
        print_matcher_detail(matcher, &descriptor);
    }
    Ok(())
}

fn print_matcher_detail(matcher: &MatcherDef, descriptor: &MatcherDescriptor) {
    println!();
    println!(
        "{} {} {}",
        style(descriptor.owner()).bold(),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(matcher.family.as_str())
    );

    for (idx, line) in descriptor.lines().iter().enumerate() {
        println!("  {} {}", colors::muted().apply_to(format!("line {idx}")), colors::code().apply_to(line.regexp()));

        let fields: Vec<String> = line.fields().iter().map(|(name, i)| format!("{name}={i}")).collect();
        if !fields.is_empty() {
            println!("         {}", colors::secondary().apply_to(fields.join(" ")));
        }
    }
}
