//! Test utilities for `diagmatch_core` (compiled only during testing).

use diagmatch_tools::Family;

use crate::descriptor::LineDescriptor;
use crate::matcher::MatcherDef;

/// Builds a custom-family definition from borrowed fragments.
pub fn def(owner: &str, lines: &[&[&str]]) -> MatcherDef {
    let lines = lines
        .iter()
        .map(|line| line.iter().map(|f| (*f).to_string()).collect())
        .collect();
    MatcherDef::new(owner, Family::Custom, lines)
}

/// Returns the `(name, index)` pairs of a line descriptor in index order.
pub fn field_pairs(line: &LineDescriptor) -> Vec<(&str, usize)> {
    line.fields().iter().collect()
}
