//! Rewriting of pattern source for engines without named groups.
//!
//! Only the name annotations are removed: `(?P<file>` and `(?<file>` both
//! become `(`. Groups are never added, dropped, or reordered, so capture
//! numbers computed by [`FieldIndex`] stay valid against the output.

use regex::Regex;

use crate::error::CompileError;
use crate::fields::FieldIndex;
use crate::line::LinePattern;
use crate::syntax::{self, GroupKind};

/// Replaces every named-group introducer in `source` with a plain `(`.
///
/// Returns the rewritten source and the number of introducers replaced.
#[must_use]
pub fn strip_names(source: &str) -> (String, usize) {
    let mut rewritten = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut stripped = 0;

    for group in syntax::scan_groups(source) {
        if matches!(group.kind, GroupKind::Named(_)) {
            rewritten.push_str(&source[cursor..group.introducer.start]);
            rewritten.push('(');
            cursor = group.introducer.end;
            stripped += 1;
        }
    }

    rewritten.push_str(&source[cursor..]);
    (rewritten, stripped)
}

/// Rewrites a compiled line pattern into the consumer dialect.
///
/// Refuses to return text whose capture numbering could disagree with
/// `fields`: the number of stripped names must equal the number of fields,
/// no named introducer may remain, and the result must compile with the same
/// capture count as the original.
pub fn strip_group_names(pattern: &LinePattern, fields: &FieldIndex) -> Result<String, CompileError> {
    let inconsistent = |detail: String| CompileError::InternalConsistency {
        owner: pattern.owner().to_string(),
        line_group: pattern.line_group(),
        detail,
    };

    let (rewritten, stripped) = strip_names(pattern.source());

    if stripped != fields.len() {
        return Err(inconsistent(format!(
            "stripped {stripped} group names but the field index has {} fields",
            fields.len()
        )));
    }

    if let Some(name) = syntax::scan_groups(&rewritten)
        .into_iter()
        .find_map(|g| g.name().map(str::to_string))
    {
        return Err(inconsistent(format!("named group '{name}' survived rewriting")));
    }

    let regex = Regex::new(&rewritten)
        .map_err(|e| inconsistent(format!("rewritten pattern does not compile: {e}")))?;

    if regex.captures_len() != pattern.regex().captures_len() {
        return Err(inconsistent(format!(
            "rewritten pattern has {} captures, original has {}",
            regex.captures_len() - 1,
            pattern.regex().captures_len() - 1
        )));
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(fragments: &[&str]) -> LinePattern {
        LinePattern::compile("test", 0, fragments).unwrap()
    }

    #[test]
    fn strip_names_replaces_both_named_forms() {
        let (rewritten, stripped) = strip_names(r"(?P<file>a)(?<line>b)");
        assert_eq!(rewritten, "(a)(b)");
        assert_eq!(stripped, 2);
    }

    #[test]
    fn strip_names_leaves_other_groups_untouched() {
        let source = r"(?:x)(y)(?i)[(?P<z>)]\(?P<w>\)";
        let (rewritten, stripped) = strip_names(source);
        assert_eq!(rewritten, source);
        assert_eq!(stripped, 0);
    }

    #[test]
    fn strip_names_keeps_quantifiers_and_alternation() {
        let (rewritten, _) = strip_names(r"(?:(?P<a>x|y)+)?(?P<b>z){2,3}");
        assert_eq!(rewritten, r"(?:(x|y)+)?(z){2,3}");
    }

    #[test]
    fn rewritten_pattern_has_no_named_groups() {
        let pattern = compile(&[r"(?P<file>[^:]+)", r":(?P<line>\d+)"]);
        let fields = FieldIndex::extract(&pattern).unwrap();
        let rewritten = strip_group_names(&pattern, &fields).unwrap();

        assert!(!rewritten.contains("(?P<"));
        assert!(!rewritten.contains("(?<"));
        assert_eq!(Regex::new(&rewritten).unwrap().capture_names().flatten().count(), 0);
    }

    #[test]
    fn rewritten_pattern_captures_same_text_at_same_indices() {
        let pattern = compile(&[
            r"(?P<file>[^:]+)",
            r":(?P<line>\d+)",
            r"(?::(?P<column>\d+))?",
            ":",
            r"(?:(fatal)\s+)?(?P<severity>error|warning)",
            ":",
            r"(?P<message>.+?)",
        ]);
        let fields = FieldIndex::extract(&pattern).unwrap();
        let rewritten = Regex::new(&strip_group_names(&pattern, &fields).unwrap()).unwrap();

        let line = "src/a.cpp:3:9: fatal error: no such file";
        let original = pattern.regex().captures(line).unwrap();
        let consumer = rewritten.captures(line).unwrap();

        for (name, idx) in fields.iter() {
            assert_eq!(
                consumer.get(idx).map(|m| m.as_str()),
                original.name(name).map(|m| m.as_str()),
                "field {name}"
            );
        }
        assert_eq!(consumer.get(4).map(|m| m.as_str()), Some("fatal"));
    }

    #[test]
    fn mismatched_field_index_is_internal_error() {
        let pattern = compile(&[r"(?P<a>x)", r"(?P<b>y)"]);
        let other = FieldIndex::extract(&compile(&[r"(?P<a>x)"])).unwrap();

        let err = strip_group_names(&pattern, &other).unwrap_err();
        assert!(matches!(err, CompileError::InternalConsistency { .. }));
        assert!(err.to_string().contains("stripped 2 group names"));
    }

    #[test]
    fn pattern_without_names_is_returned_unchanged() {
        let pattern = compile(&[r"(a)", "b"]);
        let fields = FieldIndex::extract(&pattern).unwrap();
        assert_eq!(strip_group_names(&pattern, &fields).unwrap(), pattern.source());
    }
}
