//! Lexical scanning of group introducers in pattern source.
//!
//! This is not a parser. It walks the source once, skipping escapes and
//! character classes, and reports every `(` that opens a group together with
//! the byte range of its introducer. The regex engine remains the authority
//! on validity; callers cross-check what is found here against the engine's
//! own capture list.

use std::ops::Range;

/// What kind of group an introducer opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// A plain `(` group. Numbered, unnamed.
    Capture,
    /// A `(?P<name>` or `(?<name>` group. Numbered and named.
    Named(Box<str>),
    /// Any other `(?` form: non-capturing groups, inline flags, lookaround.
    NonCapturing,
}

/// A group introducer located in pattern source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupToken {
    /// The kind of group opened.
    pub kind: GroupKind,
    /// Byte range of the introducer, from `(` through `>` for named groups.
    pub introducer: Range<usize>,
}

impl GroupToken {
    /// Returns `true` if the group is assigned a capture number.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, GroupKind::Capture | GroupKind::Named(_))
    }

    /// Returns the capture name, if the group is named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            GroupKind::Named(name) => Some(name),
            GroupKind::Capture | GroupKind::NonCapturing => None,
        }
    }
}

/// Returns every group introducer in `source`, in textual order.
#[must_use]
pub fn scan_groups(source: &str) -> Vec<GroupToken> {
    let bytes = source.as_bytes();
    let mut groups = Vec::new();
    let mut class_depth = 0usize;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => {
                pos += 2;
                continue;
            }
            b'[' => {
                class_depth += 1;
                pos += 1;
                // A `]` directly after the opening bracket (or its negation) is literal.
                if bytes.get(pos) == Some(&b'^') {
                    pos += 1;
                }
                if bytes.get(pos) == Some(&b']') {
                    pos += 1;
                }
                continue;
            }
            b']' if class_depth > 0 => class_depth -= 1,
            b'(' if class_depth == 0 => {
                let token = classify(source, pos);
                pos = token.introducer.end;
                groups.push(token);
                continue;
            }
            _ => {}
        }
        pos += 1;
    }

    groups
}

/// Returns only the capturing groups of `source`, in capture-number order.
#[must_use]
pub fn scan_captures(source: &str) -> Vec<GroupToken> {
    scan_groups(source).into_iter().filter(GroupToken::is_capture).collect()
}

/// Returns the first group introducer that turns on verbose mode (`x`).
///
/// Verbose mode changes what `#` and whitespace mean, which this scanner does
/// not model, so callers refuse such sources instead of miscounting groups.
#[must_use]
pub fn verbose_flag(source: &str) -> Option<GroupToken> {
    scan_groups(source)
        .into_iter()
        .filter(|g| g.kind == GroupKind::NonCapturing)
        .find(|g| {
            let flags = &source[g.introducer.end..];
            let Some(end) = flags.find([':', ')']) else {
                return false;
            };
            let flags = &flags[..end];
            flags.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
                && flags.split('-').next().is_some_and(|on| on.contains('x'))
        })
}

fn classify(source: &str, open: usize) -> GroupToken {
    let rest = &source[open + 1..];

    if !rest.starts_with('?') {
        return GroupToken {
            kind: GroupKind::Capture,
            introducer: open..open + 1,
        };
    }

    let name_start = if rest.starts_with("?P<") {
        Some(open + 4)
    } else if rest.starts_with("?<") && !rest.starts_with("?<=") && !rest.starts_with("?<!") {
        Some(open + 3)
    } else {
        None
    };

    let named = name_start.and_then(|start| {
        source[start..].find('>').map(|len| GroupToken {
            kind: GroupKind::Named(source[start..start + len].into()),
            introducer: open..start + len + 1,
        })
    });

    named.unwrap_or(GroupToken {
        kind: GroupKind::NonCapturing,
        introducer: open..open + 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<GroupKind> {
        scan_groups(source).into_iter().map(|g| g.kind).collect()
    }

    fn named(name: &str) -> GroupKind {
        GroupKind::Named(name.into())
    }

    #[test]
    fn finds_plain_named_and_non_capturing_groups() {
        assert_eq!(
            kinds(r"(a)(?P<b>b)(?:c)(?<d>d)"),
            vec![GroupKind::Capture, named("b"), GroupKind::NonCapturing, named("d")]
        );
    }

    #[test]
    fn reports_introducer_ranges() {
        let source = r"x(?P<file>y)(z)";
        let groups = scan_groups(source);
        assert_eq!(&source[groups[0].introducer.clone()], "(?P<file>");
        assert_eq!(&source[groups[1].introducer.clone()], "(");
    }

    #[test]
    fn skips_escaped_parentheses() {
        assert_eq!(kinds(r"\((?P<line>\d+)\)"), vec![named("line")]);
    }

    #[test]
    fn skips_parentheses_inside_character_classes() {
        assert_eq!(kinds(r"[^()]+(a)"), vec![GroupKind::Capture]);
        assert_eq!(kinds(r"[]()]"), vec![]);
        assert_eq!(kinds(r"[^]()]"), vec![]);
    }

    #[test]
    fn handles_nested_and_posix_classes() {
        assert_eq!(kinds(r"[[:alpha:](](b)"), vec![GroupKind::Capture]);
        assert_eq!(kinds(r"[a-z&&[^(]](c)"), vec![GroupKind::Capture]);
    }

    #[test]
    fn escaped_bracket_does_not_open_class() {
        assert_eq!(kinds(r"\[(?P<code>x)\]"), vec![named("code")]);
    }

    #[test]
    fn inline_flags_and_lookaround_are_non_capturing() {
        assert_eq!(
            kinds(r"(?i)(?s:a)(?<=b)(?<!c)"),
            vec![
                GroupKind::NonCapturing,
                GroupKind::NonCapturing,
                GroupKind::NonCapturing,
                GroupKind::NonCapturing
            ]
        );
    }

    #[test]
    fn scan_captures_drops_non_capturing_groups() {
        let captures = scan_captures(r"(?:(fatal)\s+)?(?P<severity>error)");
        assert_eq!(captures.len(), 2);
        assert_eq!(captures[0].name(), None);
        assert_eq!(captures[1].name(), Some("severity"));
    }

    #[test]
    fn non_ascii_text_is_skipped_safely() {
        assert_eq!(kinds(r"é\é(?P<ü>x)"), vec![named("ü")]);
    }

    #[test]
    fn verbose_flag_is_found_in_any_enabling_form() {
        assert!(verbose_flag(r"(?x) (?P<a>\w+) # note (x)").is_some());
        assert!(verbose_flag(r"(?ix:a b)").is_some());
        assert!(verbose_flag(r"(?s-i:a)(?xs)").is_some());
    }

    #[test]
    fn verbose_flag_ignores_disabling_and_other_groups() {
        assert!(verbose_flag(r"(?-x)a").is_none());
        assert!(verbose_flag(r"(?i)(?:x)(?P<x>x)").is_none());
        assert!(verbose_flag(r"[(?x)]\(?x\)").is_none());
    }

    #[test]
    fn empty_source_has_no_groups() {
        assert!(scan_groups("").is_empty());
    }
}
