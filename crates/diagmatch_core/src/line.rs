//! Compilation of one line group into an anchored, noise-tolerant pattern.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
#[cfg(feature = "tracing")]
use tracing::trace;

use crate::error::{CompileError, PatternLocation};
use crate::fields;
use crate::noise::NOISE;
use crate::rewrite;
use crate::syntax::{self, GroupToken};

/// A line group compiled into a single anchored regular expression.
///
/// The source is `^`, noise, the fragments joined by noise, noise, `$`.
/// Every fragment and the joined body sit in their own non-capturing group,
/// so alternation and inline flags cannot escape a fragment. The source still
/// uses the authoring dialect's named-group syntax; see
/// [`crate::rewrite`] for the consumer form.
#[derive(Clone)]
pub struct LinePattern {
    owner: Arc<str>,
    line_group: usize,
    source: String,
    regex: Regex,
    captures: Vec<GroupToken>,
}

impl LinePattern {
    /// Joins `fragments` with the noise fragment, surrounds the result with
    /// noise, and anchors it to a whole line.
    ///
    /// An empty fragment list yields a pattern that matches a line of pure
    /// noise.
    #[must_use]
    pub fn assemble<S: AsRef<str>>(fragments: &[S]) -> String {
        let joined = fragments
            .iter()
            .map(|f| format!("(?:{})", f.as_ref()))
            .collect::<Vec<_>>()
            .join(NOISE);
        format!("^{NOISE}(?:{joined}){NOISE}$")
    }

    /// Compiles one line group of the matcher `owner`.
    ///
    /// Each fragment must compile on its own first, checked with its group
    /// names stripped so the engine only judges syntax. Duplicate capture
    /// names are then found lexically across the whole line, and finally the
    /// assembled pattern is compiled.
    pub fn compile<S: AsRef<str>>(owner: &str, line_group: usize, fragments: &[S]) -> Result<Self, CompileError> {
        for (idx, fragment) in fragments.iter().enumerate() {
            validate_fragment(owner, line_group, idx, fragment.as_ref())?;
        }

        let source = Self::assemble(fragments);
        let captures = syntax::scan_captures(&source);

        fields::reject_duplicates(owner, line_group, &captures)?;

        let regex = Regex::new(&source).map_err(|source| CompileError::InvalidPattern {
            owner: owner.to_string(),
            line_group,
            location: PatternLocation::Assembled,
            source,
        })?;

        if let Some(detail) = capture_mismatch(&regex, &captures) {
            return Err(CompileError::InternalConsistency {
                owner: owner.to_string(),
                line_group,
                detail,
            });
        }

        #[cfg(feature = "tracing")]
        trace!(owner, line_group, captures = captures.len(), "compiled line pattern");

        Ok(Self {
            owner: Arc::from(owner),
            line_group,
            source,
            regex,
            captures,
        })
    }

    /// Returns the owner of the matcher this line belongs to.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the index of this line group within its matcher.
    #[must_use]
    pub const fn line_group(&self) -> usize {
        self.line_group
    }

    /// Returns the assembled pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the compiled regular expression.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns every capturing group in capture-number order.
    #[must_use]
    pub fn captures(&self) -> &[GroupToken] {
        &self.captures
    }
}

impl fmt::Debug for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinePattern")
            .field("owner", &self.owner)
            .field("line_group", &self.line_group)
            .field("captures", &self.captures.len())
            .finish_non_exhaustive()
    }
}

fn validate_fragment(owner: &str, line_group: usize, idx: usize, fragment: &str) -> Result<(), CompileError> {
    if syntax::verbose_flag(fragment).is_some() {
        return Err(CompileError::VerboseMode {
            owner: owner.to_string(),
            line_group,
            fragment: idx,
        });
    }

    Regex::new(&rewrite::strip_names(fragment).0).map_err(|source| CompileError::InvalidPattern {
        owner: owner.to_string(),
        line_group,
        location: PatternLocation::Fragment(idx),
        source,
    })?;

    Ok(())
}

/// Compares the scanned captures against the engine's capture list.
fn capture_mismatch(regex: &Regex, captures: &[GroupToken]) -> Option<String> {
    let engine_count = regex.captures_len() - 1;
    if engine_count != captures.len() {
        return Some(format!(
            "scanned {} capture groups but the regex engine reports {engine_count}",
            captures.len()
        ));
    }

    regex
        .capture_names()
        .skip(1)
        .zip(captures)
        .enumerate()
        .find(|(_, (engine, scanned))| *engine != scanned.name())
        .map(|(idx, (engine, scanned))| {
            format!(
                "capture {} is {:?} to the regex engine but {:?} when scanned",
                idx + 1,
                engine,
                scanned.name()
            )
        })
}
