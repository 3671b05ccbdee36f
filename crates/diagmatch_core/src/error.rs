use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when compiling a problem matcher.
///
/// Every variant names the matcher owner and the 0-based line group so the
/// offending table entry can be found.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A fragment, or the assembled line pattern, is not valid regex syntax.
    #[error("invalid pattern in '{owner}' line group {line_group} ({location}): {source}")]
    InvalidPattern {
        /// Owner of the matcher that failed (e.g. `"gcc"`).
        owner: String,
        /// Index of the line group within the matcher.
        line_group: usize,
        /// Which part of the line failed to compile.
        location: PatternLocation,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A fragment turns on verbose mode (`x`), which line patterns do not
    /// support.
    #[error("verbose mode is not supported in '{owner}' line group {line_group} (fragment {fragment})")]
    VerboseMode {
        /// Owner of the matcher that failed.
        owner: String,
        /// Index of the line group within the matcher.
        line_group: usize,
        /// Index of the offending fragment within the line group.
        fragment: usize,
    },

    /// Two named captures in one line pattern share a name.
    #[error("duplicate field '{name}' in '{owner}' line group {line_group}: captures {first} and {second}")]
    DuplicateField {
        /// Owner of the matcher that failed.
        owner: String,
        /// Index of the line group within the matcher.
        line_group: usize,
        /// The repeated capture name.
        name: String,
        /// 1-based capture index of the first occurrence.
        first: usize,
        /// 1-based capture index of the repeated occurrence.
        second: usize,
    },

    /// A capture uses a name the descriptor format reserves for its own keys.
    #[error("reserved field name '{name}' in '{owner}' line group {line_group}")]
    ReservedField {
        /// Owner of the matcher that failed.
        owner: String,
        /// Index of the line group within the matcher.
        line_group: usize,
        /// The reserved capture name.
        name: String,
    },

    /// Capture bookkeeping disagreed between compilation stages. This is a
    /// defect in the compiler, not in the input.
    #[error("internal consistency error in '{owner}' line group {line_group}: {detail}")]
    InternalConsistency {
        /// Owner of the matcher that failed.
        owner: String,
        /// Index of the line group within the matcher.
        line_group: usize,
        /// What disagreed.
        detail: String,
    },
}

impl CompileError {
    /// Returns the owner of the matcher that failed.
    #[must_use]
    pub fn owner(&self) -> &str {
        match self {
            Self::InvalidPattern { owner, .. }
            | Self::VerboseMode { owner, .. }
            | Self::DuplicateField { owner, .. }
            | Self::ReservedField { owner, .. }
            | Self::InternalConsistency { owner, .. } => owner,
        }
    }

    /// Returns the index of the line group that failed.
    #[must_use]
    pub const fn line_group(&self) -> usize {
        match self {
            Self::InvalidPattern { line_group, .. }
            | Self::VerboseMode { line_group, .. }
            | Self::DuplicateField { line_group, .. }
            | Self::ReservedField { line_group, .. }
            | Self::InternalConsistency { line_group, .. } => *line_group,
        }
    }
}

/// The part of a line group that failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternLocation {
    /// A single fragment, by index within the line group.
    Fragment(usize),
    /// The assembled, anchored line pattern.
    Assembled,
}

impl fmt::Display for PatternLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fragment(idx) => write!(f, "fragment {idx}"),
            Self::Assembled => f.write_str("assembled pattern"),
        }
    }
}

/// A requested matcher owner is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown matcher '{owner}'")]
pub struct UnknownOwnerError {
    /// The owner that was asked for.
    pub owner: String,
}

/// Top-level error type for the diagmatch pipeline.
///
/// Unifies compilation, configuration, and output errors into a single type
/// for callers that orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A matcher failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Configuration could not be read, parsed, or applied.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The descriptor set could not be serialised.
    #[error("failed to serialise descriptors: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The descriptor file could not be written.
    #[error("failed to write descriptors '{path}': {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
