//! Problem matcher compiler for diagmatch.
//!
//! Turns tables of regular-expression fragments describing compiler and
//! engine diagnostics into problem matcher descriptors: anchored,
//! terminal-noise-tolerant patterns with named groups replaced by positional
//! capture indices.
//!
//! # Main Types
//!
//! - [`MatcherDef`] - An uncompiled matcher: owner plus ordered line groups
//! - [`MatcherRegistry`] - Built-in and configured matchers in emission order
//! - [`LinePattern`] - One line group assembled and compiled
//! - [`MatcherSet`] - The serialisable `problemMatcher` artifact
//! - [`Config`] - User configuration loaded from `.diagmatch.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`CompileError`] - Invalid fragments, duplicate fields, internal checks
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`MatcherError`] - Top-level error enum combining the above
//!
//! The CLI crate (`diagmatch_cli`) uses `anyhow` for error propagation.

/// User configuration loaded from `.diagmatch.toml`.
pub mod config;
/// Problem matcher descriptors and their JSON form.
pub mod descriptor;
/// Error types for compilation, configuration, and output.
pub mod error;
/// Capture name to capture index mapping.
pub mod fields;
/// Filesystem helpers for atomic writes.
pub mod fs_util;
/// Line pattern assembly and compilation.
pub mod line;
/// Matcher definitions and the registry.
pub mod matcher;
/// The fragment that tolerates whitespace and terminal control sequences.
pub mod noise;
/// Common re-exports for internal use.
pub mod prelude;
/// Rewriting named groups into plain groups.
pub mod rewrite;
/// Lexical scanning of group syntax.
pub mod syntax;
#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Config, ConfigError, CustomMatcher};
pub use descriptor::{LineDescriptor, MatcherDescriptor, MatcherSet};
pub use error::{CompileError, MatcherError, PatternLocation, UnknownOwnerError};
pub use fields::FieldIndex;
pub use line::LinePattern;
pub use matcher::{MatcherDef, MatcherRegistry, compile_set};
pub use noise::NOISE;

/// Default filename for diagmatch configuration.
pub const CONFIG_FILENAME: &str = ".diagmatch.toml";
