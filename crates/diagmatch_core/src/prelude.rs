//! Convenience re-exports of the most commonly used types.

pub use crate::config::{Config, ConfigError, CustomMatcher};
pub use crate::descriptor::{LineDescriptor, MatcherDescriptor, MatcherSet};
pub use crate::error::{CompileError, MatcherError, PatternLocation, UnknownOwnerError};
pub use crate::fields::FieldIndex;
pub use crate::line::LinePattern;
pub use crate::matcher::{MatcherDef, MatcherRegistry, compile_set};
