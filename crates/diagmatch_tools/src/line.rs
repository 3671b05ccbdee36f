//! Line group definitions and tool families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFamilyError {
    invalid_value: Box<str>,
}

impl ParseFamilyError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid family '{}': expected one of 'compiler', 'engine', 'custom'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseFamilyError {}

/// Kind of program a matcher recognises diagnostics from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// C and C++ compilers.
    Compiler,
    /// Engine and runtime error output.
    Engine,
    /// User-defined matchers from `.diagmatch.toml`.
    #[default]
    Custom,
}

impl Family {
    /// All families in display order.
    pub const ALL: [Self; 3] = [Self::Compiler, Self::Engine, Self::Custom];

    /// Returns the human-readable display name for this family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compiler => "Compilers",
            Self::Engine => "Engine Output",
            Self::Custom => "Custom Matchers",
        }
    }

    /// Returns the lowercase identifier used on the command line and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compiler => "compiler",
            Self::Engine => "engine",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Family {
    type Err = ParseFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compiler" => Ok(Self::Compiler),
            "engine" => Ok(Self::Engine),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseFamilyError::new(s)),
        }
    }
}

/// One physical line of a diagnostic message, as an ordered list of
/// regular-expression fragments.
///
/// Fragments are joined with noise tolerance at compile time, so a fragment
/// never needs to account for surrounding whitespace or colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDef {
    /// Fragments in the order they appear on the line.
    pub fragments: &'static [&'static str],
}

impl LineDef {
    /// Creates a line definition from its fragments.
    #[must_use]
    pub const fn new(fragments: &'static [&'static str]) -> Self {
        Self { fragments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_from_str_is_case_insensitive() {
        assert_eq!(Family::from_str("Compiler"), Ok(Family::Compiler));
        assert_eq!(Family::from_str("ENGINE"), Ok(Family::Engine));
    }

    #[test]
    fn family_from_str_returns_error_for_unknown_value() {
        let err = Family::from_str("linker").unwrap_err();
        assert_eq!(err.invalid_value(), "linker");
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn family_display_matches_as_str() {
        for family in Family::ALL {
            assert_eq!(family.to_string(), family.as_str());
        }
    }

    #[test]
    fn family_defaults_to_custom() {
        assert_eq!(Family::default(), Family::Custom);
    }

    #[test]
    fn line_def_new_keeps_fragment_order() {
        const LINE: LineDef = LineDef::new(&["a", "b", "c"]);
        assert_eq!(LINE.fragments, &["a", "b", "c"]);
    }
}
