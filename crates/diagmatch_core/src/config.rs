use std::path::{Path, PathBuf};

use diagmatch_tools::Family;
use serde::{Deserialize, Serialize};

use crate::matcher::MatcherDef;

/// Project-level configuration loaded from `.diagmatch.toml`.
///
/// Controls where descriptors are written, which built-in matchers are
/// emitted, and adds user-defined matchers. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output path for generated descriptors, relative to the
    /// working directory.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Built-in matcher owners to leave out (e.g. `"msvc"`).
    #[serde(default)]
    pub disabled_matchers: Vec<String>,

    /// User-defined matchers, emitted after the built-ins.
    #[serde(default)]
    pub matchers: Vec<CustomMatcher>,
}

/// A user-defined problem matcher declared in `.diagmatch.toml`.
///
/// ```toml
/// [[matchers]]
/// owner = "mytool"
/// lines = [['(?P<file>[^:]+)', ':(?P<line>\d+)', '(?P<message>.+)']]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMatcher {
    /// Owner identifier written to the descriptor.
    pub owner: String,
    /// Line groups, each an ordered list of fragments.
    pub lines: Vec<Vec<String>>,
}

impl CustomMatcher {
    /// Converts this entry into a matcher definition in the custom family.
    #[must_use]
    pub fn to_def(&self) -> MatcherDef {
        MatcherDef::new(self.owner.clone(), Family::Custom, self.lines.clone())
    }
}

impl Config {
    /// Creates a default configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.diagmatch.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = read_file(path)?;
        parse_toml(path, &content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Atomically writes this configuration to a `.diagmatch.toml` file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        write_file(path, &content)
    }

    /// Serialises this configuration to a pretty-printed TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        serialise_toml(self)
    }

    /// Returns the user-defined matchers as matcher definitions.
    #[must_use]
    pub fn custom_matchers(&self) -> Vec<MatcherDef> {
        self.matchers.iter().map(CustomMatcher::to_def).collect()
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    crate::fs_util::atomic_write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn serialise_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|source| ConfigError::Serialize { source })
}

/// Errors that can occur when reading, parsing, writing, or applying a
/// `.diagmatch.toml` configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unexpected values.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },

    /// The in-memory configuration could not be serialised to TOML.
    #[error("failed to serialise config: {source}")]
    Serialize {
        /// The underlying TOML serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// The config file could not be written to disk.
    #[error("failed to write config '{path}': {source}")]
    Write {
        /// Path to the config file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A custom matcher reuses the owner of another enabled matcher.
    #[error("matcher owner '{owner}' is defined more than once")]
    DuplicateOwner {
        /// The repeated owner.
        owner: String,
    },

    /// `disabled_matchers` names an owner that is not a built-in matcher.
    #[error("cannot disable unknown matcher '{owner}'")]
    UnknownMatcher {
        /// The unrecognised owner.
        owner: String,
    },
}

impl ConfigError {
    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Serialize { .. } | Self::DuplicateOwner { .. } | Self::UnknownMatcher { .. } => None,
        }
    }
}
