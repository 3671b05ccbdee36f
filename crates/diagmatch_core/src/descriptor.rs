//! Problem matcher descriptors and their serialised form.
//!
//! The serialised shape is
//! `{"problemMatcher":[{"owner":..,"pattern":[{"regexp":..,"<field>":<index>}]}]}`.
//! Field keys follow `regexp` in ascending index order, so output is stable
//! across runs and diffs cleanly under version control.

use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{CompileError, MatcherError};
use crate::fields::FieldIndex;
use crate::line::LinePattern;
use crate::rewrite;

/// One line of a problem matcher in consumer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDescriptor {
    regexp: String,
    fields: FieldIndex,
}

impl LineDescriptor {
    /// Creates a line descriptor from already-rewritten pattern text and its
    /// field index.
    #[must_use]
    pub const fn new(regexp: String, fields: FieldIndex) -> Self {
        Self { regexp, fields }
    }

    /// Extracts the field index of `pattern` and rewrites it for the consumer.
    pub fn from_pattern(pattern: &LinePattern) -> Result<Self, CompileError> {
        let fields = FieldIndex::extract(pattern)?;
        let regexp = rewrite::strip_group_names(pattern, &fields)?;
        Ok(Self::new(regexp, fields))
    }

    /// Returns the pattern text without named-group syntax.
    #[must_use]
    pub fn regexp(&self) -> &str {
        &self.regexp
    }

    /// Returns the capture name to index mapping.
    #[must_use]
    pub const fn fields(&self) -> &FieldIndex {
        &self.fields
    }
}

impl Serialize for LineDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("regexp", &self.regexp)?;
        for (name, index) in self.fields.iter() {
            map.serialize_entry(name, &index)?;
        }
        map.end()
    }
}

/// All line patterns for one diagnostic-producing tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatcherDescriptor {
    owner: String,
    pattern: Vec<LineDescriptor>,
}

impl MatcherDescriptor {
    /// Creates a descriptor. Line order is the order lines are consumed in.
    #[must_use]
    pub const fn new(owner: String, pattern: Vec<LineDescriptor>) -> Self {
        Self { owner, pattern }
    }

    /// Returns the owner identifier.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the line descriptors in match order.
    #[must_use]
    pub fn lines(&self) -> &[LineDescriptor] {
        &self.pattern
    }
}

/// The top-level artifact: every matcher, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatcherSet {
    #[serde(rename = "problemMatcher")]
    matchers: Vec<MatcherDescriptor>,
}

impl MatcherSet {
    /// Creates a set from descriptors in the order they should be emitted.
    #[must_use]
    pub const fn new(matchers: Vec<MatcherDescriptor>) -> Self {
        Self { matchers }
    }

    /// Returns the descriptors in emission order.
    #[must_use]
    pub fn matchers(&self) -> &[MatcherDescriptor] {
        &self.matchers
    }

    /// Looks up a descriptor by owner.
    #[must_use]
    pub fn get(&self, owner: &str) -> Option<&MatcherDescriptor> {
        self.matchers.iter().find(|m| m.owner == owner)
    }

    /// Returns the number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if the set has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Serialises the set as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Atomically writes the JSON form of the set to `path`.
    pub fn save(&self, path: &Path) -> Result<(), MatcherError> {
        let json = self.to_json()?;
        crate::fs_util::atomic_write(path, &json).map_err(|source| MatcherError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
