//! Mapping from capture name to positional capture index.

use std::collections::HashMap;

use crate::error::CompileError;
use crate::line::LinePattern;
use crate::syntax::GroupToken;

/// Names that cannot be used as captures because they collide with a key the
/// descriptor writes next to the fields.
pub const RESERVED_FIELDS: &[&str] = &["regexp"];

/// Capture name to 1-based capture index, in ascending index order.
///
/// Indices count every capturing group, named or not, so they address the
/// same groups in the rewritten pattern where names are gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    fields: Vec<(Box<str>, usize)>,
}

impl FieldIndex {
    /// Extracts the field index of a compiled line pattern.
    pub fn extract(pattern: &LinePattern) -> Result<Self, CompileError> {
        Self::from_captures(pattern.owner(), pattern.line_group(), pattern.captures())
    }

    /// Builds a field index from groups in textual order.
    ///
    /// Non-capturing groups are skipped. A repeated name is an error naming
    /// both capture indices.
    pub fn from_captures(owner: &str, line_group: usize, groups: &[GroupToken]) -> Result<Self, CompileError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut fields = Vec::new();

        for (position, group) in groups.iter().filter(|g| g.is_capture()).enumerate() {
            let index = position + 1;
            let Some(name) = group.name() else {
                continue;
            };

            if let Some(&first) = seen.get(name) {
                return Err(CompileError::DuplicateField {
                    owner: owner.to_string(),
                    line_group,
                    name: name.to_string(),
                    first,
                    second: index,
                });
            }

            if RESERVED_FIELDS.contains(&name) {
                return Err(CompileError::ReservedField {
                    owner: owner.to_string(),
                    line_group,
                    name: name.to_string(),
                });
            }

            seen.insert(name, index);
            fields.push((name.into(), index));
        }

        Ok(Self { fields })
    }

    /// Returns the capture index of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.fields.iter().find(|(n, _)| n.as_ref() == name).map(|&(_, idx)| idx)
    }

    /// Returns `(name, index)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.fields.iter().map(|(name, idx)| (name.as_ref(), *idx))
    }

    /// Returns field names in ascending index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_ref())
    }

    /// Returns the number of named captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the pattern has no named captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Fails if any capture name in `groups` is repeated or reserved.
pub(crate) fn reject_duplicates(owner: &str, line_group: usize, groups: &[GroupToken]) -> Result<(), CompileError> {
    FieldIndex::from_captures(owner, line_group, groups).map(drop)
}
