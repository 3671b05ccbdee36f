//! Matcher definitions and the registry that turns them into descriptors.

use std::collections::HashSet;
use std::fmt;

use diagmatch_tools::{Family, Tool, ToolRegistry};
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::descriptor::{LineDescriptor, MatcherDescriptor, MatcherSet};
use crate::error::{CompileError, UnknownOwnerError};
use crate::line::LinePattern;

/// An uncompiled problem matcher: an owner and its ordered line groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherDef {
    /// Owner identifier written to the descriptor.
    pub owner: String,
    /// Family used for filtering in listings.
    #[serde(default)]
    pub family: Family,
    /// Line groups in the order the tool prints them.
    pub lines: Vec<Vec<String>>,
}

impl MatcherDef {
    /// Creates a definition from owned parts.
    #[must_use]
    pub fn new(owner: impl Into<String>, family: Family, lines: Vec<Vec<String>>) -> Self {
        Self {
            owner: owner.into(),
            family,
            lines,
        }
    }

    /// Copies a built-in table into an owned definition.
    #[must_use]
    pub fn from_tool(tool: &dyn Tool) -> Self {
        let lines = tool
            .lines()
            .iter()
            .map(|line| line.fragments.iter().map(|f| (*f).to_string()).collect())
            .collect();
        Self::new(tool.owner(), tool.family(), lines)
    }

    /// Compiles every line group into a descriptor, in order.
    ///
    /// Stops at the first line group that fails.
    pub fn compile(&self) -> Result<MatcherDescriptor, CompileError> {
        let mut pattern = Vec::with_capacity(self.lines.len());

        for (line_group, fragments) in self.lines.iter().enumerate() {
            let line = LinePattern::compile(&self.owner, line_group, fragments)?;
            pattern.push(LineDescriptor::from_pattern(&line)?);
        }

        #[cfg(feature = "tracing")]
        debug!(owner = %self.owner, lines = pattern.len(), "compiled matcher");

        Ok(MatcherDescriptor::new(self.owner.clone(), pattern))
    }
}

/// Compiles `defs` into a descriptor set, preserving their order.
///
/// The first error aborts the whole batch; no partial set is returned.
pub fn compile_set(defs: &[MatcherDef]) -> Result<MatcherSet, CompileError> {
    let matchers = defs.iter().map(MatcherDef::compile).collect::<Result<Vec<_>, _>>()?;
    Ok(MatcherSet::new(matchers))
}

/// Ordered collection of matcher definitions ready to compile.
#[derive(Clone)]
pub struct MatcherRegistry {
    defs: Vec<MatcherDef>,
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("matchers", &self.defs.len())
            .finish_non_exhaustive()
    }
}

impl MatcherRegistry {
    /// Creates a registry containing every built-in tool.
    #[must_use]
    pub fn builtin() -> Self {
        let tools = ToolRegistry::builtin();
        Self::new(tools.tools().iter().map(|&t| MatcherDef::from_tool(t)).collect())
    }

    /// Creates a registry from definitions in emission order.
    #[must_use]
    pub const fn new(defs: Vec<MatcherDef>) -> Self {
        Self { defs }
    }

    /// Builds the registry described by `config`: the built-ins minus
    /// `disabled_matchers`, followed by the custom matchers.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let builtin = ToolRegistry::builtin();

        if let Some(unknown) = config
            .disabled_matchers
            .iter()
            .find(|d| !builtin.owners().any(|o| o == d.as_str()))
        {
            return Err(ConfigError::UnknownMatcher { owner: unknown.clone() });
        }

        let mut defs: Vec<MatcherDef> = builtin
            .tools()
            .iter()
            .filter(|t| !config.disabled_matchers.iter().any(|d| d == t.owner()))
            .map(|&t| MatcherDef::from_tool(t))
            .collect();
        defs.extend(config.custom_matchers());

        let mut seen = HashSet::new();
        if let Some(dup) = defs.iter().find(|d| !seen.insert(d.owner.as_str())) {
            return Err(ConfigError::DuplicateOwner { owner: dup.owner.clone() });
        }

        #[cfg(feature = "tracing")]
        debug!(
            matchers = defs.len(),
            disabled = config.disabled_matchers.len(),
            custom = config.matchers.len(),
            "applied configuration"
        );

        Ok(Self::new(defs))
    }

    /// Returns the definitions in emission order.
    #[must_use]
    pub fn matchers(&self) -> &[MatcherDef] {
        &self.defs
    }

    /// Looks up a definition by owner.
    #[must_use]
    pub fn get(&self, owner: &str) -> Option<&MatcherDef> {
        self.defs.iter().find(|d| d.owner == owner)
    }

    /// Returns an iterator over definitions in the given family.
    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &MatcherDef> {
        self.defs.iter().filter(move |d| d.family == family)
    }

    /// Keeps only the definitions whose owner is in `owners`, preserving
    /// registry order.
    ///
    /// Fails on the first requested owner that is not registered, leaving
    /// the registry unchanged.
    pub fn retain_owners<S: AsRef<str>>(&mut self, owners: &[S]) -> Result<(), UnknownOwnerError> {
        let wanted: Vec<&str> = owners.iter().map(|o| o.as_ref()).collect();
        if let Some(missing) = wanted.iter().find(|o| self.get(o).is_none()) {
            return Err(UnknownOwnerError {
                owner: (*missing).to_string(),
            });
        }
        self.defs.retain(|d| wanted.contains(&d.owner.as_str()));
        Ok(())
    }

    /// Compiles every definition into a descriptor set.
    pub fn compile(&self) -> Result<MatcherSet, CompileError> {
        compile_set(&self.defs)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if the registry has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
