//! Tool registry for accessing all built-in tools.

use crate::tool::Tool;
use crate::tools::builtin_tools;

/// Ordered collection of built-in tools.
///
/// The order is the order descriptors are emitted in, so it must stay stable
/// for generated files to diff cleanly.
pub struct ToolRegistry {
    tools: Vec<&'static dyn Tool>,
}

impl ToolRegistry {
    /// Creates a registry pre-loaded with all built-in tools.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tools: builtin_tools(),
        }
    }

    /// Returns the underlying slice of registered tools.
    #[must_use]
    pub fn tools(&self) -> &[&'static dyn Tool] {
        &self.tools
    }

    /// Looks up a tool by its owner identifier.
    #[must_use]
    pub fn get(&self, owner: &str) -> Option<&'static dyn Tool> {
        self.tools.iter().copied().find(|t| t.owner() == owner)
    }

    /// Returns an iterator over every owner identifier, in emission order.
    pub fn owners(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|t| t.owner())
    }

    /// Returns the total number of line groups across all tools.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.tools.iter().map(|t| t.lines().len()).sum()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("line_count", &self.line_count())
            .finish_non_exhaustive()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
