//! Built-in tools, one per diagnostic-producing program.

mod compilers;
mod engine;

use crate::tool::Tool;

/// Returns all built-in tools in the order they are emitted.
#[must_use]
pub fn builtin_tools() -> Vec<&'static dyn Tool> {
    vec![
        // Compilers
        &compilers::GccTool,
        &compilers::ClangTool,
        &compilers::MsvcTool,
        // Engine output
        &engine::GodotTool,
    ]
}
