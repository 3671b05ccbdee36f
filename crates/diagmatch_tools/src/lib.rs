//! Built-in problem matcher tables for diagmatch.
//!
//! Each [`Tool`] describes how one diagnostic-producing program formats its
//! messages, as ordered line groups of regular-expression fragments. This
//! crate only holds the tables; compiling them into descriptors is the job of
//! `diagmatch_core`.

mod line;
mod registry;
/// Fragments shared between several tool tables.
pub mod shared;
mod tool;
/// Built-in tools organised by family.
pub mod tools;

pub use line::{Family, LineDef, ParseFamilyError};
pub use registry::ToolRegistry;
pub use tool::Tool;
