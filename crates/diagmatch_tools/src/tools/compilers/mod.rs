//! C and C++ compiler tools.

mod clang;
mod gcc;
mod msvc;

pub use clang::ClangTool;
pub use gcc::GccTool;
pub use msvc::MsvcTool;
