//! Clang diagnostics. Same layout as GCC, plus `remark`, and a `fatal`
//! qualifier that is not captured.

use crate::shared;

crate::declare_tool!(
    ClangTool,
    owner: "clang",
    name: "Clang",
    family: Family::Compiler,
    lines: [
        LineDef::new(&[
            shared::FILE,
            shared::LINE,
            shared::COLUMN,
            shared::COLON,
            r"(?:fatal\s+)?(?P<severity>error|warning|note|remark)",
            shared::COLON,
            shared::MESSAGE,
            shared::WARNING_FLAG,
        ]),
    ],
);
