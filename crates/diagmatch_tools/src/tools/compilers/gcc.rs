//! GCC diagnostics (`file:line:column: [fatal] error: message [-Wflag]`).

use crate::shared;

crate::declare_tool!(
    GccTool,
    owner: "gcc",
    name: "GCC",
    family: Family::Compiler,
    lines: [
        LineDef::new(&[
            shared::FILE,
            shared::LINE,
            shared::COLUMN,
            shared::COLON,
            shared::SEVERITY_QUALIFIER,
            r"(?P<severity>error|warning|note)",
            shared::COLON,
            shared::MESSAGE,
            shared::WARNING_FLAG,
        ]),
    ],
);
