//! MSVC diagnostics (`file(line[,column]): error C1234: message`).

use crate::shared;

crate::declare_tool!(
    MsvcTool,
    owner: "msvc",
    name: "MSVC",
    family: Family::Compiler,
    lines: [
        LineDef::new(&[
            r"(?P<file>(?:[A-Za-z]:[\\/])?[^():\s][^():]*)",
            r"\((?P<line>\d+)(?:,(?P<column>\d+))?\)",
            shared::COLON,
            r"(?:fatal\s+)?(?P<severity>error|warning|note)",
            r"(?P<code>[A-Z]+\d+)",
            shared::COLON,
            shared::MESSAGE,
        ]),
    ],
);
