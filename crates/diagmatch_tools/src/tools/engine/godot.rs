//! Godot engine errors. Two physical lines: the severity and message, then
//! an indented `at:` line naming the function and source location.

use crate::shared;

crate::declare_tool!(
    GodotTool,
    owner: "godot",
    name: "Godot",
    family: Family::Engine,
    lines: [
        LineDef::new(&[
            r"(?P<severity>ERROR|WARNING|SCRIPT ERROR|SHADER ERROR|USER ERROR|USER WARNING)",
            shared::COLON,
            shared::MESSAGE,
        ]),
        LineDef::new(&[
            "at:",
            r"(?:[^(]*\()?",
            r"(?P<file>(?:res://|user://)?[^():]+)",
            shared::LINE,
            r"\)?",
        ]),
    ],
);
