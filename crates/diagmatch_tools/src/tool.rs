//! Tool trait for matcher tables.

use crate::line::{Family, LineDef};

/// A program whose diagnostic output a problem matcher recognises.
///
/// Each tool contributes one or more line groups. Multi-line diagnostics list
/// their groups in the order the lines are printed.
pub trait Tool: Send + Sync {
    /// Returns the owner identifier written to the descriptor (e.g. `"gcc"`).
    fn owner(&self) -> &'static str;

    /// Returns the human-readable display name (e.g. `"GCC"`).
    fn name(&self) -> &'static str;

    /// Returns the family this tool belongs to.
    fn family(&self) -> Family;

    /// Returns the static slice of line groups this tool contributes.
    fn lines(&self) -> &'static [LineDef];
}

/// Generates a `Tool` implementation from a static table of line groups.
///
/// Creates a unit struct, implements `Tool` for it, and emits basic tests
/// asserting the table is non-empty and the owner is a valid identifier.
#[macro_export]
macro_rules! declare_tool {
    (
        $struct_name:ident,
        owner: $owner:expr,
        name: $display_name:expr,
        family: $family:expr,
        lines: [$($line:expr),+ $(,)?] $(,)?
    ) => {
        use $crate::line::{Family, LineDef};
        use $crate::tool::Tool;

        static LINES: &[LineDef] = &[$($line),+];

        #[doc = concat!("Problem matcher table for ", $display_name, " diagnostics.")]
        #[derive(Debug)]
        pub struct $struct_name;

        impl Tool for $struct_name {
            fn owner(&self) -> &'static str {
                $owner
            }

            fn name(&self) -> &'static str {
                $display_name
            }

            fn family(&self) -> Family {
                $family
            }

            fn lines(&self) -> &'static [LineDef] {
                LINES
            }
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[test]
            fn tool_has_lines() {
                assert!(!$struct_name.lines().is_empty());
            }

            #[test]
            fn every_line_has_fragments() {
                for line in $struct_name.lines() {
                    assert!(!line.fragments.is_empty());
                }
            }

            #[test]
            fn owner_is_lowercase_identifier() {
                let owner = $struct_name.owner();
                assert!(!owner.is_empty());
                assert!(owner.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }

            #[test]
            fn every_fragment_is_valid_regex() {
                for line in $struct_name.lines() {
                    for fragment in line.fragments {
                        assert!(regex::Regex::new(fragment).is_ok(), "invalid fragment: {fragment}");
                    }
                }
            }
        }
    };
}
