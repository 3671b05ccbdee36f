//! Noise tolerance between meaningful fragments.
//!
//! Build tools pad and colourise their output. Rather than have every pattern
//! author account for that, the compiler places [`NOISE`] at every seam of a
//! line, and at both ends.

/// A single terminal control sequence: `ESC [`, an optional `=` or `?`
/// parameter prefix, any run of digits and semicolons, and one final letter.
pub const CONTROL_SEQUENCE: &str = r"\x1b\[[=?]?[;\d]*[a-zA-Z]";

/// Zero or more whitespace characters or control sequences, in any order.
///
/// The group is non-capturing so it never shifts capture numbering, and the
/// trailing `*` means it also matches when no noise is present.
pub const NOISE: &str = r"(?:\s|\x1b\[[=?]?[;\d]*[a-zA-Z])*";

/// Returns the noise-tolerance fragment.
#[must_use]
pub const fn noise() -> &'static str {
    NOISE
}
