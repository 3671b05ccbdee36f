//! Every fragment must compile on its own. Noise between fragments is
//! handled by the compiler, so none of these match leading or trailing
//! whitespace.

/// Source path of a `path:line:column` location. Accepts a Windows drive
/// prefix (`C:\` or `C:/`) but otherwise stops at the first colon.
pub const FILE: &str = r"(?P<file>(?:[A-Za-z]:[\\/])?[^:\s][^:]*)";

/// Colon-prefixed line number.
pub const LINE: &str = r":(?P<line>\d+)";

/// Optional colon-prefixed column number.
pub const COLUMN: &str = r"(?::(?P<column>\d+))?";

/// Literal colon separating location, severity, and message.
pub const COLON: &str = ":";

/// Optional qualifier printed before the severity by GCC-style drivers
/// (`fatal error`, `runtime error`). The qualifier itself is an unnamed
/// capture and consumes a capture number.
pub const SEVERITY_QUALIFIER: &str = r"(?:(fatal|runtime)\s+)?";

/// Remainder of the line, trimmed of trailing noise by the line anchor.
pub const MESSAGE: &str = r"(?P<message>.+?)";

/// Optional `[-Wflag]` suffix naming the warning option.
pub const WARNING_FLAG: &str = r"(?:\[(?P<code>-W[\w=+-]+)\])?";
