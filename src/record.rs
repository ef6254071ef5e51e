use std::fmt;

use crate::level::Level;
use crate::source::SourceLocation;

/// A single diagnostic record: a severity, the formatted text, and an
/// optional call site.
///
/// The `Display` implementation is the one definition of the line shape
/// shared by every output path. With no decoration features active a record
/// renders as `[LABEL] text`; the `prefix` feature prepends upstream
/// tinylog's `[Log] ` banner, `caller` inserts a `[file:line] ` tag after
/// the level tag, and `color` wraps the label in the level's ANSI color.
///
/// Records borrow their text as [`fmt::Arguments`], so they are built and
/// consumed within a single expression and never allocate on their own.
///
/// # Examples
///
/// ```
/// use tinylog::{Level, Record};
///
/// let line = Record::new(Level::Error, format_args!("code={}", 42)).to_string();
/// assert!(line.contains("ERROR"));
/// assert!(line.ends_with("code=42"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    args: fmt::Arguments<'a>,
    source: Option<SourceLocation>,
}

impl<'a> Record<'a> {
    /// Creates a record carrying `args` at `level`, with no call site.
    #[must_use]
    pub const fn new(level: Level, args: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            args,
            source: None,
        }
    }

    /// Attaches the call site that produced the record.
    ///
    /// The live macros do this for every call. The location is only
    /// rendered when the `caller` feature is active; carrying it is two
    /// copied constants, so the macros do not gate the capture.
    #[must_use]
    pub const fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(self) -> Level {
        self.level
    }

    /// Formatted text of the record.
    #[must_use]
    pub const fn args(self) -> fmt::Arguments<'a> {
        self.args
    }

    /// Call site attached to the record, if any.
    #[must_use]
    pub const fn source(self) -> Option<SourceLocation> {
        self.source
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // upstream: log.go — ShowPrefix writes the banner plain; only the
        // level tag is ever colored.
        #[cfg(feature = "prefix")]
        f.write_str("[Log] ")?;

        #[cfg(feature = "color")]
        write!(f, "[{}{}\x1b[0m] ", self.level.color_code(), self.level.as_str())?;
        #[cfg(not(feature = "color"))]
        write!(f, "[{}] ", self.level.as_str())?;

        #[cfg(feature = "caller")]
        if let Some(source) = self.source {
            write!(f, "[{source}] ")?;
        }

        write!(f, "{}", self.args)
    }
}
