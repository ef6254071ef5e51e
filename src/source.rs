use std::fmt;

/// Call site captured by the live logging macros.
///
/// Locations are built from the values of `file!()` and `line!()`, so the
/// recorded path is relative to the crate that invoked the macro. Records
/// carry a location unconditionally; it is rendered only when the `caller`
/// feature is active.
///
/// # Examples
///
/// ```
/// use tinylog::SourceLocation;
///
/// let location = SourceLocation::from_parts("src/transfer.rs", 42);
/// assert_eq!(location.to_string(), "src/transfer.rs:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from `file!()` and `line!()` style parts.
    ///
    /// Callers normally go through [`source_location!`](crate::source_location)
    /// rather than invoking this directly.
    #[must_use]
    pub const fn from_parts(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Path of the file containing the call site.
    #[must_use]
    pub const fn file(self) -> &'static str {
        self.file
    }

    /// 1-based line number of the call site.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
