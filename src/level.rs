use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity attached to a diagnostic record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Developer diagnostics (`DEBUG`).
    Debug,
    /// Informational output (`INFO`).
    Info,
    /// Recoverable anomalies (`WARN`).
    Warn,
    /// Failures (`ERROR`).
    Error,
    /// Unrecoverable failures (`FATAL`). Emitting one does not terminate
    /// the process; see [`is_fatal`](Self::is_fatal).
    Fatal,
    /// Unconditional operator-facing output (`MESSAGE`).
    Message,
}

impl Level {
    /// All severities in the canonical ordering used by upstream tinylog.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylog::Level;
    ///
    /// let labels: Vec<&str> = Level::ALL
    ///     .into_iter()
    ///     .map(|level| level.as_str())
    ///     .collect();
    ///
    /// assert_eq!(labels, ["DEBUG", "INFO", "WARN", "ERROR", "FATAL", "MESSAGE"]);
    /// ```
    pub const ALL: [Self; 6] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Message,
    ];

    /// Returns the uppercase label rendered in every record's level tag.
    ///
    /// The returned string matches the tag emitted by upstream tinylog.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylog::Level;
    ///
    /// assert_eq!(Level::Debug.as_str(), "DEBUG");
    /// assert_eq!(Level::Error.as_str(), "ERROR");
    /// assert_eq!(Level::Message.as_str(), "MESSAGE");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Message => "MESSAGE",
        }
    }

    /// Returns `true` for [`Level::Fatal`].
    ///
    /// The facade never terminates the process on a fatal record; callers
    /// that want upstream Go tinylog's exit-after-fatal behavior decide it
    /// themselves, typically keyed off this predicate.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }

    // upstream: log.go — per-level ANSI palette used for the level tag.
    #[cfg(feature = "color")]
    pub(crate) const fn color_code(self) -> &'static str {
        match self {
            Self::Debug | Self::Message => "\x1b[34m",
            Self::Info => "\x1b[36m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Fatal => "\x1b[35m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity label")]
pub struct ParseLevelError {
    _private: (),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            "MESSAGE" => Ok(Self::Message),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}
