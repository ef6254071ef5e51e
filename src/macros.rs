//! src/macros.rs
//! The six logging entry points and the call-site capture helper.
//!
//! Every macro has two definitions selected by the `enabled` feature. The
//! live definition renders through [`Record`](crate::Record) and the facade
//! sink; the inactive definition expands to `()` without ever expanding its
//! argument tokens, so disabled call sites evaluate nothing, allocate
//! nothing, and cost nothing.

/// Captures the current call site as a [`SourceLocation`](crate::SourceLocation).
///
/// # Example
/// ```
/// let here = tinylog::source_location!();
/// assert!(here.file().ends_with(".rs"));
/// assert!(here.line() > 0);
/// ```
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::from_parts(::core::file!(), ::core::line!())
    };
}

/// Emits a `DEBUG` record.
///
/// # Example
/// ```
/// tinylog::log_debug!("Say: {}, {}!", "Hello", "Rust");
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Debug, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        ()
    };
}

/// Emits an `INFO` record.
///
/// # Example
/// ```
/// tinylog::log_info!("listening on {}", "0.0.0.0:873");
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Info, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        ()
    };
}

/// Emits a `WARN` record.
///
/// # Example
/// ```
/// tinylog::log_warn!("disk space at {}%", 93);
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Warn, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        ()
    };
}

/// Emits an `ERROR` record.
///
/// # Example
/// ```
/// tinylog::log_error!("code={}", 42);
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Error, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        ()
    };
}

/// Emits a `FATAL` record.
///
/// Despite the name this only writes a record; the process keeps running
/// and any exit is the caller's decision.
///
/// # Example
/// ```
/// tinylog::log_fatal!("cannot open {}", "tinylog.conf");
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Fatal, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        ()
    };
}

/// Emits a `MESSAGE` record.
///
/// # Example
/// ```
/// tinylog::log_message!("hello");
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! log_message {
    ($($arg:tt)+) => {
        $crate::emit(
            $crate::Record::new($crate::Level::Message, ::core::format_args!($($arg)+))
                .with_source($crate::source_location!()),
        )
    };
}

/// Expands to nothing; arguments are never evaluated.
///
/// Activate the `enabled` feature for the live definition.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! log_message {
    ($($arg:tt)+) => {
        ()
    };
}
