use std::io::{self, Write};

use crate::record::Record;

/// Writes `record` and a trailing newline to standard output.
///
/// This is the facade's only output path; all six logging macros and the
/// tracing bridge funnel through it. The stream's own lock is held for the
/// duration of the write, so a record reaches the stream as one call and
/// concurrent callers cannot interleave mid-record. Interleaving between
/// whole records is whatever the stream provides.
///
/// Write failures are discarded. A closed or failing stdout loses the
/// record silently, matching upstream tinylog's unchecked `printf`.
///
/// # Examples
///
/// ```
/// use tinylog::{Level, Record};
///
/// tinylog::emit(Record::new(Level::Info, format_args!("ready")));
/// ```
pub fn emit(record: Record<'_>) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{record}");
}
