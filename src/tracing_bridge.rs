//! src/tracing_bridge.rs
//! Bridge between the tracing crate and the facade sink.
//!
//! This module provides a tracing subscriber layer that converts tracing
//! events into facade records, so code instrumented with the standard
//! tracing macros (trace!, debug!, info!, warn!, error!) shares the one
//! diagnostic stream and line shape used by the `log_*` macros.
//!
//! # Architecture
//!
//! - [`TinylogLayer`]: a tracing-subscriber layer that processes events
//! - Event levels are mapped onto facade severities; the facade has no
//!   trace level, so TRACE events land on [`Level::Debug`]
//! - The event's `message` field becomes the record text; callsite file
//!   and line metadata feed the record's source tag when present
//!
//! # Usage
//!
//! ```rust,ignore
//! tinylog::init_tracing();
//!
//! // Now standard tracing macros flow through the facade.
//! tracing::info!("copying file");
//! tracing::error!("unreadable source");
//! ```

use crate::level::Level;
use crate::record::Record;
use crate::source::SourceLocation;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that routes tracing events into the facade sink.
///
/// The layer intercepts every event, extracts its `message` field, and
/// emits it through [`emit`](crate::emit) at the mapped severity.
/// [`Level::Fatal`] and [`Level::Message`] have no tracing counterpart and
/// are never produced by the bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TinylogLayer {
    _private: (),
}

impl TinylogLayer {
    /// Creates a new bridge layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing level to a facade severity.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            // DEBUG and TRACE share the facade's debug severity.
            _ => Level::Debug,
        }
    }
}

impl<S> Layer<S> for TinylogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());

        // Collect the message from the event
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            match metadata.file().zip(metadata.line()) {
                Some((file, line)) => crate::emit(
                    Record::new(level, format_args!("{message}"))
                        .with_source(SourceLocation::from_parts(file, line)),
                ),
                None => crate::emit(Record::new(level, format_args!("{message}"))),
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`TinylogLayer`] on the global default subscriber.
///
/// Call once at startup; afterwards every tracing event is rendered through
/// the facade sink. Tests that need a scoped subscriber can instead attach
/// the layer with `tracing::subscriber::with_default`.
///
/// # Example
///
/// ```rust,ignore
/// tinylog::init_tracing();
///
/// tracing::warn!("bridged through the facade");
/// ```
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TinylogLayer::new())
        .init();
}
