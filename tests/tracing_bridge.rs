//! Bridge behavior: tracing events reach the facade sink.
//!
//! Output lands on stdout, so these tests exercise the full path for
//! panics and wiring rather than asserting on captured text; the line
//! shape itself is covered by the record rendering suites.

use tinylog::TinylogLayer;
use tracing_subscriber::layer::SubscriberExt;

/// Every tracing level flows through a scoped bridge without panicking.
#[test]
fn events_flow_through_the_bridge() {
    let subscriber = tracing_subscriber::registry().with(TinylogLayer::new());
    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("bridged failure");
        tracing::warn!("bridged warning");
        tracing::info!("bridged hello");
        tracing::debug!("debug passes through");
        tracing::trace!("trace lands on debug severity");
    });
}

/// Structured fields are dropped; the message still becomes the record.
#[test]
fn events_with_fields_keep_their_message() {
    let subscriber = tracing_subscriber::registry().with(TinylogLayer::default());
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(attempts = 3, target_path = "a/b", "retrying transfer");
    });
}

/// Events without a message field are skipped rather than rendered empty.
#[test]
fn events_without_a_message_are_skipped() {
    let subscriber = tracing_subscriber::registry().with(TinylogLayer::new());
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(count = 7);
    });
}

/// The global installer wires the same layer; later scoped subscribers
/// still take precedence on their threads.
#[test]
fn init_tracing_installs_global_subscriber() {
    tinylog::init_tracing();
    tracing::info!("globally bridged");
}
