//! Behavior of the live facade (`enabled` feature present).
//!
//! Assertions here avoid exact line shapes so the suite also passes when
//! decoration features are stacked on top; the precise default rendering
//! is pinned down in `record_format.rs`.

#![cfg(feature = "enabled")]

use std::sync::atomic::{AtomicUsize, Ordering};

use tinylog::{Level, Record};

fn tick(counter: &AtomicUsize) -> usize {
    counter.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Argument evaluation
// ============================================================================

/// A live macro evaluates each argument exactly once.
#[test]
fn arguments_evaluate_exactly_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    tinylog::log_debug!("tick {}", tick(&CALLS));
    tinylog::log_info!("tick {}", tick(&CALLS));
    tinylog::log_warn!("tick {}", tick(&CALLS));
    tinylog::log_error!("tick {}", tick(&CALLS));
    tinylog::log_fatal!("tick {}", tick(&CALLS));
    tinylog::log_message!("tick {}", tick(&CALLS));

    assert_eq!(CALLS.load(Ordering::SeqCst), 6);
}

/// Several placeholders in one template still evaluate once apiece.
#[test]
fn multi_argument_templates_evaluate_each_argument_once() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    tinylog::log_info!("{} then {}", tick(&CALLS), tick(&CALLS));

    assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Control flow
// ============================================================================

/// Emitting a fatal record leaves the process running; exiting is the
/// caller's decision.
#[test]
fn log_fatal_returns_control() {
    static REACHED: AtomicUsize = AtomicUsize::new(0);

    tinylog::log_fatal!("giving up on {}", "shard-7");
    REACHED.store(1, Ordering::SeqCst);

    assert_eq!(REACHED.load(Ordering::SeqCst), 1);
}

/// Live macros are unit expressions, interchangeable with the disabled
/// expansion at every call site.
#[test]
#[allow(clippy::let_unit_value)]
fn macros_expand_in_expression_position() {
    let _: () = tinylog::log_debug!("expression position");
    let _: () = tinylog::log_info!("expression position");
    let _: () = tinylog::log_warn!("expression position");
    let _: () = tinylog::log_error!("expression position");
    let _: () = tinylog::log_fatal!("expression position");
    let _: () = tinylog::log_message!("expression position");

    let value = {
        tinylog::log_warn!("statement position");
        7
    };
    assert_eq!(value, 7);
}

// ============================================================================
// Call-site ergonomics
// ============================================================================

/// Trailing commas and repeated calls are accepted, and identical calls
/// stay identical (nothing dynamic is injected into the text).
#[test]
fn call_shapes_accepted_by_the_live_facade() {
    tinylog::log_debug!("Say: {}, {}!", "Hello", "Rust",);
    tinylog::log_message!("hello");
    tinylog::log_message!("hello");

    let first = Record::new(Level::Message, format_args!("hello")).to_string();
    let second = Record::new(Level::Message, format_args!("hello")).to_string();
    assert_eq!(first, second);
}

/// The sink behind the macros is public; records built by hand take the
/// same path the macros use.
#[test]
fn emit_is_reachable_directly() {
    for level in Level::ALL {
        tinylog::emit(Record::new(level, format_args!("direct emit smoke test")));
    }
    tinylog::emit(
        Record::new(Level::Info, format_args!("direct emit with source"))
            .with_source(tinylog::source_location!()),
    );
}
