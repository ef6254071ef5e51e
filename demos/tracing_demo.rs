//! Routes standard tracing macros through the facade sink.
//!
//! ```text
//! cargo run --example tracing_demo --features tracing
//! ```

fn main() {
    tinylog::init_tracing();

    tracing::info!("bridged through the facade");
    tracing::warn!(attempts = 3, "retrying transfer");
    tracing::error!("unreadable source file");

    // The two sides share one stream and one line shape.
    tinylog::log_message!("direct and bridged records interleave cleanly");
}
