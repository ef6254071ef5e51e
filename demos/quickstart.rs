//! Walks every facade level once.
//!
//! Run with the facade compiled in, plus any decorations to taste:
//!
//! ```text
//! cargo run --example quickstart --features enabled
//! cargo run --example quickstart --features enabled,color,caller
//! ```

fn main() {
    tinylog::log_debug!("Say: {}, {}!", "Hello", "Rust");
    tinylog::log_info!("listening on {}", "0.0.0.0:873");
    tinylog::log_warn!("disk space at {}%", 93);
    tinylog::log_error!("code={}", 42);
    tinylog::log_fatal!("cannot open {}", "tinylog.conf");
    tinylog::log_message!("hello");

    // Still here: fatal records never exit on their own.
    tinylog::log_message!("bye");
}
