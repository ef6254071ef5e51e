//! Banner decoration (`prefix` feature).
//!
//! Upstream tinylog emits its `[Log]` banner as plain text; color only
//! ever applies to the level tag. `starts_with` assertions keep the suite
//! valid when `color` or `caller` are active as well.

use tinylog::{Level, Record};

fn rendered(level: Level) -> String {
    Record::new(level, format_args!("payload")).to_string()
}

/// Every record leads with the literal banner.
#[test]
fn banner_precedes_every_record() {
    for level in Level::ALL {
        let line = rendered(level);
        assert!(line.starts_with("[Log] "), "missing banner in {line:?}");
    }
}

/// The banner sits ahead of the level tag.
#[test]
fn banner_comes_before_the_level_tag() {
    let line = rendered(Level::Error);
    assert!(line.starts_with("[Log] ["), "banner misplaced in {line:?}");
}

/// The rendered text still ends the line.
#[test]
fn text_still_ends_the_line() {
    assert!(rendered(Level::Info).ends_with("payload"));
}

/// The banner stays plain while the level tag is painted.
#[cfg(feature = "color")]
#[test]
fn banner_is_not_colored() {
    let line = rendered(Level::Error);
    assert!(line.starts_with("[Log] "), "painted banner in {line:?}");
    assert!(
        line.contains("\u{1b}[31m"),
        "missing painted tag in {line:?}"
    );
}
