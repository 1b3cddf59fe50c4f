//! Integration tests for the default line shape.
//!
//! These tests verify the stock template renders
//! `[ <date> <time> ] <LEVEL>: <payload>` with a local wall-clock timestamp
//! and the colored label table.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use lazylog::{DEFAULT_LEVEL_NAMES, Level, LevelFilter, Logger, Sink};

#[derive(Clone, Default)]
struct Capture {
    deliveries: Rc<RefCell<Vec<(String, Level)>>>,
}

impl Sink for Capture {
    fn accept(&self, line: &str, level: Level) {
        self.deliveries.borrow_mut().push((line.to_owned(), level));
    }
}

// ============================================================================
// Full Line Rendering
// ============================================================================

/// Verifies a warning line renders timestamp, label, and payload exactly.
#[test]
fn warning_line_renders_timestamp_label_and_payload() {
    let sink = Capture::default();
    let deliveries = Rc::clone(&sink.deliveries);
    let logger = Logger::with_threshold(sink, LevelFilter::Notice);

    // Retry if the wall clock ticked over a second mid-statement.
    let (line, level, stamp) = loop {
        let before = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        logger.at(Level::Warning).push("disk at ").push_with(|| "92%");
        let after = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let (line, level) = deliveries.borrow_mut().pop().unwrap();
        if before == after {
            break (line, level, before);
        }
    };

    let label = DEFAULT_LEVEL_NAMES[Level::Warning.ordinal()];
    assert_eq!(line, format!("[ {stamp} ] {label}: disk at 92%"));
    assert_eq!(level, Level::Warning);
    assert!(deliveries.borrow().is_empty());
}

/// Verifies the default prefix brackets a well-formed timestamp.
#[test]
fn default_prefix_brackets_the_timestamp() {
    let sink = Capture::default();
    let deliveries = Rc::clone(&sink.deliveries);
    let logger = Logger::new(sink);

    logger.log().push("x");

    let delivered = deliveries.borrow();
    let line = &delivered[0].0;
    let suffix = format!("] {}: x", DEFAULT_LEVEL_NAMES[Level::Info.ordinal()]);
    assert!(line.starts_with("[ "), "line was {line:?}");
    assert!(line.ends_with(&suffix), "line was {line:?}");

    let stamp = &line[2..21];
    let bytes = stamp.as_bytes();
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[7], b'-');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
    assert_eq!(bytes[16], b':');
}

// ============================================================================
// Label Selection
// ============================================================================

/// Verifies each severity renders its own table label.
#[test]
fn each_severity_renders_its_table_label() {
    let sink = Capture::default();
    let deliveries = Rc::clone(&sink.deliveries);
    let logger = Logger::with_threshold(sink, LevelFilter::Debug);

    for level in Level::ALL {
        logger.at(level).push("p");
    }

    let delivered = deliveries.borrow();
    assert_eq!(delivered.len(), Level::COUNT);
    for (index, (line, level)) in delivered.iter().enumerate() {
        assert_eq!(*level, Level::ALL[index]);
        assert!(line.contains(DEFAULT_LEVEL_NAMES[level.ordinal()]));
        assert!(line.ends_with(": p"));
    }
}

// ============================================================================
// Filtering Under the Default Template
// ============================================================================

/// Verifies a filtered statement leaves no trace.
#[test]
fn filtered_statement_is_silent() {
    let sink = Capture::default();
    let deliveries = Rc::clone(&sink.deliveries);
    let logger = Logger::with_threshold(sink, LevelFilter::Error);

    logger.at(Level::Warning).push("lost");
    logger.log().push("lost");

    assert!(deliveries.borrow().is_empty());
}
