//! Integration tests for stream-backed delivery.
//!
//! These tests drive a full logger through [`StreamSink`] targets: an
//! in-memory buffer, a real file read back from disk, and a shared sink
//! hammered from several threads at once.

use std::fs;
use std::sync::Arc;
use std::thread;

use lazylog::{Level, LevelFilter, Logger, Template};
use lazylog_sink::{LineMode, StreamSink};
use tempfile::NamedTempFile;

// ============================================================================
// In-Memory Delivery
// ============================================================================

/// Verifies a logger delivers newline-terminated lines into a buffer.
#[test]
fn buffer_sink_collects_terminated_lines() {
    let logger = Logger::new(StreamSink::new(Vec::new()));

    logger.at(Level::Warning).push("some files vanished");
    logger.at(Level::Error).push("partial transfer");

    let output = String::from_utf8(logger.into_backend().into_inner()).expect("utf8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": some files vanished"));
    assert!(lines[1].ends_with(": partial transfer"));
}

/// Verifies WithoutNewline concatenates deliveries verbatim.
#[test]
fn without_newline_mode_concatenates() {
    let sink = StreamSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
    let logger = Logger::with_parts(
        sink,
        Arc::new(Template::builder().payload().build()),
        LevelFilter::Debug,
        Level::Info,
    );

    logger.log().push("a");
    logger.log().push("b");
    logger.log().push("c");

    let output = logger.into_backend().into_inner();
    assert_eq!(output, b"abc");
}

/// Verifies threshold filtering applies before the stream is touched.
#[test]
fn filtered_statements_never_reach_the_stream() {
    let logger = Logger::with_threshold(StreamSink::new(Vec::new()), LevelFilter::Error);

    logger.at(Level::Warning).push("filtered");
    logger.at(Level::Info).push("filtered");

    let output = logger.into_backend().into_inner();
    assert!(output.is_empty());
}

// ============================================================================
// File-Backed Delivery
// ============================================================================

/// Verifies lines written through a file sink read back intact.
#[test]
fn file_backed_sink_round_trips() {
    let file = NamedTempFile::new().expect("create temp file");
    let writer = file.reopen().expect("reopen for writing");
    let logger = Logger::new(StreamSink::new(writer));

    logger.at(Level::Warning).push("some files vanished");
    logger.at(Level::Error).push("partial transfer");

    let contents = fs::read_to_string(file.path()).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": some files vanished"));
    assert!(lines[1].ends_with(": partial transfer"));
}

/// Verifies each delivery is flushed and visible without closing the sink.
#[test]
fn deliveries_are_visible_immediately() {
    let file = NamedTempFile::new().expect("create temp file");
    let writer = file.reopen().expect("reopen for writing");
    let logger = Logger::new(StreamSink::new(writer));

    logger.at(Level::Notice).push("first");
    let after_one = fs::read_to_string(file.path()).expect("read back");
    assert_eq!(after_one.lines().count(), 1);

    logger.at(Level::Notice).push("second");
    let after_two = fs::read_to_string(file.path()).expect("read back");
    assert_eq!(after_two.lines().count(), 2);
}

// ============================================================================
// Concurrent Delivery
// ============================================================================

/// Verifies concurrent statements land as whole lines, never interleaved.
#[test]
fn concurrent_statements_stay_whole_lines() {
    let file = NamedTempFile::new().expect("create temp file");
    let writer = file.reopen().expect("reopen for writing");
    let logger = Logger::with_parts(
        StreamSink::new(writer),
        Arc::new(Template::builder().payload().build()),
        LevelFilter::Debug,
        Level::Info,
    );

    let workers = 4_usize;
    let lines_per_worker = 50_usize;
    let padding = "x".repeat(64);

    thread::scope(|scope| {
        for worker in 0..workers {
            let logger = &logger;
            let padding = &padding;
            scope.spawn(move || {
                for index in 0..lines_per_worker {
                    logger
                        .at(Level::Info)
                        .push("worker ")
                        .push(worker)
                        .push(" line ")
                        .push(index)
                        .push(" ")
                        .push(padding);
                }
            });
        }
    });

    let contents = fs::read_to_string(file.path()).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), workers * lines_per_worker);
    for line in lines {
        assert!(line.starts_with("worker "), "interleaved line: {line:?}");
        assert!(line.ends_with(padding.as_str()), "interleaved line: {line:?}");
    }
}
