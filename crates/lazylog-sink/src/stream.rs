//! crates/lazylog-sink/src/stream.rs
//! Stream-backed delivery for any [`io::Write`] target.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use lazylog::TextSink;

use crate::line_mode::LineMode;

/// Delivers finished lines to an [`io::Write`] target.
///
/// The writer sits behind a mutex, so a logger wrapping this sink can be
/// shared across threads and every line lands contiguously in the output.
/// Each delivery writes the line, appends a terminator according to the
/// configured [`LineMode`], and flushes, keeping the target current even
/// when the process aborts shortly after logging.
///
/// Write failures are swallowed. Delivery is fire-and-forget and has no
/// channel to report an error back through.
///
/// # Examples
///
/// ```
/// use lazylog::{Level, Logger};
/// use lazylog_sink::StreamSink;
///
/// let logger = Logger::new(StreamSink::new(Vec::new()));
/// logger.at(Level::Warning).push("some files vanished");
///
/// let buffer = logger.into_backend().into_inner();
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.ends_with("some files vanished\n"));
/// ```
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W: Write> StreamSink<W> {
    /// Creates a sink that terminates each line with a newline.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with an explicit [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }
}

impl StreamSink<io::Stdout> {
    /// A sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<io::Stderr> {
    /// A sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> StreamSink<W> {
    /// The configured newline policy.
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> TextSink for StreamSink<W> {
    fn emit(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = match self.line_mode {
            LineMode::WithNewline => writeln!(writer, "{line}"),
            LineMode::WithoutNewline => write!(writer, "{line}"),
        };
        let _ = writer.flush();
    }
}
