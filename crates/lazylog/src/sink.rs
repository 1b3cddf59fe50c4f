//! crates/lazylog/src/sink.rs
//! Delivery traits implemented by logging backends.

use crate::level::Level;

/// A backend that receives finished log lines together with their severity.
///
/// This is the shape the statement destructor calls: every flush goes through
/// [`accept`](Self::accept). Backends that route on severity, such as a syslog
/// writer picking a priority, implement `Sink` directly. Backends that only
/// carry text implement [`TextSink`] instead and receive `Sink` through a
/// blanket impl that drops the severity argument.
///
/// Implement exactly one of the two traits. Implementing both trips the
/// blanket impl's coherence check and the crate fails to compile; implementing
/// neither leaves the `Sink` bound on [`Logger`](crate::Logger) unsatisfied.
///
/// Delivery is fire-and-forget: `accept` returns nothing and must not panic.
/// A backend that can fail internally has to swallow or divert the error.
pub trait Sink {
    /// Delivers one finished line at the severity its statement was opened
    /// with.
    fn accept(&self, line: &str, level: Level);
}

/// A backend that receives finished log lines as plain text.
///
/// Severity still shapes the line itself (the template's level directive), so
/// a text-only backend loses nothing it could have used. See [`Sink`] for the
/// relationship between the two traits.
pub trait TextSink {
    /// Delivers one finished line.
    fn emit(&self, line: &str);
}

impl<T: TextSink> Sink for T {
    fn accept(&self, line: &str, _level: Level) {
        self.emit(line);
    }
}
