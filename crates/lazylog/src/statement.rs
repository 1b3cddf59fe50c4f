//! crates/lazylog/src/statement.rs
//! Scope-bound log statements that accumulate a line and flush on drop.

use std::fmt;
use std::fmt::Write as _;

use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use crate::template::{Directive, render_local_timestamp};

/// Per-statement position in the template's shared tables.
#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
    segment: usize,
    text: usize,
    closure: usize,
}

/// A single in-flight log line, flushed to the backend when dropped.
///
/// A statement is opened through one of the [`Logger`] openers, which fix its
/// severity and its enabled flag for the statement's whole lifetime. Opening
/// replays the template prefix; [`push`](Self::push) and
/// [`push_with`](Self::push_with) then append payload, and
/// [`next_segment`](Self::next_segment) replays any trailing template
/// segment. Dropping the statement is the only flush point: an enabled
/// statement hands its finished line to the backend exactly once, a disabled
/// one vanishes without side effects.
///
/// Disabled statements stay cheap. The template walk still advances the
/// statement's cursors, but no text is copied, no timestamp is formatted, and
/// no closure runs; `push_with` arguments are never invoked either.
///
/// Statements are not clonable. Each one owns its line buffer and its single
/// flush.
///
/// # Examples
///
/// ```
/// use lazylog::{Level, Logger, TextSink};
///
/// struct Stderr;
///
/// impl TextSink for Stderr {
///     fn emit(&self, line: &str) {
///         eprintln!("{line}");
///     }
/// }
///
/// let logger = Logger::new(Stderr);
/// logger.at(Level::Warning).push("slow response: ").push_with(|| 381).push("ms");
/// // The statement flushed when the expression above ended.
/// ```
pub struct Statement<'a, B: Sink> {
    logger: &'a Logger<B>,
    level: Level,
    enabled: bool,
    cursor: Cursor,
    line: String,
}

impl<'a, B: Sink> Statement<'a, B> {
    /// Opens a statement and replays the template prefix.
    pub(crate) fn open(logger: &'a Logger<B>, level: Level, enabled: bool) -> Self {
        let mut statement = Self {
            logger,
            level,
            enabled,
            cursor: Cursor::default(),
            line: String::new(),
        };
        statement.replay_next_segment();
        statement
    }

    /// The severity this statement was opened at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Whether this statement will flush on drop.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends a value to the payload of an enabled statement.
    ///
    /// On a disabled statement the value's `Display` impl is never invoked.
    pub fn push(mut self, value: impl fmt::Display) -> Self {
        if self.enabled {
            let _ = write!(self.line, "{value}");
        }
        self
    }

    /// Renders `render` and appends its output, only if enabled.
    ///
    /// This is the lazy-argument entry point: on a disabled statement
    /// `render` is dropped unused, so an expensive computation costs nothing
    /// when its line is filtered.
    pub fn push_with<T: fmt::Display>(mut self, render: impl FnOnce() -> T) -> Self {
        if self.enabled {
            let rendered = render();
            let _ = write!(self.line, "{rendered}");
        }
        self
    }

    /// Replays the next template segment.
    ///
    /// Past the last segment this is a no-op, so a statement may ask for more
    /// segments than its template defines without effect.
    pub fn next_segment(mut self) -> Self {
        self.replay_next_segment();
        self
    }

    fn replay_next_segment(&mut self) {
        let Some(directives) = self.logger.template().segment(self.cursor.segment) else {
            return;
        };
        self.cursor.segment += 1;
        for directive in directives {
            self.render(*directive);
        }
    }

    // Cursors advance whether or not the statement is enabled; only the
    // rendering work is skipped.
    fn render(&mut self, directive: Directive) {
        match directive {
            Directive::Text => {
                let index = self.cursor.text;
                self.cursor.text += 1;
                if self.enabled {
                    self.line.push_str(&self.logger.template().texts[index]);
                }
            }
            Directive::Level => {
                if self.enabled {
                    let label = self.logger.template().level_name(self.level);
                    self.line.push_str(label);
                }
            }
            Directive::Timestamp => {
                if self.enabled {
                    render_local_timestamp(&mut self.line);
                }
            }
            Directive::Closure => {
                let index = self.cursor.closure;
                self.cursor.closure += 1;
                if self.enabled {
                    let rendered = (self.logger.template().closures[index])();
                    self.line.push_str(&rendered);
                }
            }
        }
    }
}

impl<B: Sink> Drop for Statement<'_, B> {
    /// Flushes the finished line, the sole delivery point.
    fn drop(&mut self) {
        if self.enabled {
            self.logger.backend().accept(&self.line, self.level);
        }
    }
}

impl<B: Sink> fmt::Debug for Statement<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("level", &self.level)
            .field("enabled", &self.enabled)
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}
