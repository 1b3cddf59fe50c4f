//! crates/lazylog/src/logger.rs
//! The logging facade: backend, template, threshold, and statement openers.

use std::fmt;
use std::sync::Arc;

use crate::level::{Level, LevelFilter};
use crate::sink::Sink;
use crate::statement::Statement;
use crate::template::Template;

/// The logging facade handed around by code that wants to log.
///
/// A logger owns its backend and carries a shared [`Template`], an admission
/// [`LevelFilter`], and the default [`Level`] used by the openers that take
/// none. All four fields are fixed at construction; admission decisions read
/// only immutable state, so a logger can be shared by reference across
/// threads whenever the backend allows it.
///
/// Cloning a logger clones the backend and shares the template through its
/// `Arc`.
///
/// # Examples
///
/// ```
/// use lazylog::{Level, LevelFilter, Logger, TextSink};
///
/// struct Null;
///
/// impl TextSink for Null {
///     fn emit(&self, _line: &str) {}
/// }
///
/// let logger = Logger::with_threshold(Null, LevelFilter::Warning);
/// assert!(logger.at(Level::Error).is_enabled());
/// assert!(!logger.at(Level::Info).is_enabled());
/// ```
#[derive(Clone)]
pub struct Logger<B> {
    backend: B,
    template: Arc<Template>,
    threshold: LevelFilter,
    default_level: Level,
}

impl<B: Sink> Logger<B> {
    /// Creates a logger with the default template and an `Info` threshold.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_threshold(backend, LevelFilter::default())
    }

    /// Creates a logger with the default template and the given threshold.
    #[must_use]
    pub fn with_threshold(backend: B, threshold: LevelFilter) -> Self {
        Self::with_parts(
            backend,
            Arc::new(Template::default()),
            threshold,
            Level::default(),
        )
    }

    /// Creates a logger from all of its parts.
    ///
    /// The template arrives in an `Arc` so several loggers can share one
    /// compiled format.
    #[must_use]
    pub fn with_parts(
        backend: B,
        template: Arc<Template>,
        threshold: LevelFilter,
        default_level: Level,
    ) -> Self {
        Self {
            backend,
            template,
            threshold,
            default_level,
        }
    }

    /// Opens a statement at the default severity.
    ///
    /// The statement flushes when it is dropped, so
    /// `logger.log().push("...")` as a standalone expression emits one line.
    pub fn log(&self) -> Statement<'_, B> {
        self.at(self.default_level)
    }

    /// Opens a statement at `level`, enabled iff the threshold admits it.
    pub fn at(&self, level: Level) -> Statement<'_, B> {
        Statement::open(self, level, self.threshold.admits(level))
    }

    /// Opens a statement at the default severity, additionally gated by
    /// `predicate`.
    pub fn when(&self, predicate: bool) -> Statement<'_, B> {
        self.at_when(self.default_level, predicate)
    }

    /// Opens a statement at `level`, enabled iff the threshold admits it and
    /// `predicate` holds.
    ///
    /// The predicate can only narrow the threshold decision. A severity the
    /// threshold rejects stays rejected however the predicate evaluates.
    pub fn at_when(&self, level: Level, predicate: bool) -> Statement<'_, B> {
        Statement::open(self, level, self.threshold.admits(level) && predicate)
    }
}

impl<B> Logger<B> {
    /// The admission threshold.
    #[must_use]
    pub const fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    /// The severity used by [`log`](Self::log) and [`when`](Self::when).
    #[must_use]
    pub const fn default_level(&self) -> Level {
        self.default_level
    }

    /// The shared line format.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// A reference to the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// A mutable reference to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the logger and returns its backend.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Consumes the logger and returns all of its parts.
    #[must_use]
    pub fn into_parts(self) -> (B, Arc<Template>, LevelFilter, Level) {
        (
            self.backend,
            self.template,
            self.threshold,
            self.default_level,
        )
    }
}

impl<B> fmt::Debug for Logger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("template", &self.template)
            .field("threshold", &self.threshold)
            .field("default_level", &self.default_level)
            .finish_non_exhaustive()
    }
}
