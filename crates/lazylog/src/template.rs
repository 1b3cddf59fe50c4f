//! crates/lazylog/src/template.rs
//! Compiled line-format templates and their builder.

use std::fmt;
use std::fmt::Write as _;

use crate::level::{DEFAULT_LEVEL_NAMES, Level, LevelNames};

/// Deferred render step stored by [`TemplateBuilder::closure`].
pub(crate) type RenderFn = Box<dyn Fn() -> String + Send + Sync>;

/// One compiled step inside a template segment.
///
/// The variants carry no data. Each statement walks the directive stream with
/// its own cursor: a `Text` advances the statement's position in
/// [`Template::texts`], a `Closure` advances its position in
/// [`Template::closures`], and `Level` and `Timestamp` render from the
/// statement itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Append the next literal from the text table.
    Text,
    /// Append the display label for the statement's severity.
    Level,
    /// Append the current local time.
    Timestamp,
    /// Invoke the next closure and append its output.
    Closure,
}

/// A compiled, immutable line format.
///
/// A template is built once through [`TemplateBuilder`], then shared
/// read-only by every statement a [`Logger`](crate::Logger) opens; cloning
/// the logger clones an `Arc` around it, never the template itself.
///
/// The directive stream is split into segments at each
/// [`payload`](TemplateBuilder::payload) call. The first segment is the
/// prefix, rendered when a statement opens. Each later segment replays on a
/// [`next_segment`](crate::Statement::next_segment) call, which lets a
/// template wrap pushed values in fixed text such as brackets.
///
/// # Examples
///
/// ```
/// use lazylog::Template;
///
/// let template = Template::builder()
///     .text("<")
///     .level()
///     .text("> ")
///     .payload()
///     .text(" (done)")
///     .build();
/// assert_eq!(template.segment_count(), 2);
/// ```
pub struct Template {
    pub(crate) segments: Vec<Vec<Directive>>,
    pub(crate) texts: Vec<String>,
    pub(crate) closures: Vec<RenderFn>,
    pub(crate) names: LevelNames,
}

impl Template {
    /// Starts building a template with the default label table.
    #[must_use]
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// The display label this template uses for `level`.
    #[must_use]
    pub fn level_name(&self, level: Level) -> &'static str {
        self.names[level.ordinal()]
    }

    /// Number of segments, counting the prefix.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The directive stream of one segment, or `None` past the end.
    pub(crate) fn segment(&self, index: usize) -> Option<&[Directive]> {
        self.segments.get(index).map(Vec::as_slice)
    }
}

impl Default for Template {
    /// The stock line shape: `[<timestamp>] <LEVEL>: <payload>`.
    fn default() -> Self {
        Self::builder()
            .text("[")
            .timestamp()
            .text("] ")
            .level()
            .text(": ")
            .payload()
            .build()
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("segments", &self.segments)
            .field("texts", &self.texts)
            .field("closures", &self.closures.len())
            .finish_non_exhaustive()
    }
}

/// Builder assembling a [`Template`] directive by directive.
///
/// Directives render in the order they are added. Literal text and closures
/// land in shared tables; at replay time each statement walks those tables
/// with a private cursor, so one template serves any number of concurrent
/// statements.
///
/// Closures are captured here but invoked only while rendering an enabled
/// statement. A disabled statement skips them entirely.
///
/// # Examples
///
/// ```
/// use lazylog::Template;
///
/// let pid = 1234;
/// let template = Template::builder()
///     .text("pid ")
///     .closure(move || pid)
///     .text(" ")
///     .level()
///     .text(": ")
///     .payload()
///     .build();
/// assert_eq!(template.segment_count(), 1);
/// ```
pub struct TemplateBuilder {
    closed: Vec<Vec<Directive>>,
    current: Vec<Directive>,
    texts: Vec<String>,
    closures: Vec<RenderFn>,
    names: LevelNames,
}

impl TemplateBuilder {
    /// Creates an empty builder using [`DEFAULT_LEVEL_NAMES`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            closed: Vec::new(),
            current: Vec::new(),
            texts: Vec::new(),
            closures: Vec::new(),
            names: DEFAULT_LEVEL_NAMES,
        }
    }

    /// Appends a literal text directive.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self.current.push(Directive::Text);
        self
    }

    /// Appends a severity-label directive.
    ///
    /// At replay time the statement's own severity selects the label, so a
    /// template can be shared across levels.
    pub fn level(mut self) -> Self {
        self.current.push(Directive::Level);
        self
    }

    /// Appends a local-time timestamp directive.
    ///
    /// Renders as <code>&#32;YYYY-MM-DD HH:MM:SS&#32;</code> with a space on
    /// each side, evaluated when the statement opens rather than when the
    /// template is built.
    pub fn timestamp(mut self) -> Self {
        self.current.push(Directive::Timestamp);
        self
    }

    /// Appends a deferred-render directive.
    ///
    /// `render` runs once per enabled statement that replays this position.
    /// Statements filtered by threshold or predicate never call it.
    pub fn closure<F, T>(mut self, render: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: fmt::Display,
    {
        self.closures.push(Box::new(move || render().to_string()));
        self.current.push(Directive::Closure);
        self
    }

    /// Closes the current segment and marks the payload position.
    ///
    /// Everything before the first `payload` call is the prefix rendered at
    /// statement open. Everything after it renders only when the statement
    /// asks for the next segment.
    pub fn payload(mut self) -> Self {
        self.closed.push(std::mem::take(&mut self.current));
        self
    }

    /// Replaces the severity-label table.
    ///
    /// The table is indexed by [`Level::ordinal`], so `names[0]` labels
    /// `Fatal` and `names[5]` labels `Debug`.
    pub fn level_names(mut self, names: LevelNames) -> Self {
        self.names = names;
        self
    }

    /// Finishes the template.
    ///
    /// A builder that never called [`payload`](Self::payload) produces a
    /// single-segment template whose whole directive stream is the prefix.
    #[must_use]
    pub fn build(mut self) -> Template {
        self.closed.push(self.current);
        Template {
            segments: self.closed,
            texts: self.texts,
            closures: self.closures,
            names: self.names,
        }
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateBuilder")
            .field("closed", &self.closed)
            .field("current", &self.current)
            .field("texts", &self.texts)
            .field("closures", &self.closures.len())
            .finish_non_exhaustive()
    }
}

/// Appends the local wall-clock time as ` YYYY-MM-DD HH:MM:SS `.
pub(crate) fn render_local_timestamp(out: &mut String) {
    let _ = write!(out, " {} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
}

#[cfg(test)]
mod tests;
