/// Controls whether a [`StreamSink`](crate::StreamSink) appends a trailing newline to each delivered line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each delivered line.
    WithNewline,
    /// Write the line exactly as the facade rendered it.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// [`LineMode::WithNewline`] is the default because loggers hand over
    /// lines without a terminator, and stream targets such as files and
    /// terminals expect one per line. Exposing the policy as a method lets
    /// callers that fan lines out to several destinations reuse the sink's
    /// decision instead of matching on the enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`] and `false` to
    /// [`LineMode::WithoutNewline`]. Call sites that already carry the
    /// newline policy as a boolean, such as configuration loaders, can feed
    /// it straight into [`StreamSink`](crate::StreamSink) construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into its boolean newline flag.
    ///
    /// Delegates to [`LineMode::append_newline`] so the two directions stay
    /// consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog_sink::LineMode;
    ///
    /// let append_newline: bool = LineMode::WithNewline.into();
    /// assert!(append_newline);
    ///
    /// let append_newline: bool = LineMode::WithoutNewline.into();
    /// assert!(!append_newline);
    /// ```
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
