//! crates/lazylog/src/level.rs
//! Severity levels, threshold filtering, and display label tables.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a single log statement.
///
/// Variants are ordered from most to least severe, and the discriminant
/// doubles as the index into a [`LevelNames`] table. Admission against a
/// [`LevelFilter`] compares these ordinals: `Fatal` passes every non-silent
/// threshold, while `Debug` needs the most permissive one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Unrecoverable failure; the process is about to stop.
    Fatal = 0,
    /// An operation failed; the process continues.
    Error = 1,
    /// Suspicious condition that is not yet a failure.
    Warning = 2,
    /// Normal but significant event.
    Notice = 3,
    /// Routine informational output.
    Info = 4,
    /// Diagnostic detail for development.
    Debug = 5,
}

impl Level {
    /// Number of severity levels; also the arity of a [`LevelNames`] table.
    pub const COUNT: usize = 6;

    /// Every level, most severe first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fatal,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the lowercase name understood by [`FromStr`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog::Level;
    ///
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Index of this level in a [`LevelNames`] table.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl Default for Level {
    /// `Info`, the severity used by the facade openers that take none.
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a case-insensitive level name such as `"warning"`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError {
                name: name.to_owned(),
            }),
        }
    }
}

/// Error returned when a [`Level`] name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity level `{name}`")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Threshold configured on a [`Logger`](crate::Logger).
///
/// `Off` is the silent sentinel: it sits below every severity and admits
/// nothing. Each remaining variant admits its matching [`Level`] together
/// with everything more severe, so `Warning` admits `fatal`, `error`, and
/// `warning` statements while filtering the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LevelFilter {
    /// Admit nothing.
    Off = 0,
    /// Admit `fatal` only.
    Fatal = 1,
    /// Admit `fatal` and `error`.
    Error = 2,
    /// Admit `fatal` through `warning`.
    Warning = 3,
    /// Admit `fatal` through `notice`.
    Notice = 4,
    /// Admit `fatal` through `info`.
    Info = 5,
    /// Admit every level.
    Debug = 6,
}

impl LevelFilter {
    /// Reports whether a statement at `level` passes this threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazylog::{Level, LevelFilter};
    ///
    /// assert!(LevelFilter::Warning.admits(Level::Error));
    /// assert!(!LevelFilter::Warning.admits(Level::Notice));
    /// assert!(!LevelFilter::Off.admits(Level::Fatal));
    /// ```
    #[must_use]
    pub const fn admits(self, level: Level) -> bool {
        (level as u8) < (self as u8)
    }

    /// Returns the lowercase name understood by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl Default for LevelFilter {
    /// `Info`: debug output is filtered until explicitly requested.
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for LevelFilter {
    /// The threshold admitting `level` and everything more severe.
    fn from(level: Level) -> Self {
        match level {
            Level::Fatal => Self::Fatal,
            Level::Error => Self::Error,
            Level::Warning => Self::Warning,
            Level::Notice => Self::Notice,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelFilterError;

    /// Parses `"off"` or a case-insensitive level name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("off") {
            return Ok(Self::Off);
        }
        match Level::from_str(name) {
            Ok(level) => Ok(Self::from(level)),
            Err(_) => Err(ParseLevelFilterError {
                name: name.to_owned(),
            }),
        }
    }
}

/// Error returned when a [`LevelFilter`] name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised level filter `{name}`")]
pub struct ParseLevelFilterError {
    name: String,
}

impl ParseLevelFilterError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Display-label table indexed by [`Level::ordinal`].
///
/// The arity is fixed at [`Level::COUNT`]; substituting a table of any other
/// size is a type error, so a label can never be missing at replay time.
pub type LevelNames = [&'static str; Level::COUNT];

/// ANSI-colored, seven-column labels used by the default template.
///
/// FATAL and ERROR render bold red, WARNING bold magenta, NOTICE bold blue,
/// INFO bold cyan. DEBUG stays plain so verbose development output does not
/// light up a terminal.
pub const DEFAULT_LEVEL_NAMES: LevelNames = [
    "\x1b[1m\x1b[31m FATAL \x1b[0m",
    "\x1b[1m\x1b[31m ERROR \x1b[0m",
    "\x1b[1m\x1b[35mWARNING\x1b[0m",
    "\x1b[1m\x1b[34mNOTICE \x1b[0m",
    "\x1b[1m\x1b[36m INFO  \x1b[0m",
    " DEBUG ",
];
