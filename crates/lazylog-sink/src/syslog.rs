//! crates/lazylog-sink/src/syslog.rs
//! Syslog delivery for severity-aware logging on Unix.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate, keeping the dependency graph small. A
//! [`SyslogConfig`] names the facility and tag, [`SyslogConfig::open`]
//! establishes the connection, and the resulting [`Syslog`] sink maps each
//! statement severity onto the matching syslog(3) priority.

use std::ffi::CString;
use std::fmt;
use std::sync::OnceLock;

use lazylog::{Level, Sink};

/// Syslog facility codes matching the POSIX syslog(3) constants.
///
/// Each variant corresponds to a `LOG_*` facility from `<syslog.h>`. The set
/// covers the facilities a logging library is plausibly asked for: `user`
/// for ordinary processes, `daemon` and friends for services, and the eight
/// `local*` slots. Configuration strings map to these constants via
/// [`SyslogFacility::from_name`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// User-level messages (LOG_USER), the default.
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a facility name string into the corresponding constant.
    ///
    /// Recognised names are case-insensitive. Returns `None` for
    /// unrecognised names.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use lazylog_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(
    ///     SyslogFacility::from_name("daemon"),
    ///     Some(SyslogFacility::Daemon)
    /// );
    /// assert_eq!(
    ///     SyslogFacility::from_name("LOCAL3"),
    ///     Some(SyslogFacility::Local3)
    /// );
    /// assert_eq!(SyslogFacility::from_name("unknown"), None);
    /// # }
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "auth" => Some(Self::Auth),
            "syslog" => Some(Self::Syslog),
            "cron" => Some(Self::Cron),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the facility name as it appears in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Cron => "cron",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl Default for SyslogFacility {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default syslog tag when the caller does not name one.
pub const DEFAULT_SYSLOG_TAG: &str = "lazylog";

/// Configuration for a syslog-backed sink.
///
/// Encapsulates the facility and tag (ident) parameters passed to
/// [`openlog(3)`](libc::openlog). Constructing a [`SyslogConfig`] does not
/// itself open the syslog connection; call [`open`](SyslogConfig::open) to
/// begin routing lines.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use lazylog_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "my-service");
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.tag(), "my-service");
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Returns the configured syslog facility.
    #[must_use]
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured syslog tag (ident string).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Opens the syslog connection and returns the sink.
    ///
    /// The returned [`Syslog`] closes the connection when dropped. Only one
    /// syslog connection should be active at a time per process, and the
    /// ident string is fixed by the first `open` call in the process; later
    /// opens reuse it even when their configuration names a different tag.
    #[must_use]
    pub fn open(&self) -> Syslog {
        // The CString must outlive the openlog call because syslog(3) stores
        // the pointer internally. The allocation is kept in a static so a
        // later closelog() still sees a valid pointer, matching the
        // process-lifetime semantics of syslog's ident parameter.
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(self.tag.as_str()).unwrap_or_else(|_| {
                CString::new(DEFAULT_SYSLOG_TAG).expect("default tag contains no NUL bytes")
            })
        });

        // LOG_PID includes the PID in each message, which keeps lines from
        // concurrent instances of the same service distinguishable.
        //
        // SAFETY: the ident pointer is valid for the process lifetime because
        // it is stored in a static `OnceLock<CString>`. openlog itself is not
        // thread-safe against concurrent openlog/closelog, so callers open
        // the connection once during startup.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
        }

        Syslog { _private: () }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}

/// Maps a statement severity onto a syslog(3) priority.
///
/// `Fatal` lands on `LOG_CRIT` rather than `LOG_EMERG`: emergency is
/// reserved for system-wide failures and is traditionally broadcast to every
/// terminal, which a library should not trigger.
const fn priority(level: Level) -> libc::c_int {
    match level {
        Level::Fatal => libc::LOG_CRIT,
        Level::Error => libc::LOG_ERR,
        Level::Warning => libc::LOG_WARNING,
        Level::Notice => libc::LOG_NOTICE,
        Level::Info => libc::LOG_INFO,
        Level::Debug => libc::LOG_DEBUG,
    }
}

/// Returns a pointer to a static C string literal.
///
/// The input must be a NUL-terminated byte slice.
const fn c_str_literal(bytes: &[u8]) -> *const libc::c_char {
    bytes.as_ptr().cast::<libc::c_char>()
}

/// Severity-aware sink delivering each line to syslog(3).
///
/// Created by [`SyslogConfig::open`]. While the sink is alive, every
/// accepted line is forwarded with the priority matching its statement's
/// severity. Dropping the sink calls `closelog(3)`.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(unix)]
/// # {
/// use lazylog::{Level, Logger};
/// use lazylog_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Daemon, "my-service");
/// let logger = Logger::new(config.open());
///
/// logger.at(Level::Notice).push("service started");
/// // Dropping the logger drops the sink, which calls closelog().
/// # }
/// ```
#[derive(Debug)]
pub struct Syslog {
    _private: (),
}

impl Sink for Syslog {
    fn accept(&self, line: &str, level: Level) {
        // syslog(3) interprets `%` as a format specifier. Passing the line
        // through `%s` avoids accidental format string injection. Lines with
        // embedded NUL bytes cannot cross the C boundary and are dropped.
        let Ok(message) = CString::new(line) else {
            return;
        };
        let format = c_str_literal(b"%s\0");

        // SAFETY: syslog is safe to call from multiple threads after openlog
        // has completed, which construction through SyslogConfig::open
        // guarantees. The format string and message are valid C strings.
        unsafe {
            libc::syslog(priority(level), format, message.as_ptr());
        }
    }
}

impl Drop for Syslog {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond openlog having been
        // called previously, which is guaranteed by construction in
        // SyslogConfig::open.
        unsafe {
            libc::closelog();
        }
    }
}
