#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `lazylog` is a logging facade built around compiled line templates and
//! scope-bound statements. A [`Template`] fixes the shape of every line once,
//! at configuration time; a [`Logger`] opens a [`Statement`] per line, the
//! statement accumulates payload while it is in scope, and dropping it
//! delivers the finished line to the backend. Filtering happens when the
//! statement opens, so a line below the threshold costs neither formatting
//! nor argument evaluation.
//!
//! # Design
//!
//! Three pieces cooperate:
//!
//! - [`Template`] compiles literal text, severity labels, timestamps, and
//!   deferred closures into an immutable directive stream, split at the
//!   payload marker.
//! - [`Logger`] owns a backend, shares a template, and opens statements
//!   through [`log`](Logger::log), [`at`](Logger::at), [`when`](Logger::when),
//!   and [`at_when`](Logger::at_when). Its [`LevelFilter`] decides admission
//!   at open time.
//! - [`Statement`] replays the template prefix when opened, accepts payload
//!   through [`push`](Statement::push) and [`push_with`](Statement::push_with),
//!   and flushes exactly once, on drop.
//!
//! Backends implement either [`Sink`], receiving each line with its
//! severity, or [`TextSink`], receiving text alone; a blanket impl adapts the
//! latter to the former.
//!
//! The `serde` feature derives serialization for [`Level`] and
//! [`LevelFilter`]. The `tracing` feature adds [`TracingBridge`], a
//! `tracing-subscriber` layer that feeds standard `tracing` events through a
//! logger.
//!
//! # Invariants
//!
//! - A built template never changes; loggers and statements share it
//!   read-only.
//! - A statement's severity and enabled flag are fixed when it opens and
//!   survive until its drop.
//! - A disabled statement renders nothing and invokes no closures, neither
//!   the template's nor the arguments handed to `push_with`.
//! - Dropping the statement is the sole delivery point. An enabled statement
//!   reaches the backend exactly once, a disabled one never.
//!
//! # Errors
//!
//! Template construction and logging are infallible. Parsing level names can
//! fail with [`ParseLevelError`] or [`ParseLevelFilterError`]. Delivery is
//! fire-and-forget: a backend that can fail internally handles or swallows
//! the error itself.
//!
//! # Examples
//!
//! ```
//! use std::sync::Mutex;
//!
//! use lazylog::{Level, LevelFilter, Logger, TextSink};
//!
//! struct Memory {
//!     lines: Mutex<Vec<String>>,
//! }
//!
//! impl TextSink for Memory {
//!     fn emit(&self, line: &str) {
//!         self.lines.lock().unwrap().push(line.to_owned());
//!     }
//! }
//!
//! let backend = Memory {
//!     lines: Mutex::new(Vec::new()),
//! };
//! let logger = Logger::with_threshold(backend, LevelFilter::Notice);
//!
//! // Admitted: warning is within the notice threshold.
//! logger.at(Level::Warning).push("disk at ").push_with(|| 92).push("%");
//!
//! // Filtered: debug is below the threshold, the closure never runs.
//! logger.at(Level::Debug).push_with(|| format!("scan of {} entries", 100_000));
//!
//! let lines = logger.backend().lines.lock().unwrap();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].contains("disk at 92%"));
//! ```

mod level;
mod logger;
mod sink;
mod statement;
mod stopwatch;
mod template;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use level::{
    DEFAULT_LEVEL_NAMES, Level, LevelFilter, LevelNames, ParseLevelError, ParseLevelFilterError,
};
pub use logger::Logger;
pub use sink::{Sink, TextSink};
pub use statement::Statement;
pub use stopwatch::Stopwatch;
pub use template::{Template, TemplateBuilder};

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::{TracingBridge, init_tracing, init_tracing_with_filter};
