#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `lazylog-sink` provides ready-made delivery backends for the
//! [`lazylog`] facade. [`StreamSink`] writes finished lines to any
//! [`io::Write`](std::io::Write) target, newline policy controlled by
//! [`LineMode`]; on Unix the [`syslog`] module routes lines to syslog(3)
//! with priorities derived from each statement's severity.
//!
//! # Design
//!
//! The two backends deliberately implement different delivery shapes.
//! [`StreamSink`] implements [`TextSink`](lazylog::TextSink): the line
//! already carries its severity label in the text, so the stream needs
//! nothing more. [`syslog::Syslog`] implements [`Sink`](lazylog::Sink)
//! directly because syslog wants the severity out of band, as a priority
//! code. Either shape plugs into [`Logger`](lazylog::Logger) unchanged.
//!
//! # Invariants
//!
//! - [`StreamSink`] serialises deliveries through a mutex, so concurrent
//!   statements land as whole lines, never interleaved.
//! - Every stream delivery flushes, keeping the target current even when the
//!   process stops shortly after logging.
//! - Delivery is fire-and-forget. Write failures are swallowed; lines with
//!   embedded NUL bytes never cross the C boundary into syslog.
//!
//! # Errors
//!
//! The sinks expose no fallible operations. Backends that fail internally
//! drop the affected line and carry on.
//!
//! # Examples
//!
//! ```
//! use lazylog::{Level, LevelFilter, Logger};
//! use lazylog_sink::{LineMode, StreamSink};
//!
//! let sink = StreamSink::with_line_mode(Vec::new(), LineMode::WithNewline);
//! let logger = Logger::with_threshold(sink, LevelFilter::Warning);
//!
//! logger.at(Level::Error).push("partial transfer");
//! logger.at(Level::Info).push("filtered out");
//!
//! let output = String::from_utf8(logger.into_backend().into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 1);
//! assert!(output.contains("partial transfer"));
//! ```

mod line_mode;
mod stream;

#[cfg(unix)]
#[cfg_attr(docsrs, doc(cfg(unix)))]
#[allow(unsafe_code)]
pub mod syslog;

pub use line_mode::LineMode;
pub use stream::StreamSink;
