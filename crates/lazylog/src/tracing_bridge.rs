//! crates/lazylog/src/tracing_bridge.rs
//! Bridge between the `tracing` crate and the statement facade.
//!
//! The [`TracingBridge`] layer turns each `tracing` event into one log
//! statement on a wrapped [`Logger`]. The event's level maps onto a
//! [`Level`], the threshold on the logger decides admission, and the event's
//! message plus any structured fields become the statement payload. This lets
//! code written against the standard tracing macros feed the same backend as
//! code using the facade directly.

use std::fmt;
use std::fmt::Write as _;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;

/// A tracing-subscriber layer that forwards events into a [`Logger`].
///
/// Events below the logger's threshold are discarded before their fields are
/// visited, so filtered events cost no string work.
pub struct TracingBridge<B> {
    logger: Logger<B>,
}

impl<B> TracingBridge<B> {
    /// Wraps a logger for use as a tracing layer.
    #[must_use]
    pub const fn new(logger: Logger<B>) -> Self {
        Self { logger }
    }
}

/// Maps a tracing level onto a statement severity.
///
/// `DEBUG` and `TRACE` both land on [`Level::Debug`]; the facade has no
/// severity below it.
const fn severity(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::INFO => Level::Info,
        _ => Level::Debug,
    }
}

impl<S, B> Layer<S> for TracingBridge<B>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    B: Sink + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = severity(event.metadata().level());
        if !self.logger.threshold().admits(level) {
            return;
        }

        let mut visitor = PayloadVisitor::default();
        event.record(&mut visitor);
        self.logger.at(level).push(visitor.finish());
    }
}

/// Visitor collecting an event's message and `key=value` fields.
#[derive(Default)]
struct PayloadVisitor {
    message: Option<String>,
    fields: String,
}

impl PayloadVisitor {
    fn separate(&mut self) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
    }

    /// Message first, remaining fields after it in visit order.
    fn finish(self) -> String {
        match self.message {
            Some(message) if self.fields.is_empty() => message,
            Some(message) => format!("{message} {}", self.fields),
            None => self.fields,
        }
    }
}

impl Visit for PayloadVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.separate();
            let _ = write!(self.fields, "{}={value:?}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.separate();
            let _ = write!(self.fields, "{}={value:?}", field.name());
        }
    }
}

/// Installs a [`TracingBridge`] as the global tracing subscriber.
///
/// # Example
///
/// ```rust,ignore
/// use lazylog::{Logger, init_tracing};
///
/// let logger = Logger::new(my_sink);
/// init_tracing(logger);
///
/// tracing::info!("facade installed");
/// ```
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing<B>(logger: Logger<B>)
where
    B: Sink + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(TracingBridge::new(logger))
        .init();
}

/// Installs a [`TracingBridge`] behind an additional tracing filter.
///
/// The filter runs first, so it can narrow delivery below what the logger's
/// own threshold admits.
///
/// # Example
///
/// ```rust,ignore
/// use lazylog::{Logger, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let logger = Logger::new(my_sink);
/// init_tracing_with_filter(logger, EnvFilter::from_default_env());
/// ```
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing_with_filter<B, F>(logger: Logger<B>, filter: F)
where
    B: Sink + Send + Sync + 'static,
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(TracingBridge::new(logger))
        .init();
}
