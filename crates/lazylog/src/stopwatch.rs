//! crates/lazylog/src/stopwatch.rs
//! Monotonic stopwatch for elapsed-time fields in templates.

use std::time::{Duration, Instant};

/// Measures time since a fixed origin on the monotonic clock.
///
/// The stopwatch is `Copy`, so it can be move-captured by a template closure
/// while the original stays usable. Every copy shares the origin instant.
///
/// # Examples
///
/// ```
/// use lazylog::{Stopwatch, Template};
///
/// let watch = Stopwatch::start();
/// let template = Template::builder()
///     .text("t+")
///     .closure(move || format!("{:.3}s", watch.seconds()))
///     .text(" ")
///     .level()
///     .text(": ")
///     .payload()
///     .build();
/// assert_eq!(template.segment_count(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    origin: Instant,
}

impl Stopwatch {
    /// Starts a stopwatch at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Time elapsed since the origin.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Elapsed time in fractional seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Moves the origin to the current instant.
    pub fn restart(&mut self) {
        self.origin = Instant::now();
    }
}

impl Default for Stopwatch {
    /// Equivalent to [`Stopwatch::start`].
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Stopwatch;

    #[test]
    fn elapsed_is_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        let second = watch.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn copies_share_the_origin() {
        let watch = Stopwatch::start();
        let copy = watch;
        std::thread::sleep(Duration::from_millis(2));
        assert!(copy.elapsed() >= Duration::from_millis(2));
        assert!(watch.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn restart_resets_the_origin() {
        let mut watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        let before_restart = watch.elapsed();
        watch.restart();
        assert!(watch.elapsed() < before_restart);
    }

    #[test]
    fn seconds_tracks_elapsed() {
        let watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(watch.seconds() > 0.0);
        assert!((watch.seconds() - watch.elapsed().as_secs_f64()).abs() < 1.0);
    }
}
