//! crates/lazylog/examples/tracing_demo.rs
//! Routes standard `tracing` macros through a lazylog logger.
//!
//! Run with:
//!
//! ```text
//! cargo run --example tracing_demo --features tracing
//! ```

use std::io::{self, Write as _};

use lazylog::{LevelFilter, Logger, TextSink, init_tracing};

struct Stdout;

impl TextSink for Stdout {
    fn emit(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }
}

fn main() {
    let logger = Logger::with_threshold(Stdout, LevelFilter::Debug);
    init_tracing(logger);

    tracing::info!("bridge installed");
    tracing::warn!(disk = "sda1", used = 92, "running low on space");
    tracing::debug!(elapsed_ms = 12, "startup complete");
}
