//! Logger implementation for the log crate, printing over the UART.

use core::fmt::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};

use crate::platform::pl011;

struct UartWriter;

impl Write for UartWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.bytes() {
            if c == b'\n' {
                pl011::putchar(b'\r');
            }
            pl011::putchar(c);
        }
        Ok(())
    }
}

struct UartLogger;

impl Log for UartLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = UartWriter;
        writeln!(out, "[{:>5} {}] {}", record.level(), record.target(), record.args()).ok();
    }

    fn flush(&self) {}
}

static LOGGER: UartLogger = UartLogger;

/// Initialize the logger. The level comes from the `LOG` env var at build
/// time and defaults to `warn`.
pub fn init() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(match option_env!("LOG") {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    });
}
