//! Logger implementation for the log crate.

use core::fmt::{self, Display};
use std::sync::OnceLock;
use std::time::Instant;

use anyhow::anyhow;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::DemoResult;

pub struct SimpleLogger;

static START: OnceLock<Instant> = OnceLock::new();

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let color_reset = "\u{1B}[0m";

        let args_color = match record.level() {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };

        let secs = START.get_or_init(Instant::now).elapsed().as_secs_f64();

        // [time file:line] message
        println!("[{secs:.5} {file}:{line}] {args_color}{args}{color_reset}");
    }

    fn flush(&self) {}
}

fn level_from(name: Option<&str>) -> LevelFilter {
    match name {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Initialize the logger with the level baked in through the `LOG` variable at
/// build time.
pub fn init() -> DemoResult<()> {
    println!(
        "Initializing logger with level: {}",
        option_env!("LOG").unwrap_or("off")
    );
    START.get_or_init(Instant::now);
    log::set_logger(&SimpleLogger).map_err(|_| anyhow!("logger already initialized"))?;
    log::set_max_level(level_from(option_env!("LOG")));
    Ok(())
}
