use std::io::{self, Write};
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

static STDERR_LOGGER: StderrLogger = StderrLogger;

/// Writes every enabled record to stderr, keeping stdout for command output.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`),
/// falling back to `warn` for anything unrecognized.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

pub fn setup(level: LevelFilter) {
    // A logger may already be installed (tests); only the level changes then.
    let _ = log::set_logger(&STDERR_LOGGER);
    log::set_max_level(level);
}
