#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted when no level is given on the command line.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Logs to stderr, keeping stdout for the game screen.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the effective level: explicit override, then `BATTLESHIP_LOG`,
/// then `info`. Unparseable values fall through to the next source.
pub fn resolve_level(cli: Option<&str>, env_value: Option<&str>) -> LevelFilter {
    cli.and_then(|l| l.parse().ok())
        .or_else(|| env_value.and_then(|l| l.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Calling it again only adjusts the level.
pub fn init_logging(cli_level: Option<&str>) {
    let env_value = env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, env_value.as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
