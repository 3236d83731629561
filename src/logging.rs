//! Console logger behind the `log` facade.
//!
//! Lines go to stderr as `[LEVEL target] message`, with the level tag
//! coloured. Library code only uses the `log` macros; binaries call
//! [`init`] once at startup.

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(record.level(), record.target(), &record.args().to_string())
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn level_tag(level: Level) -> ColoredString {
    let tag = format!("{:<5}", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow(),
        Level::Info => tag.green(),
        Level::Debug => tag.blue(),
        Level::Trace => tag.dimmed(),
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{} {}] {}", level_tag(level), target, message)
}

/// Install the console logger and set the max level.
///
/// Returns `false` if another logger was already installed; the max level is
/// updated either way.
pub fn init(level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    log::set_max_level(level);
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_contains_parts() {
        colored::control::set_override(false);
        let line = format_line(Level::Warn, "creational_patterns::singleton", "retrying");
        assert_eq!(line, "[WARN  creational_patterns::singleton] retrying");
    }

    #[test]
    fn test_init_is_repeatable() {
        init(LevelFilter::Debug);
        assert!(!init(LevelFilter::Warn));
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
}
