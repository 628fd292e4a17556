//! Level-keyed console output with optional ANSI coloring.
//!
//! A fixed enumeration of levels and a plain formatting function; nothing
//! is constructed at runtime beyond the message string itself.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Success => "ok",
            Level::Info => "info",
            Level::Warning => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    fn ansi_color(self) -> &'static str {
        match self {
            Level::Success => "\x1b[32m",
            Level::Info => "\x1b[36m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Debug => "\x1b[35m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    colorize: bool,
    quiet: bool,
    debug: bool,
}

impl Logger {
    pub fn new(colorize: bool, quiet: bool, debug: bool) -> Self {
        Self { colorize, quiet, debug }
    }

    /// Print one line at the given level. `quiet` suppresses everything
    /// except errors; debug lines only appear with `debug` set.
    pub fn message(&self, level: Level, text: &str) {
        if self.quiet && level != Level::Error {
            return;
        }
        if level == Level::Debug && !self.debug {
            return;
        }

        let line = self.format(level, text);
        if level == Level::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn format(&self, level: Level, text: &str) -> String {
        if self.colorize {
            format!("{}[{}]\x1b[0m {}", level.ansi_color(), level, text)
        } else {
            format!("[{level}] {text}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_format_has_level_prefix() {
        let log = Logger::new(false, false, false);
        assert_eq!(log.format(Level::Info, "hello"), "[info] hello");
    }

    #[test]
    fn colorized_format_wraps_the_label() {
        let log = Logger::new(true, false, false);
        let line = log.format(Level::Error, "boom");
        assert!(line.starts_with("\x1b[31m[error]\x1b[0m "));
        assert!(line.ends_with("boom"));
    }
}
