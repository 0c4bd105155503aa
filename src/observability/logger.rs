//! Structured JSON logger
//!
//! - One log line = one event
//! - Event name first, then level, then fields sorted alphabetically
//! - Synchronous, unbuffered
//! - INFO/WARN to stdout, ERROR/FATAL to stderr

use std::fmt;
use std::io::{self, Write};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log an event at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(LogLevel::Info, event, fields, &mut io::stdout());
    }

    /// Log an event at WARN level.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(LogLevel::Warn, event, fields, &mut io::stdout());
    }

    /// Log an event at ERROR level.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(LogLevel::Error, event, fields, &mut io::stderr());
    }

    /// Log an event at FATAL level.
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::write_line(LogLevel::Fatal, event, fields, &mut io::stderr());
    }

    fn write_line<W: Write>(level: LogLevel, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_into(&mut line, event);
        line.push_str("\",\"level\":\"");
        line.push_str(level.as_str());
        line.push('"');

        // Alphabetical field order keeps output deterministic
        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted {
            line.push_str(",\"");
            Self::escape_into(&mut line, key);
            line.push_str("\":\"");
            Self::escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    fn escape_into(out: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        }
    }
}
