//! Structured JSON logger
//!
//! One event is one JSON object on one line, written synchronously with
//! no buffering. Key order is deterministic: `event`, then `severity`,
//! then the remaining fields sorted by name, so identical events produce
//! identical bytes.
//!
//! The host platform owns process lifecycle, so there is no fatal level:
//! the worst this library reports is an operation failure.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-entry detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(name, _)| *name);

        // The line is assembled by hand: serde_json would neither keep
        // the event first nor guarantee field order
        let mut line = String::with_capacity(256);
        line.push('{');
        push_pair(&mut line, "event", event);
        line.push(',');
        push_pair(&mut line, "severity", severity.as_str());
        for (name, value) in sorted {
            line.push(',');
            push_pair(&mut line, name, value);
        }
        line.push_str("}\n");

        // One write_all, one line
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

fn push_pair(line: &mut String, name: &str, value: &str) {
    line.push('"');
    push_escaped(line, name);
    line.push_str("\":\"");
    push_escaped(line, value);
    line.push('"');
}

/// JSON string escaping. Unit glyphs and other non-ASCII text pass
/// through unescaped; the line stays valid UTF-8 JSON either way.
fn push_escaped(line: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                line.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => line.push(c),
        }
    }
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
