//! Observability subsystem
//!
//! Structured JSON logging with typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at INFO with fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Info, event.as_str(), fields);
}

/// Log an event at an explicit severity
pub fn log_event_at(severity: Severity, event: Event, fields: &[(&str, &str)]) {
    match severity {
        Severity::Error => Logger::log_stderr(severity, event.as_str(), fields),
        _ => Logger::log(severity, event.as_str(), fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::ContractInvoke, &[("operation", "addRecord")]);
        log_event_at(Severity::Warn, Event::ScanEntryUnparsed, &[("key", "k1")]);
        log_event_at(Severity::Error, Event::ContractReject, &[]);
    }
}
