//! Alerts for a terminal session.

use shared::Notifier;
use std::io::Write;

/// Writes alerts to stderr and remembers how many were raised.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    alerts: usize,
}

impl ConsoleNotifier {
    pub fn alert_count(&self) -> usize {
        self.alerts
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts += 1;
        let _ = writeln!(std::io::stderr(), "csvscope: {}", message);
    }
}
