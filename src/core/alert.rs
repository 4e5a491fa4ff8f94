//! In-memory alert sink
//!
//! [`AlertOutbox`] collects every alert handed to it, in delivery order. The
//! CLI drains it after a run to log the alerts or write them to a file, and
//! tests use it to observe what holders were told.

use crate::core::traits::AlertSink;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// One delivered alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

/// Alert sink that keeps alerts in memory
#[derive(Debug, Default)]
pub struct AlertOutbox {
    alerts: Mutex<Vec<Alert>>,
}

impl AlertOutbox {
    pub fn new() -> Self {
        AlertOutbox {
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the alerts delivered so far
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return every alert delivered so far
    pub fn drain(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.alerts.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertSink for AlertOutbox {
    fn send(&self, subject: &str, body: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Alert {
                subject: subject.to_string(),
                body: body.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbox_keeps_delivery_order() {
        let outbox = AlertOutbox::new();
        outbox.send("first", "body 1");
        outbox.send("second", "body 2");

        let subjects: Vec<String> = outbox.alerts().into_iter().map(|a| a.subject).collect();
        assert_eq!(subjects, vec!["first", "second"]);
    }

    #[test]
    fn test_drain_empties_outbox() {
        let outbox = AlertOutbox::new();
        outbox.send("subject", "body");

        let drained = outbox.drain();
        assert_eq!(drained.len(), 1);
        assert!(outbox.is_empty());
    }
}
