//! Clock abstraction
//!
//! Investment fee waiving, account summaries and alert timestamps all depend
//! on "now". Injecting a [`Clock`] keeps them deterministic under test and lets
//! the CLI evaluate charges as of a given date.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of the current local date and time
pub trait Clock: Send + Sync {
    /// Get the current local time
    fn now(&self) -> NaiveDateTime;

    /// Get the current local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Clock frozen at midnight on `date`
    pub fn on(date: NaiveDate) -> Self {
        FixedClock(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now().to_string(), "2024-02-29 00:00:00");
    }

    #[test]
    fn test_system_clock_is_close_to_local_now() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
