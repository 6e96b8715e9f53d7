//! Time-window filtering - the first pipeline stage.

use chrono::{DateTime, Duration, Utc};

use crate::types::Event;

/// Retains events that fall inside the trailing window.
///
/// The cutoff is `now - window_days`; survivors satisfy
/// `event_date > cutoff`, so an event exactly at the cutoff is expired.
/// The filter is stable: surviving events keep their relative order.
pub struct WindowFilter {
    window_days: u32,
}

impl WindowFilter {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Return the events newer than `now - window_days`.
    pub fn filter(&self, events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
        let expiration_date = now - Duration::days(i64::from(self.window_days));
        events
            .iter()
            .filter(|event| event.event_date > expiration_date)
            .cloned()
            .collect()
    }
}
