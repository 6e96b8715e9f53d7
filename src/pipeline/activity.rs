//! Activity-threshold filtering - the second pipeline stage.
//!
//! A user is "active" when they have at least `min_events` events in the
//! (already window-filtered) input. The filter operates on per-user counts
//! but outputs events: everything belonging to an active user survives,
//! everything else is dropped. Correctness does not depend on map iteration
//! order - membership in the active set is decided per user before any
//! event is emitted.

use std::collections::{HashMap, HashSet};

use crate::types::{Event, UserId};

/// Retains events belonging to sufficiently engaged users.
pub struct ActivityFilter {
    min_events: u32,
}

impl ActivityFilter {
    pub fn new(min_events: u32) -> Self {
        Self { min_events }
    }

    /// Return the events of users with `>= min_events` events in the input.
    ///
    /// The threshold is inclusive: a user with exactly `min_events` events
    /// is active.
    pub fn filter(&self, events: &[Event]) -> Vec<Event> {
        let mut user_activity: HashMap<UserId, u32> = HashMap::new();
        for event in events {
            *user_activity.entry(event.user_id).or_insert(0) += 1;
        }

        let active_users: HashSet<UserId> = user_activity
            .into_iter()
            .filter(|&(_, count)| count >= self.min_events)
            .map(|(user_id, _)| user_id)
            .collect();

        events
            .iter()
            .filter(|event| active_users.contains(&event.user_id))
            .cloned()
            .collect()
    }
}
