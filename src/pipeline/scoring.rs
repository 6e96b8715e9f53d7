//! Per-user scoring - the third pipeline stage.
//!
//! Aggregates events by user and counts how many match the target action
//! kind. Every user present in the input appears in the output, including
//! users whose count for the target kind is zero: an active user who learnt
//! no words still scores 0 and ranks below anyone with a single
//! `word_learnt`, rather than vanishing from the leaderboard.

use std::collections::HashMap;

use crate::types::{ActionKind, Event, UserId};

/// Counts events of one action kind per user.
pub struct ActionScorer {
    target: ActionKind,
}

impl ActionScorer {
    pub fn new(target: ActionKind) -> Self {
        Self { target }
    }

    /// Map each distinct user in `events` to their count of `target` events.
    pub fn score(&self, events: &[Event]) -> HashMap<UserId, u32> {
        let mut scores: HashMap<UserId, u32> = HashMap::new();
        for event in events {
            let score = scores.entry(event.user_id).or_insert(0);
            if event.action == self.target {
                *score += 1;
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn events_for(user_id: u64, action: ActionKind, amount: usize) -> Vec<Event> {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        (0..amount).map(|_| Event::new(user_id, date, action)).collect()
    }

    #[test]
    fn test_counts_only_target_kind() {
        let mut events = events_for(10, ActionKind::WordLearnt, 90);
        events.extend(events_for(10, ActionKind::IncorrectAnswer, 20));
        events.extend(events_for(10, ActionKind::CorrectAnswer, 20));
        events.extend(events_for(20, ActionKind::WordLearnt, 90));
        events.extend(events_for(20, ActionKind::IncorrectAnswer, 20));
        events.extend(events_for(20, ActionKind::CorrectAnswer, 20));

        let scores = ActionScorer::new(ActionKind::WordLearnt).score(&events);
        assert_eq!(scores[&10], 90);
        assert_eq!(scores[&20], 90);
    }

    #[test]
    fn test_zero_scoring_user_is_present() {
        let mut events = events_for(1, ActionKind::WordLearnt, 5);
        events.extend(events_for(2, ActionKind::CorrectAnswer, 5));

        let scores = ActionScorer::new(ActionKind::WordLearnt).score(&events);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&1], 5);
        assert_eq!(scores[&2], 0);
    }

    #[test]
    fn test_keys_match_input_users() {
        let mut events = events_for(1, ActionKind::IncorrectAnswer, 1);
        events.extend(events_for(2, ActionKind::CorrectAnswer, 2));
        events.extend(events_for(3, ActionKind::WordLearnt, 3));

        let scores = ActionScorer::new(ActionKind::WordLearnt).score(&events);
        let mut users: Vec<UserId> = scores.keys().copied().collect();
        users.sort_unstable();
        assert_eq!(users, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        let scores = ActionScorer::new(ActionKind::WordLearnt).score(&[]);
        assert!(scores.is_empty());
    }
}
