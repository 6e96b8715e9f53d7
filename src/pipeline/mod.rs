//! Leaderboard pipeline - from raw events to ranked user ids.
//!
//! The pipeline runs four stages in a fixed order:
//! - Window filtering: drop events older than the trailing window
//! - Activity filtering: drop users below the engagement threshold
//! - Scoring: count `word_learnt` events per remaining user
//! - Ranking: order users by descending score, ties by ascending id
//!
//! Each stage is a pure function of its input; the orchestrator alone turns
//! configuration into the concrete numbers the stages consume.

mod activity;
mod rank;
mod scoring;
mod window;

pub use activity::ActivityFilter;
pub use rank::rank_by_score;
pub use scoring::ActionScorer;
pub use window::WindowFilter;

use chrono::{DateTime, Utc};

use crate::types::{ActionKind, Event, LeaderboardConfig, UserId};

/// The leaderboard orchestrator - the sole public entry point.
///
/// Composes the pipeline stages over one batch of events and returns user
/// ids ordered most-improved-learner first. Holds no state between
/// invocations; running twice over the same input and the same `now` yields
/// identical output.
pub struct Leaderboard {
    window: WindowFilter,
    activity: ActivityFilter,
    scorer: ActionScorer,
}

impl Leaderboard {
    /// Build a pipeline for the given configuration.
    pub fn new(config: LeaderboardConfig) -> Self {
        Self {
            window: WindowFilter::new(config.window_days),
            activity: ActivityFilter::new(config.min_events),
            scorer: ActionScorer::new(ActionKind::WordLearnt),
        }
    }

    /// Rank users by words learnt within the window ending at `now`.
    ///
    /// No events (or none surviving the filters) produces an empty
    /// sequence, not an error.
    pub fn rank_users(&self, events: &[Event], now: DateTime<Utc>) -> Vec<UserId> {
        let unexpired = self.window.filter(events, now);
        let active = self.activity.filter(&unexpired);
        let scores = self.scorer.score(&active);
        tracing::debug!(
            total = events.len(),
            unexpired = unexpired.len(),
            active = active.len(),
            ranked = scores.len(),
            "leaderboard pipeline"
        );
        rank_by_score(&scores)
    }

    /// [`rank_users`](Self::rank_users) with `now` defaulted to the current
    /// instant.
    pub fn rank_users_now(&self, events: &[Event]) -> Vec<UserId> {
        self.rank_users(events, Utc::now())
    }
}
