//! learnboard - trailing-window learning-activity leaderboards.
//!
//! Given a batch of timestamped user events, learnboard determines which
//! users are "active" within a trailing time window and ranks them by how
//! many words they learnt in that window.
//!
//! # Architecture
//!
//! ```text
//! Events → Window Filter → Activity Filter → Scoring → Ranking
//!    ↓          ↓                ↓              ↓          ↓
//!  batch    last N days     ≥ M events     word_learnt  descending
//!  input    (strict)        per user       per user     score
//! ```
//!
//! The pipeline is a straight-line functional composition: every stage
//! consumes its input and returns a freshly built collection, so repeated
//! invocations over the same input and the same reference instant are
//! idempotent, and disjoint invocations can run concurrently without
//! coordination.
//!
//! Configuration (window length, activity threshold) is resolved once by the
//! caller - either directly as a [`LeaderboardConfig`] or via the
//! [`config`] module's `leaderboard.toml` loader - and passed into the
//! orchestrator. The stages themselves never touch configuration sources.

pub mod config;
pub mod pipeline;
pub mod types;

// Re-export core types
pub use types::{
    ActionKind, ConfigError, Event, LeaderboardConfig, ParseActionError, UserId,
};

// Re-export pipeline stages
pub use pipeline::{rank_by_score, ActionScorer, ActivityFilter, Leaderboard, WindowFilter};
