//! Core types for learnboard - events, action kinds, configuration.
//!
//! Mirrors the shape of the engagement data this crate consumes:
//! - `Event` is frozen at construction and safe to share across threads
//! - `ActionKind` is a closed enumeration, so unrecognized action names are
//!   rejected at the boundary instead of silently flowing through scoring
//! - `LeaderboardConfig` carries the two already-resolved pipeline knobs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback window length in days when no configuration is present.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Fallback activity threshold when no configuration is present.
pub const DEFAULT_MIN_EVENTS: u32 = 15;

/// Identifies a user. Many events may share one user id.
pub type UserId = u64;

/// The closed set of recorded action kinds.
///
/// Serialized with the original wire names (`incorrect_answer`,
/// `correct_answer`, `word_learnt`); anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// The user answered an exercise incorrectly
    IncorrectAnswer,
    /// The user answered an exercise correctly
    CorrectAnswer,
    /// The user completed learning a word
    WordLearnt,
}

impl ActionKind {
    /// Wire name of this action kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::IncorrectAnswer => "incorrect_answer",
            ActionKind::CorrectAnswer => "correct_answer",
            ActionKind::WordLearnt => "word_learnt",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an action name is not in the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized action name: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for ActionKind {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incorrect_answer" => Ok(ActionKind::IncorrectAnswer),
            "correct_answer" => Ok(ActionKind::CorrectAnswer),
            "word_learnt" => Ok(ActionKind::WordLearnt),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// One recorded user action at a point in time.
///
/// All fields are set at construction and the record is immutable
/// thereafter. Events carry no relationships - grouping by user happens in
/// the pipeline at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The user who performed the action
    pub user_id: UserId,
    /// When the action was completed
    pub event_date: DateTime<Utc>,
    /// What kind of action it was
    pub action: ActionKind,
}

impl Event {
    pub fn new(user_id: UserId, event_date: DateTime<Utc>, action: ActionKind) -> Self {
        Self {
            user_id,
            event_date,
            action,
        }
    }
}

/// Error returned when configuration values fail boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A config knob was zero; both knobs must be positive integers.
    #[error("`{key}` must be a positive integer")]
    NotPositive { key: &'static str },
}

/// Resolved pipeline configuration.
///
/// The two knobs correspond to the `number_of_days_to_count` and
/// `min_number_of_events` configuration keys. Construct directly for an
/// I/O-free core, or resolve from `leaderboard.toml` via [`crate::config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardConfig {
    /// Trailing window length in days
    pub window_days: u32,
    /// Minimum events within the window for a user to count as active
    pub min_events: u32,
}

impl LeaderboardConfig {
    /// Create a validated configuration.
    ///
    /// Both values must be positive; zero is an invalid-configuration error
    /// here rather than a surprise deep inside the pipeline.
    pub fn new(window_days: u32, min_events: u32) -> Result<Self, ConfigError> {
        if window_days == 0 {
            return Err(ConfigError::NotPositive {
                key: "number_of_days_to_count",
            });
        }
        if min_events == 0 {
            return Err(ConfigError::NotPositive {
                key: "min_number_of_events",
            });
        }
        Ok(Self {
            window_days,
            min_events,
        })
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_events: DEFAULT_MIN_EVENTS,
        }
    }
}
