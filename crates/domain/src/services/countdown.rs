//! Countdown arithmetic for the event date.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whole-unit time remaining until the event, floored at zero once the
/// date has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// True once the event date is in the past.
    pub is_past: bool,
}

impl TimeRemaining {
    const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_past: true,
    };
}

/// Computes the time remaining between `now` and `target`.
pub fn time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let delta = target - now;
    let total_seconds = delta.num_seconds();
    if total_seconds <= 0 {
        return TimeRemaining::ZERO;
    }

    TimeRemaining {
        days: total_seconds / 86_400,
        hours: (total_seconds % 86_400) / 3_600,
        minutes: (total_seconds % 3_600) / 60,
        seconds: total_seconds % 60,
        is_past: false,
    }
}
