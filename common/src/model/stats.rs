use serde::{Deserialize, Serialize};

/// Aggregated traffic figures across every form a user owns.
///
/// Rates are percentages in the `0..=100` range under normal traffic, but
/// nothing clamps them: the visit and submission counters are tracked
/// independently, so `bounce_rate` goes negative when submissions outnumber
/// visits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormStats {
    pub visits: i64,
    pub submissions: i64,
    pub submission_rate: f64,
    pub bounce_rate: f64,
}

impl FormStats {
    /// Derives the rates from summed counters. Zero visits yields a
    /// submission rate of 0 instead of dividing by zero.
    pub fn from_totals(visits: i64, submissions: i64) -> Self {
        let submission_rate = if visits > 0 {
            (submissions as f64 / visits as f64) * 100.0
        } else {
            0.0
        };

        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate: 100.0 - submission_rate,
        }
    }
}
