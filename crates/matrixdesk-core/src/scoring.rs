//! Task priority scoring engine.
//!
//! ## Score
//!
//! ```text
//! Score = 3 × importance + 2 × urgency + 2 × due_pressure − 1.5 × effort
//! ```
//!
//! rounded to one decimal place (half-up).
//!
//! ## Due pressure
//!
//! ```text
//! due_pressure = 1 − min(1, days_until_due / 30)
//! ```
//!
//! `days_until_due` is fractional and floored at zero, so overdue tasks carry
//! full pressure. Tasks without a due date are treated as 30 days away.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Quadrant;

/// Weight of the importance rating.
pub const IMPORTANCE_WEIGHT: f64 = 3.0;
/// Weight of the urgency rating.
pub const URGENCY_WEIGHT: f64 = 2.0;
/// Weight of the due-date pressure.
pub const DUE_PRESSURE_WEIGHT: f64 = 2.0;
/// Penalty per effort point.
pub const EFFORT_WEIGHT: f64 = 1.5;

/// Horizon (days) beyond which a due date adds no pressure.
pub const DUE_HORIZON_DAYS: f64 = 30.0;

/// Ratings at or above this value count as important / urgent.
pub const QUADRANT_THRESHOLD: u8 = 4;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Clamp a rating into `1..=5`.
pub fn clamp_rating(value: u8) -> u8 {
    value.clamp(MIN_RATING, MAX_RATING)
}

/// Fractional days from `now` until the due date (UTC midnight), floored at zero.
pub fn days_until_due(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> f64 {
    match due_date {
        Some(date) => {
            let due = date.and_time(NaiveTime::MIN).and_utc();
            let millis = (due - now).num_milliseconds() as f64;
            (millis / MILLIS_PER_DAY).max(0.0)
        }
        None => DUE_HORIZON_DAYS,
    }
}

/// Normalized pressure in `[0, 1]` from proximity to the due date.
pub fn due_pressure(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> f64 {
    let days = days_until_due(due_date, now);
    (1.0 - (days / DUE_HORIZON_DAYS).min(1.0)).clamp(0.0, 1.0)
}

/// Compute the priority score for a task.
pub fn compute_score(
    importance: u8,
    urgency: u8,
    effort: u8,
    due_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> f64 {
    let raw = f64::from(importance) * IMPORTANCE_WEIGHT
        + f64::from(urgency) * URGENCY_WEIGHT
        + due_pressure(due_date, now) * DUE_PRESSURE_WEIGHT
        - f64::from(effort) * EFFORT_WEIGHT;
    round_one_decimal(raw)
}

/// Rounds half-up (towards positive infinity) to one decimal.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Deterministic 2x2 split on importance and urgency.
pub fn auto_quadrant(importance: u8, urgency: u8) -> Quadrant {
    let important = importance >= QUADRANT_THRESHOLD;
    let urgent = urgency >= QUADRANT_THRESHOLD;
    match (important, urgent) {
        (true, true) => Quadrant::Do,
        (true, false) => Quadrant::Schedule,
        (false, true) => Quadrant::Delegate,
        (false, false) => Quadrant::Eliminate,
    }
}

/// Individual weighted term of a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveTerm {
    /// Term name
    pub name: String,
    /// Signed weight (negative for penalties)
    pub weight: f64,
    /// Raw input value
    pub value: f64,
    /// `weight * value`
    pub contribution: f64,
}

impl ObjectiveTerm {
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
            contribution: weight * value,
        }
    }
}

/// Complete scoring breakdown for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<ObjectiveTerm>,
    /// Rounded total, equal to [`compute_score`] for the same inputs
    pub total_score: f64,
    pub due_pressure: f64,
    pub quadrant: Quadrant,
}

impl ScoreBreakdown {
    /// Get the term with the largest contribution.
    pub fn top_term(&self) -> Option<&ObjectiveTerm> {
        self.terms
            .iter()
            .max_by(|a, b| a.contribution.total_cmp(&b.contribution))
    }
}

/// Explain how a score is assembled.
pub fn score_breakdown(
    importance: u8,
    urgency: u8,
    effort: u8,
    due_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    let pressure = due_pressure(due_date, now);
    let terms = vec![
        ObjectiveTerm::new("importance", IMPORTANCE_WEIGHT, f64::from(importance)),
        ObjectiveTerm::new("urgency", URGENCY_WEIGHT, f64::from(urgency)),
        ObjectiveTerm::new("due_pressure", DUE_PRESSURE_WEIGHT, pressure),
        ObjectiveTerm::new("effort", -EFFORT_WEIGHT, f64::from(effort)),
    ];

    ScoreBreakdown {
        terms,
        total_score: compute_score(importance, urgency, effort, due_date, now),
        due_pressure: pressure,
        quadrant: auto_quadrant(importance, urgency),
    }
}
