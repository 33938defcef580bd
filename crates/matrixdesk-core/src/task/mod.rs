//! Task types for the Eisenhower matrix.
//!
//! A [`Task`] is created once from a [`TaskInput`] and never rescored: its
//! `score` and `quadrant` are frozen at creation time.
//!
//! Quadrant layout:
//!
//! ```text
//!                   urgency >= 4        urgency < 4
//!                +-------------------+-------------------+
//! importance >= 4|  Q1-Do            |  Q2-Schedule      |
//!                +-------------------+-------------------+
//! importance < 4 |  Q3-Delegate      |  Q4-Eliminate     |
//!                +-------------------+-------------------+
//! ```

pub mod matrix;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};
use crate::scoring::{auto_quadrant, clamp_rating, compute_score};

/// One of the four fixed priority categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Important and urgent
    #[serde(rename = "Q1-Do")]
    Do,
    /// Important, not urgent
    #[serde(rename = "Q2-Schedule")]
    Schedule,
    /// Urgent, not important
    #[serde(rename = "Q3-Delegate")]
    Delegate,
    /// Neither important nor urgent
    #[serde(rename = "Q4-Eliminate")]
    Eliminate,
}

impl Quadrant {
    /// All quadrants in board order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    /// Stable identifier used in storage and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Quadrant::Do => "Q1-Do",
            Quadrant::Schedule => "Q2-Schedule",
            Quadrant::Delegate => "Q3-Delegate",
            Quadrant::Eliminate => "Q4-Eliminate",
        }
    }

    /// Heading shown above the quadrant.
    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::Do => "Q1: Do First",
            Quadrant::Schedule => "Q2: Schedule",
            Quadrant::Delegate => "Q3: Delegate",
            Quadrant::Eliminate => "Q4: Eliminate",
        }
    }

    /// Long-form description of the quadrant.
    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::Do => "Important & Urgent",
            Quadrant::Schedule => "Important & Not Urgent",
            Quadrant::Delegate => "Not Important & Urgent",
            Quadrant::Eliminate => "Not Important & Not Urgent",
        }
    }

    /// Accent colour for the quadrant.
    pub fn color(&self) -> &'static str {
        match self {
            Quadrant::Do => "#f59e0b",
            Quadrant::Schedule => "#22c55e",
            Quadrant::Delegate => "#3b82f6",
            Quadrant::Eliminate => "#ef4444",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Quadrant {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q1-do" | "q1" | "do" | "urgent-important" => Ok(Quadrant::Do),
            "q2-schedule" | "q2" | "schedule" | "important-not-urgent" => Ok(Quadrant::Schedule),
            "q3-delegate" | "q3" | "delegate" | "urgent-not-important" => Ok(Quadrant::Delegate),
            "q4-eliminate" | "q4" | "eliminate" | "neither" => Ok(Quadrant::Eliminate),
            _ => Err(ValidationError::InvalidValue {
                field: "quadrant".into(),
                message: format!("unknown quadrant '{s}'"),
            }),
        }
    }
}

/// How a task's quadrant is chosen.
///
/// Serialized as `"Auto"` or the quadrant code, e.g. `"Q2-Schedule"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AssignMode {
    /// Derive the quadrant from importance and urgency
    #[default]
    Auto,
    /// Place the task in a fixed quadrant
    Manual(Quadrant),
}

impl AssignMode {
    /// Resolve the final quadrant for the given ratings.
    pub fn resolve(&self, importance: u8, urgency: u8) -> Quadrant {
        match self {
            AssignMode::Auto => auto_quadrant(importance, urgency),
            AssignMode::Manual(q) => *q,
        }
    }
}

impl fmt::Display for AssignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignMode::Auto => write!(f, "Auto"),
            AssignMode::Manual(q) => write!(f, "{q}"),
        }
    }
}

impl FromStr for AssignMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(AssignMode::Auto)
        } else {
            s.parse().map(AssignMode::Manual)
        }
    }
}

impl From<AssignMode> for String {
    fn from(mode: AssignMode) -> Self {
        mode.to_string()
    }
}

impl TryFrom<String> for AssignMode {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Raw form input for a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInput {
    pub title: String,
    pub importance: u8,
    pub urgency: u8,
    pub effort: u8,
    pub due_date: Option<NaiveDate>,
    pub assign_mode: AssignMode,
}

impl TaskInput {
    /// Input with the form's default ratings (importance 3, urgency 3, effort 2).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            importance: 3,
            urgency: 3,
            effort: 2,
            due_date: None,
            assign_mode: AssignMode::Auto,
        }
    }

    pub fn with_ratings(mut self, importance: u8, urgency: u8, effort: u8) -> Self {
        self.importance = importance;
        self.urgency = urgency;
        self.effort = effort;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_assign_mode(mut self, mode: AssignMode) -> Self {
        self.assign_mode = mode;
        self
    }

    /// Score this input would receive if submitted at `now`.
    pub fn preview_score(&self, now: DateTime<Utc>) -> f64 {
        compute_score(
            clamp_rating(self.importance),
            clamp_rating(self.urgency),
            clamp_rating(self.effort),
            self.due_date,
            now,
        )
    }
}

/// A task placed on the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub importance: u8,
    pub urgency: u8,
    pub effort: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub manual_quadrant: AssignMode,
    pub score: f64,
    pub quadrant: Quadrant,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a task from form input.
    ///
    /// The title is trimmed and must not be blank. Ratings are clamped to
    /// `1..=5` before scoring.
    ///
    /// # Errors
    /// Returns a validation error if the title is empty.
    pub fn from_input(input: &TaskInput, now: DateTime<Utc>) -> Result<Self> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title".into()).into());
        }

        let importance = clamp_rating(input.importance);
        let urgency = clamp_rating(input.urgency);
        let effort = clamp_rating(input.effort);

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            importance,
            urgency,
            effort,
            due_date: input.due_date,
            manual_quadrant: input.assign_mode,
            score: compute_score(importance, urgency, effort, input.due_date, now),
            quadrant: input.assign_mode.resolve(importance, urgency),
            created_at: now,
        })
    }

    /// One-line summary: ratings and score.
    pub fn meta_line(&self) -> String {
        format!(
            "Imp {} · Urg {} · Eff {} · Score {}",
            self.importance, self.urgency, self.effort, self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn quadrant_serializes_with_codes() {
        assert_eq!(serde_json::to_string(&Quadrant::Do).unwrap(), "\"Q1-Do\"");
        assert_eq!(
            serde_json::from_str::<Quadrant>("\"Q4-Eliminate\"").unwrap(),
            Quadrant::Eliminate
        );
    }

    #[test]
    fn quadrant_parses_descriptive_aliases() {
        assert_eq!("urgent-important".parse::<Quadrant>().unwrap(), Quadrant::Do);
        assert_eq!("important-not-urgent".parse::<Quadrant>().unwrap(), Quadrant::Schedule);
        assert_eq!("urgent-not-important".parse::<Quadrant>().unwrap(), Quadrant::Delegate);
        assert_eq!("neither".parse::<Quadrant>().unwrap(), Quadrant::Eliminate);
        assert!("Q5".parse::<Quadrant>().is_err());
    }

    #[test]
    fn quadrant_display_metadata() {
        assert_eq!(Quadrant::Do.title(), "Q1: Do First");
        assert_eq!(Quadrant::Delegate.description(), "Not Important & Urgent");
        assert_eq!(Quadrant::Schedule.color(), "#22c55e");
        assert_eq!(Quadrant::Eliminate.to_string(), "Q4-Eliminate");
        for q in Quadrant::ALL {
            assert_eq!(q.code().parse::<Quadrant>().unwrap(), q);
        }
    }

    #[test]
    fn preview_score_matches_created_task() {
        let input = TaskInput::new("Preview")
            .with_ratings(4, 5, 3)
            .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 11));
        let task = Task::from_input(&input, now()).unwrap();
        assert_eq!(input.preview_score(now()), task.score);
    }

    #[test]
    fn assign_mode_round_trips_as_plain_string() {
        let json = serde_json::to_string(&AssignMode::Manual(Quadrant::Delegate)).unwrap();
        assert_eq!(json, "\"Q3-Delegate\"");
        assert_eq!(serde_json::to_string(&AssignMode::Auto).unwrap(), "\"Auto\"");
        let parsed: AssignMode = serde_json::from_str("\"Auto\"").unwrap();
        assert_eq!(parsed, AssignMode::Auto);
        assert!(serde_json::from_str::<AssignMode>("\"Later\"").is_err());
    }

    #[test]
    fn from_input_auto_assigns_quadrant() {
        let input = TaskInput::new("  Ship release  ").with_ratings(5, 4, 2);
        let task = Task::from_input(&input, now()).unwrap();
        assert_eq!(task.title, "Ship release");
        assert_eq!(task.quadrant, Quadrant::Do);
        assert_eq!(task.manual_quadrant, AssignMode::Auto);
        // 15 + 8 + 0 - 3
        assert_eq!(task.score, 20.0);
        assert_eq!(task.created_at, now());
        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn from_input_manual_override_wins() {
        let input = TaskInput::new("Inbox zero")
            .with_ratings(5, 5, 1)
            .with_assign_mode(AssignMode::Manual(Quadrant::Eliminate));
        let task = Task::from_input(&input, now()).unwrap();
        assert_eq!(task.quadrant, Quadrant::Eliminate);
        assert_eq!(task.manual_quadrant, AssignMode::Manual(Quadrant::Eliminate));
    }

    #[test]
    fn from_input_rejects_blank_title() {
        let err = Task::from_input(&TaskInput::new("   "), now()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::EmptyField(_))
        ));
    }

    #[test]
    fn from_input_clamps_ratings() {
        let input = TaskInput::new("Clamp").with_ratings(0, 9, 7);
        let task = Task::from_input(&input, now()).unwrap();
        assert_eq!((task.importance, task.urgency, task.effort), (1, 5, 5));
    }

    #[test]
    fn task_json_uses_camel_case_and_omits_missing_due_date() {
        let task = Task::from_input(&TaskInput::new("Write notes"), now()).unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("manualQuadrant").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("dueDate").is_none());

        let back: Task = serde_json::from_value(value).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn meta_line_formats_ratings() {
        let task = Task::from_input(&TaskInput::new("Meta").with_ratings(4, 2, 3), now()).unwrap();
        assert_eq!(task.meta_line(), "Imp 4 · Urg 2 · Eff 3 · Score 11.5");
    }
}
