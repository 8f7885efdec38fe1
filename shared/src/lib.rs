use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod dates;
pub mod forms;
pub mod gesture;
pub mod heuristics;
pub mod journal;
pub mod planner;
pub mod progress;
pub mod sample_data;
pub mod scheduling;

pub use config::{AppConfig, ConfigError};
pub use forms::{FormError, NewGoal, NewJournalEntry, NewTodo};
pub use gesture::{Gesture, GestureConfig, Point};
pub use journal::JournalBook;
pub use planner::{DailyPlanner, ItemKind, PlannerError, ProgressUpdate};
pub use progress::{MoveOutcome, ProgressConfig, ProgressControl, ProgressUnit, TrackRect};
pub use scheduling::AutoAdvanceTask;

/// A single task on a day's to-do list.
///
/// ID format: "todo::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    /// Free-form clock label such as "9:00 AM"
    pub time: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A daily goal, either a simple checkbox or a progress-tracked quantity.
///
/// ID format: "goal::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    pub has_progress: bool,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub target: Option<f64>,
    /// Display unit ("min", "dots", "km", ...). Inferred from the text when absent.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub category: Option<String>,
}

/// Everything planned for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    pub date: NaiveDate,
    pub todos: Vec<Todo>,
    pub goals: Vec<Goal>,
}

/// A journal entry.
///
/// ID format: "entry::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// How the author felt when writing an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Productive,
    #[default]
    Neutral,
    Tired,
    Sad,
}

impl Mood {
    /// All moods in the order the mood picker shows them
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Productive,
        Mood::Neutral,
        Mood::Tired,
        Mood::Sad,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Productive => "💪",
            Mood::Neutral => "😐",
            Mood::Tired => "😴",
            Mood::Sad => "😔",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Productive => "Productive",
            Mood::Neutral => "Neutral",
            Mood::Tired => "Tired",
            Mood::Sad => "Sad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl DailyData {
    /// An empty day with no todos or goals
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            todos: Vec::new(),
            goals: Vec::new(),
        }
    }
}

impl Todo {
    /// Generate a todo ID
    pub fn generate_id() -> String {
        format!("todo::{}", uuid::Uuid::new_v4())
    }
}

impl Goal {
    /// Generate a goal ID
    pub fn generate_id() -> String {
        format!("goal::{}", uuid::Uuid::new_v4())
    }

    /// Target used for the progress control; goals created without one fall back to 100
    pub fn progress_target(&self) -> f64 {
        match self.target {
            Some(target) if target.is_finite() && target > 0.0 => target,
            _ => progress::DEFAULT_TARGET,
        }
    }

    pub fn progress_current(&self) -> f64 {
        self.current.unwrap_or(0.0)
    }
}

impl JournalEntry {
    /// Generate a journal entry ID
    pub fn generate_id() -> String {
        format!("entry::{}", uuid::Uuid::new_v4())
    }
}
