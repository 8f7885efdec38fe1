//! In-memory store for the to-do and goal lists of each day.
//!
//! The planner is the authoritative owner of goal progress. Progress controls
//! report values here, and the planner clamps them and derives completion.

use crate::forms::{FormError, NewGoal, NewTodo};
use crate::{DailyData, Goal, Todo};
use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Task,
    Goal,
}

impl ItemKind {
    pub fn singular(&self) -> &'static str {
        match self {
            ItemKind::Task => "task",
            ItemKind::Goal => "goal",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ItemKind::Task => "tasks",
            ItemKind::Goal => "goals",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Task => "Tasks",
            ItemKind::Goal => "Goals",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("No {kind} with id '{id}' on {date}")]
    UnknownItem {
        kind: ItemKind,
        id: String,
        date: NaiveDate,
    },
    #[error("Goal '{0}' does not track progress")]
    NotProgressTracked(String),
    #[error(transparent)]
    InvalidForm(#[from] FormError),
}

/// Outcome of a progress change after the planner applied it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Stored value after clamping to [0, target]
    pub value: f64,
    /// True when this change completed a goal that was not complete before
    pub newly_completed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlanner {
    days: BTreeMap<NaiveDate, DailyData>,
    selected: NaiveDate,
}

impl DailyPlanner {
    pub fn new(selected: NaiveDate) -> Self {
        Self {
            days: BTreeMap::new(),
            selected,
        }
    }

    pub fn with_days(selected: NaiveDate, days: impl IntoIterator<Item = DailyData>) -> Self {
        Self {
            days: days.into_iter().map(|day| (day.date, day)).collect(),
            selected,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        if date != self.selected {
            info!("📅 Selected date changed {} -> {}", self.selected, date);
            self.selected = date;
        }
    }

    /// Everything stored for `date`; an empty day when nothing is
    pub fn day(&self, date: NaiveDate) -> DailyData {
        self.days
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DailyData::empty(date))
    }

    pub fn todos(&self, date: NaiveDate) -> &[Todo] {
        self.days.get(&date).map(|day| day.todos.as_slice()).unwrap_or(&[])
    }

    pub fn goals(&self, date: NaiveDate) -> &[Goal] {
        self.days.get(&date).map(|day| day.goals.as_slice()).unwrap_or(&[])
    }

    /// Dates that have at least one stored item
    pub fn planned_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .values()
            .filter(|day| !day.todos.is_empty() || !day.goals.is_empty())
            .map(|day| day.date)
    }

    pub fn add_todo(&mut self, date: NaiveDate, form: &NewTodo) -> Result<Todo, PlannerError> {
        let todo = form.validate()?;
        info!("✅ Adding task '{}' on {}", todo.text, date);
        self.day_mut(date).todos.push(todo.clone());
        Ok(todo)
    }

    pub fn add_goal(&mut self, date: NaiveDate, form: &NewGoal) -> Result<Goal, PlannerError> {
        let goal = form.validate()?;
        info!("🎯 Adding goal '{}' on {}", goal.text, date);
        self.day_mut(date).goals.push(goal.clone());
        Ok(goal)
    }

    /// Flip a task's completion. Returns the new state.
    pub fn toggle_todo(&mut self, date: NaiveDate, id: &str) -> Result<bool, PlannerError> {
        let todo = self.todo_mut(date, id)?;
        todo.is_completed = !todo.is_completed;
        info!("Task '{}' completed={}", todo.text, todo.is_completed);
        Ok(todo.is_completed)
    }

    /// Flip a goal's completion. Completing a progress goal fills it to its target.
    pub fn toggle_goal(&mut self, date: NaiveDate, id: &str) -> Result<bool, PlannerError> {
        let goal = self.goal_mut(date, id)?;
        goal.is_completed = !goal.is_completed;
        if goal.is_completed && goal.has_progress {
            goal.current = Some(goal.progress_target());
        }
        info!("Goal '{}' completed={}", goal.text, goal.is_completed);
        Ok(goal.is_completed)
    }

    /// Store a new progress value reported by a progress control
    pub fn set_goal_progress(
        &mut self,
        date: NaiveDate,
        id: &str,
        value: f64,
    ) -> Result<ProgressUpdate, PlannerError> {
        let goal = self.goal_mut(date, id)?;
        if !goal.has_progress {
            return Err(PlannerError::NotProgressTracked(goal.id.clone()));
        }

        let target = goal.progress_target();
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, target) };
        let completed = value >= target;
        let newly_completed = completed && !goal.is_completed;

        goal.current = Some(value);
        goal.is_completed = completed;
        if newly_completed {
            info!("🎉 Goal completed through progress: '{}'", goal.text);
        }

        Ok(ProgressUpdate {
            value,
            newly_completed,
        })
    }

    /// Flip auto-increment on a goal. Returns the new setting.
    pub fn toggle_auto_increment(&mut self, date: NaiveDate, id: &str) -> Result<bool, PlannerError> {
        let goal = self.goal_mut(date, id)?;
        goal.auto_increment = !goal.auto_increment;
        info!(
            "Auto-progress {} for '{}'",
            if goal.auto_increment { "enabled" } else { "disabled" },
            goal.text
        );
        Ok(goal.auto_increment)
    }

    /// Number of incomplete items of one kind
    pub fn remaining(&self, date: NaiveDate, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Task => self.todos(date).iter().filter(|todo| !todo.is_completed).count(),
            ItemKind::Goal => self.goals(date).iter().filter(|goal| !goal.is_completed).count(),
        }
    }

    pub fn sorted_todos(&self, date: NaiveDate) -> Vec<Todo> {
        let mut todos = self.todos(date).to_vec();
        sort_todos(&mut todos);
        todos
    }

    pub fn sorted_goals(&self, date: NaiveDate) -> Vec<Goal> {
        let mut goals = self.goals(date).to_vec();
        sort_goals(&mut goals);
        goals
    }

    fn day_mut(&mut self, date: NaiveDate) -> &mut DailyData {
        self.days.entry(date).or_insert_with(|| DailyData::empty(date))
    }

    fn todo_mut(&mut self, date: NaiveDate, id: &str) -> Result<&mut Todo, PlannerError> {
        self.days
            .get_mut(&date)
            .and_then(|day| day.todos.iter_mut().find(|todo| todo.id == id))
            .ok_or_else(|| PlannerError::UnknownItem {
                kind: ItemKind::Task,
                id: id.to_string(),
                date,
            })
    }

    fn goal_mut(&mut self, date: NaiveDate, id: &str) -> Result<&mut Goal, PlannerError> {
        self.days
            .get_mut(&date)
            .and_then(|day| day.goals.iter_mut().find(|goal| goal.id == id))
            .ok_or_else(|| PlannerError::UnknownItem {
                kind: ItemKind::Goal,
                id: id.to_string(),
                date,
            })
    }
}

/// Parse clock labels like "9:00 AM", "11:30pm" or "17:45"
pub fn parse_clock(label: &str) -> Option<NaiveTime> {
    let normalized = label.trim().to_uppercase();
    ["%I:%M %p", "%I:%M%p", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Scheduled todos sort before unscheduled ones
fn compare_clock(a: Option<NaiveTime>, b: Option<NaiveTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Incomplete first, then by clock time, then by text
pub fn sort_todos(todos: &mut [Todo]) {
    todos.sort_by(|a, b| {
        let a_time = a.time.as_deref().and_then(parse_clock);
        let b_time = b.time.as_deref().and_then(parse_clock);
        a.is_completed
            .cmp(&b.is_completed)
            .then_with(|| compare_clock(a_time, b_time))
            .then_with(|| compare_text(&a.text, &b.text))
    });
}

/// Incomplete first, then by text
pub fn sort_goals(goals: &mut [Goal]) {
    goals.sort_by(|a, b| {
        a.is_completed
            .cmp(&b.is_completed)
            .then_with(|| compare_text(&a.text, &b.text))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn todo(id: &str, text: &str, time: Option<&str>, done: bool) -> Todo {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
            is_completed: done,
            time: time.map(str::to_string),
            category: None,
        }
    }

    fn progress_goal(id: &str, text: &str, current: f64, target: f64) -> Goal {
        Goal {
            id: id.to_string(),
            text: text.to_string(),
            is_completed: false,
            has_progress: true,
            current: Some(current),
            target: Some(target),
            unit: None,
            auto_increment: false,
            category: None,
        }
    }

    fn planner() -> DailyPlanner {
        DailyPlanner::with_days(
            date(),
            vec![DailyData {
                date: date(),
                todos: vec![
                    todo("todo-1", "Plan day & Prioritize tasks", Some("9:00 AM"), false),
                    todo("todo-2", "Morning workout", None, false),
                    todo("todo-3", "Team meeting", Some("11:00 AM"), true),
                    todo("todo-4", "Write daily journal", Some("3:00 PM"), false),
                    todo("todo-5", "Study NLP concepts", Some("10:30 AM"), false),
                ],
                goals: vec![
                    progress_goal("goal-1", "Read 30 pages", 12.0, 30.0),
                    Goal {
                        id: "goal-2".to_string(),
                        text: "Complete coding challenge".to_string(),
                        is_completed: false,
                        has_progress: false,
                        current: None,
                        target: None,
                        unit: None,
                        auto_increment: false,
                        category: None,
                    },
                ],
            }],
        )
    }

    #[test]
    fn test_unknown_date_is_empty() {
        let planner = planner();
        let other = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert!(planner.todos(other).is_empty());
        assert!(planner.goals(other).is_empty());
        assert_eq!(planner.day(other), DailyData::empty(other));
        assert_eq!(planner.remaining(other, ItemKind::Task), 0);
    }

    #[test]
    fn test_toggle_todo_and_remaining() {
        let mut planner = planner();
        assert_eq!(planner.remaining(date(), ItemKind::Task), 4);

        assert!(planner.toggle_todo(date(), "todo-1").unwrap());
        assert_eq!(planner.remaining(date(), ItemKind::Task), 3);

        assert!(!planner.toggle_todo(date(), "todo-1").unwrap());
        assert_eq!(planner.remaining(date(), ItemKind::Task), 4);
    }

    #[test]
    fn test_unknown_item_error() {
        let mut planner = planner();
        let err = planner.toggle_todo(date(), "todo-99").unwrap_err();
        assert_eq!(err.to_string(), "No task with id 'todo-99' on 2025-06-02");
    }

    #[test]
    fn test_progress_is_clamped_and_completes_goal() {
        let mut planner = planner();

        let update = planner.set_goal_progress(date(), "goal-1", 45.0).unwrap();
        assert_eq!(update, ProgressUpdate { value: 30.0, newly_completed: true });
        assert!(planner.goals(date())[0].is_completed);

        // Already complete; staying at target is not "newly" completed
        let update = planner.set_goal_progress(date(), "goal-1", 30.0).unwrap();
        assert!(!update.newly_completed);

        // Dropping below target un-completes
        let update = planner.set_goal_progress(date(), "goal-1", -4.0).unwrap();
        assert_eq!(update.value, 0.0);
        assert!(!planner.goals(date())[0].is_completed);
    }

    #[test]
    fn test_progress_on_plain_goal_is_rejected() {
        let mut planner = planner();
        assert_eq!(
            planner.set_goal_progress(date(), "goal-2", 1.0),
            Err(PlannerError::NotProgressTracked("goal-2".to_string()))
        );
    }

    #[test]
    fn test_toggle_progress_goal_fills_to_target() {
        let mut planner = planner();
        assert!(planner.toggle_goal(date(), "goal-1").unwrap());
        assert_eq!(planner.goals(date())[0].current, Some(30.0));
    }

    #[test]
    fn test_toggle_auto_increment() {
        let mut planner = planner();
        assert!(planner.toggle_auto_increment(date(), "goal-1").unwrap());
        assert!(!planner.toggle_auto_increment(date(), "goal-1").unwrap());
    }

    #[test]
    fn test_add_items_creates_day() {
        let mut planner = planner();
        let next_day = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        let todo = planner
            .add_todo(next_day, &NewTodo { text: "Cook dinner".to_string(), time: String::new() })
            .unwrap();
        assert_eq!(planner.todos(next_day), &[todo]);

        let err = planner.add_goal(next_day, &NewGoal::default()).unwrap_err();
        assert_eq!(err, PlannerError::InvalidForm(FormError::EmptyText));
        assert!(planner.goals(next_day).is_empty());

        let dates: Vec<NaiveDate> = planner.planned_dates().collect();
        assert_eq!(dates, vec![date(), next_day]);
    }

    #[test]
    fn test_sorted_todos_incomplete_first_then_time() {
        let planner = planner();
        let order: Vec<String> = planner
            .sorted_todos(date())
            .into_iter()
            .map(|todo| todo.id)
            .collect();

        // 9:00 AM < 10:30 AM < 3:00 PM by clock, not by string.
        // Unscheduled todos follow the scheduled ones; completed go last.
        assert_eq!(order, vec!["todo-1", "todo-5", "todo-4", "todo-2", "todo-3"]);
    }

    #[test]
    fn test_sorted_goals_incomplete_first_then_text() {
        let mut planner = planner();
        planner.toggle_goal(date(), "goal-2").unwrap();
        let order: Vec<String> = planner
            .sorted_goals(date())
            .into_iter()
            .map(|goal| goal.id)
            .collect();
        assert_eq!(order, vec!["goal-1", "goal-2"]);
    }

    #[test]
    fn test_parse_clock_formats() {
        assert_eq!(parse_clock("9:00 AM"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_clock("11:30pm"), NaiveTime::from_hms_opt(23, 30, 0));
        assert_eq!(parse_clock("17:45"), NaiveTime::from_hms_opt(17, 45, 0));
        assert_eq!(parse_clock("after lunch"), None);
    }
}
