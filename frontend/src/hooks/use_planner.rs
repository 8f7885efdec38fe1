use std::rc::Rc;

use chrono::{Local, NaiveDate};
use shared::{sample_data, DailyPlanner, NewGoal, NewTodo, PlannerError};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Short confirmation shown after a change, e.g. "Task completed!"
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlannerState {
    pub planner: DailyPlanner,
    pub notice: Option<Notice>,
    next_notice_id: u32,
}

pub enum PlannerAction {
    SelectDate(NaiveDate),
    AddTodo(NewTodo),
    AddGoal(NewGoal),
    ToggleTodo(String),
    ToggleGoal(String),
    SetGoalProgress { id: String, value: f64 },
    ToggleAutoIncrement(String),
    DismissNotice(u32),
}

impl PlannerState {
    pub fn new(today: NaiveDate, load_sample_data: bool) -> Self {
        let mut planner = DailyPlanner::new(today);
        if load_sample_data {
            match sample_data::sample_day(today) {
                Ok(day) => planner = DailyPlanner::with_days(today, vec![day]),
                Err(e) => Logger::error_with_component(
                    "planner",
                    &format!("Failed to load sample day: {}", e),
                ),
            }
        }

        Self {
            planner,
            notice: None,
            next_notice_id: 0,
        }
    }

    fn notify(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.next_notice_id += 1;
        self.notice = Some(Notice {
            id: self.next_notice_id,
            title: title.into(),
            description: description.into(),
        });
    }

    fn item_text(&self, date: NaiveDate, id: &str) -> String {
        self.planner
            .todos(date)
            .iter()
            .find(|todo| todo.id == id)
            .map(|todo| todo.text.clone())
            .or_else(|| {
                self.planner
                    .goals(date)
                    .iter()
                    .find(|goal| goal.id == id)
                    .map(|goal| goal.text.clone())
            })
            .unwrap_or_default()
    }

    fn apply(&mut self, action: PlannerAction) -> Result<(), PlannerError> {
        let date = self.planner.selected_date();
        match action {
            PlannerAction::SelectDate(date) => self.planner.select_date(date),
            PlannerAction::AddTodo(form) => {
                let todo = self.planner.add_todo(date, &form)?;
                self.notify("Task added", todo.text);
            }
            PlannerAction::AddGoal(form) => {
                let goal = self.planner.add_goal(date, &form)?;
                self.notify("Goal added", goal.text);
            }
            PlannerAction::ToggleTodo(id) => {
                let completed = self.planner.toggle_todo(date, &id)?;
                let title = if completed { "Task completed!" } else { "Task marked incomplete" };
                let text = self.item_text(date, &id);
                self.notify(title, text);
            }
            PlannerAction::ToggleGoal(id) => {
                let completed = self.planner.toggle_goal(date, &id)?;
                let title = if completed { "Goal completed!" } else { "Goal marked incomplete" };
                let text = self.item_text(date, &id);
                self.notify(title, text);
            }
            PlannerAction::SetGoalProgress { id, value } => {
                let update = self.planner.set_goal_progress(date, &id, value)?;
                if update.newly_completed {
                    let text = self.item_text(date, &id);
                    self.notify("Goal completed!", text);
                }
            }
            PlannerAction::ToggleAutoIncrement(id) => {
                let enabled = self.planner.toggle_auto_increment(date, &id)?;
                let title = format!("Auto-progress {}", if enabled { "enabled" } else { "disabled" });
                let text = self.item_text(date, &id);
                self.notify(title, text);
            }
            PlannerAction::DismissNotice(id) => {
                if self.notice.as_ref().map(|notice| notice.id) == Some(id) {
                    self.notice = None;
                }
            }
        }
        Ok(())
    }
}

impl Reducible for PlannerState {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) => Rc::new(next),
            Err(e) => {
                Logger::error_with_component("planner", &e.to_string());
                self
            }
        }
    }
}

pub struct UsePlannerResult {
    pub state: UseReducerHandle<PlannerState>,
    pub actions: UsePlannerActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePlannerActions {
    pub select_date: Callback<NaiveDate>,
    pub add_todo: Callback<NewTodo>,
    pub add_goal: Callback<NewGoal>,
    pub toggle_todo: Callback<String>,
    pub toggle_goal: Callback<String>,
    pub set_goal_progress: Callback<(String, f64)>,
    pub toggle_auto_increment: Callback<String>,
    pub dismiss_notice: Callback<u32>,
}

fn dispatcher<T: 'static>(
    state: &UseReducerHandle<PlannerState>,
    make: fn(T) -> PlannerAction,
) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |input: T| state.dispatch(make(input)))
}

#[hook]
pub fn use_planner(load_sample_data: bool) -> UsePlannerResult {
    let state = use_reducer(|| PlannerState::new(Local::now().date_naive(), load_sample_data));

    let actions = UsePlannerActions {
        select_date: dispatcher(&state, PlannerAction::SelectDate),
        add_todo: dispatcher(&state, PlannerAction::AddTodo),
        add_goal: dispatcher(&state, PlannerAction::AddGoal),
        toggle_todo: dispatcher(&state, PlannerAction::ToggleTodo),
        toggle_goal: dispatcher(&state, PlannerAction::ToggleGoal),
        set_goal_progress: {
            let state = state.clone();
            Callback::from(move |(id, value): (String, f64)| {
                state.dispatch(PlannerAction::SetGoalProgress { id, value })
            })
        },
        toggle_auto_increment: dispatcher(&state, PlannerAction::ToggleAutoIncrement),
        dismiss_notice: dispatcher(&state, PlannerAction::DismissNotice),
    };

    UsePlannerResult { state, actions }
}
