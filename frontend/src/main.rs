use chrono::{Local, Timelike};
use log::LevelFilter;
use shared::dates::status_line;
use shared::{AppConfig, ItemKind};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::add_goal_modal::AddGoalModal;
use components::add_item_button::AddItemButton;
use components::add_todo_modal::AddTodoModal;
use components::goal_item::GoalItem;
use components::header::Header;
use components::journal_page::JournalPage;
use components::tab_navigation::{TabNavigation, View};
use components::todo_item::TodoItem;
use components::toast::Toast;
use hooks::use_journal::use_journal;
use hooks::use_planner::use_planner;
use services::logging::Logger;
use services::{config, logging, theme};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let planner = use_planner(config.load_sample_data);
    let journal = use_journal(config.load_sample_data);

    let view = use_state(|| View::Tasks);
    let is_dark = use_state(theme::prefers_dark);
    let adding = use_state(|| false);

    use_effect_with(*is_dark, |dark| {
        theme::apply(*dark);
        || ()
    });

    let on_toggle_theme = {
        let is_dark = is_dark.clone();
        Callback::from(move |_: ()| is_dark.set(!*is_dark))
    };

    let on_view_change = {
        let view = view.clone();
        let adding = adding.clone();
        Callback::from(move |next: View| {
            Logger::debug_with_component("app", &format!("Switched to {} view", next.label()));
            adding.set(false);
            view.set(next);
        })
    };

    let open_add = {
        let adding = adding.clone();
        Callback::from(move |_: ()| adding.set(true))
    };

    let close_add = {
        let adding = adding.clone();
        Callback::from(move |_: ()| adding.set(false))
    };

    let now = Local::now();
    let today = now.date_naive();
    let state = &planner.state;
    let selected = state.planner.selected_date();

    let status = match *view {
        View::Tasks => status_line(ItemKind::Task, state.planner.remaining(selected, ItemKind::Task)),
        View::Goals => status_line(ItemKind::Goal, state.planner.remaining(selected, ItemKind::Goal)),
        View::Journal => match journal.state.book.len() {
            1 => "You have 1 journal entry.".to_string(),
            n => format!("You have {} journal entries.", n),
        },
    };

    let content = match *view {
        View::Tasks => {
            let todos = state.planner.sorted_todos(selected);
            html! {
                <>
                    <div class="item-list">
                        if todos.is_empty() {
                            <div class="empty-state"><p>{"No tasks for today"}</p></div>
                        } else {
                            { for todos.into_iter().map(|todo| html! {
                                <TodoItem
                                    key={todo.id.clone()}
                                    todo={todo.clone()}
                                    on_toggle={planner.actions.toggle_todo.clone()}
                                />
                            }) }
                        }
                    </div>
                    <AddItemButton label="Add task" on_click={open_add.clone()} />
                    <AddTodoModal is_open={*adding} on_close={close_add.clone()} on_add={planner.actions.add_todo.clone()} />
                </>
            }
        }
        View::Goals => {
            let goals = state.planner.sorted_goals(selected);
            html! {
                <>
                    <div class="item-list">
                        if goals.is_empty() {
                            <div class="empty-state"><p>{"No goals for today"}</p></div>
                        } else {
                            { for goals.into_iter().map(|goal| html! {
                                <GoalItem
                                    key={goal.id.clone()}
                                    goal={goal.clone()}
                                    step_interval_ms={config.step_interval_ms()}
                                    gesture={config.gesture()}
                                    on_toggle={planner.actions.toggle_goal.clone()}
                                    on_progress_change={planner.actions.set_goal_progress.clone()}
                                    on_toggle_auto_increment={planner.actions.toggle_auto_increment.clone()}
                                />
                            }) }
                        }
                    </div>
                    <AddItemButton label="Add goal" on_click={open_add.clone()} />
                    <AddGoalModal is_open={*adding} on_close={close_add.clone()} on_add={planner.actions.add_goal.clone()} />
                </>
            }
        }
        View::Journal => html! {
            <JournalPage
                book={journal.state.book.clone()}
                on_add={journal.actions.add_entry.clone()}
                on_remove={journal.actions.remove_entry.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                selected_date={selected}
                today={today}
                hour={now.hour()}
                status={status}
                is_dark={*is_dark}
                on_toggle_theme={on_toggle_theme}
                planned={state.planner.planned_dates().collect::<Vec<_>>()}
                on_select_date={planner.actions.select_date.clone()}
            />
            <TabNavigation active={*view} on_change={on_view_change} />
            <main class="container">
                { content }
            </main>
            <Toast notice={state.notice.clone()} on_dismiss={planner.actions.dismiss_notice.clone()} />
        </div>
    }
}

fn main() {
    let (config, config_error) = config::load_app_config();
    logging::init(config.log_filter().unwrap_or(LevelFilter::Info));

    if let Some(e) = config_error {
        Logger::warn_with_component("config", &format!("Using default settings: {:#}", e));
    }
    Logger::info_with_component("app", "🚀 Daily planner starting");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
