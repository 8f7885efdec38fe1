use shared::heuristics::{goal_color, infer_unit};
use shared::{Goal, GestureConfig, ProgressUnit};
use yew::prelude::*;

use crate::components::progress_control::ProgressControl;

#[derive(Properties, PartialEq)]
pub struct GoalItemProps {
    pub goal: Goal,
    pub step_interval_ms: u32,
    pub gesture: GestureConfig,
    pub on_toggle: Callback<String>,
    pub on_progress_change: Callback<(String, f64)>,
    pub on_toggle_auto_increment: Callback<String>,
}

#[function_component(GoalItem)]
pub fn goal_item(props: &GoalItemProps) -> Html {
    let goal = &props.goal;

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = goal.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    if !goal.has_progress {
        return html! {
            <div class={classes!("goal-item", goal.is_completed.then_some("completed"))}>
                <button type="button" class="goal-toggle" onclick={on_toggle}>
                    <span class="check-icon">{ if goal.is_completed { "✓" } else { "○" } }</span>
                    <span class="item-text">{ &goal.text }</span>
                </button>
            </div>
        };
    }

    let on_progress_change = {
        let on_progress_change = props.on_progress_change.clone();
        let id = goal.id.clone();
        Callback::from(move |value: f64| on_progress_change.emit((id.clone(), value)))
    };

    let on_toggle_auto = {
        let on_toggle_auto_increment = props.on_toggle_auto_increment.clone();
        let id = goal.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle_auto_increment.emit(id.clone()))
    };

    let unit = ProgressUnit::from(infer_unit(&goal.text, goal.unit.as_deref()));

    html! {
        <div class={classes!("goal-item", "with-progress", goal.is_completed.then_some("completed"))}>
            <ProgressControl
                current={goal.progress_current()}
                target={goal.progress_target()}
                unit={unit}
                color={AttrValue::Static(goal_color(&goal.text))}
                text={Some(AttrValue::from(goal.text.clone()))}
                auto_increment={goal.auto_increment}
                step_interval_ms={props.step_interval_ms}
                gesture={props.gesture}
                on_progress_change={on_progress_change}
            />
            <div class="goal-actions">
                <button
                    type="button"
                    class={classes!("auto-toggle", goal.auto_increment.then_some("active"))}
                    title={if goal.auto_increment { "Stop auto-progress" } else { "Start auto-progress" }}
                    onclick={on_toggle_auto}
                >
                    { if goal.auto_increment { "⏸ Auto" } else { "▶ Auto" } }
                </button>
                <button type="button" class="goal-complete" onclick={on_toggle}>
                    { if goal.is_completed { "Undo" } else { "Done" } }
                </button>
            </div>
        </div>
    }
}
