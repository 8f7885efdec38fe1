use shared::NewGoal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddGoalModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_add: Callback<NewGoal>,
}

#[function_component(AddGoalModal)]
pub fn add_goal_modal(props: &AddGoalModalProps) -> Html {
    let form = use_state(NewGoal::default);
    let error_message = use_state(|| Option::<String>::None);

    let text_input = |apply: fn(&mut NewGoal, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let checkbox = |apply: fn(&mut NewGoal, bool)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.checked());
            form.set(next);
        })
    };

    let on_text_change = text_input(|form, value| form.text = value);
    let on_target_change = text_input(|form, value| form.target = value);
    let on_unit_change = text_input(|form, value| form.unit = value);
    let on_progress_toggle = checkbox(|form, checked| form.has_progress = checked);
    let on_auto_toggle = checkbox(|form, checked| form.auto_increment = checked);

    let close = {
        let form = form.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.set(NewGoal::default());
            error_message.set(None);
            on_close.emit(());
        })
    };

    let on_submit = {
        let form = form.clone();
        let error_message = error_message.clone();
        let on_add = props.on_add.clone();
        let close = close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(_) => {
                    on_add.emit((*form).clone());
                    close.emit(());
                }
                Err(e) => {
                    Logger::debug_with_component("add-goal-modal", &format!("Rejected goal form: {}", e));
                    error_message.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_backdrop_click = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <form onsubmit={on_submit}>
                    <h3 class="modal-title">{"Add New Goal"}</h3>

                    <div class="form-field">
                        <label for="goal-text">{"Goal Description"}</label>
                        <input
                            id="goal-text"
                            type="text"
                            placeholder="Enter goal description"
                            value={form.text.clone()}
                            oninput={on_text_change}
                        />
                    </div>

                    <label class="form-check">
                        <input type="checkbox" checked={form.has_progress} onchange={on_progress_toggle} />
                        {"Has progress tracking"}
                    </label>

                    if form.has_progress {
                        <div class="form-field">
                            <label for="goal-target">{"Target Value"}</label>
                            <input
                                id="goal-target"
                                type="number"
                                min="0"
                                placeholder="e.g. 5"
                                value={form.target.clone()}
                                oninput={on_target_change}
                            />
                        </div>
                        <div class="form-field">
                            <label for="goal-unit">{"Unit (optional)"}</label>
                            <input
                                id="goal-unit"
                                type="text"
                                placeholder="e.g. km, pages, min, dots"
                                value={form.unit.clone()}
                                oninput={on_unit_change}
                            />
                        </div>
                        <label class="form-check">
                            <input type="checkbox" checked={form.auto_increment} onchange={on_auto_toggle} />
                            {"Auto increment progress"}
                        </label>
                    }

                    if let Some(message) = &*error_message {
                        <div class="form-error">{ message }</div>
                    }

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={form.text.trim().is_empty()}>
                            {"Add Goal"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
