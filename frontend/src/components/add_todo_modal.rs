use shared::NewTodo;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddTodoModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_add: Callback<NewTodo>,
}

#[function_component(AddTodoModal)]
pub fn add_todo_modal(props: &AddTodoModalProps) -> Html {
    let form = use_state(NewTodo::default);
    let error_message = use_state(|| Option::<String>::None);

    let on_text_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(NewTodo { text: input.value(), ..(*form).clone() });
        })
    };

    let on_time_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(NewTodo { time: input.value(), ..(*form).clone() });
        })
    };

    let close = {
        let form = form.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.set(NewTodo::default());
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
                    Logger::debug_with_component("add-todo-modal", &format!("Rejected task form: {}", e));
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
                    <h3 class="modal-title">{"Add New Task"}</h3>

                    <div class="form-field">
                        <label for="todo-text">{"Task Description"}</label>
                        <input
                            id="todo-text"
                            type="text"
                            placeholder="Enter task description"
                            value={form.text.clone()}
                            oninput={on_text_change}
                        />
                    </div>

                    <div class="form-field">
                        <label for="todo-time">{"Time (optional)"}</label>
                        <input
                            id="todo-time"
                            type="text"
                            placeholder="e.g. 9:00 AM"
                            value={form.time.clone()}
                            oninput={on_time_change}
                        />
                    </div>

                    if let Some(message) = &*error_message {
                        <div class="form-error">{ message }</div>
                    }

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={form.text.trim().is_empty()}>
                            {"Add Task"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
