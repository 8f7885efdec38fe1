use shared::heuristics::todo_icon;
use shared::Todo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
    pub on_toggle: Callback<String>,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let todo = &props.todo;
    let icon = todo_icon(&todo.text);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = todo.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    html! {
        <button
            type="button"
            class={classes!("todo-item", todo.is_completed.then_some("completed"))}
            {onclick}
        >
            <span class="todo-main">
                <span class="check-icon">{ if todo.is_completed { "✓" } else { "○" } }</span>
                <span class={classes!("todo-icon", icon.css_class())}>{ icon.emoji() }</span>
                <span class="item-text">{ &todo.text }</span>
            </span>
            if let Some(time) = &todo.time {
                <span class="todo-time">{ time }</span>
            }
        </button>
    }
}
