use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_planner::Notice;

const DISPLAY_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<u32>,
}

/// Shows the latest notice and dismisses it after a short delay
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notice.as_ref().map(|notice| notice.id), move |id| {
            let timeout = id.map(|id| Timeout::new(DISPLAY_MS, move || on_dismiss.emit(id)));
            move || drop(timeout)
        });
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-title">{ &notice.title }</div>
            if !notice.description.is_empty() {
                <div class="toast-description">{ &notice.description }</div>
            }
        </div>
    }
}
