use chrono::NaiveDate;
use shared::dates::{greeting, long_date};
use yew::prelude::*;

use super::date_selector::DateSelector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    /// Local hour used for the greeting
    pub hour: u32,
    pub status: AttrValue,
    pub is_dark: bool,
    pub on_toggle_theme: Callback<()>,
    #[prop_or_default]
    pub planned: Vec<NaiveDate>,
    pub on_select_date: Callback<NaiveDate>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let date = long_date(props.selected_date);

    let on_theme_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <div class="header-top">
                    <div>
                        <h1 class="header-day">
                            { &date.weekday }
                            <span class="header-dot"></span>
                        </h1>
                        <p class="header-date">{ format!("{}, {}", date.month_day, date.year) }</p>
                    </div>
                    <button
                        type="button"
                        class="theme-toggle"
                        title={if props.is_dark { "Switch to light mode" } else { "Switch to dark mode" }}
                        onclick={on_theme_click}
                    >
                        { if props.is_dark { "☀️" } else { "🌙" } }
                    </button>
                </div>
                <div class="header-greeting">
                    <h2>{ format!("{},", greeting(props.hour)) }</h2>
                    <p class="header-status">{ &props.status }</p>
                </div>
                <DateSelector
                    selected_date={props.selected_date}
                    today={props.today}
                    planned={props.planned.clone()}
                    on_select={props.on_select_date.clone()}
                />
            </div>
        </header>
    }
}
