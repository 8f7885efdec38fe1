use chrono::{Datelike, NaiveDate};
use shared::dates::{week_of, weekday_label};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateSelectorProps {
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    /// Dates that have something planned; marked with a dot
    #[prop_or_default]
    pub planned: Vec<NaiveDate>,
    pub on_select: Callback<NaiveDate>,
}

/// Week strip (Monday to Sunday) around the selected date
#[function_component(DateSelector)]
pub fn date_selector(props: &DateSelectorProps) -> Html {
    html! {
        <div class="date-selector">
            { for week_of(props.selected_date).into_iter().map(|date| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(date))
                };
                let class = classes!(
                    "date-chip",
                    (date == props.selected_date).then_some("selected"),
                    (date == props.today).then_some("today"),
                );

                html! {
                    <button type="button" key={date.to_string()} {class} {onclick}>
                        <span class="date-chip-day">{ weekday_label(date) }</span>
                        <span class="date-chip-number">{ date.day() }</span>
                        if props.planned.contains(&date) {
                            <span class="date-chip-dot"></span>
                        }
                    </button>
                }
            }) }
        </div>
    }
}
