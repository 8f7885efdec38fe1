use yew::prelude::*;

/// Top-level views of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Tasks,
    Goals,
    Journal,
}

impl View {
    pub const ALL: [View; 3] = [View::Tasks, View::Goals, View::Journal];

    pub fn label(&self) -> &'static str {
        match self {
            View::Tasks => "Tasks",
            View::Goals => "Goals",
            View::Journal => "Journal",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabNavigationProps {
    pub active: View,
    pub on_change: Callback<View>,
}

#[function_component(TabNavigation)]
pub fn tab_navigation(props: &TabNavigationProps) -> Html {
    html! {
        <nav class="tab-navigation">
            { for View::ALL.into_iter().map(|view| {
                let onclick = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| on_change.emit(view))
                };
                html! {
                    <button
                        type="button"
                        key={view.label()}
                        class={classes!("tab", (view == props.active).then_some("active"))}
                        {onclick}
                    >
                        { view.label() }
                    </button>
                }
            }) }
        </nav>
    }
}
