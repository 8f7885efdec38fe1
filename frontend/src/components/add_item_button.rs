use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddItemButtonProps {
    pub label: AttrValue,
    pub on_click: Callback<()>,
}

/// Floating "+" button in the corner of the list views
#[function_component(AddItemButton)]
pub fn add_item_button(props: &AddItemButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <button type="button" class="add-item-button" title={props.label.clone()} {onclick}>{"+"}</button>
    }
}
