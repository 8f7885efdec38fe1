use shared::{Mood, NewJournalEntry};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AddJournalEntryModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_add: Callback<NewJournalEntry>,
}

#[function_component(AddJournalEntryModal)]
pub fn add_journal_entry_modal(props: &AddJournalEntryModalProps) -> Html {
    let form = use_state(NewJournalEntry::default);
    let tag_input = use_state(String::new);
    let error_message = use_state(|| Option::<String>::None);

    let on_title_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(NewJournalEntry { title: input.value(), ..(*form).clone() });
        })
    };

    let on_content_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(NewJournalEntry { content: textarea.value(), ..(*form).clone() });
        })
    };

    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            tag_input.set(input.value());
        })
    };

    let add_tag = {
        let form = form.clone();
        let tag_input = tag_input.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            if next.add_tag(&tag_input) {
                form.set(next);
            }
            tag_input.set(String::new());
        })
    };

    let on_tag_keydown = {
        let add_tag = add_tag.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add_tag.emit(());
            }
        })
    };

    let on_add_tag_click = {
        let add_tag = add_tag.clone();
        Callback::from(move |_: MouseEvent| add_tag.emit(()))
    };

    let close = {
        let form = form.clone();
        let tag_input = tag_input.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.set(NewJournalEntry::default());
            tag_input.set(String::new());
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
            match form.validate(chrono::Utc::now()) {
                Ok(_) => {
                    on_add.emit((*form).clone());
                    close.emit(());
                }
                Err(e) => {
                    Logger::debug_with_component("journal-modal", &format!("Rejected journal form: {}", e));
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

    let on_cancel_click = Callback::from(move |_: MouseEvent| close.emit(()));

    if !props.is_open {
        return html! {};
    }

    let mood_buttons = Mood::ALL.into_iter().map(|mood| {
        let onclick = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| form.set(NewJournalEntry { mood, ..(*form).clone() }))
        };
        html! {
            <button
                type="button"
                key={mood.label()}
                class={classes!("mood-option", (form.mood == mood).then_some("selected"))}
                {onclick}
            >
                { mood.to_string() }
            </button>
        }
    });

    let tag_chips = form.tags.iter().map(|tag| {
        let onclick = {
            let form = form.clone();
            let tag = tag.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*form).clone();
                next.remove_tag(&tag);
                form.set(next);
            })
        };
        html! {
            <span class="tag-chip" key={tag.clone()}>
                { format!("#{}", tag) }
                <button type="button" class="tag-remove" title="Remove tag" {onclick}>{"×"}</button>
            </span>
        }
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal modal-wide" onclick={on_modal_click}>
                <form onsubmit={on_submit}>
                    <h3 class="modal-title">{"Add New Journal Entry"}</h3>

                    <div class="form-field">
                        <label for="entry-title">{"Title"}</label>
                        <input
                            id="entry-title"
                            type="text"
                            placeholder="Enter entry title"
                            value={form.title.clone()}
                            oninput={on_title_change}
                        />
                    </div>

                    <div class="form-field">
                        <label for="entry-content">{"Content"}</label>
                        <textarea
                            id="entry-content"
                            rows="5"
                            placeholder="Write your thoughts..."
                            value={form.content.clone()}
                            oninput={on_content_change}
                        />
                    </div>

                    <div class="form-field">
                        <label>{"Mood"}</label>
                        <div class="mood-picker">{ for mood_buttons }</div>
                    </div>

                    <div class="form-field">
                        <label for="entry-tag">{"Tags"}</label>
                        <div class="tag-input">
                            <input
                                id="entry-tag"
                                type="text"
                                placeholder="Add tags..."
                                value={(*tag_input).clone()}
                                oninput={on_tag_input}
                                onkeydown={on_tag_keydown}
                            />
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled={tag_input.trim().is_empty()}
                                onclick={on_add_tag_click}
                            >
                                {"Add"}
                            </button>
                        </div>
                        <div class="tag-list">{ for tag_chips }</div>
                    </div>

                    if let Some(message) = &*error_message {
                        <div class="form-error">{ message }</div>
                    }

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={form.title.trim().is_empty() || form.content.trim().is_empty()}
                        >
                            {"Add Entry"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
