use chrono::Local;
use shared::dates::entry_date_label;
use shared::journal::preview;
use shared::{JournalBook, JournalEntry, NewJournalEntry};
use yew::prelude::*;

use super::add_journal_entry_modal::AddJournalEntryModal;

const PREVIEW_CHARS: usize = 140;

#[derive(Properties, PartialEq)]
pub struct JournalPageProps {
    pub book: JournalBook,
    pub on_add: Callback<NewJournalEntry>,
    pub on_remove: Callback<String>,
}

fn entry_date(entry: &JournalEntry) -> String {
    entry_date_label(entry.date.with_timezone(&Local).date_naive())
}

/// Journal list with a detail view and a tag filter
#[function_component(JournalPage)]
pub fn journal_page(props: &JournalPageProps) -> Html {
    let active_entry = use_state(|| Option::<String>::None);
    let tag_filter = use_state(|| Option::<String>::None);
    let creating = use_state(|| false);

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };

    let modal = html! {
        <AddJournalEntryModal
            is_open={*creating}
            on_close={close_create}
            on_add={props.on_add.clone()}
        />
    };

    // Detail view
    if let Some(entry) = active_entry.as_deref().and_then(|id| props.book.get(id)) {
        let on_back = {
            let active_entry = active_entry.clone();
            Callback::from(move |_: MouseEvent| active_entry.set(None))
        };
        let on_delete = {
            let active_entry = active_entry.clone();
            let on_remove = props.on_remove.clone();
            let id = entry.id.clone();
            Callback::from(move |_: MouseEvent| {
                on_remove.emit(id.clone());
                active_entry.set(None);
            })
        };

        return html! {
            <div class="journal-page">
                <div class="journal-toolbar">
                    <button type="button" class="btn btn-ghost" onclick={on_back}>{"‹ Back"}</button>
                    <h2>{"Journal Entry"}</h2>
                </div>
                <article class="journal-card journal-detail">
                    <div class="journal-card-header">
                        <div>
                            <h1>{ &entry.title }</h1>
                            <p class="journal-date">{ entry_date(entry) }</p>
                        </div>
                        <span class="journal-mood" title={entry.mood.label()}>{ entry.mood.emoji() }</span>
                    </div>
                    <div class="journal-content">{ &entry.content }</div>
                    if !entry.tags.is_empty() {
                        <div class="tag-list">
                            { for entry.tags.iter().map(|tag| html! {
                                <span class="tag-chip" key={tag.clone()}>{ format!("#{}", tag) }</span>
                            }) }
                        </div>
                    }
                    <div class="journal-actions">
                        <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                    </div>
                </article>
            </div>
        };
    }

    let entries: Vec<&JournalEntry> = match tag_filter.as_deref() {
        Some(tag) => props.book.with_tag(tag),
        None => props.book.all().iter().collect(),
    };

    let on_clear_filter = {
        let tag_filter = tag_filter.clone();
        Callback::from(move |_: MouseEvent| tag_filter.set(None))
    };

    let written_today: Vec<&str> = props
        .book
        .entries_on(Local::now().date_naive(), &Local)
        .into_iter()
        .map(|entry| entry.id.as_str())
        .collect();

    let cards = entries.into_iter().map(|entry| {
        let onclick = {
            let active_entry = active_entry.clone();
            let id = entry.id.clone();
            Callback::from(move |_: MouseEvent| active_entry.set(Some(id.clone())))
        };
        let tags = entry.tags.iter().map(|tag| {
            let onclick = {
                let tag_filter = tag_filter.clone();
                let tag = tag.clone();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    tag_filter.set(Some(tag.clone()));
                })
            };
            html! {
                <button type="button" class="tag-chip" key={tag.clone()} {onclick}>{ format!("#{}", tag) }</button>
            }
        });

        html! {
            <div class="journal-card" key={entry.id.clone()} {onclick}>
                <div class="journal-card-header">
                    <div>
                        <h3>{ &entry.title }</h3>
                        <p class="journal-date">{ entry_date(entry) }</p>
                    </div>
                    <span class="journal-mood" title={entry.mood.label()}>{ entry.mood.emoji() }</span>
                </div>
                if written_today.contains(&entry.id.as_str()) {
                    <span class="journal-today-badge">{"Today"}</span>
                }
                <p class="journal-preview">{ preview(&entry.content, PREVIEW_CHARS) }</p>
                <div class="tag-list">{ for tags }</div>
            </div>
        }
    });

    html! {
        <div class="journal-page">
            <div class="journal-toolbar">
                <h1>{"Journal"}</h1>
                <button type="button" class="btn btn-primary" onclick={open_create.clone()}>{"+ New Entry"}</button>
            </div>

            if let Some(tag) = &*tag_filter {
                <div class="journal-filter">
                    { format!("Showing entries tagged #{}", tag) }
                    <button type="button" class="btn btn-ghost" onclick={on_clear_filter}>{"Clear"}</button>
                </div>
            }

            if props.book.is_empty() {
                <div class="empty-state">
                    <p>{"No journal entries yet"}</p>
                    <button type="button" class="btn btn-secondary" onclick={open_create}>
                        {"Write your first entry"}
                    </button>
                </div>
            } else {
                <div class="journal-list">{ for cards }</div>
            }

            { modal }
        </div>
    }
}
