use std::rc::Rc;

use chrono::Utc;
use shared::{sample_data, JournalBook, NewJournalEntry};
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JournalState {
    pub book: JournalBook,
    /// Id of the entry saved last, used to open it after creation
    pub last_saved: Option<String>,
}

pub enum JournalAction {
    Add(NewJournalEntry),
    Remove(String),
}

impl JournalState {
    pub fn new(load_sample_data: bool) -> Self {
        if !load_sample_data {
            return Self::default();
        }
        match sample_data::sample_journal(Utc::now()) {
            Ok(entries) => Self {
                book: JournalBook::new(entries),
                last_saved: None,
            },
            Err(e) => {
                Logger::error_with_component("journal", &format!("Failed to load sample journal: {}", e));
                Self::default()
            }
        }
    }
}

impl Reducible for JournalState {
    type Action = JournalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            JournalAction::Add(form) => match next.book.add(&form, Utc::now()) {
                Ok(entry) => next.last_saved = Some(entry.id),
                Err(e) => {
                    Logger::warn_with_component("journal", &format!("Entry not saved: {}", e));
                    return self;
                }
            },
            JournalAction::Remove(id) => {
                if next.book.remove(&id).is_none() {
                    Logger::warn_with_component("journal", &format!("No journal entry '{}'", id));
                    return self;
                }
                Logger::info_with_component("journal", &format!("🗑️ Removed journal entry {}", id));
            }
        }
        Rc::new(next)
    }
}

pub struct UseJournalResult {
    pub state: UseReducerHandle<JournalState>,
    pub actions: UseJournalActions,
}

#[derive(Clone, PartialEq)]
pub struct UseJournalActions {
    pub add_entry: Callback<NewJournalEntry>,
    pub remove_entry: Callback<String>,
}

#[hook]
pub fn use_journal(load_sample_data: bool) -> UseJournalResult {
    let state = use_reducer(|| JournalState::new(load_sample_data));

    let add_entry = {
        let state = state.clone();
        Callback::from(move |form: NewJournalEntry| state.dispatch(JournalAction::Add(form)))
    };

    let remove_entry = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(JournalAction::Remove(id)))
    };

    UseJournalResult {
        state,
        actions: UseJournalActions {
            add_entry,
            remove_entry,
        },
    }
}
