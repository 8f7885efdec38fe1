//! Built-in sample day used to seed a fresh planner.

use crate::{DailyData, Goal, JournalEntry, Mood, Todo};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

const SAMPLE_JSON: &str = include_str!("sample_data.json");

#[derive(Debug, Deserialize)]
struct SampleBundle {
    todos: Vec<Todo>,
    goals: Vec<Goal>,
    journal: Vec<SampleEntry>,
}

#[derive(Debug, Deserialize)]
struct SampleEntry {
    title: String,
    content: String,
    #[serde(default)]
    mood: Mood,
    #[serde(default)]
    tags: Vec<String>,
}

fn bundle() -> Result<SampleBundle, serde_json::Error> {
    serde_json::from_str(SAMPLE_JSON)
}

/// The sample to-dos and goals, placed on `date`
pub fn sample_day(date: NaiveDate) -> Result<DailyData, serde_json::Error> {
    let bundle = bundle()?;
    Ok(DailyData {
        date,
        todos: bundle.todos,
        goals: bundle.goals,
    })
}

/// The sample journal entries, stamped with `now`
pub fn sample_journal(now: DateTime<Utc>) -> Result<Vec<JournalEntry>, serde_json::Error> {
    let entries = bundle()?
        .journal
        .into_iter()
        .map(|entry| JournalEntry {
            id: JournalEntry::generate_id(),
            date: now,
            title: entry.title,
            content: entry.content,
            mood: entry.mood,
            tags: entry.tags,
        })
        .collect();
    Ok(entries)
}
