use crate::forms::{FormError, NewJournalEntry};
use crate::JournalEntry;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Journal entries kept newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalBook {
    entries: Vec<JournalEntry>,
}

impl JournalBook {
    pub fn new(mut entries: Vec<JournalEntry>) -> Self {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Self { entries }
    }

    /// Validate the form and store the resulting entry
    pub fn add(&mut self, form: &NewJournalEntry, now: DateTime<Utc>) -> Result<JournalEntry, FormError> {
        let entry = form.validate(now)?;
        let position = self
            .entries
            .iter()
            .position(|existing| existing.date <= entry.date)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry.clone());
        info!("📓 Journal entry '{}' saved ({} total)", entry.title, self.entries.len());
        Ok(entry)
    }

    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<JournalEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Entries written on `date` as seen from the given time zone
    pub fn entries_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.date.with_timezone(tz).date_naive() == date)
            .collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&JournalEntry> {
        let Some(tag) = normalize_tag(tag) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| entry.tags.contains(&tag))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tags are stored trimmed, lower-case and without a leading '#'
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_start_matches('#').trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

/// First `max_chars` characters of an entry, with an ellipsis when cut
pub fn preview(content: &str, max_chars: usize) -> String {
    let content = content.trim();
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mood;
    use chrono::FixedOffset;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    fn form(title: &str) -> NewJournalEntry {
        NewJournalEntry {
            title: title.to_string(),
            content: format!("{} content", title),
            mood: Mood::Neutral,
            tags: vec!["daily".to_string()],
        }
    }

    #[test]
    fn test_entries_are_kept_newest_first() {
        let mut book = JournalBook::default();
        book.add(&form("Monday"), at(2, 9)).unwrap();
        book.add(&form("Wednesday"), at(4, 9)).unwrap();
        // Back-dated entries slot in by date
        book.add(&form("Tuesday"), at(3, 9)).unwrap();

        let titles: Vec<&str> = book.all().iter().map(|entry| entry.title.as_str()).collect();
        assert_eq!(titles, vec!["Wednesday", "Tuesday", "Monday"]);
    }

    #[test]
    fn test_invalid_form_is_not_stored() {
        let mut book = JournalBook::default();
        let result = book.add(&NewJournalEntry::default(), at(2, 9));

        assert_eq!(result, Err(FormError::MissingJournalFields));
        assert!(book.is_empty());
    }

    #[test]
    fn test_entries_on_respects_time_zone() {
        let mut book = JournalBook::default();
        // 23:00 UTC on June 2nd is already June 3rd at UTC+2
        book.add(&form("Late"), at(2, 23)).unwrap();

        let june_2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let june_3 = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(book.entries_on(june_2, &Utc).len(), 1);
        assert!(book.entries_on(june_2, &plus_two).is_empty());
        assert_eq!(book.entries_on(june_3, &plus_two).len(), 1);
    }

    #[test]
    fn test_get_and_remove() {
        let mut book = JournalBook::default();
        let entry = book.add(&form("Keep"), at(2, 9)).unwrap();

        assert_eq!(book.get(&entry.id).map(|e| e.title.as_str()), Some("Keep"));
        assert!(book.remove("entry::missing").is_none());
        assert_eq!(book.remove(&entry.id).map(|e| e.title), Some("Keep".to_string()));
        assert!(book.get(&entry.id).is_none());
    }

    #[test]
    fn test_with_tag_normalizes_query() {
        let mut book = JournalBook::default();
        book.add(&form("Tagged"), at(2, 9)).unwrap();

        assert_eq!(book.with_tag("#Daily").len(), 1);
        assert!(book.with_tag("weekly").is_empty());
        assert!(book.with_tag("  ").is_empty());
    }

    #[test]
    fn test_preview_cuts_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("Today I started a journal", 8), "Today I…");
        assert_eq!(preview("😊😊😊😊", 2), "😊😊…");
    }
}
