//! Validation for the "add" forms. Each form turns raw input strings into a
//! finished domain item or a `FormError` the modal can show inline.

use crate::journal::normalize_tag;
use crate::{Goal, JournalEntry, Mood, Todo};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter a description")]
    EmptyText,
    #[error("Please enter a target greater than zero (got \"{0}\")")]
    InvalidTarget(String),
    #[error("Please provide both a title and content for your journal entry")]
    MissingJournalFields,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodo {
    pub text: String,
    /// Optional clock label, e.g. "9:00 AM"
    pub time: String,
}

impl NewTodo {
    pub fn validate(&self) -> Result<Todo, FormError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(FormError::EmptyText);
        }

        let time = self.time.trim();
        Ok(Todo {
            id: Todo::generate_id(),
            text: text.to_string(),
            is_completed: false,
            time: (!time.is_empty()).then(|| time.to_string()),
            category: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGoal {
    pub text: String,
    pub has_progress: bool,
    pub target: String,
    pub unit: String,
    pub auto_increment: bool,
}

impl NewGoal {
    pub fn validate(&self) -> Result<Goal, FormError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(FormError::EmptyText);
        }

        let mut goal = Goal {
            id: Goal::generate_id(),
            text: text.to_string(),
            is_completed: false,
            has_progress: self.has_progress,
            current: None,
            target: None,
            unit: None,
            auto_increment: false,
            category: None,
        };

        if self.has_progress {
            let raw = self.target.trim();
            let target = raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value > 0.0)
                .ok_or_else(|| FormError::InvalidTarget(raw.to_string()))?;

            let unit = self.unit.trim();
            goal.current = Some(0.0);
            goal.target = Some(target);
            goal.unit = (!unit.is_empty()).then(|| unit.to_string());
            goal.auto_increment = self.auto_increment;
        }

        Ok(goal)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
}

impl NewJournalEntry {
    /// Add a tag typed into the tag input. Returns false for blanks and duplicates.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        match normalize_tag(raw) {
            Some(tag) if !self.tags.contains(&tag) => {
                self.tags.push(tag);
                true
            }
            _ => false,
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    pub fn validate(&self, now: DateTime<Utc>) -> Result<JournalEntry, FormError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(FormError::MissingJournalFields);
        }

        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.iter().filter_map(|tag| normalize_tag(tag)) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(JournalEntry {
            id: JournalEntry::generate_id(),
            date: now,
            title: title.to_string(),
            content: content.to_string(),
            mood: self.mood,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_todo_trims_and_drops_blank_time() {
        let todo = NewTodo {
            text: "  Team meeting ".to_string(),
            time: "   ".to_string(),
        }
        .validate()
        .unwrap();

        assert_eq!(todo.text, "Team meeting");
        assert_eq!(todo.time, None);
        assert!(!todo.is_completed);
        assert!(todo.id.starts_with("todo::"));
    }

    #[test]
    fn test_new_todo_requires_text() {
        let form = NewTodo {
            text: " ".to_string(),
            time: "9:00 AM".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::EmptyText));
    }

    #[test]
    fn test_new_goal_without_progress_ignores_progress_fields() {
        let goal = NewGoal {
            text: "Complete coding challenge".to_string(),
            has_progress: false,
            target: "nonsense".to_string(),
            unit: "km".to_string(),
            auto_increment: true,
        }
        .validate()
        .unwrap();

        assert!(!goal.has_progress);
        assert_eq!(goal.target, None);
        assert_eq!(goal.unit, None);
        assert!(!goal.auto_increment);
    }

    #[test]
    fn test_new_goal_with_progress() {
        let goal = NewGoal {
            text: "Run 5 km".to_string(),
            has_progress: true,
            target: " 5 ".to_string(),
            unit: "km".to_string(),
            auto_increment: true,
        }
        .validate()
        .unwrap();

        assert_eq!(goal.current, Some(0.0));
        assert_eq!(goal.target, Some(5.0));
        assert_eq!(goal.unit.as_deref(), Some("km"));
        assert!(goal.auto_increment);
    }

    #[test]
    fn test_new_goal_rejects_bad_targets() {
        for raw in ["", "0", "-3", "abc", "NaN"] {
            let form = NewGoal {
                text: "Read".to_string(),
                has_progress: true,
                target: raw.to_string(),
                ..NewGoal::default()
            };
            assert_eq!(form.validate(), Err(FormError::InvalidTarget(raw.to_string())));
        }
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::EmptyText.to_string(), "Please enter a description");
        assert_eq!(
            FormError::InvalidTarget("x".to_string()).to_string(),
            "Please enter a target greater than zero (got \"x\")"
        );
    }

    #[test]
    fn test_journal_entry_requires_title_and_content() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0).unwrap();
        let form = NewJournalEntry {
            title: "Morning".to_string(),
            content: "  ".to_string(),
            ..NewJournalEntry::default()
        };
        assert_eq!(form.validate(now), Err(FormError::MissingJournalFields));
    }

    #[test]
    fn test_journal_entry_tags_are_normalized() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0).unwrap();
        let mut form = NewJournalEntry {
            title: "First day of journaling".to_string(),
            content: "Started a journal today.".to_string(),
            mood: Mood::Happy,
            tags: Vec::new(),
        };

        assert!(form.add_tag(" Gratitude "));
        assert!(!form.add_tag("gratitude"));
        assert!(!form.add_tag("   "));
        assert!(form.add_tag("#Focus"));
        form.remove_tag("focus");

        let entry = form.validate(now).unwrap();
        assert_eq!(entry.tags, vec!["gratitude".to_string()]);
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.date, now);
    }
}
