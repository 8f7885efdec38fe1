//! Date and header text helpers shared by the header, week strip and journal.

use crate::planner::ItemKind;
use chrono::{Datelike, Duration, NaiveDate};

/// The Monday-to-Sunday week containing `date`
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// Short upper-case weekday, e.g. "MON"
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// Greeting for the given hour of the day (0-23)
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Header summary of what is left, e.g. "You have 1 task left."
pub fn status_line(kind: ItemKind, remaining: usize) -> String {
    match remaining {
        0 => format!("All {} completed!", kind.plural()),
        1 => format!("You have 1 {} left.", kind.singular()),
        n => format!("You have {} {} left.", n, kind.plural()),
    }
}

/// Date split the way the header shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongDate {
    pub weekday: String,
    pub month_day: String,
    pub year: String,
}

pub fn long_date(date: NaiveDate) -> LongDate {
    LongDate {
        weekday: date.format("%A").to_string(),
        month_day: date.format("%B %-d").to_string(),
        year: date.format("%Y").to_string(),
    }
}

/// Journal card date, e.g. "Monday, June 2, 2025"
pub fn entry_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_of_starts_on_monday() {
        // Wednesday 2025-06-04
        let week = week_of(ymd(2025, 6, 4));
        assert_eq!(week[0], ymd(2025, 6, 2));
        assert_eq!(week[6], ymd(2025, 6, 8));

        // Sunday belongs to the week that started the previous Monday
        assert_eq!(week_of(ymd(2025, 6, 8))[0], ymd(2025, 6, 2));
        // Weeks may straddle a month boundary
        assert_eq!(week_of(ymd(2025, 6, 1))[0], ymd(2025, 5, 26));
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(ymd(2025, 6, 2)), "MON");
        assert_eq!(weekday_label(ymd(2025, 6, 8)), "SUN");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn test_status_line_pluralization() {
        assert_eq!(status_line(ItemKind::Task, 0), "All tasks completed!");
        assert_eq!(status_line(ItemKind::Task, 1), "You have 1 task left.");
        assert_eq!(status_line(ItemKind::Goal, 3), "You have 3 goals left.");
    }

    #[test]
    fn test_long_date() {
        let parts = long_date(ymd(2025, 6, 2));
        assert_eq!(parts.weekday, "Monday");
        assert_eq!(parts.month_day, "June 2");
        assert_eq!(parts.year, "2025");
        assert_eq!(entry_date_label(ymd(2025, 6, 2)), "Monday, June 2, 2025");
    }
}
