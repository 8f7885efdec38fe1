//! Keyword heuristics that pick icons, colours and units from free text.
//! First match wins, so the order of the tables matters.

/// Icon shown next to a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoIcon {
    Sun,
    Workout,
    Study,
    Meal,
    Journal,
    Plan,
    Create,
    List,
}

impl TodoIcon {
    pub fn emoji(&self) -> &'static str {
        match self {
            TodoIcon::Sun => "☀️",
            TodoIcon::Workout => "🏋️",
            TodoIcon::Study => "📘",
            TodoIcon::Meal => "🍽️",
            TodoIcon::Journal => "📖",
            TodoIcon::Plan => "📋",
            TodoIcon::Create => "⚡",
            TodoIcon::List => "📝",
        }
    }

    /// CSS modifier class used for the icon tint
    pub fn css_class(&self) -> &'static str {
        match self {
            TodoIcon::Sun => "icon-orange",
            TodoIcon::Workout => "icon-purple",
            TodoIcon::Study => "icon-blue",
            TodoIcon::Meal => "icon-orange-light",
            TodoIcon::Journal => "icon-purple",
            TodoIcon::Plan => "icon-blue-light",
            TodoIcon::Create => "icon-pink",
            TodoIcon::List => "icon-muted",
        }
    }
}

const TODO_ICONS: &[(&[&str], TodoIcon)] = &[
    (&["wake up", "morning"], TodoIcon::Sun),
    (&["exercise", "workout"], TodoIcon::Workout),
    (&["nlp", "study"], TodoIcon::Study),
    (&["cook", "meal"], TodoIcon::Meal),
    (&["journal", "write"], TodoIcon::Journal),
    (&["plan", "prioritize"], TodoIcon::Plan),
    (&["create", "work on"], TodoIcon::Create),
];

pub const DEFAULT_GOAL_COLOR: &str = "#9b87f5";

const GOAL_COLORS: &[(&[&str], &str)] = &[
    (&["run", "walk", "steps"], "#34C759"),
    (&["read", "book"], "#FF9F0A"),
    (&["meditate", "mindful"], "#BF5AF2"),
    (&["water", "drink"], "#64D2FF"),
    (&["study", "learn"], "#0A84FF"),
    (&["weight", "gym", "workout"], "#FF453A"),
    (&["code", "develop", "deep", "work"], "#1d2f6f"),
    (&["nlp"], "#42D6BA"),
];

pub const DEFAULT_UNIT: &str = "unit";

const UNITS: &[(&[&str], &str)] = &[
    (&["km", "kilometer"], "km"),
    (&["miles", "mile"], "mile"),
    (&["steps"], "steps"),
    (&["chapter"], "chapter"),
    (&["page"], "pages"),
    (&["minute", "min"], "min"),
    (&["hour", "hr"], "hr"),
    (&["glass", "liter", "litre"], "glass"),
    (&["session"], "sessions"),
    (&["task"], "tasks"),
];

fn lookup<T: Copy>(text: &str, table: &[(&[&str], T)]) -> Option<T> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, value)| *value)
}

pub fn todo_icon(text: &str) -> TodoIcon {
    lookup(text, TODO_ICONS).unwrap_or(TodoIcon::List)
}

/// Accent colour of a goal's progress bar
pub fn goal_color(text: &str) -> &'static str {
    lookup(text, GOAL_COLORS).unwrap_or(DEFAULT_GOAL_COLOR)
}

/// An explicit (non-blank) unit wins; otherwise guess one from the goal text
pub fn infer_unit(text: &str, explicit: Option<&str>) -> String {
    if let Some(unit) = explicit.map(str::trim).filter(|unit| !unit.is_empty()) {
        return unit.to_string();
    }
    lookup(text, UNITS).unwrap_or(DEFAULT_UNIT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_icons() {
        assert_eq!(todo_icon("Plan day & Prioritize tasks"), TodoIcon::Plan);
        assert_eq!(todo_icon("Morning workout"), TodoIcon::Sun);
        assert_eq!(todo_icon("Study NLP concepts"), TodoIcon::Study);
        assert_eq!(todo_icon("Write daily journal"), TodoIcon::Journal);
        assert_eq!(todo_icon("Cook dinner"), TodoIcon::Meal);
        assert_eq!(todo_icon("Work on side project"), TodoIcon::Create);
        assert_eq!(todo_icon("Team meeting"), TodoIcon::List);
    }

    #[test]
    fn test_goal_colors() {
        assert_eq!(goal_color("Run 5 km"), "#34C759");
        assert_eq!(goal_color("Read 30 pages"), "#FF9F0A");
        assert_eq!(goal_color("Meditate 15 min daily"), "#BF5AF2");
        assert_eq!(goal_color("Drink 8 glasses of water"), "#64D2FF");
        assert_eq!(goal_color("Deep work block"), "#1d2f6f");
        assert_eq!(goal_color("Complete coding challenge"), DEFAULT_GOAL_COLOR);
        assert_eq!(goal_color("Call grandma"), DEFAULT_GOAL_COLOR);
    }

    #[test]
    fn test_infer_unit() {
        assert_eq!(infer_unit("Run 5 km", None), "km");
        assert_eq!(infer_unit("Read 30 pages", None), "pages");
        assert_eq!(infer_unit("Walk two miles", None), "mile");
        assert_eq!(infer_unit("Drink 8 glasses of water", None), "glass");
        assert_eq!(infer_unit("Call grandma", None), DEFAULT_UNIT);
    }

    #[test]
    fn test_explicit_unit_wins_unless_blank() {
        assert_eq!(infer_unit("Run 5 km", Some("dots")), "dots");
        assert_eq!(infer_unit("Run 5 km", Some("  ")), "km");
    }
}
