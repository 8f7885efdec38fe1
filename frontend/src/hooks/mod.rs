pub mod use_journal;
pub mod use_planner;
