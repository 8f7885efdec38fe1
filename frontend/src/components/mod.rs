pub mod add_goal_modal;
pub mod add_item_button;
pub mod add_journal_entry_modal;
pub mod add_todo_modal;
pub mod date_selector;
pub mod goal_item;
pub mod header;
pub mod journal_page;
pub mod progress_control;
pub mod tab_navigation;
pub mod todo_item;
pub mod toast;
