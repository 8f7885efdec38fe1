//! Light/dark appearance, applied as a `dark` class on `<html>`.

use crate::services::logging::Logger;

const DARK_CLASS: &str = "dark";

pub fn prefers_dark() -> bool {
    gloo::utils::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply(dark: bool) {
    let classes = gloo::utils::document_element().class_list();
    let result = if dark {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };

    if let Err(e) = result {
        Logger::warn_with_component("theme", &format!("Failed to switch theme: {:?}", e));
    }
}
