use anyhow::{Context, Result};
use shared::AppConfig;

/// Id of the `<script type="application/json">` element holding the settings
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Settings embedded in the page, or defaults plus the reason they were not usable
pub fn load_app_config() -> (AppConfig, Option<anyhow::Error>) {
    match read_page_config() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

fn read_page_config() -> Result<Option<AppConfig>> {
    let document = gloo::utils::document();
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let config = AppConfig::from_json(&raw)
        .with_context(|| format!("#{} does not hold valid settings", CONFIG_ELEMENT_ID))?;
    Ok(Some(config))
}
