use crate::config::{PreferencesFile, Theme};
use crate::core::{Error, Language};
use crate::store::AppStore;
use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct PrefsConfig {
    pub theme: Option<Theme>,
    pub toggle_theme: bool,
    pub language: Option<Language>,
}

impl PrefsConfig {
    fn changes_anything(&self) -> bool {
        self.theme.is_some() || self.toggle_theme || self.language.is_some()
    }
}

pub fn handle_prefs(config: PrefsConfig) -> Result<()> {
    let file = PreferencesFile::default_location().ok_or_else(|| {
        Error::Configuration("no configuration directory available for preferences".to_string())
    })?;
    apply_prefs(&file, &config)
}

/// Apply `config` to the preferences stored in `file` and print the result.
pub fn apply_prefs(file: &PreferencesFile, config: &PrefsConfig) -> Result<()> {
    let mut store = AppStore::default().with_preferences(file.load());

    if let Some(theme) = config.theme {
        store.set_theme(theme);
    }
    if config.toggle_theme {
        store.toggle_theme();
    }
    if let Some(language) = config.language {
        store.set_language(language);
    }

    let preferences = store.preferences();
    if config.changes_anything() {
        file.save(preferences)?;
    }
    println!("theme = {}", preferences.theme.as_str());
    println!("language = {}", preferences.language);
    Ok(())
}
