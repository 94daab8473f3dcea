//! User preferences that survive between runs: UI theme and language.
//!
//! Nothing else is persisted. Project, model and audit data live in memory
//! only.

use crate::core::{Error, Language, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the preferences file location.
pub const PREFERENCES_ENV: &str = "BIMAUDIT_PREFERENCES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
}

/// File-backed storage for [`Preferences`].
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: PathBuf,
}

impl PreferencesFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$BIMAUDIT_PREFERENCES`, else `<config dir>/bimaudit/preferences.toml`.
    pub fn default_location() -> Option<Self> {
        if let Some(path) = std::env::var_os(PREFERENCES_ENV) {
            return Some(Self::new(PathBuf::from(path)));
        }
        dirs::config_dir().map(|dir| Self::new(dir.join("bimaudit").join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; a corrupt file is logged and ignored.
    pub fn load(&self) -> Preferences {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!(
                        "Failed to read preferences {}: {}",
                        self.path.display(),
                        e
                    );
                }
                return Preferences::default();
            }
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring invalid preferences {}: {}",
                self.path.display(),
                e
            );
            Preferences::default()
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::file_system("Failed to create preferences directory", parent, e)
            })?;
        }
        let contents = toml::to_string(preferences)?;
        fs::write(&self.path, contents)
            .map_err(|e| Error::file_system("Failed to write preferences", &self.path, e))?;
        log::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let file = PreferencesFile::new(temp.path().join("absent.toml"));
        assert_eq!(file.load(), Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let file = PreferencesFile::new(temp.path().join("nested").join("prefs.toml"));
        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::En,
        };

        file.save(&prefs).unwrap();
        assert_eq!(file.load(), prefs);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "theme = \"sepia\"").unwrap();
        assert_eq!(PreferencesFile::new(path).load(), Preferences::default());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
