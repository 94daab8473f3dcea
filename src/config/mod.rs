mod core;
mod loader;
pub mod preferences;

pub use core::{BimAuditConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
pub use preferences::{Preferences, PreferencesFile, Theme, PREFERENCES_ENV};
