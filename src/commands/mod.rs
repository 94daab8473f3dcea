//! CLI command implementations.
//!
//! Each submodule backs one subcommand. Commands load a project store,
//! apply a single operation and print or save the result.
//!
//! Available commands:
//! - **score**: global and per-group audit scores
//! - **report**: compose and render the audit report
//! - **set-status**: change one criterion's status
//! - **upload**: validate and ingest model files
//! - **prefs**: show or change the saved theme and language
//! - **init**: write a default `.bimaudit.toml`

pub mod init;
pub mod prefs;
pub mod report;
pub mod score;
pub mod status;
pub mod upload;

pub use init::init_config;
pub use prefs::{handle_prefs, PrefsConfig};
pub use report::{handle_report, ReportConfig};
pub use score::{handle_score, ScoreConfig, ScoreOutput};
pub use status::{handle_set_status, SetStatusConfig};
pub use upload::{handle_upload, UploadConfig};

use crate::config::{Preferences, PreferencesFile};
use crate::core::Project;
use crate::io;
use crate::store::AppStore;
use anyhow::{Context, Result};
use std::path::Path;

/// Saved preferences, or the defaults when no location is available.
pub fn load_preferences() -> Preferences {
    PreferencesFile::default_location()
        .map(|file| file.load())
        .unwrap_or_default()
}

/// A store holding the snapshot at `project`, or the demo project.
pub fn load_store(project: Option<&Path>) -> Result<AppStore> {
    let store = match project {
        Some(path) => {
            let project = io::load_project(path)
                .with_context(|| format!("Failed to load project from {}", path.display()))?;
            AppStore::new([project])
        }
        None => AppStore::demo(),
    };
    Ok(store.with_preferences(load_preferences()))
}

pub fn current_project(store: &AppStore) -> Result<&Project> {
    store
        .current_project()
        .context("No project is selected")
}

/// Write `project` to `save` when a path was given.
pub fn save_if_requested(save: Option<&Path>, project: &Project) -> Result<()> {
    if let Some(path) = save {
        io::save_project(path, project)?;
        println!("Saved project to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::DEMO_PROJECT_ID;
    use tempfile::TempDir;

    #[test]
    fn test_load_store_defaults_to_demo() {
        let store = load_store(None).unwrap();
        assert_eq!(current_project(&store).unwrap().id, DEMO_PROJECT_ID);
    }

    #[test]
    fn test_load_store_reads_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        let project = Project::new("p-9", "Snapshot");
        io::save_project(&path, &project).unwrap();

        let store = load_store(Some(&path)).unwrap();
        assert_eq!(current_project(&store).unwrap().name, "Snapshot");
    }

    #[test]
    fn test_load_store_reports_missing_snapshot() {
        let dir = TempDir::new().unwrap();
        let err = load_store(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load project"));
    }
}
