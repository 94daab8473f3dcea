pub mod output;
pub mod writers;

use crate::core::{Error, Project, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("Failed to create directory", path, e))?;
    }
    Ok(())
}

/// Load a project snapshot from a JSON file.
pub fn load_project(path: &Path) -> Result<Project> {
    let contents = read_file(path)?;
    let project = serde_json::from_str(&contents)?;
    log::debug!("Loaded project snapshot from {}", path.display());
    Ok(project)
}

/// Write a project snapshot as pretty JSON.
pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(project)?;
    write_file(path, &json)
}
