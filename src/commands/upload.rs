use crate::commands::{current_project, load_store, save_if_requested};
use crate::intake::{IncomingFile, UploadSession, UploadStatus};
use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

const TEMPLATE_UPLOAD: &str = "{msg:30} [{bar:30}] {pos:>3}%";
const TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub files: Vec<PathBuf>,
    pub project: Option<PathBuf>,
    pub save: Option<PathBuf>,
    /// Fixed seed for reproducible progress
    pub seed: Option<u64>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn incoming_file(path: &Path) -> Result<IncomingFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    Ok(IncomingFile::new(file_name(path), metadata.len()))
}

fn progress_bar(multi: &MultiProgress, name: &str, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = multi.add(ProgressBar::new(100));
    if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE_UPLOAD) {
        bar.set_style(style.progress_chars("█▓░"));
    }
    bar.set_message(name.to_string());
    bar
}

pub fn handle_upload(config: UploadConfig) -> Result<()> {
    let mut store = load_store(config.project.as_deref())?;
    let project_id = current_project(&store)?.id.clone();

    let mut session = UploadSession::new();
    for path in &config.files {
        if let Err(err) = session.submit(incoming_file(path)?) {
            log::warn!("{err}");
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let show = std::io::stderr().is_terminal();
    let multi = MultiProgress::new();
    let bars: HashMap<String, ProgressBar> = session
        .entries()
        .iter()
        .filter(|entry| entry.is_uploading())
        .map(|entry| {
            let name = entry.file_name.clone();
            let bar = progress_bar(&multi, &name, show);
            (name, bar)
        })
        .collect();

    let mut models = Vec::new();
    while session.is_active() {
        models.extend(session.tick(&mut rng));
        for entry in session.entries() {
            if let Some(bar) = bars.get(&entry.file_name) {
                bar.set_position(entry.progress.floor() as u64);
                if !entry.is_uploading() {
                    bar.finish();
                }
            }
        }
        if show && session.is_active() {
            thread::sleep(TICK_INTERVAL);
        }
    }

    for model in models {
        println!("Added {} ({}, {} bytes)", model.name, model.file_type, model.size);
        store.add_model(&project_id, model)?;
    }
    for entry in session.entries() {
        if let UploadStatus::Failed { reason } = &entry.status {
            println!("Failed {}: {}", entry.file_name, reason);
        }
    }
    session.clear_finished();

    let project = store.project(&project_id)?;
    println!("{} models in {}", project.models.len(), project.name);
    save_if_requested(config.save.as_deref(), project)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FileType, Project};
    use crate::io;
    use tempfile::TempDir;

    #[test]
    fn test_upload_adds_only_supported_files() {
        let dir = TempDir::new().unwrap();
        let rvt = dir.path().join("tower.RVT");
        let txt = dir.path().join("notes.txt");
        std::fs::write(&rvt, b"model").unwrap();
        std::fs::write(&txt, b"notes").unwrap();

        let snapshot = dir.path().join("project.json");
        io::save_project(&snapshot, &Project::new("p-1", "Tower")).unwrap();
        let saved = dir.path().join("saved.json");

        handle_upload(UploadConfig {
            files: vec![rvt, txt],
            project: Some(snapshot),
            save: Some(saved.clone()),
            seed: Some(7),
        })
        .unwrap();

        let project = io::load_project(&saved).unwrap();
        assert_eq!(project.models.len(), 1);
        let model = &project.models[0];
        assert_eq!(model.name, "tower");
        assert_eq!(model.file_type, FileType::Rvt);
        assert_eq!(model.size, 5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = handle_upload(UploadConfig {
            files: vec![dir.path().join("ghost.ifc")],
            project: None,
            save: None,
            seed: Some(1),
        });
        assert!(result.is_err());
    }
}
