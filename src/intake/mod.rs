//! Model intake: file validation and the simulated upload flow.
//!
//! Only `.rvt` and `.ifc` files are accepted (any letter case). A rejected
//! file is recorded as a failed entry and never produces a model. Accepted
//! files advance by random increments on each [`UploadSession::tick`] until
//! they complete, at which point exactly one [`BimModel`] is produced.

use crate::core::{BimModel, FileType, ModelMetadata};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Largest progress step per tick, in percent.
pub const MAX_PROGRESS_STEP: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("unsupported file type for '{file_name}': only RVT and IFC files are accepted")]
    UnsupportedExtension { file_name: String },
}

/// Accept `name` iff the text after its last dot is `rvt` or `ifc`,
/// ignoring case.
pub fn validate_file_name(name: &str) -> Result<FileType, IntakeError> {
    name.rsplit_once('.')
        .and_then(|(_, ext)| FileType::from_extension(ext))
        .ok_or_else(|| IntakeError::UnsupportedExtension {
            file_name: name.to_string(),
        })
}

/// File name without its model extension.
pub fn model_name(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if FileType::from_extension(ext).is_some() => stem,
        _ => file_name,
    }
}

/// A file handed to the intake flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub name: String,
    pub size: u64,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Succeeded { model_id: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadEntry {
    pub file_name: String,
    /// Percent complete in `0.0..=100.0`
    pub progress: f64,
    pub status: UploadStatus,
    #[serde(skip)]
    size: u64,
    #[serde(skip)]
    file_type: Option<FileType>,
}

impl UploadEntry {
    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, UploadStatus::Failed { .. })
    }
}

/// Tracks a batch of uploads.
///
/// Entries are addressed by file name. Two uploads sharing a name are both
/// tracked but the caller cannot tell them apart in the listing.
#[derive(Debug, Default)]
pub struct UploadSession {
    entries: Vec<UploadEntry>,
    sequence: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn entry(&self, file_name: &str) -> Option<&UploadEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    pub fn failures(&self) -> impl Iterator<Item = &UploadEntry> {
        self.entries.iter().filter(|e| e.is_failed())
    }

    pub fn is_active(&self) -> bool {
        self.entries.iter().any(UploadEntry::is_uploading)
    }

    /// Register a file. Invalid files are recorded as failed immediately.
    pub fn submit(&mut self, file: IncomingFile) -> Result<(), IntakeError> {
        match validate_file_name(&file.name) {
            Ok(file_type) => {
                log::debug!("Accepted {} as {}", file.name, file_type);
                self.entries.push(UploadEntry {
                    file_name: file.name,
                    progress: 0.0,
                    status: UploadStatus::Uploading,
                    size: file.size,
                    file_type: Some(file_type),
                });
                Ok(())
            }
            Err(err) => {
                log::debug!("Rejected {}: {}", file.name, err);
                self.entries.push(UploadEntry {
                    file_name: file.name,
                    progress: 0.0,
                    status: UploadStatus::Failed {
                        reason: err.to_string(),
                    },
                    size: file.size,
                    file_type: None,
                });
                Err(err)
            }
        }
    }

    /// Advance every in-flight upload once; returns the models that
    /// completed on this tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<BimModel> {
        self.tick_at(rng, Utc::now())
    }

    pub fn tick_at<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) -> Vec<BimModel> {
        let mut completed = Vec::new();
        for entry in self.entries.iter_mut().filter(|e| e.is_uploading()) {
            entry.progress += rng.random_range(0.0..MAX_PROGRESS_STEP);
            if entry.progress < 100.0 {
                continue;
            }
            entry.progress = 100.0;

            let Some(file_type) = entry.file_type else {
                continue;
            };
            self.sequence += 1;
            let model = BimModel {
                id: format!("model-{}-{}", now.timestamp_millis(), self.sequence),
                name: model_name(&entry.file_name).to_string(),
                file_name: entry.file_name.clone(),
                file_type,
                size: entry.size,
                uploaded_at: now,
                metadata: ModelMetadata::default(),
                audit_score: None,
            };
            entry.status = UploadStatus::Succeeded {
                model_id: model.id.clone(),
            };
            completed.push(model);
        }
        completed
    }

    /// Tick until nothing is uploading; returns every model produced.
    pub fn run_to_completion<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<BimModel> {
        let mut models = Vec::new();
        while self.is_active() {
            models.extend(self.tick(rng));
        }
        models
    }

    /// Drop succeeded entries, keeping failures and in-flight uploads.
    pub fn clear_finished(&mut self) {
        self.entries
            .retain(|e| !matches!(e.status, UploadStatus::Succeeded { .. }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_validate_file_name() {
        assert_eq!(validate_file_name("a.rvt"), Ok(FileType::Rvt));
        assert_eq!(validate_file_name("A.IFC"), Ok(FileType::Ifc));
        assert_eq!(validate_file_name("plan.Rvt"), Ok(FileType::Rvt));
        assert!(validate_file_name("model.txt").is_err());
        assert!(validate_file_name("rvt").is_err());
        assert!(validate_file_name("model.rvt.bak").is_err());
    }

    #[test]
    fn test_bare_extension_is_accepted() {
        assert_eq!(validate_file_name(".rvt"), Ok(FileType::Rvt));
        assert_eq!(validate_file_name(".IFC"), Ok(FileType::Ifc));
        assert!(validate_file_name(".txt").is_err());
    }

    #[test]
    fn test_model_name_strips_extension() {
        assert_eq!(model_name("Hall.RVT"), "Hall");
        assert_eq!(model_name("v1.2.ifc"), "v1.2");
        assert_eq!(model_name("notes"), "notes");
    }

    #[test]
    fn test_progress_never_exceeds_100() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = UploadSession::new();
        session.submit(IncomingFile::new("a.ifc", 10)).unwrap();

        while session.is_active() {
            session.tick(&mut rng);
            let progress = session.entry("a.ifc").unwrap().progress;
            assert!((0.0..=100.0).contains(&progress));
        }
        assert_eq!(session.entry("a.ifc").unwrap().progress, 100.0);
    }

    #[test]
    fn test_clear_finished_keeps_failures() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = UploadSession::new();
        session.submit(IncomingFile::new("ok.rvt", 1)).unwrap();
        let _ = session.submit(IncomingFile::new("bad.dwg", 1));
        session.run_to_completion(&mut rng);

        session.clear_finished();
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].file_name, "bad.dwg");
    }
}
