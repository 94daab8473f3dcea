// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod intake;
pub mod io;
pub mod report;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Anomaly, AuditCriterion, AuditStatus, BimModel, CriterionGroup, Error, FileType, Language,
    Localized, Project, Result, Severity,
};

pub use crate::scoring::{global_score, group_breakdown, group_score, Percentage, ScoreBand};

pub use crate::report::{compose, ReportDocument, SectionKind, SectionToggles};

pub use crate::intake::{validate_file_name, IntakeError, UploadSession};

pub use crate::io::output::{create_writer, OutputFormat, RenderMeta, ReportWriter};

pub use crate::store::AppStore;
