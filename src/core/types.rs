//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state outcome of a single audit criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditStatus {
    Validated,
    NotValidated,
    #[default]
    NotChecked,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 3] = [
        AuditStatus::Validated,
        AuditStatus::NotValidated,
        AuditStatus::NotChecked,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "validated" => Some(Self::Validated),
            "not-validated" => Some(Self::NotValidated),
            "not-checked" => Some(Self::NotChecked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validated => "validated",
            Self::NotValidated => "not-validated",
            Self::NotChecked => "not-checked",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five fixed audit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionGroup {
    Diffusion,
    Codification,
    References,
    Modeling,
    Information,
}

impl CriterionGroup {
    /// Canonical display order.
    pub const ALL: [CriterionGroup; 5] = [
        CriterionGroup::Diffusion,
        CriterionGroup::Codification,
        CriterionGroup::References,
        CriterionGroup::Modeling,
        CriterionGroup::Information,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diffusion => "diffusion",
            Self::Codification => "codification",
            Self::References => "references",
            Self::Modeling => "modeling",
            Self::Information => "information",
        }
    }
}

impl fmt::Display for CriterionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted model file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Rvt,
    Ifc,
}

impl FileType {
    /// Match a bare extension (no dot), ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("rvt") {
            Some(Self::Rvt)
        } else if ext.eq_ignore_ascii_case("ifc") {
            Some(Self::Ifc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rvt => "RVT",
            Self::Ifc => "IFC",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity levels for anomalies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Optional descriptive fields attached to an uploaded model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}
