//! Report composition.
//!
//! [`compose`] turns a project snapshot into an ordered list of structured
//! sections. It produces no markup: the writers in `crate::io::writers`
//! decide how each section looks.

pub mod composer;
pub mod filename;
pub mod labels;

pub use composer::{
    compose, extract_recommendations, AnomalyEntry, Cover, CriterionRow, GroupScoreRow, Page,
    RecommendationEntry, ReportDocument, Section, SectionContent, SummaryContent,
};
pub use filename::{report_file_name, slugify};
pub use labels::{ReportLabels, BRAND};

use serde::{Deserialize, Serialize};

/// Report sections in their fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Scores,
    Criteria,
    Anomalies,
    Recommendations,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Summary,
        SectionKind::Scores,
        SectionKind::Criteria,
        SectionKind::Anomalies,
        SectionKind::Recommendations,
    ];

    /// Summary and scores share the cover page; the rest get a page each.
    pub fn on_cover(&self) -> bool {
        matches!(self, Self::Summary | Self::Scores)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Scores => "scores",
            Self::Criteria => "criteria",
            Self::Anomalies => "anomalies",
            Self::Recommendations => "recommendations",
        }
    }
}

/// Which sections the user asked for. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub summary: bool,
    pub scores: bool,
    pub criteria: bool,
    pub anomalies: bool,
    pub recommendations: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl SectionToggles {
    pub fn all() -> Self {
        Self {
            summary: true,
            scores: true,
            criteria: true,
            anomalies: true,
            recommendations: true,
        }
    }

    pub fn none() -> Self {
        Self {
            summary: false,
            scores: false,
            criteria: false,
            anomalies: false,
            recommendations: false,
        }
    }

    pub fn is_enabled(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Summary => self.summary,
            SectionKind::Scores => self.scores,
            SectionKind::Criteria => self.criteria,
            SectionKind::Anomalies => self.anomalies,
            SectionKind::Recommendations => self.recommendations,
        }
    }

    pub fn with(mut self, kind: SectionKind, enabled: bool) -> Self {
        let slot = match kind {
            SectionKind::Summary => &mut self.summary,
            SectionKind::Scores => &mut self.scores,
            SectionKind::Criteria => &mut self.criteria,
            SectionKind::Anomalies => &mut self.anomalies,
            SectionKind::Recommendations => &mut self.recommendations,
        };
        *slot = enabled;
        self
    }

    pub fn toggled(self, kind: SectionKind) -> Self {
        let enabled = self.is_enabled(kind);
        self.with(kind, !enabled)
    }
}
