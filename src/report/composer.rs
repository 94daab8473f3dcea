use crate::core::{
    Anomaly, AuditCriterion, AuditStatus, CriterionGroup, Language, Project, Severity,
};
use crate::scoring::{group_breakdown, Percentage, ScoreBand};
use serde::Serialize;

use super::labels::ReportLabels;
use super::{SectionKind, SectionToggles};

/// Page 1 is always the cover.
const COVER_PAGE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cover {
    pub title: String,
    pub project_name: String,
    pub client: String,
    pub footer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryContent {
    pub global_score: Percentage,
    pub band: ScoreBand,
    pub models: usize,
    pub criteria: usize,
    pub anomalies: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupScoreRow {
    pub group: CriterionGroup,
    pub label: String,
    pub validated: usize,
    pub total: usize,
    pub score: Percentage,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionRow {
    pub id: String,
    pub name: String,
    pub group: CriterionGroup,
    pub group_label: String,
    pub status: AuditStatus,
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyEntry {
    pub id: String,
    pub model_id: String,
    pub severity: Severity,
    pub description: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub criterion_id: String,
    pub criterion: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SectionContent {
    Summary(SummaryContent),
    Scores(Vec<GroupScoreRow>),
    Criteria(Vec<CriterionRow>),
    Anomalies(Vec<AnomalyEntry>),
    Recommendations(Vec<RecommendationEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Page the section is printed on, counting only emitted pages.
    pub page: u32,
    pub title: String,
    pub content: SectionContent,
}

/// A fully composed report, ready for a document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub language: Language,
    pub cover: Cover,
    pub sections: Vec<Section>,
    pub page_count: u32,
}

/// Sections grouped by the page they land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub number: u32,
    pub sections: Vec<&'a Section>,
}

impl Page<'_> {
    pub fn is_cover(&self) -> bool {
        self.number == COVER_PAGE
    }
}

impl ReportDocument {
    pub fn labels(&self) -> &'static ReportLabels {
        ReportLabels::for_language(self.language)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Every page from the cover to the last, including a cover without
    /// sections.
    pub fn pages(&self) -> Vec<Page<'_>> {
        (COVER_PAGE..=self.page_count)
            .map(|number| Page {
                number,
                sections: self
                    .sections
                    .iter()
                    .filter(|section| section.page == number)
                    .collect(),
            })
            .collect()
    }
}

/// Compose the report for `project`.
///
/// Sections come out in the fixed order summary, scores, criteria,
/// anomalies, recommendations. Anomalies are emitted only if the project has
/// any, recommendations only if at least one applies in `language`. Page
/// numbers count emitted pages only, so a skipped page shifts every later
/// one down.
pub fn compose(
    project: &Project,
    global_score: Percentage,
    language: Language,
    toggles: SectionToggles,
) -> ReportDocument {
    let labels = ReportLabels::for_language(language);
    let recommendations = extract_recommendations(&project.audit_criteria, language);

    let candidates = SectionKind::ALL.into_iter().filter_map(|kind| {
        if !toggles.is_enabled(kind) {
            return None;
        }
        let content = match kind {
            SectionKind::Summary => SectionContent::Summary(summary(project, global_score)),
            SectionKind::Scores => SectionContent::Scores(score_rows(project, labels)),
            SectionKind::Criteria => {
                SectionContent::Criteria(criterion_rows(&project.audit_criteria, labels))
            }
            SectionKind::Anomalies if project.anomalies.is_empty() => return None,
            SectionKind::Anomalies => {
                SectionContent::Anomalies(anomaly_entries(&project.anomalies, language))
            }
            SectionKind::Recommendations if recommendations.is_empty() => return None,
            SectionKind::Recommendations => {
                SectionContent::Recommendations(recommendations.clone())
            }
        };
        Some((kind, content))
    });

    let mut page = COVER_PAGE;
    let sections: Vec<Section> = candidates
        .map(|(kind, content)| {
            if !kind.on_cover() {
                page += 1;
            }
            Section {
                kind,
                page: if kind.on_cover() { COVER_PAGE } else { page },
                title: section_title(kind, labels).to_string(),
                content,
            }
        })
        .collect();

    log::debug!(
        "Composed report for {} with {} sections over {} pages",
        project.id,
        sections.len(),
        page
    );

    ReportDocument {
        language,
        cover: Cover {
            title: labels.report_title.to_string(),
            project_name: project.name.clone(),
            client: project.client.clone(),
            footer: labels.footer(&project.client),
        },
        sections,
        page_count: page,
    }
}

/// Not-validated criteria with recommendation text in `language`, in list
/// order, as (display name, text) pairs.
pub fn extract_recommendations<'a, I>(criteria: I, language: Language) -> Vec<RecommendationEntry>
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    criteria
        .into_iter()
        .filter(|c| c.status == AuditStatus::NotValidated)
        .filter_map(|c| {
            c.recommendation(language).map(|text| RecommendationEntry {
                criterion_id: c.id.clone(),
                criterion: c.name.get(language).to_string(),
                recommendation: text.to_string(),
            })
        })
        .collect()
}

fn section_title(kind: SectionKind, labels: &ReportLabels) -> &'static str {
    match kind {
        SectionKind::Summary => labels.summary,
        SectionKind::Scores => labels.scores_by_group,
        SectionKind::Criteria => labels.detailed_criteria,
        SectionKind::Anomalies => labels.anomalies_conflicts,
        SectionKind::Recommendations => labels.ai_recommendations,
    }
}

fn summary(project: &Project, global_score: Percentage) -> SummaryContent {
    SummaryContent {
        global_score,
        band: global_score.band(),
        models: project.models.len(),
        criteria: project.audit_criteria.len(),
        anomalies: project.anomalies.len(),
    }
}

fn score_rows(project: &Project, labels: &ReportLabels) -> Vec<GroupScoreRow> {
    group_breakdown(&project.audit_criteria)
        .into_iter()
        .map(|row| GroupScoreRow {
            group: row.group,
            label: labels.group_name(row.group).to_string(),
            validated: row.validated,
            total: row.total,
            score: row.score,
            band: row.score.band(),
        })
        .collect()
}

fn criterion_rows<'a, I>(criteria: I, labels: &ReportLabels) -> Vec<CriterionRow>
where
    I: IntoIterator<Item = &'a AuditCriterion>,
{
    criteria
        .into_iter()
        .map(|c| CriterionRow {
            id: c.id.clone(),
            name: c.name.get(labels.language).to_string(),
            group: c.group,
            group_label: labels.group_name(c.group).to_string(),
            status: c.status,
            status_label: labels.status_name(c.status).to_string(),
        })
        .collect()
}

fn anomaly_entries<'a, I>(anomalies: I, language: Language) -> Vec<AnomalyEntry>
where
    I: IntoIterator<Item = &'a Anomaly>,
{
    anomalies
        .into_iter()
        .map(|a| AnomalyEntry {
            id: a.id.clone(),
            model_id: a.model_id.clone(),
            severity: a.severity,
            description: a.description.get(language).to_string(),
            location: a.location.clone(),
        })
        .collect()
}
