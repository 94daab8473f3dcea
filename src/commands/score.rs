use crate::commands::{current_project, load_store};
use crate::core::CriterionGroup;
use crate::core::Severity;
use crate::formatting::{paint_band, paint_severity, FormattingConfig};
use crate::report::ReportLabels;
use crate::scoring::{
    global_score, group_breakdown, group_score, AuditProgress, GroupScore, Percentage,
    SeverityCounts,
};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutput {
    Terminal,
    Json,
}

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub project: Option<PathBuf>,
    pub group: Option<CriterionGroup>,
    pub output: ScoreOutput,
    pub formatting: FormattingConfig,
}

#[derive(Debug, Serialize)]
struct ScoreSummary {
    project_id: String,
    global_score: Percentage,
    progress: AuditProgress,
    groups: Vec<GroupScore>,
    anomalies: SeverityCounts,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let store = load_store(config.project.as_deref())?;
    let project = current_project(&store)?;
    let language = store.preferences().language;
    let labels = ReportLabels::for_language(language);

    if let Some(group) = config.group {
        let score = group_score(&project.audit_criteria, group);
        match config.output {
            ScoreOutput::Json => println!(
                "{}",
                serde_json::json!({ "group": group, "score": score })
            ),
            ScoreOutput::Terminal => {
                config.formatting.apply();
                println!(
                    "{}: {}",
                    labels.group_name(group),
                    paint_band(&score.to_string(), score.band())
                );
            }
        }
        return Ok(());
    }

    let summary = ScoreSummary {
        project_id: project.id.clone(),
        global_score: global_score(&project.audit_criteria),
        progress: AuditProgress::from_criteria(&project.audit_criteria),
        groups: group_breakdown(&project.audit_criteria),
        anomalies: SeverityCounts::from_anomalies(&project.anomalies),
    };

    match config.output {
        ScoreOutput::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        ScoreOutput::Terminal => {
            config.formatting.apply();
            println!("{}", project.name);
            println!(
                "{}: {}",
                labels.global_score,
                paint_band(&summary.global_score.to_string(), summary.global_score.band())
            );
            for row in &summary.groups {
                println!(
                    "  {:<16} {:>5}  ({}/{})",
                    labels.group_name(row.group),
                    paint_band(&row.score.to_string(), row.score.band()),
                    row.validated,
                    row.total
                );
            }
            if let Some(highest) = summary.anomalies.highest() {
                let counts: Vec<String> = Severity::ALL
                    .into_iter()
                    .rev()
                    .filter(|severity| summary.anomalies.get(*severity) > 0)
                    .map(|severity| {
                        let tag = format!("{} {}", summary.anomalies.get(severity), severity);
                        paint_severity(&tag, severity).to_string()
                    })
                    .collect();
                println!(
                    "{}: {} ({})",
                    labels.anomalies,
                    counts.join(", "),
                    paint_severity(highest.as_str(), highest)
                );
            }
        }
    }
    Ok(())
}
