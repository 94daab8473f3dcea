use crate::commands::{current_project, load_store, save_if_requested};
use crate::core::{AuditStatus, Error, Project};
use crate::report::ReportLabels;
use crate::scoring::global_score;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SetStatusConfig {
    pub project: Option<PathBuf>,
    pub criterion: String,
    pub status: AuditStatus,
    pub save: Option<PathBuf>,
}

/// Lookup failures list the criterion ids the project does have.
fn with_known_ids(err: Error, project: &Project) -> anyhow::Error {
    if !err.is_not_found() {
        return err.into();
    }
    let known: Vec<&str> = project
        .audit_criteria
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    anyhow::anyhow!("{err}. Known criteria: {}", known.join(", "))
}

pub fn handle_set_status(config: SetStatusConfig) -> Result<()> {
    let mut store = load_store(config.project.as_deref())?;
    let snapshot = current_project(&store)?.clone();
    let before = store.global_score(&snapshot.id)?;
    let labels = ReportLabels::for_language(store.preferences().language);

    let project = store
        .update_criterion_status(&snapshot.id, &config.criterion, config.status)
        .map_err(|err| with_known_ids(err, &snapshot))?;
    let after = global_score(&project.audit_criteria);

    println!(
        "{} -> {}",
        config.criterion,
        labels.status_name(config.status)
    );
    println!("{}: {} -> {}", labels.global_score, before, after);

    save_if_requested(config.save.as_deref(), project)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::demo_project;

    #[test]
    fn test_unknown_criterion_lists_known_ids() {
        let project = demo_project();
        let err = Error::UnknownCriterion {
            project_id: project.id.clone(),
            criterion_id: "zz".into(),
        };
        let message = with_known_ids(err, &project).to_string();
        assert!(message.contains("Unknown criterion 'zz'"));
        assert!(message.contains("Known criteria: d1, d2, d3"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let project = demo_project();
        let message = with_known_ids(Error::Render("boom".into()), &project).to_string();
        assert_eq!(message, "Render error: boom");
    }
}
