//! Application state container.
//!
//! `AppStore` holds every project plus the current selection and the user
//! preferences. Project updates go through the pure `Project::with_*`
//! methods and the resulting value replaces the stored one, so a `Project`
//! clone taken before a mutation never observes it.

pub mod fixtures;

use crate::config::{Preferences, Theme};
use crate::core::{
    Anomaly, AuditStatus, BimModel, CriterionGroup, Error, Language, Project, Result,
};
use crate::scoring::{self, Percentage};
use im::Vector;

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    projects: Vector<Project>,
    current_project_id: Option<String>,
    preferences: Preferences,
}

impl AppStore {
    /// The first project, if any, becomes current.
    pub fn new(projects: impl IntoIterator<Item = Project>) -> Self {
        let projects: Vector<Project> = projects.into_iter().collect();
        let current_project_id = projects.front().map(|p| p.id.clone());
        Self {
            projects,
            current_project_id,
            preferences: Preferences::default(),
        }
    }

    /// Store seeded with the built-in demonstration project.
    pub fn demo() -> Self {
        Self::new([fixtures::demo_project()])
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn projects(&self) -> &Vector<Project> {
        &self.projects
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.preferences.theme = self.preferences.theme.toggled();
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.language = language;
    }

    pub fn current_project_id(&self) -> Option<&str> {
        self.current_project_id.as_deref()
    }

    /// Select the current project; `None` clears the selection.
    pub fn set_current_project(&mut self, project_id: Option<&str>) -> Result<()> {
        if let Some(id) = project_id {
            self.position(id)?;
        }
        self.current_project_id = project_id.map(str::to_string);
        Ok(())
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id
            .as_deref()
            .and_then(|id| self.project(id).ok())
    }

    pub fn project(&self, project_id: &str) -> Result<&Project> {
        self.position(project_id).map(|index| &self.projects[index])
    }

    /// Insert a project, replacing any stored project with the same id.
    pub fn upsert_project(&mut self, project: Project) {
        match self.position(&project.id) {
            Ok(index) => {
                self.projects.set(index, project);
            }
            Err(_) => {
                if self.current_project_id.is_none() {
                    self.current_project_id = Some(project.id.clone());
                }
                self.projects.push_back(project);
            }
        }
    }

    pub fn add_model(&mut self, project_id: &str, model: BimModel) -> Result<&Project> {
        log::debug!("Adding model {} to project {}", model.id, project_id);
        self.replace(project_id, |project| Ok(project.with_model(model)))
    }

    pub fn remove_model(&mut self, project_id: &str, model_id: &str) -> Result<&Project> {
        log::debug!("Removing model {} from project {}", model_id, project_id);
        self.replace(project_id, |project| project.without_model(model_id))
    }

    pub fn update_criterion_status(
        &mut self,
        project_id: &str,
        criterion_id: &str,
        status: AuditStatus,
    ) -> Result<&Project> {
        log::debug!(
            "Setting criterion {} of project {} to {}",
            criterion_id,
            project_id,
            status
        );
        self.replace(project_id, |project| {
            project.with_criterion_status(criterion_id, status)
        })
    }

    pub fn add_anomaly(&mut self, project_id: &str, anomaly: Anomaly) -> Result<&Project> {
        log::debug!("Adding anomaly {} to project {}", anomaly.id, project_id);
        self.replace(project_id, |project| Ok(project.with_anomaly(anomaly)))
    }

    pub fn remove_anomaly(&mut self, project_id: &str, anomaly_id: &str) -> Result<&Project> {
        log::debug!("Removing anomaly {} from project {}", anomaly_id, project_id);
        self.replace(project_id, |project| project.without_anomaly(anomaly_id))
    }

    pub fn group_score(&self, project_id: &str, group: CriterionGroup) -> Result<Percentage> {
        self.project(project_id)
            .map(|project| scoring::group_score(&project.audit_criteria, group))
    }

    pub fn global_score(&self, project_id: &str) -> Result<Percentage> {
        self.project(project_id)
            .map(|project| scoring::global_score(&project.audit_criteria))
    }

    fn position(&self, project_id: &str) -> Result<usize> {
        self.projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or_else(|| Error::UnknownProject(project_id.to_string()))
    }

    fn replace<F>(&mut self, project_id: &str, update: F) -> Result<&Project>
    where
        F: FnOnce(&Project) -> Result<Project>,
    {
        let index = self.position(project_id)?;
        let updated = update(&self.projects[index])?;
        self.projects.set(index, updated);
        Ok(&self.projects[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_selects_demo_project() {
        let store = AppStore::demo();
        let project = store.current_project().unwrap();
        assert_eq!(project.id, fixtures::DEMO_PROJECT_ID);
        assert_eq!(project.audit_criteria.len(), 18);
    }

    #[test]
    fn test_update_does_not_leak_into_earlier_snapshot() {
        let mut store = AppStore::demo();
        let snapshot = store.project(fixtures::DEMO_PROJECT_ID).unwrap().clone();

        store
            .update_criterion_status(fixtures::DEMO_PROJECT_ID, "c4", AuditStatus::Validated)
            .unwrap();

        assert_eq!(snapshot.criterion("c4").unwrap().status, AuditStatus::NotChecked);
        let current = store.project(fixtures::DEMO_PROJECT_ID).unwrap();
        assert_eq!(current.criterion("c4").unwrap().status, AuditStatus::Validated);
    }

    #[test]
    fn test_unknown_project_is_an_error() {
        let mut store = AppStore::demo();
        assert!(matches!(
            store.global_score("nope"),
            Err(Error::UnknownProject(_))
        ));
        assert!(store.set_current_project(Some("nope")).is_err());
        assert_eq!(store.current_project_id(), Some(fixtures::DEMO_PROJECT_ID));
    }

    #[test]
    fn test_clear_current_project() {
        let mut store = AppStore::demo();
        store.set_current_project(None).unwrap();
        assert!(store.current_project().is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = AppStore::demo();
        assert_eq!(store.preferences().theme, Theme::Light);
        store.toggle_theme();
        assert_eq!(store.preferences().theme, Theme::Dark);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store = AppStore::demo();
        let mut renamed = store.current_project().unwrap().clone();
        renamed.name = "Renamed".into();
        store.upsert_project(renamed);
        assert_eq!(store.projects().len(), 1);
        assert_eq!(store.current_project().unwrap().name, "Renamed");
    }
}
