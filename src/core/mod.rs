pub mod errors;
pub mod locale;
pub mod types;

pub use errors::{Error, Result};
pub use locale::{Language, Localized};
pub use types::{
    AuditStatus, CriterionGroup, FileType, ModelMetadata, ProjectStatus, Severity,
};

use chrono::{DateTime, NaiveDate, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditCriterion {
    pub id: String,
    pub name: Localized,
    pub group: CriterionGroup,
    #[serde(default)]
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_recommendation: Option<Localized>,
}

impl AuditCriterion {
    pub fn new(
        id: impl Into<String>,
        name: Localized,
        group: CriterionGroup,
        status: AuditStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            group,
            status,
            ai_recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: Localized) -> Self {
        self.ai_recommendation = Some(recommendation);
        self
    }

    /// Recommendation text in `language`, if one exists and is non-empty.
    pub fn recommendation(&self, language: Language) -> Option<&str> {
        self.ai_recommendation
            .as_ref()
            .and_then(|text| text.non_empty(language))
    }

    pub fn is_validated(&self) -> bool {
        self.status == AuditStatus::Validated
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BimModel {
    pub id: String,
    pub name: String,
    pub file_name: String,
    pub file_type: FileType,
    /// Size in bytes
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: ModelMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_score: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub model_id: String,
    pub description: Localized,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criterion_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Aggregate root owning the models, anomalies and criteria of one audit.
///
/// Values are never mutated in place. Every `with_*`/`without_*` method
/// returns a new `Project`; the persistent vectors share structure with the
/// previous value, so older snapshots stay valid and unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub models: Vector<BimModel>,
    #[serde(default)]
    pub anomalies: Vector<Anomaly>,
    #[serde(default)]
    pub audit_criteria: Vector<AuditCriterion>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client: String::new(),
            status: ProjectStatus::default(),
            due_date: None,
            models: Vector::new(),
            anomalies: Vector::new(),
            audit_criteria: Vector::new(),
        }
    }

    pub fn criterion(&self, criterion_id: &str) -> Option<&AuditCriterion> {
        self.audit_criteria.iter().find(|c| c.id == criterion_id)
    }

    /// Overwrite a criterion status. Any transition is accepted, including
    /// setting the status it already has.
    pub fn with_criterion_status(&self, criterion_id: &str, status: AuditStatus) -> Result<Self> {
        let index = self
            .audit_criteria
            .iter()
            .position(|c| c.id == criterion_id)
            .ok_or_else(|| Error::UnknownCriterion {
                project_id: self.id.clone(),
                criterion_id: criterion_id.to_string(),
            })?;

        let updated = AuditCriterion {
            status,
            ..self.audit_criteria[index].clone()
        };

        Ok(Self {
            audit_criteria: self.audit_criteria.update(index, updated),
            ..self.clone()
        })
    }

    pub fn with_model(&self, model: BimModel) -> Self {
        let mut models = self.models.clone();
        models.push_back(model);
        Self {
            models,
            ..self.clone()
        }
    }

    pub fn without_model(&self, model_id: &str) -> Result<Self> {
        let mut models = self.models.clone();
        models.retain(|m| m.id != model_id);
        if models.len() == self.models.len() {
            return Err(Error::UnknownModel {
                project_id: self.id.clone(),
                model_id: model_id.to_string(),
            });
        }
        Ok(Self {
            models,
            ..self.clone()
        })
    }

    pub fn with_anomaly(&self, anomaly: Anomaly) -> Self {
        let mut anomalies = self.anomalies.clone();
        anomalies.push_back(anomaly);
        Self {
            anomalies,
            ..self.clone()
        }
    }

    pub fn without_anomaly(&self, anomaly_id: &str) -> Result<Self> {
        let mut anomalies = self.anomalies.clone();
        anomalies.retain(|a| a.id != anomaly_id);
        if anomalies.len() == self.anomalies.len() {
            return Err(Error::UnknownAnomaly {
                project_id: self.id.clone(),
                anomaly_id: anomaly_id.to_string(),
            });
        }
        Ok(Self {
            anomalies,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let mut project = Project::new("p1", "Sample");
        project.audit_criteria = Vector::from(vec![
            AuditCriterion::new(
                "d1",
                Localized::new("Format", "Format"),
                CriterionGroup::Diffusion,
                AuditStatus::NotChecked,
            ),
            AuditCriterion::new(
                "c1",
                Localized::new("Nomenclature", "Naming"),
                CriterionGroup::Codification,
                AuditStatus::Validated,
            ),
        ]);
        project
    }

    #[test]
    fn test_with_criterion_status_leaves_original_untouched() {
        let before = sample_project();
        let after = before
            .with_criterion_status("d1", AuditStatus::Validated)
            .unwrap();

        assert_eq!(before.criterion("d1").unwrap().status, AuditStatus::NotChecked);
        assert_eq!(after.criterion("d1").unwrap().status, AuditStatus::Validated);
        assert_eq!(after.audit_criteria.len(), 2);
        assert_eq!(after.audit_criteria[0].id, "d1");
    }

    #[test]
    fn test_with_criterion_status_unknown_id() {
        let err = sample_project()
            .with_criterion_status("x", AuditStatus::Validated)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCriterion { .. }));
    }

    #[test]
    fn test_without_model_unknown_id() {
        let err = sample_project().without_model("model-9").unwrap_err();
        assert!(matches!(err, Error::UnknownModel { .. }));
    }

    #[test]
    fn test_recommendation_requires_text_in_language() {
        let criterion = AuditCriterion::new(
            "m2",
            Localized::new("Géométrie", "Geometry"),
            CriterionGroup::Modeling,
            AuditStatus::NotValidated,
        )
        .with_recommendation(Localized::new("Doublons détectés", ""));

        assert_eq!(criterion.recommendation(Language::Fr), Some("Doublons détectés"));
        assert_eq!(criterion.recommendation(Language::En), None);
    }
}
