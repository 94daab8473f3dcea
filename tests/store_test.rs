//! Integration tests for the application store

use bimaudit::core::{Anomaly, AuditStatus, CriterionGroup, Error, Localized, Severity};
use bimaudit::store::fixtures::{demo_project, DEMO_PROJECT_ID};
use bimaudit::store::AppStore;
use pretty_assertions::assert_eq;

fn anomaly(id: &str) -> Anomaly {
    Anomaly {
        id: id.to_string(),
        model_id: "model-1".to_string(),
        description: Localized::new("Conflit", "Clash"),
        severity: Severity::Low,
        location: None,
        criterion_id: None,
        image_url: None,
    }
}

#[test]
fn test_status_update_recomputes_scores() {
    let mut store = AppStore::demo();
    assert_eq!(store.global_score(DEMO_PROJECT_ID).unwrap().value(), 56);

    store
        .update_criterion_status(DEMO_PROJECT_ID, "d3", AuditStatus::Validated)
        .unwrap();

    assert_eq!(
        store
            .group_score(DEMO_PROJECT_ID, CriterionGroup::Diffusion)
            .unwrap()
            .value(),
        100
    );
    assert_eq!(store.global_score(DEMO_PROJECT_ID).unwrap().value(), 61);
}

#[test]
fn test_snapshots_are_not_affected_by_updates() {
    let mut store = AppStore::demo();
    let snapshot = store.project(DEMO_PROJECT_ID).unwrap().clone();

    store.add_anomaly(DEMO_PROJECT_ID, anomaly("a-new")).unwrap();
    store
        .update_criterion_status(DEMO_PROJECT_ID, "i1", AuditStatus::Validated)
        .unwrap();

    assert_eq!(snapshot, demo_project());
    let current = store.project(DEMO_PROJECT_ID).unwrap();
    assert_eq!(current.anomalies.len(), snapshot.anomalies.len() + 1);
}

#[test]
fn test_unknown_ids_are_errors() {
    let mut store = AppStore::demo();

    assert!(matches!(
        store.project("nope"),
        Err(Error::UnknownProject(_))
    ));
    assert!(matches!(
        store.update_criterion_status(DEMO_PROJECT_ID, "zz", AuditStatus::Validated),
        Err(Error::UnknownCriterion { .. })
    ));
    assert!(matches!(
        store.remove_model(DEMO_PROJECT_ID, "ghost"),
        Err(Error::UnknownModel { .. })
    ));
    assert!(matches!(
        store.remove_anomaly(DEMO_PROJECT_ID, "ghost"),
        Err(Error::UnknownAnomaly { .. })
    ));
    assert!(store.set_current_project(Some("nope")).is_err());
    assert_eq!(store.current_project_id(), Some(DEMO_PROJECT_ID));
}

#[test]
fn test_remove_anomaly_round_trip() {
    let mut store = AppStore::demo();
    store.add_anomaly(DEMO_PROJECT_ID, anomaly("a-tmp")).unwrap();
    let project = store.remove_anomaly(DEMO_PROJECT_ID, "a-tmp").unwrap();
    assert_eq!(project, &demo_project());
}

#[test]
fn test_clearing_current_project() {
    let mut store = AppStore::demo();
    store.set_current_project(None).unwrap();
    assert!(store.current_project().is_none());
}
