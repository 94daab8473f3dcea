//! Integration tests for report composition and rendering

use bimaudit::config::Theme;
use bimaudit::core::{AuditCriterion, AuditStatus, CriterionGroup, Language, Localized, Project};
use bimaudit::formatting::FormattingConfig;
use bimaudit::io::output::{render_to_string, OutputFormat, RenderMeta};
use bimaudit::report::{compose, SectionContent, SectionKind, SectionToggles};
use bimaudit::scoring::{global_score, Percentage};
use bimaudit::store::fixtures::demo_project;
use chrono::NaiveDate;
use im::Vector;
use pretty_assertions::assert_eq;

fn page_of(project: &Project, kind: SectionKind, toggles: SectionToggles) -> Option<u32> {
    compose(project, Percentage::ZERO, Language::Fr, toggles)
        .section(kind)
        .map(|s| s.page)
}

#[test]
fn test_recommendations_move_up_without_anomalies() {
    let with_anomalies = demo_project();
    let without_anomalies = Project {
        anomalies: Vector::new(),
        ..demo_project()
    };
    let toggles = SectionToggles::all();

    let with = page_of(&with_anomalies, SectionKind::Recommendations, toggles).unwrap();
    let without = page_of(&without_anomalies, SectionKind::Recommendations, toggles).unwrap();

    assert_eq!(with, 4);
    assert_eq!(without, with - 1);
}

#[test]
fn test_toggle_off_and_on_restores_content() {
    let project = demo_project();
    let score = global_score(&project.audit_criteria);
    let original = compose(&project, score, Language::En, SectionToggles::all());

    for kind in SectionKind::ALL {
        let off = SectionToggles::all().toggled(kind);
        let skipped = compose(&project, score, Language::En, off);
        assert!(skipped.section(kind).is_none(), "{kind:?} should be skipped");

        let restored = compose(&project, score, Language::En, off.toggled(kind));
        assert_eq!(restored, original);
    }
}

#[test]
fn test_no_applicable_recommendation_omits_page() {
    // The only recommendation belongs to a validated criterion
    let project = Project {
        audit_criteria: Vector::from(vec![
            AuditCriterion::new(
                "d1",
                Localized::new("Format", "Format"),
                CriterionGroup::Diffusion,
                AuditStatus::Validated,
            )
            .with_recommendation(Localized::new("Texte", "Text")),
            AuditCriterion::new(
                "d2",
                Localized::new("Version", "Version"),
                CriterionGroup::Diffusion,
                AuditStatus::NotValidated,
            ),
        ]),
        ..Project::new("p", "Empty recommendations")
    };

    let doc = compose(&project, Percentage::new(50), Language::Fr, SectionToggles::all());
    assert!(doc.section(SectionKind::Recommendations).is_none());
    assert_eq!(doc.page_count, 2);
}

#[test]
fn test_whitespace_recommendation_still_emits_page() {
    let project = Project {
        audit_criteria: Vector::from(vec![AuditCriterion::new(
            "c2",
            Localized::new("Codification", "Codification"),
            CriterionGroup::Codification,
            AuditStatus::NotValidated,
        )
        .with_recommendation(Localized::new(" ", " "))]),
        ..Project::new("p", "Whitespace recommendation")
    };

    let doc = compose(&project, Percentage::ZERO, Language::Fr, SectionToggles::all());
    let section = doc.section(SectionKind::Recommendations).unwrap();
    assert_eq!(section.page, 3);
    match &section.content {
        SectionContent::Recommendations(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].recommendation, " ");
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn test_recommendation_text_must_exist_in_language() {
    let project = Project {
        audit_criteria: Vector::from(vec![AuditCriterion::new(
            "m1",
            Localized::new("Niveau", "Level"),
            CriterionGroup::Modeling,
            AuditStatus::NotValidated,
        )
        .with_recommendation(Localized::new("Corriger le niveau", ""))]),
        ..Project::new("p", "French only")
    };

    let fr = compose(&project, Percentage::ZERO, Language::Fr, SectionToggles::all());
    let en = compose(&project, Percentage::ZERO, Language::En, SectionToggles::all());

    match &fr.section(SectionKind::Recommendations).unwrap().content {
        SectionContent::Recommendations(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].criterion, "Niveau");
            assert_eq!(entries[0].recommendation, "Corriger le niveau");
        }
        other => panic!("unexpected content: {other:?}"),
    }
    assert!(en.section(SectionKind::Recommendations).is_none());
}

#[test]
fn test_group_table_uses_canonical_order() {
    let mut project = demo_project();
    project.audit_criteria = project.audit_criteria.iter().rev().cloned().collect();

    let doc = compose(&project, Percentage::ZERO, Language::En, SectionToggles::all());
    let groups: Vec<CriterionGroup> = match &doc.section(SectionKind::Scores).unwrap().content {
        SectionContent::Scores(rows) => rows.iter().map(|r| r.group).collect(),
        other => panic!("unexpected content: {other:?}"),
    };
    assert_eq!(groups, CriterionGroup::ALL.to_vec());

    let first_criterion = match &doc.section(SectionKind::Criteria).unwrap().content {
        SectionContent::Criteria(rows) => rows[0].id.clone(),
        other => panic!("unexpected content: {other:?}"),
    };
    assert_eq!(first_criterion, "i4");
}

#[test]
fn test_every_format_renders_demo_report() {
    let project = demo_project();
    let doc = compose(
        &project,
        global_score(&project.audit_criteria),
        Language::En,
        SectionToggles::all(),
    );
    let meta = RenderMeta::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), Theme::Dark);

    for format in [
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Json,
        OutputFormat::Terminal,
    ] {
        let rendered = render_to_string(format, &doc, &meta, FormattingConfig::plain()).unwrap();
        assert!(
            rendered.contains("Gare de Val de Fontenay"),
            "{format:?} output is missing the project name"
        );
    }
}
