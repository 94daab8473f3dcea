//! Built-in demonstration project used when no snapshot is supplied.

use crate::core::{
    Anomaly, AuditCriterion, AuditStatus, BimModel, CriterionGroup, FileType, Localized,
    ModelMetadata, Project, ProjectStatus, Severity,
};
use chrono::{NaiveDate, TimeZone, Utc};
use im::Vector;

pub const DEMO_PROJECT_ID: &str = "project-1";

pub fn demo_project() -> Project {
    Project {
        id: DEMO_PROJECT_ID.to_string(),
        name: "Gare de Val de Fontenay".to_string(),
        client: "SNCF Gares & Connexions".to_string(),
        status: ProjectStatus::InProgress,
        due_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        models: demo_models(),
        anomalies: demo_anomalies(),
        audit_criteria: demo_criteria(),
    }
}

fn criterion(
    id: &str,
    fr: &str,
    en: &str,
    group: CriterionGroup,
    status: AuditStatus,
) -> AuditCriterion {
    AuditCriterion::new(id, Localized::new(fr, en), group, status)
}

pub fn demo_criteria() -> Vector<AuditCriterion> {
    use AuditStatus::*;
    use CriterionGroup::*;

    Vector::from(vec![
        criterion("d1", "Format de diffusion correct", "Correct distribution format", Diffusion, Validated),
        criterion("d2", "Destinataires identifiés", "Recipients identified", Diffusion, Validated),
        criterion("d3", "Version de fichier à jour", "Up-to-date file version", Diffusion, NotValidated)
            .with_recommendation(Localized::new(
                "La version du fichier est obsolète. Mettre à jour vers la version 2024.1.",
                "File version is outdated. Update to version 2024.1.",
            )),
        criterion("c1", "Nomenclature des fichiers conforme", "File naming convention compliant", Codification, Validated),
        criterion("c2", "Codification des éléments BIM", "BIM elements codification", Codification, NotValidated)
            .with_recommendation(Localized::new(
                "15 éléments ne respectent pas la convention de codification du maître d'ouvrage.",
                "15 elements do not follow the client coding convention.",
            )),
        criterion("c3", "Identifiants uniques attribués", "Unique identifiers assigned", Codification, Validated),
        criterion("c4", "Classification Uniformat/Omniclass", "Uniformat/Omniclass classification", Codification, NotChecked),
        criterion("r1", "Géoréférencement correct", "Correct georeferencing", References, Validated),
        criterion("r2", "Unités de mesure conformes", "Compliant measurement units", References, Validated),
        criterion("r3", "Niveaux de référence définis", "Reference levels defined", References, Validated),
        criterion("m1", "LOD respecté (LOD 300)", "LOD compliance (LOD 300)", Modeling, Validated),
        criterion("m2", "Pas de géométrie dupliquée", "No duplicate geometry", Modeling, NotValidated)
            .with_recommendation(Localized::new(
                "23 éléments de géométrie dupliqués dans la zone Quais.",
                "23 duplicate geometry elements in the Platforms zone.",
            )),
        criterion("m3", "Connexions entre éléments", "Element connections", Modeling, Validated),
        criterion("m4", "Pas de conflits spatiaux", "No spatial conflicts", Modeling, NotValidated)
            .with_recommendation(Localized::new(
                "8 conflits entre structure et réseaux techniques.",
                "8 clashes between structure and MEP networks.",
            )),
        criterion("i1", "Attributs obligatoires renseignés", "Mandatory attributes filled", Information, NotValidated)
            .with_recommendation(Localized::new(
                "45 éléments sans attributs obligatoires (Matériau, Fournisseur).",
                "45 elements missing mandatory attributes (Material, Supplier).",
            )),
        criterion("i2", "Données de maintenance présentes", "Maintenance data present", Information, NotChecked),
        criterion("i3", "Informations de coût intégrées", "Cost information integrated", Information, NotChecked),
        criterion("i4", "Documentation liée aux éléments", "Element-linked documentation", Information, Validated),
    ])
}

#[allow(clippy::too_many_arguments)]
fn model(
    id: &str,
    name: &str,
    file_name: &str,
    file_type: FileType,
    size: u64,
    uploaded: (i32, u32, u32),
    metadata: (&str, &str, &str),
    audit_score: u8,
) -> BimModel {
    let (year, month, day) = uploaded;
    let (family, layer, phase) = metadata;
    BimModel {
        id: id.to_string(),
        name: name.to_string(),
        file_name: file_name.to_string(),
        file_type,
        size,
        uploaded_at: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        metadata: ModelMetadata {
            family: Some(family.to_string()),
            layer: Some(layer.to_string()),
            phase: Some(phase.to_string()),
        },
        audit_score: Some(audit_score),
    }
}

pub fn demo_models() -> Vector<BimModel> {
    Vector::from(vec![
        model(
            "model-1",
            "Structure principale - Hall",
            "VDF-STR-MOD-001.rvt",
            FileType::Rvt,
            256_000_000,
            (2024, 1, 15),
            ("Structure", "Niveau 0", "AVP"),
            72,
        ),
        model(
            "model-2",
            "Architecture - Façades",
            "VDF-ARC-MOD-002.ifc",
            FileType::Ifc,
            184_000_000,
            (2024, 1, 18),
            ("Architecture", "Tous niveaux", "PRO"),
            85,
        ),
        model(
            "model-3",
            "MEP - CVC",
            "VDF-MEP-MOD-003.rvt",
            FileType::Rvt,
            128_000_000,
            (2024, 1, 20),
            ("MEP", "Technique", "PRO"),
            68,
        ),
    ])
}

pub fn demo_anomalies() -> Vector<Anomaly> {
    let anomaly = |id: &str, model_id: &str, fr: &str, en: &str, severity, location: &str| Anomaly {
        id: id.to_string(),
        model_id: model_id.to_string(),
        description: Localized::new(fr, en),
        severity,
        location: Some(location.to_string()),
        criterion_id: None,
        image_url: None,
    };

    Vector::from(vec![
        anomaly(
            "anom-1",
            "model-1",
            "Conflit entre poutre métallique et gaine de ventilation au niveau +4.50m",
            "Clash between steel beam and ventilation duct at level +4.50m",
            Severity::High,
            "Zone Quais - Travée 12",
        ),
        anomaly(
            "anom-2",
            "model-2",
            "Éléments de façade sans attribut de performance thermique",
            "Facade elements missing thermal performance attribute",
            Severity::Medium,
            "Façade Nord",
        ),
        anomaly(
            "anom-3",
            "model-3",
            "Chevauchement de réseaux CVC et électricité",
            "HVAC and electrical network overlap",
            Severity::Critical,
            "Local technique N1",
        ),
    ])
}
