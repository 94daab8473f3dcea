//! Localized label catalog for composed reports.

use crate::core::{AuditStatus, CriterionGroup, Language};

pub const BRAND: &str = "BIM Audit Intelligence";

/// Every fixed string a report needs, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub language: Language,
    pub report_title: &'static str,
    pub generated_on: &'static str,
    pub summary: &'static str,
    pub global_score: &'static str,
    pub models: &'static str,
    pub criteria: &'static str,
    pub anomalies: &'static str,
    pub scores_by_group: &'static str,
    pub detailed_criteria: &'static str,
    pub criterion: &'static str,
    pub group: &'static str,
    pub status: &'static str,
    pub score: &'static str,
    pub anomalies_conflicts: &'static str,
    pub severity: &'static str,
    pub location: &'static str,
    pub ai_recommendations: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub error_generating: &'static str,
    /// File name prefix for exported reports
    pub file_label: &'static str,
}

const FR: ReportLabels = ReportLabels {
    language: Language::Fr,
    report_title: "Rapport d'Audit BIM",
    generated_on: "Généré le",
    summary: "Synthèse",
    global_score: "Score Global",
    models: "Maquettes",
    criteria: "Critères",
    anomalies: "Anomalies",
    scores_by_group: "Scores par Groupe",
    detailed_criteria: "Critères Détaillés",
    criterion: "Critère",
    group: "Groupe",
    status: "Statut",
    score: "Score",
    anomalies_conflicts: "Anomalies & Conflits",
    severity: "Sévérité",
    location: "Localisation",
    ai_recommendations: "Recommandations IA",
    page: "Page",
    of: "sur",
    error_generating: "Erreur lors de la génération du rapport",
    file_label: "rapport-audit",
};

const EN: ReportLabels = ReportLabels {
    language: Language::En,
    report_title: "BIM Audit Report",
    generated_on: "Generated on",
    summary: "Summary",
    global_score: "Global Score",
    models: "Models",
    criteria: "Criteria",
    anomalies: "Anomalies",
    scores_by_group: "Scores by Group",
    detailed_criteria: "Detailed Criteria",
    criterion: "Criterion",
    group: "Group",
    status: "Status",
    score: "Score",
    anomalies_conflicts: "Anomalies & Conflicts",
    severity: "Severity",
    location: "Location",
    ai_recommendations: "AI Recommendations",
    page: "Page",
    of: "of",
    error_generating: "Error generating report",
    file_label: "audit-report",
};

impl ReportLabels {
    pub fn for_language(language: Language) -> &'static ReportLabels {
        match language {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }

    pub fn group_name(&self, group: CriterionGroup) -> &'static str {
        match (self.language, group) {
            (Language::Fr, CriterionGroup::Diffusion) => "Diffusion",
            (Language::Fr, CriterionGroup::Codification) => "Codification",
            (Language::Fr, CriterionGroup::References) => "Références",
            (Language::Fr, CriterionGroup::Modeling) => "Modélisation",
            (Language::Fr, CriterionGroup::Information) => "Informations",
            (Language::En, CriterionGroup::Diffusion) => "Distribution",
            (Language::En, CriterionGroup::Codification) => "Codification",
            (Language::En, CriterionGroup::References) => "References",
            (Language::En, CriterionGroup::Modeling) => "Modeling",
            (Language::En, CriterionGroup::Information) => "Information",
        }
    }

    pub fn status_name(&self, status: AuditStatus) -> &'static str {
        match (self.language, status) {
            (Language::Fr, AuditStatus::Validated) => "Validé",
            (Language::Fr, AuditStatus::NotValidated) => "Non validé",
            (Language::Fr, AuditStatus::NotChecked) => "Non contrôlé",
            (Language::En, AuditStatus::Validated) => "Validated",
            (Language::En, AuditStatus::NotValidated) => "Not Validated",
            (Language::En, AuditStatus::NotChecked) => "Not Checked",
        }
    }

    /// `Page 2 of 4` / `Page 2 sur 4`
    pub fn page_footer(&self, page: u32, page_count: u32) -> String {
        format!("{} {} {} {}", self.page, page, self.of, page_count)
    }

    pub fn footer(&self, client: &str) -> String {
        if client.trim().is_empty() {
            BRAND.to_string()
        } else {
            format!("{BRAND} - {client}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names_localized() {
        let fr = ReportLabels::for_language(Language::Fr);
        let en = ReportLabels::for_language(Language::En);
        assert_eq!(fr.group_name(CriterionGroup::Modeling), "Modélisation");
        assert_eq!(en.group_name(CriterionGroup::Diffusion), "Distribution");
    }

    #[test]
    fn test_page_footer() {
        let fr = ReportLabels::for_language(Language::Fr);
        assert_eq!(fr.page_footer(2, 4), "Page 2 sur 4");
        let en = ReportLabels::for_language(Language::En);
        assert_eq!(en.page_footer(1, 1), "Page 1 of 1");
    }

    #[test]
    fn test_footer_without_client() {
        let en = ReportLabels::for_language(Language::En);
        assert_eq!(en.footer(""), BRAND);
        assert_eq!(en.footer("Acme"), "BIM Audit Intelligence - Acme");
    }
}
