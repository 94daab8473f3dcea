use crate::core::Language;
use chrono::NaiveDate;

use super::labels::ReportLabels;

/// Lowercase, whitespace runs collapsed to `-`, path separators replaced.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase().replace(['/', '\\'], "-"))
        .collect::<Vec<_>>()
        .join("-")
}

/// `<label>-<slug>-<YYYY-MM-DD>.<extension>`, e.g.
/// `rapport-audit-gare-de-val-de-fontenay-2024-01-15.pdf`.
pub fn report_file_name(
    project_name: &str,
    language: Language,
    date: NaiveDate,
    extension: &str,
) -> String {
    let label = ReportLabels::for_language(language).file_label;
    let slug = slugify(project_name);
    let stem = if slug.is_empty() {
        format!("{label}-{}", date.format("%Y-%m-%d"))
    } else {
        format!("{label}-{slug}-{}", date.format("%Y-%m-%d"))
    };
    format!("{stem}.{}", extension.trim_start_matches('.'))
}
