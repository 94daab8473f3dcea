use crate::commands::{current_project, load_store};
use crate::config::load_config;
use crate::core::Language;
use crate::formatting::FormattingConfig;
use crate::io::{self, output::render_to_string, output::OutputFormat, output::RenderMeta};
use crate::report::{compose, report_file_name, ReportLabels, SectionKind, SectionToggles};
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub project: Option<PathBuf>,
    pub language: Option<Language>,
    /// Sections switched off on the command line
    pub excluded: Vec<SectionKind>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl ReportConfig {
    /// Configured toggles with the command-line exclusions applied on top.
    pub fn toggles(&self, configured: SectionToggles) -> SectionToggles {
        self.excluded
            .iter()
            .fold(configured, |toggles, kind| toggles.with(*kind, false))
    }
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let file_config = load_config();
    let store = load_store(config.project.as_deref())?;
    let project = current_project(&store)?;
    let preferences = *store.preferences();

    let language = config.language.unwrap_or(preferences.language);
    let format = config.format.unwrap_or_else(|| file_config.default_format());
    let toggles = config.toggles(file_config.section_toggles());

    let global = store.global_score(&project.id)?;
    let document = compose(project, global, language, toggles);
    let meta = RenderMeta::today(preferences.theme);

    let formatting = config.formatting;
    formatting.apply();

    let rendered = match render_to_string(format, &document, &meta, formatting) {
        Ok(rendered) => rendered,
        Err(err) => {
            let labels = ReportLabels::for_language(language);
            anyhow::bail!("{}: {}", labels.error_generating, err);
        }
    };

    match &config.output {
        None => print!("{rendered}"),
        Some(target) => {
            let path = resolve_output_path(target, &project.name, language, &meta, format);
            io::write_file(&path, &rendered)?;
            println!("Report written to {}", path.display());
        }
    }
    Ok(())
}

/// A directory target gets the generated report file name appended.
pub fn resolve_output_path(
    target: &Path,
    project_name: &str,
    language: Language,
    meta: &RenderMeta,
    format: OutputFormat,
) -> PathBuf {
    if target.is_dir() {
        target.join(report_file_name(
            project_name,
            language,
            meta.generated_on,
            format.extension(),
        ))
    } else {
        target.to_path_buf()
    }
}
