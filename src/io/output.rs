use crate::config::Theme;
use crate::core::{Error, Result};
use crate::formatting::FormattingConfig;
use crate::io::writers::{HtmlWriter, JsonWriter, MarkdownWriter, TerminalWriter};
use crate::report::ReportDocument;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
    Json,
    Terminal,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
            Self::Terminal => "txt",
        }
    }
}

/// Data a renderer needs that is not part of the composed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderMeta {
    pub generated_on: NaiveDate,
    pub theme: Theme,
}

impl RenderMeta {
    pub fn new(generated_on: NaiveDate, theme: Theme) -> Self {
        Self {
            generated_on,
            theme,
        }
    }

    /// Dated with the current UTC day, as used in exported file names.
    pub fn today(theme: Theme) -> Self {
        Self::new(chrono::Utc::now().date_naive(), theme)
    }
}

/// A document renderer: turns a composed report into bytes.
pub trait ReportWriter {
    fn write_report(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Render into memory. Any failure is reported as [`Error::Render`] and no
/// partial output is returned.
pub fn render_to_string(
    format: OutputFormat,
    report: &ReportDocument,
    meta: &RenderMeta,
    formatting: FormattingConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, &mut buffer, formatting);
        writer
            .write_report(report, meta)
            .map_err(|e| Error::Render(e.to_string()))?;
    }
    String::from_utf8(buffer).map_err(|e| Error::Render(e.to_string()))
}
