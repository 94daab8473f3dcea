use serde::{Deserialize, Serialize};

use crate::io::output::OutputFormat;
use crate::report::SectionToggles;

/// Root configuration structure, read from `.bimaudit.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BimAuditConfig {
    /// Default report sections
    #[serde(default)]
    pub report: Option<SectionToggles>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl BimAuditConfig {
    pub fn section_toggles(&self) -> SectionToggles {
        self.report.unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|output| output.default_format)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}
