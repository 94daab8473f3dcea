use crate::config::Theme as PreferenceTheme;
use crate::core::{AuditStatus, CriterionGroup, Language};
use crate::io::output;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bimaudit")]
#[command(about = "BIM model audit scoring and report generation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the global and per-group audit scores
    Score {
        /// Project snapshot (JSON); the demo project is used when omitted
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Only show the score of this group
        #[arg(short, long, value_enum)]
        group: Option<Group>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ScoreFormat,

        /// Plain output (no colors or symbols)
        #[arg(long)]
        plain: bool,
    },

    /// Compose and render the audit report
    Report {
        /// Project snapshot (JSON); the demo project is used when omitted
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Report language (defaults to the saved preference)
        #[arg(short, long, value_enum)]
        lang: Option<Lang>,

        /// Leave out the summary block
        #[arg(long)]
        no_summary: bool,

        /// Leave out the per-group score table
        #[arg(long)]
        no_scores: bool,

        /// Leave out the detailed criteria page
        #[arg(long)]
        no_criteria: bool,

        /// Leave out the anomalies page
        #[arg(long)]
        no_anomalies: bool,

        /// Leave out the recommendations page
        #[arg(long)]
        no_recommendations: bool,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file or directory (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output (no colors or symbols)
        #[arg(long)]
        plain: bool,
    },

    /// Set the audit status of one criterion
    SetStatus {
        /// Criterion id
        criterion: String,

        /// New status
        #[arg(value_enum)]
        status: Status,

        /// Project snapshot (JSON); the demo project is used when omitted
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Write the updated project snapshot here
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Upload model files into the project
    Upload {
        /// Model files (.rvt or .ifc)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Project snapshot (JSON); the demo project is used when omitted
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Write the updated project snapshot here
        #[arg(long)]
        save: Option<PathBuf>,

        /// Seed for the simulated transfer progress
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or change the saved preferences
    Prefs {
        /// Set the theme
        #[arg(long, value_enum, conflicts_with = "toggle_theme")]
        theme: Option<Theme>,

        /// Switch between light and dark
        #[arg(long)]
        toggle_theme: bool,

        /// Set the interface language
        #[arg(long, value_enum)]
        language: Option<Lang>,
    },

    /// Initialize a .bimaudit.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Html,
    Json,
    Terminal,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Html => Self::Html,
            OutputFormat::Json => Self::Json,
            OutputFormat::Terminal => Self::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoreFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    Fr,
    En,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Fr => Language::Fr,
            Lang::En => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl From<Theme> for PreferenceTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => PreferenceTheme::Light,
            Theme::Dark => PreferenceTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Status {
    Validated,
    NotValidated,
    NotChecked,
}

impl From<Status> for AuditStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Validated => AuditStatus::Validated,
            Status::NotValidated => AuditStatus::NotValidated,
            Status::NotChecked => AuditStatus::NotChecked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Group {
    Diffusion,
    Codification,
    References,
    Modeling,
    Information,
}

impl From<Group> for CriterionGroup {
    fn from(group: Group) -> Self {
        match group {
            Group::Diffusion => CriterionGroup::Diffusion,
            Group::Codification => CriterionGroup::Codification,
            Group::References => CriterionGroup::References,
            Group::Modeling => CriterionGroup::Modeling,
            Group::Information => CriterionGroup::Information,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_toggles() {
        let cli = Cli::try_parse_from([
            "bimaudit",
            "report",
            "--lang",
            "en",
            "--no-anomalies",
            "--format",
            "html",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                lang,
                no_anomalies,
                no_summary,
                format,
                ..
            } => {
                assert_eq!(lang, Some(Lang::En));
                assert!(no_anomalies);
                assert!(!no_summary);
                assert_eq!(format, Some(OutputFormat::Html));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_status_uses_kebab_case_values() {
        let cli =
            Cli::try_parse_from(["bimaudit", "set-status", "d1", "not-validated"]).unwrap();
        match cli.command {
            Commands::SetStatus {
                criterion, status, ..
            } => {
                assert_eq!(criterion, "d1");
                assert_eq!(AuditStatus::from(status), AuditStatus::NotValidated);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_plain_flag_on_score_and_report() {
        let score = Cli::try_parse_from(["bimaudit", "score", "--plain"]).unwrap();
        assert!(matches!(score.command, Commands::Score { plain: true, .. }));

        let report = Cli::try_parse_from(["bimaudit", "report"]).unwrap();
        assert!(matches!(report.command, Commands::Report { plain: false, .. }));
    }

    #[test]
    fn test_upload_requires_files() {
        assert!(Cli::try_parse_from(["bimaudit", "upload"]).is_err());
    }
}
