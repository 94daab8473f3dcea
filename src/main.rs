use anyhow::Result;
use bimaudit::cli::{Cli, Commands, ScoreFormat};
use bimaudit::commands::{
    self, PrefsConfig, ReportConfig, ScoreConfig, ScoreOutput, SetStatusConfig, UploadConfig,
};
use bimaudit::formatting::FormattingConfig;
use bimaudit::report::SectionKind;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            project,
            group,
            format,
            plain,
        } => commands::handle_score(ScoreConfig {
            project,
            group: group.map(Into::into),
            output: match format {
                ScoreFormat::Terminal => ScoreOutput::Terminal,
                ScoreFormat::Json => ScoreOutput::Json,
            },
            formatting: FormattingConfig::for_cli(plain),
        }),
        Commands::Report {
            project,
            lang,
            no_summary,
            no_scores,
            no_criteria,
            no_anomalies,
            no_recommendations,
            format,
            output,
            plain,
        } => {
            let excluded = [
                (no_summary, SectionKind::Summary),
                (no_scores, SectionKind::Scores),
                (no_criteria, SectionKind::Criteria),
                (no_anomalies, SectionKind::Anomalies),
                (no_recommendations, SectionKind::Recommendations),
            ]
            .into_iter()
            .filter_map(|(off, kind)| off.then_some(kind))
            .collect();

            commands::handle_report(ReportConfig {
                project,
                language: lang.map(Into::into),
                excluded,
                format: format.map(Into::into),
                output,
                formatting: FormattingConfig::for_cli(plain),
            })
        }
        Commands::SetStatus {
            criterion,
            status,
            project,
            save,
        } => commands::handle_set_status(SetStatusConfig {
            project,
            criterion,
            status: status.into(),
            save,
        }),
        Commands::Upload {
            files,
            project,
            save,
            seed,
        } => commands::handle_upload(UploadConfig {
            files,
            project,
            save,
            seed,
        }),
        Commands::Prefs {
            theme,
            toggle_theme,
            language,
        } => commands::handle_prefs(PrefsConfig {
            theme: theme.map(Into::into),
            toggle_theme,
            language: language.map(Into::into),
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
