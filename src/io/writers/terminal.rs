use crate::core::Result;
use crate::formatting::{paint_band, paint_severity, FormattingConfig};
use crate::io::output::{RenderMeta, ReportWriter};
use crate::report::{
    AnomalyEntry, CriterionRow, GroupScoreRow, RecommendationEntry, ReportDocument, ReportLabels,
    Section, SectionContent, SummaryContent,
};
use crate::scoring::ScoreBand;
use colored::*;
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const ASCII_RULE: &str = "===========================================";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }

    fn rule(&self) -> &'static str {
        if self.formatting.emoji.should_use_emoji() {
            RULE
        } else {
            ASCII_RULE
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.formatting.emoji.should_use_emoji() {
            table.load_preset(presets::UTF8_FULL);
        } else {
            table.load_preset(presets::ASCII_FULL);
        }
        if self.formatting.color.should_use_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Good => Color::Green,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()> {
        let labels = report.labels();
        let rule = self.rule();

        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer, "  {}", report.cover.title.bold().cyan())?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer, "{}", report.cover.project_name.bold())?;
        if !report.cover.client.is_empty() {
            writeln!(self.writer, "{}", report.cover.client.dimmed())?;
        }
        writeln!(
            self.writer,
            "{} {}",
            labels.generated_on,
            report.language.format_date(meta.generated_on)
        )?;

        for page in report.pages() {
            writeln!(self.writer)?;
            for section in &page.sections {
                self.write_section(section, labels)?;
            }
            writeln!(
                self.writer,
                "{}",
                format!(
                    "{} · {}",
                    report.cover.footer,
                    labels.page_footer(page.number, report.page_count)
                )
                .dimmed()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_section(&mut self, section: &Section, labels: &ReportLabels) -> Result<()> {
        writeln!(self.writer, "{}", section.title.bold())?;
        match &section.content {
            SectionContent::Summary(summary) => self.write_summary(summary, labels)?,
            SectionContent::Scores(rows) => self.write_scores(rows, labels)?,
            SectionContent::Criteria(rows) => self.write_criteria(rows, labels)?,
            SectionContent::Anomalies(entries) => self.write_anomalies(entries, labels)?,
            SectionContent::Recommendations(entries) => self.write_recommendations(entries)?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &SummaryContent, labels: &ReportLabels) -> Result<()> {
        writeln!(
            self.writer,
            "  {}: {}",
            labels.global_score,
            paint_band(&summary.global_score.to_string(), summary.band).bold()
        )?;
        writeln!(
            self.writer,
            "  {}: {}  {}: {}  {}: {}",
            labels.models,
            summary.models,
            labels.criteria,
            summary.criteria,
            labels.anomalies,
            summary.anomalies
        )?;
        Ok(())
    }

    fn write_scores(&mut self, rows: &[GroupScoreRow], labels: &ReportLabels) -> Result<()> {
        let mut table = self.table();
        table.set_header(vec![labels.group, labels.score, labels.criteria]);
        for row in rows {
            table.add_row(vec![
                Cell::new(&row.label),
                Cell::new(row.score)
                    .fg(band_color(row.band))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{}/{}", row.validated, row.total))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_criteria(&mut self, rows: &[CriterionRow], labels: &ReportLabels) -> Result<()> {
        let mut table = self.table();
        table.set_header(vec!["", labels.criterion, labels.group, labels.status]);
        for row in rows {
            table.add_row(vec![
                Cell::new(self.formatting.status_marker(row.status)),
                Cell::new(&row.name),
                Cell::new(&row.group_label),
                Cell::new(&row.status_label),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_anomalies(&mut self, entries: &[AnomalyEntry], labels: &ReportLabels) -> Result<()> {
        for entry in entries {
            let tag = format!("[{}]", entry.severity.as_str().to_uppercase());
            writeln!(
                self.writer,
                "  {} {}",
                paint_severity(&tag, entry.severity),
                entry.description
            )?;
            if let Some(location) = &entry.location {
                writeln!(self.writer, "      {}: {}", labels.location, location.dimmed())?;
            }
        }
        Ok(())
    }

    fn write_recommendations(&mut self, entries: &[RecommendationEntry]) -> Result<()> {
        for entry in entries {
            writeln!(self.writer, "  {}", entry.criterion.yellow().bold())?;
            writeln!(self.writer, "    {}", entry.recommendation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::core::Language;
    use crate::report::{compose, SectionKind, SectionToggles};
    use crate::scoring::Percentage;
    use crate::store::fixtures::demo_project;
    use chrono::NaiveDate;

    fn render(toggles: SectionToggles) -> String {
        let doc = compose(&demo_project(), Percentage::new(56), Language::En, toggles);
        let meta = RenderMeta::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), Theme::Light);
        let mut out = Vec::new();
        TerminalWriter::new(&mut out, FormattingConfig::plain())
            .write_report(&doc, &meta)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_lists_every_page() {
        let text = render(SectionToggles::all());
        assert!(text.contains("Gare de Val de Fontenay"));
        assert!(text.contains("Page 1 of 4"));
        assert!(text.contains("Page 4 of 4"));
        assert!(text.contains("[CRITICAL]"));
    }

    #[test]
    fn test_plain_output_uses_ascii_markers() {
        let text = render(SectionToggles::none().with(SectionKind::Criteria, true));
        assert!(text.contains("[OK]"));
        assert!(text.contains("[FAIL]"));
        assert!(!text.contains('✓'));
    }
}
