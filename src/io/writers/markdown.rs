use crate::core::Result;
use crate::io::output::{RenderMeta, ReportWriter};
use crate::report::{
    AnomalyEntry, CriterionRow, GroupScoreRow, Page, RecommendationEntry, ReportDocument,
    ReportLabels, Section, SectionContent, SummaryContent,
};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()> {
        let labels = report.labels();
        for page in report.pages() {
            if page.is_cover() {
                self.write_cover(report, labels, meta)?;
            } else {
                writeln!(self.writer)?;
                writeln!(self.writer, "---")?;
                writeln!(self.writer)?;
            }
            self.write_page(&page, labels)?;
            writeln!(
                self.writer,
                "_{} · {}_",
                report.cover.footer,
                labels.page_footer(page.number, report.page_count)
            )?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_cover(
        &mut self,
        report: &ReportDocument,
        labels: &ReportLabels,
        meta: &RenderMeta,
    ) -> Result<()> {
        writeln!(self.writer, "# {}", report.cover.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", report.cover.project_name)?;
        if !report.cover.client.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", report.cover.client)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            labels.generated_on,
            report.language.format_date(meta.generated_on)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_page(&mut self, page: &Page<'_>, labels: &ReportLabels) -> Result<()> {
        for section in &page.sections {
            self.write_section(section, labels)?;
        }
        Ok(())
    }

    fn write_section(&mut self, section: &Section, labels: &ReportLabels) -> Result<()> {
        writeln!(self.writer, "## {}", section.title)?;
        writeln!(self.writer)?;
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
            "| {} | {} | {} | {} |",
            labels.global_score, labels.models, labels.criteria, labels.anomalies
        )?;
        writeln!(self.writer, "|---:|---:|---:|---:|")?;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            summary.global_score, summary.models, summary.criteria, summary.anomalies
        )?;
        Ok(())
    }

    fn write_scores(&mut self, rows: &[GroupScoreRow], labels: &ReportLabels) -> Result<()> {
        writeln!(self.writer, "| {} | {} | |", labels.group, labels.score)?;
        writeln!(self.writer, "|--------|------:|:---|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {}/{} |",
                row.label, row.score, row.validated, row.total
            )?;
        }
        Ok(())
    }

    fn write_criteria(&mut self, rows: &[CriterionRow], labels: &ReportLabels) -> Result<()> {
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            labels.criterion, labels.group, labels.status
        )?;
        writeln!(self.writer, "|----------|-------|--------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                escape_cell(&row.name),
                row.group_label,
                row.status_label
            )?;
        }
        Ok(())
    }

    fn write_anomalies(&mut self, entries: &[AnomalyEntry], labels: &ReportLabels) -> Result<()> {
        for entry in entries {
            writeln!(
                self.writer,
                "- **{}: {}** {}",
                labels.severity,
                entry.severity.as_str().to_uppercase(),
                entry.description
            )?;
            if let Some(location) = &entry.location {
                writeln!(self.writer, "  - {}: {}", labels.location, location)?;
            }
        }
        Ok(())
    }

    fn write_recommendations(&mut self, entries: &[RecommendationEntry]) -> Result<()> {
        for entry in entries {
            writeln!(self.writer, "### {}", entry.criterion)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", entry.recommendation)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
