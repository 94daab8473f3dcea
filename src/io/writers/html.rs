use crate::config::Theme;
use crate::core::{Result, Severity};
use crate::io::output::{RenderMeta, ReportWriter};
use crate::report::{
    AnomalyEntry, CriterionRow, GroupScoreRow, Page, RecommendationEntry, ReportDocument,
    ReportLabels, Section, SectionContent, SummaryContent,
};
use html_escape::encode_text;
use std::io::Write;

/// Printable HTML, one `.page` block per report page sized for A4.
pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

struct Palette {
    background: &'static str,
    surface: &'static str,
    text: &'static str,
    muted: &'static str,
    accent: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: "#ffffff",
            surface: "#f8fafc",
            text: "#0f172a",
            muted: "#64748b",
            accent: "#0369a1",
        },
        Theme::Dark => Palette {
            background: "#0f172a",
            surface: "#1e293b",
            text: "#f1f5f9",
            muted: "#94a3b8",
            accent: "#7dd3fc",
        },
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "#22c55e",
        Severity::Medium => "#f59e0b",
        Severity::High => "#ef4444",
        Severity::Critical => "#dc2626",
    }
}

impl<W: Write> ReportWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()> {
        let labels = report.labels();
        self.write_head(report, meta)?;
        for page in report.pages() {
            self.write_page(report, &page, labels, meta)?;
        }
        writeln!(self.writer, "</body>\n</html>")?;
        Ok(())
    }
}

impl<W: Write> HtmlWriter<W> {
    fn write_head(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()> {
        let colors = palette(meta.theme);
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html lang=\"{}\">", report.language)?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(
            self.writer,
            "<title>{} - {}</title>",
            encode_text(&report.cover.title),
            encode_text(&report.cover.project_name)
        )?;
        writeln!(
            self.writer,
            "<style>\n\
             @page {{ size: A4; margin: 0; }}\n\
             body {{ margin: 0; font-family: Inter, Helvetica, Arial, sans-serif; background: {bg}; color: {text}; }}\n\
             .page {{ width: 210mm; min-height: 297mm; box-sizing: border-box; padding: 40px; position: relative; page-break-after: always; }}\n\
             .card {{ background: {surface}; border-radius: 8px; padding: 16px; margin-bottom: 16px; }}\n\
             .muted {{ color: {muted}; }}\n\
             .ring {{ width: 120px; height: 120px; border-radius: 50%; border: 8px solid; display: flex; flex-direction: column; align-items: center; justify-content: center; margin: 0 auto; }}\n\
             .bar {{ background: {muted}33; height: 8px; border-radius: 4px; width: 200px; display: inline-block; }}\n\
             .bar > span {{ display: block; height: 8px; border-radius: 4px; }}\n\
             table {{ width: 100%; border-collapse: collapse; }}\n\
             th, td {{ text-align: left; padding: 6px 8px; }}\n\
             tr:nth-child(even) td {{ background: {surface}; }}\n\
             .anomaly {{ border-left: 4px solid; padding-left: 12px; margin-bottom: 12px; }}\n\
             h3 {{ color: {accent}; }}\n\
             footer {{ position: absolute; bottom: 24px; left: 40px; right: 40px; display: flex; justify-content: space-between; font-size: 10px; color: {muted}; }}\n\
             </style>",
            bg = colors.background,
            text = colors.text,
            surface = colors.surface,
            muted = colors.muted,
            accent = colors.accent,
        )?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        Ok(())
    }

    fn write_page(
        &mut self,
        report: &ReportDocument,
        page: &Page<'_>,
        labels: &ReportLabels,
        meta: &RenderMeta,
    ) -> Result<()> {
        writeln!(self.writer, "<section class=\"page\" id=\"page-{}\">", page.number)?;
        if page.is_cover() {
            writeln!(
                self.writer,
                "<p class=\"muted\">{} {}</p>",
                encode_text(labels.generated_on),
                report.language.format_date(meta.generated_on)
            )?;
            writeln!(self.writer, "<h1>{}</h1>", encode_text(&report.cover.title))?;
            writeln!(
                self.writer,
                "<h2 class=\"muted\">{}</h2>",
                encode_text(&report.cover.project_name)
            )?;
            if !report.cover.client.is_empty() {
                writeln!(
                    self.writer,
                    "<p class=\"muted\">{}</p>",
                    encode_text(&report.cover.client)
                )?;
            }
        }
        for section in &page.sections {
            self.write_section(section, labels)?;
        }
        writeln!(
            self.writer,
            "<footer><span>{}</span><span>{}</span></footer>",
            encode_text(&report.cover.footer),
            labels.page_footer(page.number, report.page_count)
        )?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }

    fn write_section(&mut self, section: &Section, labels: &ReportLabels) -> Result<()> {
        writeln!(
            self.writer,
            "<h2 data-section=\"{}\">{}</h2>",
            section.kind.as_str(),
            encode_text(&section.title)
        )?;
        match &section.content {
            SectionContent::Summary(summary) => self.write_summary(summary, labels),
            SectionContent::Scores(rows) => self.write_scores(rows),
            SectionContent::Criteria(rows) => self.write_criteria(rows, labels),
            SectionContent::Anomalies(entries) => self.write_anomalies(entries, labels),
            SectionContent::Recommendations(entries) => self.write_recommendations(entries),
        }
    }

    fn write_summary(&mut self, summary: &SummaryContent, labels: &ReportLabels) -> Result<()> {
        let color = summary.band.color();
        writeln!(self.writer, "<div class=\"card\">")?;
        writeln!(
            self.writer,
            "<div class=\"ring\" style=\"border-color: {color}\"><strong style=\"color: {color}; font-size: 28px\">{}</strong><span class=\"muted\">{}</span></div>",
            summary.global_score,
            encode_text(labels.global_score)
        )?;
        writeln!(self.writer, "<table><tr>")?;
        for (value, label) in [
            (summary.models, labels.models),
            (summary.criteria, labels.criteria),
            (summary.anomalies, labels.anomalies),
        ] {
            writeln!(
                self.writer,
                "<td><strong>{value}</strong><br><span class=\"muted\">{}</span></td>",
                encode_text(label)
            )?;
        }
        writeln!(self.writer, "</tr></table>")?;
        writeln!(self.writer, "</div>")?;
        Ok(())
    }

    fn write_scores(&mut self, rows: &[GroupScoreRow]) -> Result<()> {
        writeln!(self.writer, "<div class=\"card\"><table>")?;
        for row in rows {
            let color = row.band.color();
            writeln!(
                self.writer,
                "<tr><td>{}</td><td><span class=\"bar\"><span style=\"width: {}%; background: {color}\"></span></span></td><td style=\"color: {color}; text-align: right\">{}</td></tr>",
                encode_text(&row.label),
                row.score.value(),
                row.score
            )?;
        }
        writeln!(self.writer, "</table></div>")?;
        Ok(())
    }

    fn write_criteria(&mut self, rows: &[CriterionRow], labels: &ReportLabels) -> Result<()> {
        writeln!(self.writer, "<table>")?;
        writeln!(
            self.writer,
            "<tr><th>{}</th><th>{}</th><th>{}</th></tr>",
            encode_text(labels.criterion),
            encode_text(labels.group),
            encode_text(labels.status)
        )?;
        for row in rows {
            writeln!(
                self.writer,
                "<tr><td>{}</td><td>{}</td><td class=\"status-{}\">{}</td></tr>",
                encode_text(&row.name),
                encode_text(&row.group_label),
                row.status,
                encode_text(&row.status_label)
            )?;
        }
        writeln!(self.writer, "</table>")?;
        Ok(())
    }

    fn write_anomalies(&mut self, entries: &[AnomalyEntry], labels: &ReportLabels) -> Result<()> {
        for entry in entries {
            writeln!(
                self.writer,
                "<div class=\"card anomaly\" style=\"border-left-color: {}\">",
                severity_color(entry.severity)
            )?;
            writeln!(
                self.writer,
                "<strong>{}: {}</strong>",
                encode_text(labels.severity),
                entry.severity.as_str().to_uppercase()
            )?;
            writeln!(self.writer, "<p>{}</p>", encode_text(&entry.description))?;
            if let Some(location) = &entry.location {
                writeln!(
                    self.writer,
                    "<p class=\"muted\">{}: {}</p>",
                    encode_text(labels.location),
                    encode_text(location)
                )?;
            }
            writeln!(self.writer, "</div>")?;
        }
        Ok(())
    }

    fn write_recommendations(&mut self, entries: &[RecommendationEntry]) -> Result<()> {
        for entry in entries {
            writeln!(self.writer, "<div class=\"card\">")?;
            writeln!(self.writer, "<h3>{}</h3>", encode_text(&entry.criterion))?;
            writeln!(self.writer, "<p>{}</p>", encode_text(&entry.recommendation))?;
            writeln!(self.writer, "</div>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::report::{compose, SectionToggles};
    use crate::scoring::Percentage;
    use crate::store::fixtures::demo_project;
    use chrono::NaiveDate;

    fn render(theme: Theme) -> String {
        let doc = compose(
            &demo_project(),
            Percentage::new(56),
            Language::Fr,
            SectionToggles::all(),
        );
        let meta = RenderMeta::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), theme);
        let mut out = Vec::new();
        HtmlWriter::new(&mut out).write_report(&doc, &meta).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_one_page_block_per_page() {
        let html = render(Theme::Light);
        assert_eq!(html.matches("<section class=\"page\"").count(), 4);
        assert!(html.contains("id=\"page-4\""));
        assert!(html.contains("Page 4 sur 4"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(Theme::Light);
        assert!(html.contains("SNCF Gares &amp; Connexions"));
        assert!(!html.contains("Gares & Connexions"));
    }

    #[test]
    fn test_theme_changes_palette() {
        assert!(render(Theme::Dark).contains("background: #0f172a"));
        assert!(render(Theme::Light).contains("background: #ffffff"));
    }
}
