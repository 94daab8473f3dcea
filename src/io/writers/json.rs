use crate::core::Result;
use crate::io::output::{RenderMeta, ReportWriter};
use crate::report::ReportDocument;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    meta: &'a RenderMeta,
    #[serde(flatten)]
    report: &'a ReportDocument,
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ReportDocument, meta: &RenderMeta) -> Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport { meta, report })?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::core::Language;
    use crate::report::{compose, SectionToggles};
    use crate::scoring::Percentage;
    use crate::store::fixtures::demo_project;
    use chrono::NaiveDate;

    #[test]
    fn test_json_shape() {
        let doc = compose(
            &demo_project(),
            Percentage::new(56),
            Language::En,
            SectionToggles::all(),
        );
        let meta = RenderMeta::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), Theme::Dark);

        let mut out = Vec::new();
        JsonWriter::new(&mut out).write_report(&doc, &meta).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["generated_on"], "2024-01-15");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["page_count"], 4);
        assert_eq!(value["sections"][0]["kind"], "summary");
        assert_eq!(value["sections"][0]["content"]["type"], "summary");
        assert_eq!(value["sections"][0]["content"]["data"]["global_score"], 56);
        assert_eq!(value["sections"][4]["page"], 4);
    }
}
