use crate::domain::model::{OutputFormat, Report};
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::io;

/// 將報告逐列寫到 `sink`，不先在記憶體中組出完整輸出
pub fn render<S: ReportSink>(report: &Report, format: OutputFormat, sink: &mut S) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, sink),
        OutputFormat::Json => render_json(report, sink),
        OutputFormat::Csv => render_csv(report, sink),
    }
}

pub fn render_text<S: ReportSink>(report: &Report, sink: &mut S) -> Result<()> {
    for row in report.rows() {
        sink.write_output(format!("{}\n", row).as_bytes())?;
    }
    sink.write_output(format!("{}\n", report.summary_line()).as_bytes())
}

pub fn render_json<S: ReportSink>(report: &Report, sink: &mut S) -> Result<()> {
    serde_json::to_writer_pretty(SinkWriter(&mut *sink), report)?;
    sink.write_output(b"\n")
}

pub fn render_csv<S: ReportSink>(report: &Report, sink: &mut S) -> Result<()> {
    {
        // 表頭手動寫入，limit < 1 時仍保留
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(SinkWriter(&mut *sink));
        writer.write_record(["multiplier", "number", "product"])?;
        for row in report.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    sink.write_output(format!("\n{}\n", report.summary_line()).as_bytes())
}

/// 讓 serde_json / csv 的 writer 直接寫進 `ReportSink`
struct SinkWriter<'a, S: ReportSink>(&'a mut S);

impl<S: ReportSink> io::Write for SinkWriter<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_output(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
