use crate::core::classify::classify_number;
use crate::core::render::render;
use crate::core::{ConfigProvider, InputSource, Pipeline, Report, ReportSink, StudyInput};
use crate::utils::error::Result;

/// 由輸入計算報告：質數判斷在此完成，乘法表的列於輸出時才產生
pub fn build_report(input: StudyInput) -> Report {
    Report {
        number: input.number,
        limit: input.limit,
        classification: classify_number(input.number),
    }
}

pub struct StudyPipeline<T: InputSource + ReportSink, C: ConfigProvider> {
    console: T,
    config: C,
}

impl<T: InputSource + ReportSink, C: ConfigProvider> StudyPipeline<T, C> {
    pub fn new(console: T, config: C) -> Self {
        Self { console, config }
    }

    pub fn into_console(self) -> T {
        self.console
    }

    fn resolve(&mut self, field: &str, preset: Option<i32>) -> Result<i32> {
        match preset {
            Some(value) => {
                tracing::debug!("Using preset {} = {}", field, value);
                Ok(value)
            }
            None => self.console.read_integer(field),
        }
    }
}

impl<T: InputSource + ReportSink, C: ConfigProvider> Pipeline for StudyPipeline<T, C> {
    fn extract(&mut self) -> Result<StudyInput> {
        let number = self.resolve("Number", self.config.preset_number())?;
        let limit = self.resolve("Limit", self.config.preset_limit())?;
        Ok(StudyInput { number, limit })
    }

    fn transform(&self, input: StudyInput) -> Result<Report> {
        Ok(build_report(input))
    }

    fn load(&mut self, report: &Report) -> Result<()> {
        let format = self.config.format();
        tracing::debug!("Rendering {} rows as {}", report.row_count(), format);

        render(report, format, &mut self.console)?;
        self.console.finish()
    }
}
