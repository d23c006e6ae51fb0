use crate::domain::model::{OutputFormat, Report, StudyInput};
use crate::utils::error::Result;

/// 讀取使用者輸入的整數（主控台或其他來源）
pub trait InputSource {
    fn read_integer(&mut self, field: &str) -> Result<i32>;
}

/// 報告輸出端：每一列各呼叫一次 `write_output`，結束時呼叫 `finish`
pub trait ReportSink {
    fn write_output(&mut self, data: &[u8]) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub trait ConfigProvider {
    fn preset_number(&self) -> Option<i32>;
    fn preset_limit(&self) -> Option<i32>;
    fn output_format(&self) -> Option<OutputFormat>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;

    fn format(&self) -> OutputFormat {
        self.output_format().unwrap_or_default()
    }
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<StudyInput>;
    fn transform(&self, input: StudyInput) -> Result<Report>;
    fn load(&mut self, report: &Report) -> Result<()>;
}
