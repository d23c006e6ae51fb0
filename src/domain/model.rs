use crate::core::table::multiplication_table;
use crate::utils::error::StudyError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 乘法表的一列：`multiplier x number = product`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub multiplier: i32,
    pub number: i32,
    pub product: i32,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {}", self.multiplier, self.number, self.product)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Prime,
    Composite,
    #[serde(rename = "Neither prime nor composite")]
    Neither,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Prime => "Prime",
            Classification::Composite => "Composite",
            Classification::Neither => "Neither prime nor composite",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyInput {
    pub number: i32,
    pub limit: i32,
}

/// 一次執行的結果。乘法表的列不存放在記憶體中，由 `rows()` 逐列產生。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub number: i32,
    pub limit: i32,
    pub classification: Classification,
}

impl Report {
    pub fn rows(&self) -> impl Iterator<Item = TableRow> {
        multiplication_table(self.number, self.limit)
    }

    pub fn row_count(&self) -> usize {
        self.limit.max(0) as usize
    }

    /// 最後一行：`n is <label>`
    pub fn summary_line(&self) -> String {
        format!("{} is {}", self.number, self.classification)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Report", 4)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("limit", &self.limit)?;
        state.serialize_field("rows", &Rows(self))?;
        state.serialize_field("classification", &self.classification)?;
        state.end()
    }
}

struct Rows<'a>(&'a Report);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.rows())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = StudyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(StudyError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
