pub mod toml_config;

use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "times-table")]
#[command(about = "Print a multiplication table and classify the number as prime or composite")]
pub struct CliConfig {
    /// Number to study (skips the "Number" prompt)
    #[arg(short, long, allow_negative_numbers = true)]
    pub number: Option<i32>,

    /// Number of table rows (skips the "Limit" prompt)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log records as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn preset_number(&self) -> Option<i32> {
        self.number
    }

    fn preset_limit(&self) -> Option<i32> {
        self.limit
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

/// 合併後的設定：設定檔在下、命令列在上
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub number: Option<i32>,
    pub limit: Option<i32>,
    pub format: Option<OutputFormat>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    /// 以 `provider` 中有設定的值覆蓋目前的值
    pub fn overlay<P: ConfigProvider>(self, provider: &P) -> Self {
        Self {
            number: provider.preset_number().or(self.number),
            limit: provider.preset_limit().or(self.limit),
            format: provider.output_format().or(self.format),
            verbose: self.verbose || provider.verbose(),
            json_logs: self.json_logs || provider.json_logs(),
        }
    }
}

impl ConfigProvider for Settings {
    fn preset_number(&self) -> Option<i32> {
        self.number
    }

    fn preset_limit(&self) -> Option<i32> {
        self.limit
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}
