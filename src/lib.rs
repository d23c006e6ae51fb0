pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::Console;
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::classify::classify_number;
pub use crate::core::table::multiplication_table;
pub use crate::core::{engine::StudyEngine, pipeline::StudyPipeline};
pub use domain::model::{Classification, OutputFormat, Report, StudyInput, TableRow};
pub use utils::error::{Result, StudyError};
