pub mod classify;
pub mod engine;
pub mod pipeline;
pub mod render;
pub mod table;

pub use crate::domain::model::{Report, StudyInput};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline, ReportSink};
pub use crate::utils::error::Result;
