use crate::core::{Pipeline, Report};
use crate::utils::error::Result;
use std::time::Instant;

pub struct StudyEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StudyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    pub fn run(&mut self) -> Result<Report> {
        let started = Instant::now();

        // Extract
        tracing::debug!("Reading input...");
        let input = self.pipeline.extract()?;
        tracing::debug!("Read number = {}, limit = {}", input.number, input.limit);

        // Transform
        let report = self.pipeline.transform(input)?;
        tracing::debug!(
            "Prepared {} rows, {} is {}",
            report.row_count(),
            report.number,
            report.classification
        );

        // Load
        self.pipeline.load(&report)?;
        tracing::debug!("⏱️ Finished in {:?}", started.elapsed());

        Ok(report)
    }
}
