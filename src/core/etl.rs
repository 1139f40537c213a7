use crate::core::Pipeline;
use crate::domain::model::ConversionSummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs a pipeline's extract, transform and load phases in order.
pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);

        tracing::info!("Starting conversion");

        let table = self.pipeline.extract()?;
        tracing::info!(
            "Loaded {} rows with {} columns",
            table.len(),
            table.columns.len()
        );
        monitor.log_stats("Extract");

        let result = self.pipeline.transform(table)?;
        let records = result.records.len();
        let dropped_index = result.dropped_index;
        tracing::info!("Prepared {} records", records);
        monitor.log_stats("Transform");

        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path.display());
        monitor.log_stats("Load");
        monitor.log_final_stats();

        Ok(ConversionSummary {
            output_path,
            records,
            dropped_index,
        })
    }
}
