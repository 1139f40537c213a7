pub mod etl;
pub mod inference;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{ConversionRequest, ConversionSummary, Record, Table, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::adapters::LocalStorage;
use etl::ConversionEngine;
use pipeline::CsvJsonPipeline;
use std::path::Path;

/// Converts the CSV file at `input` into a JSON array written to `output`.
pub fn convert(input: &Path, output: &Path, indent: usize) -> Result<ConversionSummary> {
    let request = ConversionRequest::new(input, Some(output.to_path_buf()), indent);
    let pipeline = CsvJsonPipeline::new(LocalStorage::new(), request);
    ConversionEngine::new(pipeline).run()
}
