use crate::core::reader::parse_table;
use crate::core::writer::render_json;
use crate::core::{ConfigProvider, Pipeline, Storage, Table, TransformResult};
use crate::domain::model::SYNTHETIC_INDEX_COLUMN;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct CsvJsonPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvJsonPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvJsonPipeline<S, C> {
    fn extract(&self) -> Result<Table> {
        let input = self.config.input_path();
        tracing::debug!("Reading CSV from {}", input.display());

        let data = self.storage.read_file(input)?;
        tracing::debug!("Read {} bytes", data.len());

        parse_table(&data)
    }

    fn transform(&self, mut table: Table) -> Result<TransformResult> {
        let dropped_index = table.drop_column(SYNTHETIC_INDEX_COLUMN);
        if dropped_index {
            tracing::debug!("Dropped synthetic index column '{}'", SYNTHETIC_INDEX_COLUMN);
        }

        Ok(TransformResult {
            records: table.into_records(),
            dropped_index,
        })
    }

    fn load(&self, result: TransformResult) -> Result<PathBuf> {
        let output = self.config.output_path();
        let json = render_json(&result.records, self.config.indent())?;

        tracing::debug!("Writing {} bytes to {}", json.len(), output.display());
        self.storage.write_file(output, &json)?;

        Ok(output.to_path_buf())
    }
}
