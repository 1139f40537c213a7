pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use crate::core::{convert, etl::ConversionEngine, pipeline::CsvJsonPipeline};
pub use domain::model::{ConversionRequest, ConversionSummary};
pub use utils::error::{ConvertError, Result};
