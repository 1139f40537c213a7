use crate::domain::model::ConversionRequest;
use crate::domain::ports::ConfigProvider;
use std::path::Path;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_input_exists, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "data/arabica_data_cleaned.csv";
pub const DEFAULT_INDENT: usize = 4;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "csv2json")]
#[command(about = "Convert CSV file to JSON format")]
pub struct CliConfig {
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH, help = "Input CSV file path")]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        help = "Output JSON file path (default: same as input with .json extension)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT, help = "JSON indentation level")]
    pub indent: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per conversion phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn into_request(self) -> ConversionRequest {
        ConversionRequest::new(self.input, self.output, self.indent)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        validate_input_exists(&self.input)
    }
}

impl ConfigProvider for ConversionRequest {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn output_path(&self) -> &Path {
        &self.output
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::ConvertError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["csv2json"]);
        assert_eq!(config.input, Path::new(DEFAULT_INPUT_PATH));
        assert_eq!(config.output, None);
        assert_eq!(config.indent, 4);

        let request = config.into_request();
        assert_eq!(request.output, Path::new("data/arabica_data_cleaned.json"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let config = CliConfig::parse_from([
            "csv2json", "-i", "in.csv", "--output", "out.json", "--indent", "2",
        ]);
        let request = config.into_request();
        assert_eq!(request.input, Path::new("in.csv"));
        assert_eq!(request.output, Path::new("out.json"));
        assert_eq!(request.indent(), 2);
    }

    #[test]
    fn test_negative_indent_is_rejected() {
        assert!(CliConfig::try_parse_from(["csv2json", "--indent", "-1"]).is_err());
    }

    #[test]
    fn test_validate_reports_missing_input() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::parse_from([
            "csv2json".into(),
            "-i".into(),
            dir.path().join("missing.csv").into_os_string(),
        ]);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConvertError::InputNotFound { .. }
        ));
    }
}
