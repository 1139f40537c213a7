use clap::Parser;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{CliConfig, ConversionEngine, CsvJsonPipeline, LocalStorage};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Nothing is read before the input path is known to exist.
    if let Err(e) = config.validate() {
        tracing::debug!("Validation failed ({:?}): {}", e.category(), e.recovery_suggestion());
        eprintln!("Error: {}", e.user_friendly_message());
        return ExitCode::FAILURE;
    }

    let monitor_enabled = config.monitor;
    let request = config.into_request();
    let pipeline = CsvJsonPipeline::new(LocalStorage::new(), request);
    let engine = ConversionEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(summary) => {
            println!(
                "Success: CSV file has been converted to JSON and saved as {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Conversion failed: {} (category: {:?})", e, e.category());
            tracing::info!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("Error: {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}
