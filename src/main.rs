use clap::Parser;
use feature_matrix::utils::{logger, validation::Validate};
use feature_matrix::{CargoManifest, CliConfig, LogFormat, MatrixEngine, MatrixError};

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("Feature matrix failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> Result<(), MatrixError> {
    config.validate()?;

    let reader = CargoManifest::new(&config.manifest_path);
    let sink = config.sink_selector().into_sink();

    MatrixEngine::new(reader, sink).with_order(config.order).run()?;
    Ok(())
}
