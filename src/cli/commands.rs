//! Command implementations for the spamprep CLI.

use log::{error, info};

use crate::analysis::TextNormalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::{self, feature_engineering, ingestion, preprocessing};

/// Execute a CLI command.
///
/// Failures are logged at error level before being returned.
pub fn execute_command(args: SpamprepArgs) -> Result<()> {
    let result = match &args.command {
        Command::Ingest(ingest_args) => run_ingest(ingest_args, &args),
        Command::Preprocess => run_preprocess(&args),
        Command::Features => run_features(&args),
        Command::Run(ingest_args) => run_pipeline(ingest_args, &args),
        Command::Normalize(normalize_args) => normalize_texts(normalize_args, &args),
    };

    if let Err(e) = &result {
        error!("{e}");
    }
    result
}

/// Load parameters and apply the command line overrides.
pub fn load_config(cli_args: &SpamprepArgs, source: Option<&IngestArgs>) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::load(&cli_args.params)?;

    if let Some(data_dir) = &cli_args.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(source) = source.and_then(|ingest_args| ingest_args.source.as_ref()) {
        config = config.with_source(source);
    }

    Ok(config)
}

/// Run the ingestion stage.
fn run_ingest(args: &IngestArgs, cli_args: &SpamprepArgs) -> Result<()> {
    let config = load_config(cli_args, Some(args))?;
    info!("Starting data ingestion");

    let report = ingestion::run(&config)?;
    output_result("Data ingestion completed", &report, cli_args)
}

/// Run the preprocessing stage.
fn run_preprocess(cli_args: &SpamprepArgs) -> Result<()> {
    let config = load_config(cli_args, None)?;
    info!("Starting data preprocessing");

    let report = preprocessing::run(&config)?;
    output_result("Data preprocessing completed", &report, cli_args)
}

/// Run the feature engineering stage.
fn run_features(cli_args: &SpamprepArgs) -> Result<()> {
    let config = load_config(cli_args, None)?;
    info!("Starting feature engineering");

    let report = feature_engineering::run(&config)?;
    output_result("Feature engineering completed", &report, cli_args)
}

/// Run every stage in order.
fn run_pipeline(args: &IngestArgs, cli_args: &SpamprepArgs) -> Result<()> {
    let config = load_config(cli_args, Some(args))?;
    info!("Starting full pipeline run");

    let report = pipeline::run_all(&config)?;
    output_result("Pipeline completed", &report, cli_args)
}

/// Normalize the given texts without touching any data files.
fn normalize_texts(args: &NormalizeArgs, cli_args: &SpamprepArgs) -> Result<()> {
    let normalizer = TextNormalizer::new();

    let normalized = args
        .texts
        .iter()
        .map(|text| {
            Ok(NormalizedText {
                input: text.clone(),
                output: normalizer.normalize(text)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Normalized texts",
        &NormalizationResult { normalized },
        cli_args,
    )
}
