//! Command line argument parsing for the spamprep CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spamprep - prepare SMS spam/ham data for model training
#[derive(Parser, Debug, Clone)]
#[command(name = "spamprep")]
#[command(about = "Ingest, preprocess and vectorize a labeled SMS corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamprepArgs {
    /// Verbosity level (-v=warn, -vv=info, -vvv=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Pipeline parameters file
    #[arg(
        short = 'p',
        long = "params",
        value_name = "PARAMS_FILE",
        default_value = "params.yaml",
        env = "SPAMPREP_PARAMS"
    )]
    pub params: PathBuf,

    /// Root data directory (overrides paths.data_dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Also append log lines to this file
    #[arg(long, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamprepArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load the raw corpus and write the train/test split
    Ingest(IngestArgs),

    /// Deduplicate, encode labels and normalize text
    Preprocess,

    /// Fit TF-IDF on train and vectorize both splits
    Features,

    /// Run all stages in order
    Run(IngestArgs),

    /// Print the normalized form of each text
    Normalize(NormalizeArgs),
}

/// Arguments for commands that ingest a source
#[derive(Parser, Debug, Clone, Default)]
pub struct IngestArgs {
    /// Raw CSV to ingest (overrides data_ingestion.source)
    #[arg(short, long, value_name = "SOURCE_FILE")]
    pub source: Option<PathBuf>,
}

/// Arguments for normalizing ad-hoc text
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Texts to normalize
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_command() {
        let args = SpamprepArgs::try_parse_from([
            "spamprep",
            "--params",
            "conf/params.yaml",
            "ingest",
            "--source",
            "spam.csv",
        ])
        .unwrap();

        assert_eq!(args.params, PathBuf::from("conf/params.yaml"));
        if let Command::Ingest(ingest_args) = args.command {
            assert_eq!(ingest_args.source, Some(PathBuf::from("spam.csv")));
        } else {
            panic!("Expected Ingest command");
        }
    }

    #[test]
    fn test_run_command_defaults() {
        let args = SpamprepArgs::try_parse_from(["spamprep", "run"]).unwrap();

        assert_eq!(args.params, PathBuf::from("params.yaml"));
        assert!(args.data_dir.is_none());
        assert!(args.log_file.is_none());
        if let Command::Run(run_args) = args.command {
            assert!(run_args.source.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_normalize_command() {
        let args =
            SpamprepArgs::try_parse_from(["spamprep", "normalize", "Win cash now!!!", "Call me"])
                .unwrap();

        if let Command::Normalize(normalize_args) = args.command {
            assert_eq!(normalize_args.texts, vec!["Win cash now!!!", "Call me"]);
        } else {
            panic!("Expected Normalize command");
        }

        assert!(SpamprepArgs::try_parse_from(["spamprep", "normalize"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = SpamprepArgs::try_parse_from(["spamprep", "features"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = SpamprepArgs::try_parse_from(["spamprep", "-vv", "features"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SpamprepArgs::try_parse_from(["spamprep", "-vvv", "features"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args = SpamprepArgs::try_parse_from(["spamprep", "-q", "-vv", "features"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_options() {
        let args = SpamprepArgs::try_parse_from([
            "spamprep",
            "--format",
            "json",
            "--pretty",
            "--data-dir",
            "/tmp/data",
            "--log-file",
            "logs/pipeline.log",
            "preprocess",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(args.log_file, Some(PathBuf::from("logs/pipeline.log")));
        assert!(matches!(args.command, Command::Preprocess));
    }
}
