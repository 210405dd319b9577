//! spamprep CLI binary.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::process;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use spamprep::cli::args::*;
use spamprep::cli::commands::*;

/// Writes every log line to stderr and to the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logging(args: &SpamprepArgs) -> anyhow::Result<()> {
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    let mut builder = Builder::new();
    builder.filter_level(log_level).format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.target(),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = &args.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init().context("failed to initialize logger")?;
    Ok(())
}

fn main() {
    let args = SpamprepArgs::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    // The error itself is already logged by execute_command.
    if execute_command(args).is_err() {
        process::exit(1);
    }
}
