//! ubx2csv CLI - convert UBX captures to CSV
//!
//! One conversion per input file. A failing file is reported and the rest
//! still run.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ubx2csv::{Export, convert_file};

/// Extract UBX-NAV-HPPOSLLH positions from u-blox captures as CSV
#[derive(Parser, Debug)]
#[command(name = "ubx2csv", version, about, long_about = None)]
struct Cli {
    /// UBX capture files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the CSV files are written to
    #[arg(short, long, env = "UBX2CSV_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Print CSV to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Log filter, e.g. `info` or `ubx2csv=debug`
    #[arg(long, env = "UBX2CSV_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .init();

    if convert_all(&cli) == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Convert every input, returning how many failed.
fn convert_all(cli: &Cli) -> usize {
    let mut failures = 0;
    for input in &cli.inputs {
        if let Err(err) = run(cli, input) {
            eprintln!("{}: {err:#}", input.display());
            failures += 1;
        }
    }
    failures
}

fn run(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let export = convert_file(input, &Local::now())?;

    if cli.stdout {
        let mut out = io::stdout().lock();
        out.write_all(export.content.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let path = write_export(&cli.output_dir, &export)?;
    println!(
        "{} -> {} ({} records)",
        input.display(),
        path.display(),
        export.stats.records
    );
    Ok(())
}

fn write_export(dir: &Path, export: &Export) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create {}", dir.display()))?;

    let path = unique_path(dir, &export.filename);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(path)
}

/// Names have second resolution; append `_N` rather than clobber an earlier file.
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = filename.rsplit_once('.').unwrap_or((filename, ""));
    (1..)
        .map(|n| dir.join(format!("{stem}_{n}.{ext}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
