use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kick_tablegen::{convert_file, emit_mod, validate_inputs, MAX_SECONDS};

#[derive(Parser, Debug)]
#[command(
    name = "kick-tablegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert mono 16-bit PCM WAV files to Rust sample table modules",
    long_about = None,
)]
struct Cli {
    /// WAV files to convert, in ordinal order
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Output directory for generated modules
    #[arg(short, long, default_value = "kick-samples/src/samples")]
    out_dir: PathBuf,
    /// Maximum seconds kept per file (longer input is truncated)
    #[arg(long, default_value_t = MAX_SECONDS)]
    max_seconds: u32,
    /// Ordinal of the first file (file K becomes sampleNN with NN = start + K)
    #[arg(long, default_value = "1")]
    start_index: usize,
    /// Regenerate mod.rs from the modules present in the output directory
    #[arg(long)]
    emit_mod: bool,
    /// Show per-chunk parsing details
    #[arg(short, long)]
    verbose: bool,
    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp(None)
        .init();

    validate_inputs(&cli.files)?;

    for (k, path) in cli.files.iter().enumerate() {
        convert_file(path, cli.start_index + k, &cli.out_dir, cli.max_seconds)
            .with_context(|| format!("failed to convert {}", path.display()))?;
    }

    if cli.emit_mod {
        emit_mod(&cli.out_dir)
            .with_context(|| format!("failed to write mod.rs in {}", cli.out_dir.display()))?;
    }

    Ok(())
}
