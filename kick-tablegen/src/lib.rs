//! # kick-tablegen
//!
//! Converts mono 16-bit PCM WAV files into the static Rust sample tables
//! compiled into `kick-samples`. One `sampleNN.rs` module is written per
//! input file; `--emit-mod` regenerates the `mod.rs` aggregator from the
//! modules present in the output directory.

pub mod codegen;
pub mod error;
pub mod wav;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use error::{TablegenError, TablegenResult};

/// Input files accepted per invocation.
pub const MAX_FILES: usize = 18;

/// Default duration cap per file, seconds.
pub const MAX_SECONDS: u32 = 20;

/// Validate the input file list before any file is processed.
///
/// Checks the per-invocation count cap and that every path exists, so a bad
/// argument cannot leave a partially regenerated output directory. A
/// non-`.wav` extension is only warned about.
pub fn validate_inputs(files: &[PathBuf]) -> TablegenResult<()> {
    if files.len() > MAX_FILES {
        return Err(TablegenError::TooManyFiles {
            given: files.len(),
            limit: MAX_FILES,
        });
    }
    for path in files {
        if !path.exists() {
            return Err(TablegenError::FileNotFound(path.clone()));
        }
        if path.extension().map_or(true, |e| !e.eq_ignore_ascii_case("wav")) {
            warn!("{} doesn't have a .wav extension", path.display());
        }
    }
    Ok(())
}

/// Convert one WAV file into `sampleNN.rs` under `out_dir`.
///
/// Returns the path of the written module.
pub fn convert_file(
    input: &Path,
    index: usize,
    out_dir: &Path,
    max_seconds: u32,
) -> TablegenResult<PathBuf> {
    let wav = wav::read_wav_file(input, max_seconds)?;
    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let text = codegen::table_module(index, &source_name, &wav)?;

    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(codegen::module_file_name(index)?);
    fs::write(&out_path, text)?;

    info!(
        "{}: {} bytes ({} frames at {} Hz) from {}",
        out_path.display(),
        wav.pcm.len(),
        wav.frames(),
        wav.sample_rate_hz,
        input.display()
    );
    Ok(out_path)
}

/// Regenerate `mod.rs` from the `sampleNN.rs` modules present in `out_dir`.
///
/// Returns the path of the written aggregator.
pub fn emit_mod(out_dir: &Path) -> TablegenResult<PathBuf> {
    let mut indices = Vec::new();
    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(index) = parse_module_index(&name.to_string_lossy()) {
            indices.push(index);
        } else {
            debug!("ignoring {:?}", name);
        }
    }
    indices.sort_unstable();

    let text = codegen::mod_rs(&indices)?;
    let out_path = out_dir.join("mod.rs");
    fs::write(&out_path, text)?;

    info!("{}: {} modules", out_path.display(), indices.len());
    Ok(out_path)
}

/// Parse `sampleNN.rs` into `NN`; anything else is `None`.
fn parse_module_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("sample")?.strip_suffix(".rs")?;
    if digits.len() != 2 {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    (1..=99).contains(&index).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_too_many_files() {
        let files: Vec<PathBuf> = (0..MAX_FILES + 1)
            .map(|i| PathBuf::from(format!("kick{}.wav", i)))
            .collect();
        let err = validate_inputs(&files).unwrap_err();
        assert!(matches!(
            err,
            TablegenError::TooManyFiles { given: 19, limit: 18 }
        ));
    }

    #[test]
    fn validate_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("kick.wav");
        fs::write(&present, b"").unwrap();
        let missing = dir.path().join("snare.wav");

        let files = vec![present, missing.clone()];
        let err = validate_inputs(&files).unwrap_err();
        assert!(matches!(
            err,
            TablegenError::FileNotFound(p) if p == missing
        ));
    }

    #[test]
    fn validate_accepts_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kick.wav");
        fs::write(&path, b"").unwrap();
        validate_inputs(&[path]).unwrap();
    }

    #[test]
    fn parses_module_indices() {
        assert_eq!(parse_module_index("sample01.rs"), Some(1));
        assert_eq!(parse_module_index("sample99.rs"), Some(99));
        assert_eq!(parse_module_index("sample00.rs"), None);
        assert_eq!(parse_module_index("sample1.rs"), None);
        assert_eq!(parse_module_index("sample123.rs"), None);
        assert_eq!(parse_module_index("mod.rs"), None);
        assert_eq!(parse_module_index("registry.rs"), None);
    }
}
