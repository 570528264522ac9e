//! End-to-end tests: WAV in, compilable table modules out.

use std::fs;
use std::path::Path;

use kick_tablegen::{codegen, convert_file, emit_mod, wav::WavData};

/// Write a minimal mono 16-bit PCM WAV file.
fn write_wav(path: &Path, rate: u32, pcm: &[u8]) {
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + pcm.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&rate.to_le_bytes());
    out.extend_from_slice(&(rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
    out.extend_from_slice(pcm);
    fs::write(path, out).unwrap();
}

#[test]
fn convert_writes_table_module() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("kick.wav");
    write_wav(&wav_path, 22050, &[0x10, 0x20, 0x30, 0x40]);

    let out_dir = dir.path().join("samples");
    let out_path = convert_file(&wav_path, 1, &out_dir, 20).unwrap();
    assert_eq!(out_path, out_dir.join("sample01.rs"));

    let text = fs::read_to_string(&out_path).unwrap();
    assert!(text.starts_with("// Generated by kick-tablegen from kick.wav"));
    assert!(text.contains("pub static SAMPLE01: [u8; 4] = ["));
    assert!(text.contains("    0x10, 0x20, 0x30, 0x40,\n"));
    assert!(text.contains("pub const SAMPLE01_LEN: u32 = 4;"));
}

#[test]
fn convert_respects_start_index_and_emit_mod() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("samples");

    for (k, name) in ["snare.wav", "rim.wav"].iter().enumerate() {
        let wav_path = dir.path().join(name);
        write_wav(&wav_path, 8000, &[k as u8, 0]);
        convert_file(&wav_path, 3 + k, &out_dir, 20).unwrap();
    }

    assert!(out_dir.join("sample03.rs").exists());
    assert!(out_dir.join("sample04.rs").exists());

    let mod_path = emit_mod(&out_dir).unwrap();
    let text = fs::read_to_string(mod_path).unwrap();
    assert!(text.contains("mod sample03;\n"));
    assert!(text.contains("mod sample04;\n"));
    assert!(text.contains("pub use sample03::{SAMPLE03, SAMPLE03_LEN};\n"));
    assert!(!text.contains("sample01"));
}

#[test]
fn emit_mod_ignores_foreign_files() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("samples");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("sample02.rs"), "").unwrap();
    fs::write(out_dir.join("mod.rs"), "stale").unwrap();
    fs::write(out_dir.join("notes.txt"), "").unwrap();

    let mod_path = emit_mod(&out_dir).unwrap();
    let text = fs::read_to_string(mod_path).unwrap();
    assert!(text.contains("mod sample02;\n"));
    assert!(!text.contains("notes"));
    assert!(!text.contains("stale"));
}

#[test]
fn truncation_applies_before_emission() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("long.wav");
    // 1 Hz: 5 frames of data, cap at 3 seconds keeps 3 frames
    write_wav(&wav_path, 1, &[1, 0, 2, 0, 3, 0, 4, 0, 5, 0]);

    let out_dir = dir.path().join("samples");
    let out_path = convert_file(&wav_path, 1, &out_dir, 3).unwrap();
    let text = fs::read_to_string(out_path).unwrap();
    assert!(text.contains("pub static SAMPLE01: [u8; 6] = ["));
    assert!(text.contains("// 1 Hz, 3 frames (6 bytes), mono 16-bit PCM."));
}

/// The checked-in aggregator in kick-samples must be exactly what the tool
/// regenerates for samples 1 through 8.
#[test]
fn checked_in_mod_rs_is_reproducible() {
    let generated = codegen::mod_rs(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let checked_in = include_str!("../../kick-samples/src/samples/mod.rs");
    assert_eq!(generated, checked_in);
}

/// Length constants in the checked-in tables must match their data, the same
/// way the tool would emit them.
#[test]
fn emitted_length_constant_matches_table() {
    let wav = WavData {
        sample_rate_hz: 44100,
        pcm: (0u8..=255).collect(),
    };
    let text = codegen::table_module(7, "tom_hi.wav", &wav).unwrap();
    assert!(text.contains("pub static SAMPLE07: [u8; 256] = ["));
    assert!(text.contains("pub const SAMPLE07_LEN: u32 = 256;"));
    // 256 bytes at 16 per line
    assert_eq!(text.lines().filter(|l| l.starts_with("    0x")).count(), 16);
}
