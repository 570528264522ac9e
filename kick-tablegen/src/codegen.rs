//! Rust source emission for sample table modules.
//!
//! The output format is fixed: a header comment recording provenance, the
//! byte table at sixteen values per line, and the paired length constant.
//! `mod_rs` regenerates the aggregator that `kick-samples` compiles.

use crate::error::{TablegenError, TablegenResult};
use crate::wav::WavData;

/// Hex values per line in the emitted table.
const BYTES_PER_LINE: usize = 16;

/// Module name for a sample index: `sample01` through `sample99`.
pub fn module_name(index: usize) -> TablegenResult<String> {
    if !(1..=99).contains(&index) {
        return Err(TablegenError::IndexOutOfRange(index));
    }
    Ok(format!("sample{:02}", index))
}

/// File name for a sample index: `sample01.rs`.
pub fn module_file_name(index: usize) -> TablegenResult<String> {
    Ok(format!("{}.rs", module_name(index)?))
}

/// Emit one complete `sampleNN.rs` module for the decoded WAV.
pub fn table_module(index: usize, source_name: &str, wav: &WavData) -> TablegenResult<String> {
    let name = module_name(index)?;
    let upper = name.to_uppercase();
    let n = wav.pcm.len();

    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by kick-tablegen from {}; do not edit.\n",
        source_name
    ));
    out.push_str(&format!(
        "// {} Hz, {} frames ({} bytes), mono 16-bit PCM.\n\n",
        wav.sample_rate_hz,
        wav.frames(),
        n
    ));
    out.push_str(&format!(
        "/// Raw little-endian 16-bit PCM bytes for {}.\n",
        name
    ));
    out.push_str(&format!("pub static {}: [u8; {}] = [\n", upper, n));
    for line in wav.pcm.chunks(BYTES_PER_LINE) {
        let hexes: Vec<String> = line.iter().map(|b| format!("0x{:02X}", b)).collect();
        out.push_str(&format!("    {},\n", hexes.join(", ")));
    }
    out.push_str("];\n\n");
    out.push_str(&format!("/// Byte length of [`{}`].\n", upper));
    out.push_str(&format!("pub const {}_LEN: u32 = {};\n", upper, n));
    Ok(out)
}

/// Emit the `mod.rs` aggregator for the given sample indices.
///
/// Plays the role of the old master include: one `mod` declaration and one
/// re-export pair per generated table, in ordinal order.
pub fn mod_rs(indices: &[usize]) -> TablegenResult<String> {
    let mut out = String::from(
        "//! Generated sample data tables, one module per sample.\n\
         //!\n\
         //! Each module is emitted by `kick-tablegen` and declares two items: the raw\n\
         //! little-endian 16-bit PCM bytes (`SAMPLENN`) and the paired byte length\n\
         //! constant (`SAMPLENN_LEN`). Regenerate with `kick-tablegen --emit-mod`\n\
         //! instead of editing by hand.\n\n",
    );
    for &index in indices {
        out.push_str(&format!("mod {};\n", module_name(index)?));
    }
    out.push('\n');
    for &index in indices {
        let name = module_name(index)?;
        let upper = name.to_uppercase();
        out.push_str(&format!(
            "pub use {}::{{{}, {}_LEN}};\n",
            name, upper, upper
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav(pcm: &[u8]) -> WavData {
        WavData {
            sample_rate_hz: 22050,
            pcm: pcm.to_vec(),
        }
    }

    #[test]
    fn module_names() {
        assert_eq!(module_name(1).unwrap(), "sample01");
        assert_eq!(module_name(42).unwrap(), "sample42");
        assert_eq!(module_file_name(8).unwrap(), "sample08.rs");
        assert!(matches!(
            module_name(0),
            Err(TablegenError::IndexOutOfRange(0))
        ));
        assert!(matches!(
            module_name(100),
            Err(TablegenError::IndexOutOfRange(100))
        ));
    }

    #[test]
    fn table_module_exact_output() {
        let text = table_module(3, "rim.wav", &wav(&[0x00, 0x7F, 0xFF, 0x80])).unwrap();
        let expected = "\
// Generated by kick-tablegen from rim.wav; do not edit.
// 22050 Hz, 2 frames (4 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample03.
pub static SAMPLE03: [u8; 4] = [
    0x00, 0x7F, 0xFF, 0x80,
];

/// Byte length of [`SAMPLE03`].
pub const SAMPLE03_LEN: u32 = 4;
";
        assert_eq!(text, expected);
    }

    #[test]
    fn table_wraps_at_sixteen_bytes() {
        let pcm: Vec<u8> = (0..40).collect();
        let text = table_module(1, "kick.wav", &wav(&pcm)).unwrap();
        let table_lines: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("    0x"))
            .collect();
        assert_eq!(table_lines.len(), 3); // 16 + 16 + 8
        assert!(table_lines[0].ends_with(','));
        assert!(table_lines[2].ends_with(','));
        assert_eq!(table_lines[2].matches("0x").count(), 8);
    }

    #[test]
    fn mod_rs_lists_all_modules() {
        let text = mod_rs(&[1, 2, 3]).unwrap();
        assert!(text.contains("mod sample01;\n"));
        assert!(text.contains("mod sample03;\n"));
        assert!(text.contains("pub use sample02::{SAMPLE02, SAMPLE02_LEN};\n"));
    }
}
