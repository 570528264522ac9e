//! Minimal RIFF/WAVE reader for the table generator.
//!
//! Accepts exactly what the tables need: mono, 16-bit, uncompressed PCM.
//! Everything else is rejected up front rather than producing a table the
//! firmware cannot play. Unknown chunks (`LIST`, `fact`, ...) are skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;

use crate::error::{TablegenError, TablegenResult};

/// WAVE format tag for uncompressed PCM.
const FORMAT_PCM: u16 = 1;

/// Decoded contents of one input WAV file.
#[derive(Debug, Clone)]
pub struct WavData {
    /// Sample rate from the `fmt ` chunk, Hz.
    pub sample_rate_hz: u32,
    /// Raw little-endian 16-bit mono frames, possibly truncated to the
    /// caller's duration cap. Always an even number of bytes.
    pub pcm: Vec<u8>,
}

impl WavData {
    /// Number of 16-bit frames.
    pub fn frames(&self) -> usize {
        self.pcm.len() / 2
    }
}

/// Fields of the `fmt ` chunk we validate against.
struct FmtChunk {
    format_tag: u16,
    channels: u16,
    sample_rate_hz: u32,
    bits_per_sample: u16,
}

/// Read and validate a WAV file, keeping at most `max_seconds` of audio.
pub fn read_wav_file(path: &Path, max_seconds: u32) -> TablegenResult<WavData> {
    let mut reader = BufReader::new(File::open(path)?);
    read_wav(&mut reader, max_seconds)
}

/// Read and validate WAV data from any reader.
pub fn read_wav(reader: &mut impl Read, max_seconds: u32) -> TablegenResult<WavData> {
    let mut riff = [0u8; 4];
    reader.read_exact(&mut riff)?;
    let _riff_size = reader.read_u32::<LittleEndian>()?;
    let mut wave = [0u8; 4];
    reader.read_exact(&mut wave)?;
    if &riff != b"RIFF" || &wave != b"WAVE" {
        return Err(TablegenError::NotWave);
    }

    let mut fmt: Option<FmtChunk> = None;

    loop {
        let mut id = [0u8; 4];
        match reader.read_exact(&mut id) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                let missing = if fmt.is_none() { "fmt " } else { "data" };
                return Err(TablegenError::MissingChunk(missing));
            }
            Err(e) => return Err(e.into()),
        }
        let size = reader.read_u32::<LittleEndian>()? as usize;

        match &id {
            b"fmt " => {
                let format_tag = reader.read_u16::<LittleEndian>()?;
                let channels = reader.read_u16::<LittleEndian>()?;
                let sample_rate_hz = reader.read_u32::<LittleEndian>()?;
                let _byte_rate = reader.read_u32::<LittleEndian>()?;
                let _block_align = reader.read_u16::<LittleEndian>()?;
                let bits_per_sample = reader.read_u16::<LittleEndian>()?;
                // Extension fields (if any) are irrelevant for plain PCM
                skip(reader, size.saturating_sub(16))?;
                fmt = Some(FmtChunk {
                    format_tag,
                    channels,
                    sample_rate_hz,
                    bits_per_sample,
                });
            }
            b"data" => {
                let fmt = fmt.ok_or(TablegenError::MissingChunk("fmt "))?;
                if fmt.format_tag != FORMAT_PCM {
                    return Err(TablegenError::Compressed(fmt.format_tag));
                }
                if fmt.channels != 1 {
                    return Err(TablegenError::Stereo(fmt.channels));
                }
                if fmt.bits_per_sample != 16 {
                    return Err(TablegenError::NotSixteenBit(fmt.bits_per_sample));
                }

                // Cap before allocating: the chunk size field is untrusted,
                // and anything past the duration cap is discarded anyway
                let max_bytes = max_seconds as u64 * fmt.sample_rate_hz as u64 * 2;
                let keep = (size as u64).min(max_bytes) as usize;
                if keep < size {
                    debug!(
                        "truncating data chunk from {} to {} bytes ({}s cap)",
                        size, keep, max_seconds
                    );
                }

                let mut pcm = vec![0u8; keep];
                reader.read_exact(&mut pcm)?;
                // A malformed odd-sized data chunk would leave half a frame
                pcm.truncate(pcm.len() & !1);

                return Ok(WavData {
                    sample_rate_hz: fmt.sample_rate_hz,
                    pcm,
                });
            }
            other => {
                debug!(
                    "skipping chunk {:?} ({} bytes)",
                    String::from_utf8_lossy(other),
                    size
                );
                // Chunks are word-aligned: odd sizes carry a pad byte
                skip(reader, size + (size & 1))?;
            }
        }
    }
}

fn skip(reader: &mut impl Read, n: usize) -> std::io::Result<()> {
    std::io::copy(&mut reader.take(n as u64), &mut std::io::sink())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an in-memory WAV with the given fmt fields and data payload.
    fn wav_bytes(format_tag: u16, channels: u16, rate: u32, bits: u16, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&format_tag.to_le_bytes());
        out.extend_from_slice(&channels.to_le_bytes());
        out.extend_from_slice(&rate.to_le_bytes());
        let byte_rate = rate * channels as u32 * (bits as u32 / 8);
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&(channels * bits / 8).to_le_bytes());
        out.extend_from_slice(&bits.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn parses_valid_mono_pcm16() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let bytes = wav_bytes(1, 1, 22050, 16, &data);
        let wav = read_wav(&mut bytes.as_slice(), 20).unwrap();
        assert_eq!(wav.sample_rate_hz, 22050);
        assert_eq!(wav.pcm, data);
        assert_eq!(wav.frames(), 2);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = wav_bytes(1, 1, 22050, 16, &[0, 0]);
        bytes[0..4].copy_from_slice(b"FORM");
        let err = read_wav(&mut bytes.as_slice(), 20).unwrap_err();
        assert!(matches!(err, TablegenError::NotWave));
    }

    #[test]
    fn rejects_stereo() {
        let bytes = wav_bytes(1, 2, 44100, 16, &[0, 0, 0, 0]);
        let err = read_wav(&mut bytes.as_slice(), 20).unwrap_err();
        assert!(matches!(err, TablegenError::Stereo(2)));
    }

    #[test]
    fn rejects_eight_bit() {
        let bytes = wav_bytes(1, 1, 44100, 8, &[0, 0]);
        let err = read_wav(&mut bytes.as_slice(), 20).unwrap_err();
        assert!(matches!(err, TablegenError::NotSixteenBit(8)));
    }

    #[test]
    fn rejects_compressed() {
        // format tag 17 = IMA ADPCM
        let bytes = wav_bytes(17, 1, 44100, 16, &[0, 0]);
        let err = read_wav(&mut bytes.as_slice(), 20).unwrap_err();
        assert!(matches!(err, TablegenError::Compressed(17)));
    }

    #[test]
    fn truncates_to_duration_cap() {
        // 1 Hz sample rate makes the cap easy to hit: 3 frames, 2 second cap
        let data = [1, 0, 2, 0, 3, 0];
        let bytes = wav_bytes(1, 1, 1, 16, &data);
        let wav = read_wav(&mut bytes.as_slice(), 2).unwrap();
        assert_eq!(wav.frames(), 2);
        assert_eq!(wav.pcm, &data[..4]);
    }

    #[test]
    fn bogus_data_size_reads_only_the_cap() {
        // Header claims a ~4 GiB data chunk; only the capped bytes may be
        // allocated and read
        let mut bytes = wav_bytes(1, 1, 1, 16, &[1, 0, 2, 0, 3, 0]);
        let size_off = bytes.len() - 6 - 4;
        bytes[size_off..size_off + 4].copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());
        let wav = read_wav(&mut bytes.as_slice(), 2).unwrap();
        assert_eq!(wav.pcm, [1, 0, 2, 0]);
    }

    #[test]
    fn drops_trailing_half_frame() {
        let bytes = wav_bytes(1, 1, 22050, 16, &[1, 0, 2]);
        let wav = read_wav(&mut bytes.as_slice(), 20).unwrap();
        assert_eq!(wav.pcm, [1, 0]);
    }

    #[test]
    fn skips_unknown_chunks() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"LIST");
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0x00]); // 3 bytes + pad
        let rest = wav_bytes(1, 1, 8000, 16, &[7, 0]);
        bytes.extend_from_slice(&rest[12..]); // chunks only
        let wav = read_wav(&mut bytes.as_slice(), 20).unwrap();
        assert_eq!(wav.sample_rate_hz, 8000);
        assert_eq!(wav.pcm, [7, 0]);
    }

    #[test]
    fn missing_data_chunk() {
        let full = wav_bytes(1, 1, 8000, 16, &[0, 0]);
        // Cut off before the data chunk header
        let bytes = &full[..full.len() - 10];
        let err = read_wav(&mut &bytes[..], 20).unwrap_err();
        assert!(matches!(err, TablegenError::MissingChunk("data")));
    }
}
