use std::path::PathBuf;

use thiserror::Error;

pub type TablegenResult<T> = std::result::Result<T, TablegenError>;

#[derive(Debug, Error)]
pub enum TablegenError {
    /// Missing RIFF/WAVE magic.
    #[error("not a RIFF/WAVE file")]
    NotWave,

    /// A required chunk never appeared.
    #[error("missing {0} chunk")]
    MissingChunk(&'static str),

    /// More than one channel.
    #[error("stereo is not supported, use mono ({0} channels)")]
    Stereo(u16),

    /// Sample width other than 16 bits.
    #[error("only 16-bit PCM is supported ({0} bits per sample)")]
    NotSixteenBit(u16),

    /// Compressed or non-PCM encoding.
    #[error("compressed WAV is not supported (format tag {0})")]
    Compressed(u16),

    /// Input file count above the per-invocation limit.
    #[error("too many input files: {given} (limit is {limit})")]
    TooManyFiles { given: usize, limit: usize },

    /// Input path validation failed before processing started.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Generated module names are sample01 through sample99.
    #[error("sample index {0} out of range (1-99)")]
    IndexOutOfRange(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
