/// Bytes per PCM frame (mono, signed 16-bit).
pub const BYTES_PER_FRAME: usize = 2;
