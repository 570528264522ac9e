// Generated by kick-tablegen from rim.wav; do not edit.
// 22050 Hz, 64 frames (128 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample03.
pub static SAMPLE03: [u8; 128] = [
    0x92, 0x11, 0xEE, 0x44, 0x89, 0x38, 0x2A, 0xE9, 0x68, 0xB8, 0x46, 0xD6, 0x50, 0x1D, 0xFD, 0x42,
    0x12, 0x16, 0x4D, 0xE3, 0xE7, 0xCD, 0x3D, 0xF0, 0x64, 0x21, 0xE2, 0x1F, 0xF2, 0x0D, 0x7D, 0xEB,
    0x4F, 0xEA, 0xE7, 0xFA, 0xE2, 0x06, 0xB0, 0x16, 0x23, 0x0D, 0xBC, 0xFB, 0x47, 0xF3, 0xAA, 0xF6,
    0x61, 0x02, 0x0E, 0x0C, 0xF8, 0x0C, 0xFC, 0x04, 0xC4, 0xFD, 0xB7, 0xF5, 0x64, 0xF6, 0x9E, 0xFF,
    0x1B, 0x03, 0xBD, 0x08, 0x26, 0x05, 0x4A, 0x01, 0x43, 0xFD, 0x13, 0xFC, 0xA2, 0xFC, 0x4E, 0x00,
    0x10, 0x02, 0x09, 0x04, 0x31, 0x03, 0x69, 0x01, 0x3A, 0xFF, 0x4F, 0xFE, 0xFA, 0xFC, 0xBC, 0xFE,
    0x6E, 0xFF, 0x70, 0x01, 0xC4, 0x01, 0x94, 0x01, 0x37, 0x01, 0x15, 0x00, 0x32, 0xFF, 0x0E, 0xFF,
    0xF4, 0xFE, 0x49, 0xFF, 0x89, 0xFF, 0x34, 0x00, 0xA0, 0x00, 0xC7, 0x00, 0xB1, 0x00, 0x9A, 0x00,
];

/// Byte length of [`SAMPLE03`].
pub const SAMPLE03_LEN: u32 = 128;
