// Generated by kick-tablegen from hihat.wav; do not edit.
// 22050 Hz, 49 frames (98 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample05.
pub static SAMPLE05: [u8; 98] = [
    0xA9, 0xF7, 0x55, 0xE2, 0x1B, 0xCB, 0xA7, 0x08, 0x08, 0x30, 0xD6, 0x1C, 0x09, 0x33, 0x19, 0xE5,
    0x8D, 0x0A, 0x61, 0x15, 0x07, 0x0F, 0x98, 0x16, 0x1D, 0xE4, 0x95, 0xF1, 0xF8, 0xEC, 0x45, 0x02,
    0x1B, 0x0D, 0x91, 0xF4, 0x92, 0xF2, 0xB2, 0xFA, 0xB8, 0x0D, 0xC9, 0x04, 0x54, 0xF2, 0x61, 0xFC,
    0x78, 0x02, 0x73, 0xFE, 0x94, 0xFD, 0xD2, 0xFC, 0x42, 0xFC, 0x23, 0xF8, 0xE2, 0x03, 0x0F, 0xFD,
    0xF7, 0xFF, 0xF5, 0x02, 0x20, 0x02, 0xE3, 0x00, 0xE5, 0x00, 0xE2, 0x00, 0x50, 0x01, 0x70, 0xFE,
    0x8E, 0x01, 0x8A, 0xFE, 0xE5, 0xFE, 0x64, 0x01, 0x8C, 0xFE, 0x98, 0xFE, 0xC7, 0xFE, 0xAC, 0x00,
    0x1A, 0x00,
];

/// Byte length of [`SAMPLE05`].
pub const SAMPLE05_LEN: u32 = 98;
