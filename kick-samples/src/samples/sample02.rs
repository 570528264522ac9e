// Generated by kick-tablegen from snare.wav; do not edit.
// 22050 Hz, 170 frames (340 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample02.
pub static SAMPLE02: [u8; 340] = [
    0xBB, 0x0A, 0xA5, 0x34, 0x4D, 0xF7, 0xAB, 0x3C, 0xBD, 0x3A, 0x72, 0x4F, 0x76, 0xD5, 0x25, 0x14,
    0xDD, 0xC1, 0x0B, 0xD4, 0x69, 0xFE, 0xED, 0xDF, 0x09, 0xE8, 0x18, 0xE1, 0x15, 0xF4, 0xC8, 0x44,
    0x26, 0x47, 0xAD, 0x01, 0x10, 0x0E, 0x84, 0xEA, 0x91, 0x14, 0x3C, 0xCB, 0xA2, 0xF9, 0x20, 0xCD,
    0x99, 0xF4, 0xA5, 0x1B, 0xE9, 0xF5, 0x83, 0x14, 0xAA, 0x00, 0x4F, 0x35, 0xD4, 0x24, 0x5E, 0xF6,
    0x26, 0xFE, 0xF1, 0xF7, 0x3B, 0xEA, 0x49, 0xE1, 0x07, 0xE3, 0x7F, 0xD9, 0x87, 0xE4, 0x77, 0x10,
    0xFD, 0xF6, 0x03, 0x22, 0x33, 0x1B, 0x10, 0xFC, 0xDC, 0x1F, 0x59, 0x1A, 0x56, 0xF2, 0xEF, 0xF8,
    0x4F, 0xFD, 0xD2, 0xF2, 0x9E, 0xDC, 0x1F, 0xF9, 0x4A, 0xFC, 0xDC, 0x02, 0x91, 0x0A, 0x08, 0x0A,
    0x60, 0x0C, 0xCB, 0x17, 0xF6, 0x17, 0x65, 0x0F, 0x71, 0xFD, 0x36, 0xF7, 0xF0, 0xFF, 0x28, 0xEB,
    0x76, 0xFE, 0xDC, 0xF7, 0x4B, 0xFA, 0x6A, 0xFF, 0xA4, 0xF8, 0x51, 0xF3, 0x77, 0xFD, 0xD3, 0x02,
    0xA0, 0x0D, 0x54, 0x11, 0x6B, 0xFE, 0x6B, 0x07, 0xE5, 0x06, 0x13, 0x00, 0x0C, 0xF6, 0xA5, 0xF1,
    0xF6, 0xF3, 0x8B, 0xFD, 0xBB, 0xFF, 0xB3, 0xF2, 0x77, 0x00, 0x9B, 0x04, 0x2A, 0x02, 0x48, 0x07,
    0xE6, 0xFE, 0x7D, 0xFF, 0x1D, 0x01, 0x1F, 0x04, 0x47, 0xFE, 0xB6, 0xFE, 0x8B, 0xFB, 0x68, 0x03,
    0x3F, 0x01, 0xCC, 0xF8, 0x42, 0xF6, 0x0F, 0xFC, 0xA3, 0xFB, 0x29, 0xF6, 0x40, 0xFD, 0x4D, 0xFD,
    0x91, 0xFF, 0xDA, 0xFB, 0x29, 0x02, 0xCA, 0xFE, 0x42, 0x08, 0xBA, 0x08, 0xEB, 0x01, 0xF9, 0x01,
    0xED, 0x00, 0x48, 0x03, 0x16, 0x01, 0xA2, 0x01, 0x7B, 0x00, 0xCC, 0xFD, 0xCC, 0xFD, 0x35, 0xFA,
    0x97, 0xFC, 0xDD, 0xFE, 0x01, 0xFE, 0x24, 0x01, 0x33, 0xFC, 0x31, 0xFD, 0xAE, 0x03, 0x88, 0x04,
    0x4B, 0xFF, 0x03, 0x05, 0x2B, 0x02, 0xA4, 0x02, 0x4F, 0x04, 0x8C, 0x00, 0xE1, 0xFE, 0x65, 0x01,
    0x64, 0x01, 0xC2, 0xFE, 0x14, 0x01, 0xF1, 0xFF, 0x1E, 0xFD, 0xEB, 0xFD, 0x50, 0x00, 0x3C, 0x00,
    0x8A, 0xFF, 0x99, 0xFF, 0xF5, 0xFD, 0xF4, 0xFD, 0x90, 0xFF, 0xA4, 0xFF, 0x25, 0x02, 0xB7, 0x01,
    0xD2, 0xFF, 0x5A, 0x02, 0x91, 0x01, 0x85, 0x00, 0xFD, 0x01, 0xA3, 0x01, 0xBA, 0x01, 0x3F, 0x01,
    0x49, 0xFF, 0x3C, 0x00, 0xFE, 0x00, 0xB5, 0xFF, 0x0B, 0x00, 0x59, 0x00, 0x1D, 0xFE, 0xB8, 0xFE,
    0x7C, 0xFF, 0xB3, 0xFE,
];

/// Byte length of [`SAMPLE02`].
pub const SAMPLE02_LEN: u32 = 340;
