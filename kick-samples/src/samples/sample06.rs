// Generated by kick-tablegen from tom_lo.wav; do not edit.
// 22050 Hz, 320 frames (640 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample06.
pub static SAMPLE06: [u8; 640] = [
    0xED, 0x02, 0x4B, 0x17, 0x30, 0x27, 0xE4, 0x35, 0xB5, 0x47, 0x0D, 0x56, 0x3D, 0x59, 0xBF, 0x60,
    0x74, 0x60, 0x0C, 0x6B, 0x73, 0x67, 0x11, 0x60, 0xC4, 0x57, 0x47, 0x4C, 0xA7, 0x43, 0xE9, 0x2B,
    0xCA, 0x23, 0x83, 0x0C, 0x34, 0x02, 0xCF, 0xF3, 0x05, 0xE4, 0x14, 0xD0, 0xEF, 0xC3, 0x30, 0xBA,
    0x2E, 0xB8, 0x76, 0xAC, 0x41, 0xAE, 0xA0, 0xA6, 0x7E, 0xAE, 0x52, 0xAD, 0x08, 0xB1, 0x87, 0xBE,
    0x8B, 0xC2, 0x66, 0xCE, 0x0B, 0xDE, 0xE5, 0xEB, 0xEE, 0xF1, 0xC9, 0x02, 0x30, 0x0C, 0xD8, 0x18,
    0x8B, 0x22, 0x60, 0x2C, 0xF6, 0x34, 0xE6, 0x3D, 0x14, 0x46, 0xBE, 0x44, 0x8C, 0x45, 0xDA, 0x44,
    0x61, 0x41, 0xC9, 0x3E, 0xE6, 0x38, 0xEE, 0x31, 0xF1, 0x29, 0x3B, 0x24, 0x9A, 0x15, 0xC1, 0x10,
    0x0D, 0x02, 0x69, 0xF7, 0xA0, 0xF0, 0xAD, 0xE6, 0x1A, 0xDA, 0xCE, 0xD4, 0xA1, 0xD0, 0x2D, 0xCC,
    0xCB, 0xC7, 0x65, 0xC6, 0x53, 0xC1, 0x87, 0xC5, 0x14, 0xCA, 0x7C, 0xC8, 0x31, 0xCD, 0x8D, 0xD3,
    0xB3, 0xDD, 0x7B, 0xE3, 0xB6, 0xEA, 0xC0, 0xF3, 0x46, 0xFC, 0x14, 0x02, 0xBB, 0x0A, 0x1C, 0x14,
    0x68, 0x1C, 0xB6, 0x21, 0xE9, 0x23, 0x05, 0x2B, 0xE7, 0x2F, 0x8B, 0x2E, 0x2E, 0x32, 0x6F, 0x30,
    0xC9, 0x2F, 0xE6, 0x30, 0xA4, 0x2B, 0x42, 0x29, 0x37, 0x21, 0xF5, 0x1B, 0xB1, 0x1A, 0x1C, 0x10,
    0xE1, 0x0B, 0x23, 0x07, 0x98, 0xFF, 0x24, 0xFA, 0xF3, 0xF1, 0x56, 0xED, 0x72, 0xE8, 0x31, 0xE4,
    0x3C, 0xE1, 0xAA, 0xDD, 0x3C, 0xDC, 0x9F, 0xD7, 0xFA, 0xD6, 0xA4, 0xD7, 0xC9, 0xD8, 0xAE, 0xDA,
    0x58, 0xDD, 0x1A, 0xE1, 0xC4, 0xE3, 0xC8, 0xE7, 0x35, 0xED, 0xB9, 0xEF, 0xCD, 0xF5, 0x14, 0xFA,
    0xE6, 0xFE, 0x36, 0x03, 0x19, 0x08, 0x9C, 0x0E, 0x7C, 0x11, 0x67, 0x15, 0xC3, 0x19, 0x80, 0x1C,
    0xB7, 0x1C, 0xB0, 0x1D, 0xFD, 0x1F, 0x0C, 0x20, 0x1D, 0x21, 0xB8, 0x20, 0x0D, 0x1D, 0xDB, 0x1C,
    0xD2, 0x1A, 0x91, 0x17, 0xE2, 0x13, 0x2B, 0x11, 0xAC, 0x0F, 0x90, 0x0A, 0x36, 0x07, 0x2E, 0x03,
    0xF6, 0xFE, 0x93, 0xFB, 0xC2, 0xF8, 0xA4, 0xF4, 0x2B, 0xF1, 0x46, 0xEF, 0xED, 0xEC, 0x62, 0xEB,
    0x86, 0xE8, 0xD9, 0xE6, 0xF9, 0xE6, 0x38, 0xE5, 0x78, 0xE7, 0x30, 0xE7, 0x43, 0xE6, 0x96, 0xE9,
    0x47, 0xE9, 0xF9, 0xEA, 0xC7, 0xEE, 0xA1, 0xEE, 0xD5, 0xF2, 0x2C, 0xF5, 0xA0, 0xF8, 0xF4, 0xF9,
    0x3C, 0xFE, 0x80, 0xFF, 0x5A, 0x03, 0x9C, 0x05, 0xAE, 0x08, 0x82, 0x0A, 0xFE, 0x0B, 0x42, 0x0E,
    0x06, 0x10, 0x1A, 0x11, 0x12, 0x12, 0xCA, 0x13, 0x4C, 0x14, 0x19, 0x14, 0xC1, 0x13, 0xE2, 0x13,
    0x69, 0x14, 0x67, 0x12, 0x58, 0x11, 0x5C, 0x11, 0x88, 0x0E, 0xEC, 0x0C, 0x7B, 0x0B, 0x0C, 0x0A,
    0xA3, 0x07, 0xCB, 0x05, 0xDA, 0x04, 0x6D, 0x02, 0xA1, 0xFF, 0x73, 0xFE, 0x74, 0xFC, 0x1D, 0xFA,
    0x66, 0xF9, 0x74, 0xF6, 0xB7, 0xF5, 0x90, 0xF4, 0x75, 0xF2, 0x81, 0xF2, 0x75, 0xF2, 0x60, 0xF1,
    0xE6, 0xEF, 0x7D, 0xF0, 0xC9, 0xF0, 0xE8, 0xEF, 0x4C, 0xF1, 0xE5, 0xF0, 0xA0, 0xF1, 0x39, 0xF2,
    0xC3, 0xF3, 0x9B, 0xF4, 0x79, 0xF6, 0x65, 0xF7, 0x18, 0xF8, 0xA8, 0xF9, 0x97, 0xFA, 0x73, 0xFC,
    0x6A, 0xFE, 0x9F, 0xFF, 0xC3, 0x00, 0xBE, 0x01, 0x2B, 0x03, 0x6C, 0x04, 0xB5, 0x05, 0x65, 0x06,
    0x2C, 0x08, 0x78, 0x08, 0xD2, 0x08, 0xB3, 0x09, 0x45, 0x0B, 0x9F, 0x0A, 0xD2, 0x0A, 0x25, 0x0B,
    0xE8, 0x0B, 0x57, 0x0B, 0xCD, 0x0B, 0x1F, 0x0B, 0xE3, 0x0A, 0x07, 0x0B, 0x82, 0x09, 0xDF, 0x08,
    0x50, 0x08, 0xE9, 0x07, 0xB4, 0x06, 0xC1, 0x06, 0x50, 0x05, 0xD6, 0x04, 0x2C, 0x03, 0x49, 0x02,
    0x7E, 0x01, 0x61, 0x00, 0x0E, 0x00, 0x6D, 0xFF, 0x12, 0xFE, 0xF6, 0xFC, 0xFC, 0xFC, 0xB5, 0xFB,
    0xB2, 0xFA, 0x47, 0xFA, 0x54, 0xFA, 0xF2, 0xF8, 0xA1, 0xF8, 0xAF, 0xF8, 0x5B, 0xF8, 0xA7, 0xF7,
    0xFA, 0xF7, 0x49, 0xF7, 0x99, 0xF7, 0x78, 0xF7, 0x0D, 0xF8, 0xF3, 0xF7, 0xE8, 0xF7, 0xF4, 0xF7,
    0xB3, 0xF8, 0x71, 0xF8, 0x0D, 0xF9, 0x54, 0xF9, 0x6A, 0xFA, 0x6A, 0xFA, 0x38, 0xFB, 0xA1, 0xFB,
    0x1F, 0xFC, 0xA8, 0xFC, 0x1D, 0xFD, 0xDE, 0xFD, 0x9A, 0xFE, 0x49, 0xFF, 0x44, 0xFF, 0x41, 0x00,
    0xA0, 0x00, 0xE8, 0x00, 0xEE, 0x01, 0x0C, 0x02, 0xC4, 0x02, 0x3B, 0x03, 0x63, 0x03, 0x9A, 0x03,
    0x3E, 0x04, 0x67, 0x04, 0x1D, 0x05, 0xDB, 0x04, 0x73, 0x05, 0x65, 0x05, 0xE2, 0x05, 0x86, 0x05,
    0x7B, 0x05, 0xA1, 0x05, 0xE4, 0x05, 0xC5, 0x05, 0xFA, 0x05, 0xA2, 0x05, 0xBD, 0x05, 0x86, 0x05,
];

/// Byte length of [`SAMPLE06`].
pub const SAMPLE06_LEN: u32 = 640;
