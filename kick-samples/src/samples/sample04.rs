// Generated by kick-tablegen from clap.wav; do not edit.
// 22050 Hz, 256 frames (512 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample04.
pub static SAMPLE04: [u8; 512] = [
    0x4A, 0xC9, 0x48, 0x3D, 0xE1, 0x54, 0x81, 0x24, 0x85, 0xEB, 0x8F, 0x09, 0x98, 0x24, 0xBF, 0xBC,
    0x75, 0xB2, 0x74, 0x01, 0x30, 0xCC, 0x0F, 0xA7, 0x29, 0xF2, 0xC9, 0x2C, 0xDA, 0x10, 0x83, 0x55,
    0x02, 0x48, 0xEB, 0x28, 0xF5, 0x19, 0x28, 0xC7, 0x08, 0xE4, 0x33, 0xBE, 0x8A, 0x20, 0xED, 0xFA,
    0x73, 0xC5, 0x1E, 0xFD, 0x57, 0xC4, 0xD3, 0xF3, 0xB1, 0x12, 0xAC, 0x28, 0xF2, 0x12, 0x39, 0x13,
    0x72, 0x32, 0x51, 0xFB, 0x52, 0x04, 0xDC, 0xC8, 0xB7, 0xCE, 0xD2, 0x0D, 0x2B, 0xCA, 0x24, 0xC4,
    0xF7, 0x08, 0x2B, 0x04, 0xAF, 0x02, 0xC5, 0xF4, 0x0A, 0x03, 0xD8, 0xE5, 0x8A, 0xEA, 0x05, 0xF2,
    0x27, 0x1E, 0xDB, 0xEA, 0xFB, 0xCC, 0x65, 0x18, 0x16, 0xEE, 0x08, 0x0A, 0xF9, 0xF5, 0x4D, 0x18,
    0xFF, 0x2D, 0xC1, 0xE8, 0x14, 0x00, 0xA7, 0xF4, 0x1E, 0x18, 0x13, 0xF5, 0x0C, 0xE5, 0xCB, 0x19,
    0x97, 0x05, 0xC6, 0xFE, 0x93, 0x0B, 0xA1, 0xDA, 0x0A, 0x04, 0xBD, 0x02, 0xD8, 0xED, 0xBF, 0xFA,
    0xE8, 0xFD, 0x20, 0x1F, 0xD7, 0xFF, 0x36, 0x13, 0xC5, 0x13, 0xC9, 0x1B, 0xC8, 0xED, 0xF3, 0x10,
    0x1B, 0xDB, 0x48, 0x05, 0x49, 0xD7, 0x6D, 0xF0, 0x2F, 0xF2, 0x02, 0xE5, 0x28, 0xEF, 0x45, 0x0B,
    0x3C, 0xFD, 0x93, 0xF1, 0x70, 0x02, 0xC9, 0xF1, 0x67, 0xED, 0x3C, 0xEC, 0x13, 0xFE, 0xF5, 0xF3,
    0x46, 0xFC, 0x29, 0xDC, 0x2D, 0xED, 0x0C, 0x00, 0x12, 0x0F, 0x01, 0xF2, 0xFF, 0xEA, 0xB3, 0xED,
    0xD3, 0x0F, 0xE6, 0x1B, 0xA9, 0x14, 0xD8, 0x10, 0x2E, 0x0C, 0x98, 0xF6, 0x26, 0x13, 0x50, 0xFC,
    0xE7, 0xFA, 0x5F, 0x05, 0x2F, 0xFD, 0x6A, 0x01, 0x9E, 0xF2, 0x22, 0x0E, 0x92, 0x03, 0xF3, 0xF9,
    0xD1, 0x01, 0x4F, 0xF2, 0x85, 0x18, 0x8A, 0x03, 0x64, 0x00, 0x9A, 0x13, 0xC3, 0x01, 0x26, 0x00,
    0x8B, 0x07, 0xE9, 0xEC, 0x8B, 0x0C, 0xB6, 0xF8, 0x69, 0xF2, 0xF2, 0xE9, 0xEF, 0xFC, 0xC5, 0xFE,
    0x5E, 0x03, 0x9A, 0xFB, 0x30, 0x03, 0x72, 0x05, 0x95, 0xF8, 0x16, 0x05, 0x6C, 0x0F, 0xBC, 0xFD,
    0x79, 0x06, 0x68, 0x05, 0xCE, 0xFF, 0x43, 0xF8, 0x19, 0x07, 0x6E, 0x08, 0x45, 0xF3, 0xB6, 0x00,
    0xDA, 0xF2, 0xB7, 0xFA, 0xEC, 0xEF, 0x7F, 0xF4, 0x9C, 0x07, 0x90, 0x05, 0x79, 0x00, 0xB0, 0x0B,
    0xC8, 0x09, 0xC4, 0x02, 0xD7, 0x0F, 0x7A, 0xFF, 0x7E, 0xFD, 0x3D, 0x09, 0xDC, 0x01, 0x28, 0x08,
    0xBF, 0x05, 0xDD, 0x04, 0x24, 0x04, 0xC1, 0xF7, 0xFC, 0xF2, 0x08, 0x00, 0xD6, 0xF8, 0x1C, 0xFF,
    0xDE, 0xF5, 0x5E, 0xFA, 0xC7, 0xF9, 0x20, 0xF8, 0xBF, 0xF9, 0xA4, 0xF9, 0x31, 0x0B, 0x19, 0x07,
    0x90, 0x08, 0xA3, 0xFC, 0xD4, 0x0A, 0x3B, 0x01, 0x7A, 0xFA, 0x3E, 0x01, 0x74, 0x06, 0x57, 0x02,
    0x49, 0x02, 0x50, 0x03, 0x5E, 0xFD, 0x8B, 0xFE, 0xF1, 0x03, 0x8C, 0x00, 0xDE, 0xF7, 0xE2, 0x03,
    0xC2, 0x05, 0xD9, 0x05, 0x5B, 0x07, 0x01, 0x07, 0xB1, 0x03, 0x5B, 0x04, 0x76, 0x07, 0xF2, 0x02,
    0x3D, 0x05, 0xA1, 0xFF, 0x9C, 0x07, 0x2E, 0xFC, 0x8F, 0xFF, 0x8E, 0x05, 0x4D, 0xFD, 0xC6, 0xFD,
    0xCA, 0xFF, 0x0D, 0xFF, 0xB1, 0x02, 0x71, 0x03, 0x56, 0xFE, 0xEB, 0x01, 0x2C, 0x02, 0x42, 0x00,
    0x40, 0xFF, 0x23, 0xFD, 0x01, 0xFF, 0x1B, 0x05, 0xDE, 0x03, 0xD4, 0x05, 0xAF, 0x02, 0x70, 0xFD,
    0x08, 0x01, 0xDF, 0xFF, 0xF3, 0xFF, 0xEA, 0x05, 0x19, 0x01, 0x5D, 0x00, 0x32, 0xFC, 0xF6, 0xFB,
    0x72, 0xFB, 0x8F, 0x04, 0xA3, 0x01, 0xB4, 0xFC, 0xDD, 0xFA, 0x9B, 0x01, 0xFC, 0xF9, 0x76, 0xFF,
    0x44, 0x02, 0x01, 0x00, 0x8C, 0xFF, 0xDE, 0xFD, 0x56, 0xFF, 0x22, 0x00, 0x75, 0xFB, 0x95, 0xFF,
];

/// Byte length of [`SAMPLE04`].
pub const SAMPLE04_LEN: u32 = 512;
