// Generated by kick-tablegen from kick.wav; do not edit.
// 22050 Hz, 96 frames (192 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample01.
pub static SAMPLE01: [u8; 192] = [
    0x00, 0x00, 0x27, 0x1D, 0x2A, 0x36, 0xBA, 0x49, 0x0B, 0x57, 0xCB, 0x5D, 0x1F, 0x5E, 0x91, 0x58,
    0xFF, 0x4D, 0x81, 0x3F, 0x50, 0x2E, 0xB3, 0x1B, 0xE4, 0x08, 0x03, 0xF7, 0x02, 0xE7, 0xA2, 0xD9,
    0x67, 0xCF, 0x9D, 0xC8, 0x54, 0xC5, 0x6A, 0xC5, 0x91, 0xC8, 0x58, 0xCE, 0x36, 0xD6, 0x93, 0xDF,
    0xD3, 0xE9, 0x5F, 0xF4, 0xAA, 0xFE, 0x39, 0x08, 0xAA, 0x10, 0xAF, 0x17, 0x15, 0x1D, 0xC2, 0x20,
    0xB4, 0x22, 0xFD, 0x22, 0xC0, 0x21, 0x2F, 0x1F, 0x84, 0x1B, 0x02, 0x17, 0xED, 0x11, 0x86, 0x0C,
    0x0E, 0x07, 0xBD, 0x01, 0xC7, 0xFC, 0x51, 0xF8, 0x7D, 0xF4, 0x60, 0xF1, 0x06, 0xEF, 0x73, 0xED,
    0xA2, 0xEC, 0x89, 0xEC, 0x18, 0xED, 0x39, 0xEE, 0xD5, 0xEF, 0xD3, 0xF1, 0x19, 0xF4, 0x8D, 0xF6,
    0x18, 0xF9, 0xA4, 0xFB, 0x1C, 0xFE, 0x6F, 0x00, 0x90, 0x02, 0x74, 0x04, 0x13, 0x06, 0x68, 0x07,
    0x71, 0x08, 0x2F, 0x09, 0xA3, 0x09, 0xD1, 0x09, 0xC0, 0x09, 0x77, 0x09, 0xFB, 0x08, 0x56, 0x08,
    0x90, 0x07, 0xB0, 0x06, 0xBE, 0x05, 0xC1, 0x04, 0xC0, 0x03, 0xC1, 0x02, 0xC9, 0x01, 0xDD, 0x00,
    0x00, 0x00, 0x35, 0xFF, 0x7F, 0xFE, 0xDE, 0xFD, 0x53, 0xFD, 0xDF, 0xFC, 0x82, 0xFC, 0x3A, 0xFC,
    0x07, 0xFC, 0xE8, 0xFB, 0xDB, 0xFB, 0xDE, 0xFB, 0xF0, 0xFB, 0x0E, 0xFC, 0x37, 0xFC, 0x69, 0xFC,
];

/// Byte length of [`SAMPLE01`].
pub const SAMPLE01_LEN: u32 = 192;
