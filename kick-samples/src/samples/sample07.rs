// Generated by kick-tablegen from tom_hi.wav; do not edit.
// 22050 Hz, 105 frames (210 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample07.
pub static SAMPLE07: [u8; 210] = [
    0xA1, 0xFA, 0xE9, 0x3F, 0x58, 0x5E, 0xE8, 0x5A, 0xB9, 0x30, 0xBD, 0xF2, 0x28, 0xC5, 0x51, 0xAC,
    0x05, 0xB5, 0x9E, 0xD5, 0x30, 0x05, 0xAE, 0x30, 0xD0, 0x42, 0x24, 0x42, 0xF0, 0x24, 0xD2, 0xFE,
    0xC6, 0xDD, 0x7F, 0xCA, 0x40, 0xC7, 0x61, 0xD9, 0x29, 0xF7, 0xC8, 0x14, 0xC3, 0x26, 0x43, 0x30,
    0xBE, 0x23, 0xD6, 0x0F, 0x5A, 0xF9, 0xBE, 0xE4, 0x0F, 0xDC, 0x14, 0xDD, 0xC2, 0xE6, 0x87, 0xF7,
    0xCD, 0x0A, 0x41, 0x18, 0xFE, 0x1E, 0x63, 0x1B, 0xFE, 0x12, 0x7C, 0x05, 0x8F, 0xF8, 0x28, 0xED,
    0xEA, 0xE7, 0x56, 0xEA, 0xD8, 0xF0, 0x84, 0xFA, 0xEF, 0x03, 0x2B, 0x0C, 0x12, 0x11, 0xB1, 0x12,
    0x63, 0x0F, 0x21, 0x09, 0x98, 0x01, 0x71, 0xFA, 0xDD, 0xF3, 0x6F, 0xF1, 0x23, 0xF2, 0x98, 0xF4,
    0x4C, 0xFA, 0xCC, 0xFF, 0x20, 0x05, 0x85, 0x09, 0x3B, 0x0B, 0x38, 0x0B, 0xA1, 0x08, 0xF8, 0x04,
    0x63, 0x01, 0xAD, 0xFD, 0xE9, 0xF9, 0x8B, 0xF8, 0xCB, 0xF7, 0x61, 0xF8, 0x61, 0xFA, 0x9F, 0xFC,
    0x5D, 0xFF, 0xEE, 0x01, 0x19, 0x04, 0x7D, 0x05, 0x4A, 0x06, 0xBC, 0x05, 0x4F, 0x04, 0xD0, 0x02,
    0x61, 0x01, 0x7B, 0xFF, 0x9B, 0xFD, 0xAE, 0xFC, 0xB3, 0xFB, 0x94, 0xFB, 0x30, 0xFC, 0x99, 0xFC,
    0xB6, 0xFD, 0xE3, 0xFE, 0x20, 0x00, 0x37, 0x01, 0xE4, 0x01, 0xA7, 0x02, 0x04, 0x03, 0x16, 0x03,
    0xB4, 0x02, 0x58, 0x02, 0x97, 0x01, 0x10, 0x01, 0x43, 0x00, 0x81, 0xFF, 0x17, 0xFF, 0xA7, 0xFE,
    0x54, 0xFE,
];

/// Byte length of [`SAMPLE07`].
pub const SAMPLE07_LEN: u32 = 210;
