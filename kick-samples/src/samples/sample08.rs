// Generated by kick-tablegen from crash.wav; do not edit.
// 22050 Hz, 512 frames (1024 bytes), mono 16-bit PCM.

/// Raw little-endian 16-bit PCM bytes for sample08.
pub static SAMPLE08: [u8; 1024] = [
    0x85, 0xE8, 0x22, 0x57, 0x13, 0x20, 0xC3, 0x11, 0x9D, 0xE4, 0xA1, 0xD1, 0xD2, 0x0A, 0x01, 0xE7,
    0x78, 0x21, 0xCD, 0xE0, 0x02, 0x11, 0xA8, 0x0F, 0x75, 0x46, 0x4D, 0xE7, 0xC4, 0xD3, 0xC9, 0xA0,
    0x49, 0xF1, 0xDD, 0xEB, 0xA3, 0x26, 0x6F, 0x24, 0xC1, 0xE8, 0x53, 0x4E, 0x37, 0xCD, 0x45, 0xED,
    0xBE, 0xD1, 0xC7, 0x14, 0xB7, 0x12, 0x74, 0x55, 0xEA, 0x0E, 0xAF, 0xF4, 0x5C, 0x3A, 0x62, 0xC9,
    0xA5, 0xE9, 0xD9, 0xBC, 0x38, 0x21, 0x5F, 0x1F, 0x27, 0x54, 0x53, 0x0E, 0x2D, 0xF7, 0xDE, 0x00,
    0xC3, 0xEF, 0x4B, 0xED, 0xDE, 0xFC, 0xA7, 0xF0, 0x84, 0xE8, 0x87, 0x0E, 0xD0, 0x00, 0x19, 0xE7,
    0x54, 0xE6, 0xD1, 0xC3, 0xFE, 0xCE, 0x07, 0xE5, 0xFD, 0xC6, 0x0D, 0x2F, 0x22, 0x43, 0x96, 0xFC,
    0x96, 0x37, 0xEA, 0x0C, 0xFD, 0xD2, 0xC2, 0xBC, 0x44, 0xD9, 0x3C, 0xE6, 0x87, 0xE2, 0xE6, 0x21,
    0xAC, 0x26, 0xD0, 0x3E, 0x77, 0xF3, 0x18, 0xC5, 0xE1, 0xCE, 0xDD, 0xF6, 0xC1, 0xC2, 0x76, 0xE2,
    0x41, 0x0D, 0x44, 0x21, 0xFA, 0x3A, 0x63, 0x2D, 0x1D, 0x1A, 0xCE, 0x01, 0x7B, 0xE8, 0xFE, 0xEE,
    0xB7, 0x16, 0x8D, 0x28, 0x6D, 0x0F, 0xFC, 0xF0, 0x98, 0x1F, 0xA9, 0x03, 0xFC, 0xDD, 0x8C, 0xC2,
    0x7F, 0xE2, 0xEC, 0x11, 0x24, 0x0E, 0xBA, 0x0E, 0xEC, 0xF5, 0x29, 0x46, 0xA5, 0x05, 0xB8, 0x09,
    0x56, 0xDB, 0xAE, 0xED, 0x6D, 0x03, 0x81, 0x13, 0xFF, 0x15, 0x4F, 0x2D, 0xC9, 0xFA, 0x76, 0x03,
    0x87, 0xE2, 0xDA, 0x02, 0x60, 0xD2, 0x45, 0x03, 0x2F, 0x11, 0xF2, 0x05, 0xCF, 0xE8, 0x0E, 0x25,
    0xA3, 0x34, 0x65, 0x37, 0xB6, 0x14, 0xA7, 0xFD, 0xB3, 0xEA, 0x7E, 0xFF, 0xD9, 0x01, 0x5E, 0x0C,
    0x6A, 0x0C, 0x13, 0x23, 0xE7, 0x31, 0x21, 0x10, 0xA1, 0x20, 0x04, 0xF0, 0x18, 0xE7, 0x87, 0xE2,
    0x10, 0xCB, 0x0F, 0xED, 0x5C, 0xEA, 0xCF, 0x08, 0x97, 0xFF, 0x5B, 0x17, 0x4A, 0x0A, 0xFA, 0xF3,
    0x88, 0xE9, 0xB9, 0xDE, 0x7D, 0xFF, 0xE7, 0xDA, 0x45, 0x1B, 0x54, 0x11, 0xE3, 0x0F, 0xCC, 0x26,
    0x65, 0xEF, 0x03, 0xED, 0x86, 0x0A, 0xB0, 0xED, 0x01, 0xFB, 0xAF, 0xE2, 0xE3, 0x23, 0xDC, 0x26,
    0x6E, 0x16, 0x45, 0x32, 0x03, 0xF1, 0x5A, 0xE0, 0x23, 0xD6, 0x8E, 0xFB, 0xBC, 0xFC, 0x15, 0xD6,
    0x8F, 0x14, 0x49, 0xF1, 0x68, 0x30, 0x38, 0x23, 0xF4, 0xF9, 0x36, 0xFF, 0x11, 0xEA, 0x44, 0xFF,
    0xB0, 0xCD, 0x2E, 0xFE, 0x3F, 0x03, 0x3E, 0x1C, 0xA3, 0x14, 0xD2, 0x18, 0x37, 0x0B, 0xF1, 0x06,
    0xB2, 0xE2, 0x0C, 0xF8, 0xE5, 0xEC, 0x0D, 0xE7, 0x06, 0xE7, 0x3B, 0x13, 0x07, 0x12, 0xC0, 0x02,
    0x1E, 0x02, 0xA9, 0x17, 0x0B, 0x18, 0x4E, 0xFB, 0x45, 0xEC, 0x37, 0x03, 0xAD, 0xFD, 0x22, 0xEB,
    0xC5, 0x0C, 0xFB, 0x18, 0xB6, 0x02, 0x32, 0x21, 0x7B, 0x15, 0xA3, 0x11, 0x1F, 0xEB, 0xAC, 0x07,
    0xA1, 0x02, 0xBF, 0xE7, 0x2D, 0xDE, 0x58, 0xF1, 0xB3, 0x00, 0xD0, 0x0E, 0x11, 0x00, 0x4C, 0x23,
    0xE9, 0x04, 0xDC, 0x0B, 0xA4, 0xF7, 0x29, 0x0A, 0x93, 0xD6, 0x61, 0xEC, 0x35, 0xE2, 0xA5, 0x0B,
    0xF8, 0xFF, 0x9E, 0xF9, 0xA4, 0x19, 0xFB, 0xFE, 0x02, 0x15, 0x0C, 0x0D, 0x77, 0xE8, 0xD3, 0xDB,
    0x1A, 0x07, 0x77, 0x0A, 0x3B, 0xFE, 0x1E, 0x07, 0x01, 0x1E, 0xDD, 0x1C, 0x5A, 0x05, 0xA9, 0xFD,
    0x8E, 0xF1, 0x77, 0xF5, 0xB2, 0xFF, 0x65, 0xF2, 0x1B, 0xF6, 0x5F, 0x0B, 0x19, 0xEF, 0xA2, 0xFE,
    0xA1, 0x08, 0x23, 0x11, 0x3A, 0x19, 0x05, 0x09, 0x39, 0x10, 0x1D, 0xE8, 0xE3, 0xE7, 0x9B, 0xF3,
    0x4F, 0xF0, 0xB0, 0xEE, 0x02, 0x03, 0x4F, 0x01, 0x1B, 0xFF, 0xB3, 0x1D, 0x1B, 0xFC, 0x65, 0x10,
    0x36, 0xFA, 0xD6, 0xF5, 0x25, 0x02, 0xCD, 0xEC, 0xEB, 0x01, 0x24, 0xF3, 0x7F, 0xF3, 0xC6, 0x02,
    0xB3, 0xF9, 0x6E, 0x14, 0xF0, 0x00, 0x58, 0xFB, 0xD9, 0x11, 0x60, 0xFA, 0x6D, 0x00, 0x9E, 0xF9,
    0x72, 0xE1, 0x0A, 0xF3, 0x0B, 0x0D, 0xBC, 0x07, 0x9E, 0x0A, 0x65, 0x13, 0x94, 0x15, 0xDE, 0xFC,
    0xAF, 0xF9, 0xED, 0x08, 0x03, 0x01, 0xC7, 0xE6, 0x37, 0xF2, 0x40, 0xEB, 0xFE, 0xFA, 0x94, 0x08,
    0xA5, 0x13, 0x31, 0x15, 0x35, 0x00, 0x8A, 0x1B, 0x56, 0x13, 0xB6, 0x14, 0xFB, 0xFA, 0x5C, 0xFC,
    0xDD, 0xFB, 0xA9, 0xF7, 0xBF, 0xFA, 0x0D, 0xEF, 0x77, 0x07, 0x13, 0x12, 0x63, 0x14, 0x50, 0x13,
    0x9F, 0xFF, 0x9B, 0xFB, 0x57, 0xFB, 0xF3, 0xF4, 0xB9, 0xEE, 0xC4, 0x03, 0x88, 0xF1, 0xA2, 0xFB,
    0x92, 0xEF, 0x80, 0x06, 0x8F, 0xF8, 0x06, 0x15, 0xF9, 0xFE, 0xA0, 0xFF, 0x1C, 0x16, 0x67, 0x05,
    0x85, 0x08, 0x09, 0xFE, 0x10, 0xF0, 0x57, 0xF7, 0x80, 0xF9, 0xAD, 0xF6, 0x1A, 0x00, 0x3C, 0x07,
    0x0D, 0xF6, 0x9F, 0xF9, 0x21, 0x16, 0x65, 0x12, 0x27, 0x14, 0xE4, 0xFE, 0x3A, 0x01, 0x29, 0xF9,
    0x8A, 0x02, 0x35, 0xEF, 0x33, 0xF9, 0x67, 0xF4, 0x57, 0xEE, 0xE4, 0xFC, 0x3D, 0x0E, 0x3B, 0xFC,
    0x22, 0xFB, 0x6E, 0xFF, 0xD1, 0x10, 0xBA, 0xFA, 0x0C, 0xFF, 0xCD, 0xF5, 0xCE, 0x04, 0x40, 0x02,
    0x97, 0xF9, 0x76, 0xEF, 0xE1, 0xF1, 0x58, 0xF9, 0x09, 0x00, 0x9F, 0x06, 0xF1, 0xFD, 0x68, 0xFC,
    0x75, 0x01, 0x00, 0x0A, 0xF4, 0x0C, 0x7F, 0x06, 0xEE, 0x00, 0xEA, 0xF8, 0xF2, 0xFF, 0x60, 0x01,
    0x8C, 0x02, 0x63, 0x01, 0x3C, 0x04, 0x8C, 0x08, 0x14, 0x00, 0xD2, 0xFF, 0xBA, 0x0A, 0x8B, 0x04,
    0xE0, 0xFD, 0x6E, 0xFB, 0x7A, 0xF9, 0x2B, 0x01, 0x47, 0xFD, 0xF7, 0xFF, 0xBD, 0xF2, 0x0B, 0x03,
    0x10, 0xF9, 0xDF, 0xF5, 0x30, 0xFA, 0x4B, 0xFD, 0x65, 0xFD, 0x1F, 0x03, 0x83, 0xFC, 0x5F, 0xFC,
    0x62, 0xFF, 0xB3, 0x03, 0x7A, 0x04, 0xA9, 0x05, 0x00, 0xFE, 0xA2, 0xF9, 0x1E, 0xF4, 0x06, 0xFF,
    0x39, 0xF7, 0x1C, 0xFE, 0xAF, 0xFA, 0xB1, 0x02, 0x44, 0x04, 0xB1, 0x00, 0xFB, 0x0C, 0x2B, 0xFE,
    0x85, 0xFC, 0xD4, 0x06, 0x09, 0xFE, 0x6C, 0xFA, 0x33, 0x00, 0x4B, 0xFD, 0xC7, 0x02, 0x73, 0xF9,
    0xE7, 0xF3, 0x75, 0xFD, 0xD3, 0xF8, 0x36, 0xFE, 0x2F, 0x09, 0xAA, 0x08, 0x1E, 0x0A, 0x70, 0x04,
    0x48, 0xFD, 0x90, 0x04, 0xF7, 0x03, 0x4C, 0x02, 0xC9, 0xF6, 0x4A, 0xFE, 0xCF, 0xF9, 0xE6, 0xF3,
    0x7C, 0xFF, 0x08, 0xFF, 0xA0, 0xF5, 0xAC, 0x01, 0x9C, 0xFF, 0x9D, 0x03, 0xF4, 0xFD, 0x1C, 0x0B,
    0x90, 0x02, 0x1F, 0x05, 0x86, 0x03, 0xE6, 0xFB, 0x6E, 0xFC, 0xFF, 0xFD, 0x8C, 0xFB, 0x1E, 0xF4,
    0xE5, 0xF9, 0x7F, 0xFF, 0x12, 0xFA, 0x55, 0x04, 0xA6, 0xF8, 0x6F, 0x04, 0x86, 0xFA, 0xCF, 0x05,
    0x51, 0x06, 0x17, 0x0C, 0x73, 0x03, 0x9A, 0x06, 0xEE, 0x06, 0xF8, 0xFC, 0xC5, 0xFD, 0xAF, 0xF8,
    0x77, 0xF9, 0xA6, 0xF7, 0x16, 0xF6, 0xBC, 0x00, 0x91, 0xFB, 0x5D, 0xF9, 0xB5, 0xF9, 0xF4, 0x05,
    0x31, 0xFD, 0x72, 0x03, 0xB9, 0xFD, 0xDE, 0x01, 0x63, 0xFE, 0x9B, 0xFE, 0xC8, 0xFD, 0x61, 0xFE,
    0xAB, 0xFE, 0x5A, 0xFC, 0x33, 0xFC, 0x9D, 0xF8, 0x27, 0xFA, 0xBA, 0x00, 0xDB, 0xFF, 0x71, 0xF6,
    0x0A, 0x01, 0x60, 0x00, 0xCB, 0xFE, 0x04, 0x04, 0x3F, 0x02, 0x7F, 0x00, 0x68, 0x08, 0xC7, 0x03,
    0x27, 0x03, 0xBB, 0x03, 0x54, 0xFE, 0x2E, 0xFF, 0xEF, 0x03, 0x21, 0x04, 0x75, 0xFC, 0x9C, 0x01,
    0x1D, 0xFB, 0xA2, 0xFF, 0xD8, 0xFD, 0x25, 0xFE, 0x09, 0xFC, 0x14, 0xFB, 0x19, 0xFE, 0x6A, 0xFA,
];

/// Byte length of [`SAMPLE08`].
pub const SAMPLE08_LEN: u32 = 1024;
