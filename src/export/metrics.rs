//! Helvetica glyph widths (1/1000 em) for WinAnsi codes 32..=126 and 160..=255

const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32..47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 48..63
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 64..79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 80..95
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 96..111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 112..126
];

const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 160..175
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 176..191
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 192..207
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 208..223
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 224..239
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 240..255
];

const FALLBACK_WIDTH: u16 = 556;

/// Width of one encoded byte in 1/1000 em
pub fn glyph_width(byte: u8) -> u16 {
    match byte {
        32..=126 => ASCII_WIDTHS[(byte - 32) as usize],
        160..=255 => LATIN1_WIDTHS[(byte - 160) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of an encoded string in points at `font_size`
pub fn text_width(bytes: &[u8], font_size: f32) -> f32 {
    let units: u32 = bytes.iter().map(|&b| u32::from(glyph_width(b))).sum();
    units as f32 * font_size / 1000.0
}
