//! Single-byte text encoding for the built-in PDF fonts

/// Encode `text` as Latin-1
///
/// Printable ASCII and U+00A0..=U+00FF map to their code point. Anything
/// else is returned as the offending character: C0/C1 controls and the
/// 0x80..=0x9F range render as different glyphs under WinAnsiEncoding, and
/// characters above U+00FF have no single-byte form at all.
pub fn encode(text: &str) -> Result<Vec<u8>, char> {
    text.chars()
        .map(|c| match c as u32 {
            cp @ (0x20..=0x7E | 0xA0..=0xFF) => Ok(cp as u8),
            _ => Err(c),
        })
        .collect()
}

/// Encode free text that may span several lines
///
/// `\r\n`, `\r` and `\n` all end a line and tabs become spaces; each line is
/// then encoded with [`encode`]. Always returns at least one line.
pub fn encode_lines(text: &str) -> Result<Vec<Vec<u8>>, char> {
    text.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(|line| encode(&line.replace('\t', " ")))
        .collect()
}
