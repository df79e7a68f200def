//! Minimal text flow: cells, line wrapping and automatic page breaks
//!
//! Geometry follows the classic single-font report defaults: A4 portrait,
//! 10 mm margins, 20 mm bottom break zone, 1 mm cell padding. All values
//! are in PDF points with `y` measured from the top of the page.

use super::metrics::{glyph_width, text_width};

/// Points per millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Distance from the bottom edge below which no line may start
    pub break_margin: f32,
    pub cell_padding: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            width: 210.0 * PT_PER_MM,
            height: 297.0 * PT_PER_MM,
            margin_left: 10.0 * PT_PER_MM,
            margin_top: 10.0 * PT_PER_MM,
            margin_right: 10.0 * PT_PER_MM,
            break_margin: 20.0 * PT_PER_MM,
            cell_padding: 1.0 * PT_PER_MM,
        }
    }

    fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }

    fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// One line of text positioned on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    /// Baseline, measured from the top edge
    pub baseline: f32,
    /// Extra spacing applied to each space character (justified lines)
    pub word_spacing: f32,
    /// Latin-1 encoded text
    pub text: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

pub struct TextFlow {
    geometry: PageGeometry,
    font_size: f32,
    pages: Vec<Page>,
    y: f32,
}

impl TextFlow {
    pub fn new(geometry: PageGeometry, font_size: f32) -> Self {
        Self {
            geometry,
            font_size,
            pages: vec![Page::default()],
            y: geometry.margin_top,
        }
    }

    /// Single line centered in a cell of `width`, then move to the next line
    pub fn centered_cell(&mut self, width: f32, height: f32, text: Vec<u8>) {
        self.break_if_needed(height);
        let dx = (width - text_width(&text, self.font_size)) / 2.0;
        self.place(self.geometry.margin_left + dx, height, 0.0, text);
        self.y += height;
    }

    /// Vertical gap
    pub fn ln(&mut self, height: f32) {
        self.y += height;
    }

    /// Full-width block; each paragraph wraps at the printable width
    ///
    /// Wrapped lines broken at a space are justified, the last line of each
    /// paragraph is left aligned.
    pub fn multi_cell(&mut self, line_height: f32, paragraphs: &[Vec<u8>]) {
        let max_width = self.geometry.content_width() - 2.0 * self.geometry.cell_padding;
        let x = self.geometry.margin_left + self.geometry.cell_padding;

        for paragraph in paragraphs {
            let wrapped = wrap(paragraph, max_width, self.font_size);
            let last = wrapped.len().saturating_sub(1);
            for (i, line) in wrapped.into_iter().enumerate() {
                let word_spacing = if i < last && line.justify {
                    justify_spacing(&line.text, max_width, self.font_size)
                } else {
                    0.0
                };
                self.break_if_needed(line_height);
                self.place(x, line_height, word_spacing, line.text);
                self.y += line_height;
            }
        }
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }

    fn break_if_needed(&mut self, height: f32) {
        if self.y + height > self.geometry.break_trigger() {
            self.pages.push(Page::default());
            self.y = self.geometry.margin_top;
        }
    }

    fn place(&mut self, x: f32, height: f32, word_spacing: f32, text: Vec<u8>) {
        let baseline = self.y + 0.5 * height + 0.3 * self.font_size;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                x,
                baseline,
                word_spacing,
                text,
            });
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: Vec<u8>,
    /// Broken at a space rather than mid-word
    pub justify: bool,
}

/// Split `text` into lines no wider than `max_width`
///
/// Breaks at the last space that fits (the space is consumed); a word that
/// alone exceeds the width is broken between characters. Always returns at
/// least one line.
pub fn wrap(text: &[u8], max_width: f32, font_size: f32) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut last_space: Option<usize> = None;
    let mut width = 0.0;
    let mut i = 0;

    while i < text.len() {
        let c = text[i];
        if c == b' ' {
            last_space = Some(i);
        }
        width += f32::from(glyph_width(c)) * font_size / 1000.0;

        if width > max_width {
            match last_space {
                Some(space) if space > start => {
                    lines.push(WrappedLine {
                        text: text[start..space].to_vec(),
                        justify: true,
                    });
                    start = space + 1;
                }
                _ => {
                    let end = if i == start { i + 1 } else { i };
                    lines.push(WrappedLine {
                        text: text[start..end].to_vec(),
                        justify: false,
                    });
                    start = end;
                }
            }
            i = start;
            last_space = None;
            width = 0.0;
            continue;
        }
        i += 1;
    }

    lines.push(WrappedLine {
        text: text[start..].to_vec(),
        justify: false,
    });
    lines
}

fn justify_spacing(text: &[u8], max_width: f32, font_size: f32) -> f32 {
    let spaces = text.iter().filter(|&&b| b == b' ').count();
    if spaces == 0 {
        return 0.0;
    }
    ((max_width - text_width(text, font_size)) / spaces as f32).max(0.0)
}
