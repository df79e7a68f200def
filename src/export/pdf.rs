//! PDF report of a bookmark list

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use tracing::{debug, trace};

use super::latin1;
use super::layout::{PT_PER_MM, Page, PageGeometry, TextFlow};
use crate::config::ExportConfig;
use crate::errors::{BookmarkError, Result};
use crate::store::Bookmark;

const FONT_RESOURCE: &str = "F1";
const TITLE_CELL_WIDTH_MM: f32 = 200.0;
const LINE_HEIGHT_MM: f32 = 10.0;

/// Exporter settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub title: String,
    pub font_size: f32,
    pub geometry: PageGeometry,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            title: config.title.clone(),
            font_size: config.font_size,
            geometry: PageGeometry::a4(),
        }
    }
}

/// Renders bookmark lists into PDF documents
///
/// Output depends only on the bookmarks and the options: no timestamps,
/// no document ids, streams left uncompressed.
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    options: ExportOptions,
}

impl ReportExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render `bookmarks` in order and return the PDF bytes
    pub fn export(&self, bookmarks: &[Bookmark]) -> Result<Vec<u8>> {
        let pages = self.layout(bookmarks)?;
        let bytes = self.write_document(&pages)?;
        debug!(
            "Export: rendered {} bookmark(s) on {} page(s), {} bytes",
            bookmarks.len(),
            pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Position every line of the report
    pub fn layout(&self, bookmarks: &[Bookmark]) -> Result<Vec<Page>> {
        let title = latin1::encode(&self.options.title).map_err(|c| {
            BookmarkError::encoding(format!(
                "Report title contains {} which cannot be encoded as Latin-1",
                describe_char(c)
            ))
        })?;

        let line_height = LINE_HEIGHT_MM * PT_PER_MM;
        let mut flow = TextFlow::new(self.options.geometry, self.options.font_size);
        flow.centered_cell(TITLE_CELL_WIDTH_MM * PT_PER_MM, line_height, title);
        flow.ln(line_height);

        for (i, bookmark) in bookmarks.iter().enumerate() {
            let position = i + 1;
            let [start, end, title] = encode_fields(bookmark, position)?;

            let mut block = vec![format!("{}. ", position).into_bytes()];
            append_lines(&mut block, title);
            block.push(b"Start: ".to_vec());
            append_lines(&mut block, start);
            append_lines(&mut block, vec![b"   End: ".to_vec()]);
            append_lines(&mut block, end);

            trace!("Export: laying out bookmark {}", position);
            flow.multi_cell(line_height, &block);
        }

        Ok(flow.finish())
    }

    fn write_document(&self, pages: &[Page]) -> Result<Vec<u8>> {
        let geometry = &self.options.geometry;
        let mut doc = Document::with_version("1.3");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_RESOURCE => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in pages {
            let content = Content {
                operations: self.page_operations(page),
            };
            let encoded = content.encode()?;
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, encoded).with_compression(false));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    geometry.width.into(),
                    geometry.height.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| BookmarkError::export(format!("Failed to write PDF: {}", e)))?;
        Ok(buffer)
    }

    fn page_operations(&self, page: &Page) -> Vec<Operation> {
        let height = self.options.geometry.height;
        let mut ops = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![FONT_RESOURCE.into(), self.options.font_size.into()],
            ),
            Operation::new("ET", vec![]),
        ];

        for line in &page.lines {
            let justified = line.word_spacing > 0.0;
            if justified {
                ops.push(Operation::new("Tw", vec![line.word_spacing.into()]));
            }
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new(
                "Td",
                vec![line.x.into(), (height - line.baseline).into()],
            ));
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(line.text.clone(), StringFormat::Literal)],
            ));
            ops.push(Operation::new("ET", vec![]));
            if justified {
                ops.push(Operation::new("Tw", vec![0.into()]));
            }
        }
        ops
    }
}

/// Continue the current paragraph with the first line, start new ones for the rest
fn append_lines(block: &mut Vec<Vec<u8>>, lines: Vec<Vec<u8>>) {
    let mut lines = lines.into_iter();
    if let Some(first) = lines.next() {
        match block.last_mut() {
            Some(current) => current.extend_from_slice(&first),
            None => block.push(first),
        }
    }
    block.extend(lines);
}

fn encode_fields(bookmark: &Bookmark, position: usize) -> Result<[Vec<Vec<u8>>; 3]> {
    let encode = |field: &str, value: &str| {
        latin1::encode_lines(value).map_err(|c| {
            BookmarkError::encoding(format!(
                "Bookmark {} {} contains {} which cannot be encoded as Latin-1",
                position,
                field,
                describe_char(c)
            ))
        })
    };
    Ok([
        encode("start", &bookmark.start)?,
        encode("end", &bookmark.end)?,
        encode("title", &bookmark.title)?,
    ])
}

fn describe_char(c: char) -> String {
    if c.is_control() {
        format!("U+{:04X}", c as u32)
    } else {
        format!("'{}' (U+{:04X})", c, c as u32)
    }
}
