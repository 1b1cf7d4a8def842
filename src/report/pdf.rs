use std::{
    borrow::Cow,
    fs::File,
    io::BufWriter,
    path::Path,
};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use crate::{
    Error, Res,
    report::export::{ColumnFormat, FormatSpec, TabularWriter, TableData},
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 10.0;
const CELL_PADDING: f32 = 1.5;
const TEXT_BASELINE: f32 = 6.5;
const TITLE_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
/// Document millimetres per spreadsheet width unit.
const MM_PER_WIDTH_UNIT: f32 = 1.5;
/// Rough Helvetica advance per character at the title size.
const TITLE_CHAR_WIDTH: f32 = 2.1;

/// Characters of the 0x80..=0x9F block of WinAnsiEncoding.
const WINANSI_EXTRAS: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•', '–',
    '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

fn is_winansi(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF) || WINANSI_EXTRAS.contains(&c)
}

/// Replaces every character the built-in fonts cannot encode with `?`.
///
/// The standard PDF fonts only cover WinAnsiEncoding (Latin-1 plus a few
/// typographic marks). Anything else would be silently dropped from the
/// content stream, so a CJK artist name would leave an empty cell behind.
///
/// # Example
///
/// ```
/// assert_eq!(winansi_text("Björk"), "Björk");
/// assert_eq!(winansi_text("坂本龍一"), "????");
/// ```
pub fn winansi_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_winansi) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_winansi(c) { c } else { '?' })
                .collect(),
        )
    }
}

/// Writes an A4 document with a title and a bordered grid.
///
/// Cells have a fixed width, so long text is cut to the column's
/// `truncate_at`. Rows continue on a new page once the bottom margin is reached.
pub struct PdfWriter;

impl TabularWriter for PdfWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn write(&self, data: &TableData, spec: &FormatSpec, destination: &Path) -> Res<()> {
        let (doc, page, layer) =
            PdfDocument::new(spec.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Table");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::PdfWrite(e.to_string()))?;
        let bold = if spec.header_bold {
            doc.add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| Error::PdfWrite(e.to_string()))?
        } else {
            regular.clone()
        };

        let columns: Vec<ColumnFormat> = data.headers.iter().map(|&h| spec.column(h)).collect();
        let mut grid = Grid {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - MARGIN,
            columns: &columns,
            replaced: 0,
        };

        let title = grid.encode(&spec.title).into_owned();
        let title_width = title.chars().count() as f32 * TITLE_CHAR_WIDTH;
        let title_x = ((PAGE_WIDTH - title_width) / 2.0).max(MARGIN);
        grid.layer
            .use_text(title, TITLE_SIZE, Mm(title_x), Mm(grid.y - 6.0), &regular);
        grid.y -= ROW_HEIGHT + 2.0;

        let headers: Vec<String> = data.headers.iter().map(|h| h.to_string()).collect();
        grid.row(&headers, &bold);

        for row in &data.rows {
            if grid.y - ROW_HEIGHT < MARGIN {
                grid.new_page();
                grid.row(&headers, &bold);
            }
            let cells: Vec<String> = row
                .iter()
                .zip(&columns)
                .map(|(value, column)| column.render(value))
                .collect();
            grid.row(&cells, &regular);
        }

        if grid.replaced > 0 {
            tracing::warn!(
                cells = grid.replaced,
                path = %destination.display(),
                "characters outside the document font were written as '?'"
            );
        }

        let file = File::create(destination)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| Error::PdfWrite(e.to_string()))?;
        Ok(())
    }
}

struct Grid<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Top edge of the next row.
    y: f32,
    columns: &'a [ColumnFormat],
    /// Cells that had characters substituted.
    replaced: usize,
}

impl Grid<'_> {
    fn encode<'t>(&mut self, text: &'t str) -> Cow<'t, str> {
        let encoded = winansi_text(text);
        if matches!(encoded, Cow::Owned(_)) {
            self.replaced += 1;
        }
        encoded
    }

    fn row(&mut self, cells: &[String], font: &IndirectFontRef) {
        let mut x = MARGIN;
        let top = self.y;
        let bottom = self.y - ROW_HEIGHT;

        for (cell, column) in cells.iter().zip(self.columns) {
            let text = self.encode(cell).into_owned();
            let width = column.width as f32 * MM_PER_WIDTH_UNIT;
            self.layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(x), Mm(bottom)), false),
                    (Point::new(Mm(x + width), Mm(bottom)), false),
                    (Point::new(Mm(x + width), Mm(top)), false),
                    (Point::new(Mm(x), Mm(top)), false),
                ],
                is_closed: true,
            });
            self.layer.use_text(
                text,
                BODY_SIZE,
                Mm(x + CELL_PADDING),
                Mm(top - TEXT_BASELINE),
                font,
            );
            x += width;
        }

        self.y = bottom;
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Table");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }
}
