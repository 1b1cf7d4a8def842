use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::{
    Res,
    report::{
        pdf::PdfWriter,
        table::{FieldValue, Record, RecordTable},
        xlsx::XlsxWriter,
    },
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFormat {
    PlainInteger,
    ThousandsSeparated,
}

impl NumericFormat {
    /// Spreadsheet number format code.
    pub fn excel_code(self) -> &'static str {
        match self {
            NumericFormat::PlainInteger => "0",
            NumericFormat::ThousandsSeparated => "#,##0",
        }
    }

    pub fn render(self, value: u64) -> String {
        match self {
            NumericFormat::PlainInteger => value.to_string(),
            NumericFormat::ThousandsSeparated => utils::format_thousands(value),
        }
    }
}

/// Presentation hints for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFormat {
    pub field: &'static str,
    /// Width in spreadsheet character units; documents scale it to millimetres.
    pub width: f64,
    pub numeric_format: NumericFormat,
    /// Maximum characters shown in document cells.
    pub truncate_at: Option<usize>,
    /// Unit appended to numbers in document cells, e.g. `" min"`.
    pub suffix: Option<&'static str>,
    /// Title-case text in document cells.
    pub title_case: bool,
}

impl ColumnFormat {
    pub fn new(field: &'static str, width: f64) -> Self {
        Self {
            field,
            width,
            numeric_format: NumericFormat::PlainInteger,
            truncate_at: None,
            suffix: None,
            title_case: false,
        }
    }

    pub fn thousands(mut self) -> Self {
        self.numeric_format = NumericFormat::ThousandsSeparated;
        self
    }

    pub fn truncate(mut self, max_chars: usize) -> Self {
        self.truncate_at = Some(max_chars);
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn title_case(mut self) -> Self {
        self.title_case = true;
        self
    }

    /// Cell text as rendered in documents.
    /// Spreadsheets write the raw value instead.
    pub fn render(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Integer(n) => {
                let mut text = self.numeric_format.render(*n);
                if let Some(suffix) = self.suffix {
                    text.push_str(suffix);
                }
                text
            }
            FieldValue::Text(text) => {
                let text = if self.title_case {
                    utils::title_case(text)
                } else {
                    text.clone()
                };
                match self.truncate_at {
                    Some(max) => utils::truncate_chars(&text, max),
                    None => text,
                }
            }
        }
    }
}

const DEFAULT_COLUMN_WIDTH: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FormatSpec {
    /// Heading printed above document tables.
    pub title: String,
    pub sheet_name: String,
    pub header_bold: bool,
    pub columns: Vec<ColumnFormat>,
}

impl FormatSpec {
    pub fn top_tracks(artist_name: &str) -> Self {
        Self {
            title: format!("Top Tracks for {artist_name}"),
            sheet_name: "TopTracks".to_string(),
            header_bold: true,
            columns: vec![
                ColumnFormat::new("Track", 40.0).truncate(30),
                ColumnFormat::new("Album", 40.0).truncate(30),
                ColumnFormat::new("Popularity", 20.0),
                ColumnFormat::new("Duration (min)", 20.0).suffix(" min"),
            ],
        }
    }

    pub fn comparison(sort_field: &str) -> Self {
        Self {
            title: format!("Artist Comparison by {sort_field}"),
            sheet_name: "Comparison".to_string(),
            header_bold: true,
            columns: vec![
                ColumnFormat::new("Artist", 34.0).truncate(20),
                ColumnFormat::new("Followers", 26.0).thousands(),
                ColumnFormat::new("Popularity", 20.0),
                ColumnFormat::new("Genres", 46.0).title_case().truncate(35),
            ],
        }
    }

    /// Hints for `field`; unknown fields get a plain default column.
    pub fn column(&self, field: &'static str) -> ColumnFormat {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .cloned()
            .unwrap_or_else(|| ColumnFormat::new(field, DEFAULT_COLUMN_WIDTH))
    }
}

/// Header plus rows, the shape every writer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<FieldValue>>,
}

impl<R: Record> From<&RecordTable<R>> for TableData {
    fn from(table: &RecordTable<R>) -> Self {
        Self {
            headers: table.columns().iter().map(|c| c.name).collect(),
            rows: table
                .to_record_sequence()
                .into_iter()
                .map(|record| record.into_iter().map(|(_, value)| value).collect())
                .collect(),
        }
    }
}

/// A backend that persists a table to one file.
pub trait TabularWriter {
    fn extension(&self) -> &'static str;

    /// Writes `data` to `destination`, replacing any existing file.
    fn write(&self, data: &TableData, spec: &FormatSpec, destination: &Path) -> Res<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    NothingToExport,
}

/// Writes `table` through `writer`. An empty table writes nothing.
pub fn export<R: Record>(
    table: &RecordTable<R>,
    destination: &Path,
    spec: &FormatSpec,
    writer: &dyn TabularWriter,
) -> Res<ExportOutcome> {
    if table.is_empty() {
        tracing::debug!(path = %destination.display(), "empty table, nothing to export");
        return Ok(ExportOutcome::NothingToExport);
    }

    writer.write(&TableData::from(table), spec, destination)?;
    tracing::debug!(path = %destination.display(), rows = table.len(), "table exported");
    Ok(ExportOutcome::Written(destination.to_path_buf()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Excel workbook
    Xlsx,
    /// Fixed-layout PDF document
    Pdf,
}

impl ExportFormat {
    pub fn writer(self) -> Box<dyn TabularWriter> {
        match self {
            ExportFormat::Xlsx => Box::new(XlsxWriter),
            ExportFormat::Pdf => Box::new(PdfWriter),
        }
    }
}
