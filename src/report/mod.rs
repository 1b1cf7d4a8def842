//! Tabular reports: in-memory record tables, sorting, and file exporters.
//!
//! ```text
//! Vec<TrackRecord> / Vec<ArtistRecord>
//!          ↓
//! RecordTable::sort (permissive field/order input)
//!          ↓
//! export(table, path, FormatSpec, &dyn TabularWriter)
//!     ├── XlsxWriter (frozen header, autofilter, number formats)
//!     └── PdfWriter  (bordered grid, truncated cells)
//! ```

pub mod export;
pub mod pdf;
pub mod table;
pub mod xlsx;

pub use export::{
    ColumnFormat, ExportFormat, ExportOutcome, FormatSpec, NumericFormat, TableData,
    TabularWriter, export,
};
pub use table::{Column, ColumnKind, FieldValue, FlatRecord, Record, RecordTable, SortOrder};
