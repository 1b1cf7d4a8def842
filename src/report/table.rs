use std::{cmp::Ordering, fmt};

use crate::types::{ArtistRecord, TrackRecord};

/// A single cell of a flat record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
}

impl FieldValue {
    /// Integers numerically, text case-insensitively. Integers sort before text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Integer(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Integer(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
}

/// A declared field of a record type.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Header text and canonical field name.
    pub name: &'static str,
    /// Lowercase alternatives accepted as sort input.
    pub aliases: &'static [&'static str],
    pub kind: ColumnKind,
    pub sortable: bool,
}

impl Column {
    fn matches(&self, input: &str) -> bool {
        self.name.to_lowercase() == input || self.aliases.contains(&input)
    }
}

/// A record that can be laid out as one table row.
pub trait Record: Clone {
    /// Fields in display order.
    const COLUMNS: &'static [Column];

    /// Field used when sort input names no sortable column.
    const DEFAULT_SORT: &'static str;

    fn field(&self, name: &str) -> Option<FieldValue>;
}

pub type FlatRecord = Vec<(&'static str, FieldValue)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Accepts `asc`/`ascending` and `desc`/`descending` in any case; everything
    /// else, including an empty answer, is [`SortOrder::Descending`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "asc" | "ascending" => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// Ordered, immutable collection of same-shaped records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable<R> {
    records: Vec<R>,
}

impl<R: Record> RecordTable<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn columns(&self) -> &'static [Column] {
        R::COLUMNS
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maps free-text input to a sortable column name, falling back to
    /// [`Record::DEFAULT_SORT`].
    pub fn resolve_sort_field(input: &str) -> &'static str {
        let wanted = input.trim().to_lowercase();
        R::COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .find(|c| c.matches(&wanted))
            .map(|c| c.name)
            .unwrap_or(R::DEFAULT_SORT)
    }

    /// Returns a new table ordered by `by_field`. The sort is stable in both
    /// directions and the source table is left untouched.
    pub fn sort(&self, by_field: &str, order: SortOrder) -> Self {
        let field = Self::resolve_sort_field(by_field);
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            let ord = match (a.field(field), b.field(field)) {
                (Some(a), Some(b)) => a.compare(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            if order.is_ascending() { ord } else { ord.reverse() }
        });
        Self { records }
    }

    pub fn to_record_sequence(&self) -> Vec<FlatRecord> {
        self.records
            .iter()
            .map(|record| {
                R::COLUMNS
                    .iter()
                    .filter_map(|c| record.field(c.name).map(|v| (c.name, v)))
                    .collect()
            })
            .collect()
    }
}

impl<R: Record> From<Vec<R>> for RecordTable<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl Record for TrackRecord {
    const COLUMNS: &'static [Column] = &[
        Column {
            name: "Track",
            aliases: &["track", "title", "name"],
            kind: ColumnKind::Text,
            sortable: true,
        },
        Column {
            name: "Album",
            aliases: &["album"],
            kind: ColumnKind::Text,
            sortable: true,
        },
        Column {
            name: "Popularity",
            aliases: &["popularity"],
            kind: ColumnKind::Integer,
            sortable: true,
        },
        Column {
            name: "Duration (min)",
            aliases: &["duration", "minutes"],
            kind: ColumnKind::Integer,
            sortable: true,
        },
    ];

    const DEFAULT_SORT: &'static str = "Popularity";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Track" => Some(FieldValue::Text(self.title.clone())),
            "Album" => Some(FieldValue::Text(self.album.clone())),
            "Popularity" => Some(FieldValue::Integer(u64::from(self.popularity))),
            "Duration (min)" => Some(FieldValue::Integer(self.duration_minutes)),
            _ => None,
        }
    }
}

impl Record for ArtistRecord {
    const COLUMNS: &'static [Column] = &[
        Column {
            name: "Artist",
            aliases: &["artist", "name"],
            kind: ColumnKind::Text,
            sortable: true,
        },
        Column {
            name: "Followers",
            aliases: &["followers"],
            kind: ColumnKind::Integer,
            sortable: true,
        },
        Column {
            name: "Popularity",
            aliases: &["popularity"],
            kind: ColumnKind::Integer,
            sortable: true,
        },
        Column {
            name: "Genres",
            aliases: &["genres"],
            kind: ColumnKind::Text,
            sortable: false,
        },
    ];

    const DEFAULT_SORT: &'static str = "Followers";

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "Artist" => Some(FieldValue::Text(self.name.clone())),
            "Followers" => Some(FieldValue::Integer(self.followers)),
            "Popularity" => Some(FieldValue::Integer(u64::from(self.popularity))),
            "Genres" => Some(FieldValue::Text(self.genre_list())),
            _ => None,
        }
    }
}
