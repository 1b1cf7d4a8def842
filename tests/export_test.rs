use std::{fs, fs::File, io::Read, path::Path};

use sportcli::{
    report::{
        ExportFormat, ExportOutcome, FieldValue, FormatSpec, NumericFormat, RecordTable,
        SortOrder, TableData, export, pdf::winansi_text,
    },
    types::{ArtistRecord, TrackRecord},
};
use tempfile::tempdir;
use zip::ZipArchive;

fn track(title: &str, album: &str, popularity: u8, duration_minutes: u64) -> TrackRecord {
    TrackRecord {
        title: title.to_string(),
        album: album.to_string(),
        popularity,
        duration_minutes,
    }
}

fn artist(id: &str, name: &str, followers: u64, popularity: u8, genres: &[&str]) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: name.to_string(),
        followers,
        popularity,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        url: String::new(),
    }
}

fn tracks_table() -> RecordTable<TrackRecord> {
    RecordTable::new(vec![
        track("Baby", "New Energy", 55, 4),
        track(
            "A Track With A Remarkably Long Title That Will Not Fit",
            "Rounds",
            70,
            6,
        ),
        track("Two Thousand and Seventeen", "New Energy", 62, 5),
    ])
}

#[test]
fn test_export_top_tracks_xlsx() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("top_tracks_Four_Tet.xlsx");
    let table = tracks_table().sort("popularity", SortOrder::Descending);

    let outcome = export(
        &table,
        &path,
        &FormatSpec::top_tracks("Four Tet"),
        ExportFormat::Xlsx.writer().as_ref(),
    )
    .expect("Excel written");

    assert_eq!(outcome, ExportOutcome::Written(path.clone()));
    let bytes = fs::read(&path).expect("file readable");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

/// Reads one part of an xlsx package as text.
fn xlsx_part(path: &Path, name: &str) -> String {
    let file = File::open(path).expect("workbook readable");
    let mut archive = ZipArchive::new(file).expect("workbook is a zip package");
    let mut part = archive.by_name(name).expect("part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("part is utf-8");
    xml
}

#[test]
fn test_export_comparison_xlsx_layout() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("artist_comparison.xlsx");
    let table = RecordTable::new(vec![
        artist("1", "Four Tet", 150_000, 70, &["idm", "electronica"]),
        artist("2", "Burial", 612_345, 61, &[]),
    ]);

    export(
        &table,
        &path,
        &FormatSpec::comparison("Followers"),
        ExportFormat::Xlsx.writer().as_ref(),
    )
    .expect("Excel written");

    let workbook = xlsx_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"<sheet name="Comparison""#));

    let sheet = xlsx_part(&path, "xl/worksheets/sheet1.xml");
    // frozen header row
    assert!(sheet.contains(r#"ySplit="1""#));
    assert!(sheet.contains(r#"state="frozen""#));
    // filter over the header and both data rows
    assert!(sheet.contains(r#"<autoFilter ref="A1:D3"/>"#));
    // Artist 34, Followers 26, Popularity 20, Genres 46
    for (col, width) in [(1, 34), (2, 26), (3, 20), (4, 46)] {
        let prefix = format!(r#"<col min="{col}" max="{col}" width="{width}."#);
        assert!(sheet.contains(&prefix), "missing {prefix}");
    }

    let styles = xlsx_part(&path, "xl/styles.xml");
    assert!(styles.contains("<b/>"));
    // `#,##0` is built-in number format 3; it may also be spelled out
    assert!(styles.contains(r#"numFmtId="3""#) || styles.contains(r##"formatCode="#,##0""##));
}

#[test]
fn test_export_top_tracks_xlsx_sheet_name() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("top_tracks_Four_Tet.xlsx");

    export(
        &tracks_table(),
        &path,
        &FormatSpec::top_tracks("Four Tet"),
        ExportFormat::Xlsx.writer().as_ref(),
    )
    .expect("Excel written");

    let workbook = xlsx_part(&path, "xl/workbook.xml");
    assert!(workbook.contains(r#"<sheet name="TopTracks""#));

    let sheet = xlsx_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains(r#"<autoFilter ref="A1:D4"/>"#));

    // spreadsheet cells keep the full title, only documents truncate
    let strings = xlsx_part(&path, "xl/sharedStrings.xml");
    assert!(strings.contains("A Track With A Remarkably Long Title That Will Not Fit"));
}

#[test]
fn test_export_comparison_pdf() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("artist_comparison.pdf");
    let table = RecordTable::new(vec![
        artist("1", "Four Tet", 150_000, 70, &["idm", "electronica"]),
        artist("2", "Burial", 612_345, 61, &[]),
    ]);

    let outcome = export(
        &table,
        &path,
        &FormatSpec::comparison("Followers"),
        ExportFormat::Pdf.writer().as_ref(),
    )
    .expect("PDF written");

    assert_eq!(outcome, ExportOutcome::Written(path.clone()));
    let bytes = fs::read(&path).expect("file readable");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_non_latin_names_pdf() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("artist_comparison.pdf");
    let table = RecordTable::new(vec![
        artist("1", "坂本龍一", 1_234_567, 50, &["j-pop"]),
        artist("2", "Björk", 1_234_567, 60, &["art pop"]),
    ]);

    let outcome = export(
        &table,
        &path,
        &FormatSpec::comparison("Followers"),
        ExportFormat::Pdf.writer().as_ref(),
    )
    .expect("PDF written");

    assert_eq!(outcome, ExportOutcome::Written(path.clone()));
    assert!(fs::read(&path).expect("file readable").starts_with(b"%PDF"));
}

#[test]
fn test_winansi_text() {
    // Latin-1 and the typographic extras pass through untouched
    assert_eq!(winansi_text("Björk"), "Björk");
    assert_eq!(winansi_text("Sigur Rós – Ágætis byrjun"), "Sigur Rós – Ágætis byrjun");

    // a name never disappears, it is replaced character by character
    assert_eq!(winansi_text("坂本龍一"), "????");
    assert_eq!(winansi_text("宇多田ヒカル"), "??????");
    assert_eq!(winansi_text("Mø ✓"), "Mø ?");
}

#[test]
fn test_export_many_rows_pdf_spans_pages() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("long.pdf");
    let table = RecordTable::new(
        (0..60)
            .map(|i| track(&format!("Track {i}"), "Album", (i % 100) as u8, 3))
            .collect(),
    );

    let outcome = export(
        &table,
        &path,
        &FormatSpec::top_tracks("Many"),
        ExportFormat::Pdf.writer().as_ref(),
    )
    .expect("PDF written");

    assert!(matches!(outcome, ExportOutcome::Written(_)));
    assert!(path.is_file());
}

#[test]
fn test_export_empty_table_writes_nothing() {
    let dir = tempdir().expect("temporary directory");

    for format in [ExportFormat::Xlsx, ExportFormat::Pdf] {
        let path = dir.path().join(format!("empty.{:?}", format));
        let table: RecordTable<TrackRecord> = RecordTable::new(Vec::new());

        let outcome = export(
            &table,
            &path,
            &FormatSpec::top_tracks("Nobody"),
            format.writer().as_ref(),
        )
        .expect("export succeeds");

        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!path.exists());
    }
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("report.xlsx");
    fs::write(&path, b"stale content").expect("seed file");

    export(
        &tracks_table(),
        &path,
        &FormatSpec::top_tracks("Four Tet"),
        ExportFormat::Xlsx.writer().as_ref(),
    )
    .expect("Excel written");

    let bytes = fs::read(&path).expect("file readable");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_table_data_follows_columns() {
    let data = TableData::from(&tracks_table());

    assert_eq!(data.headers, vec!["Track", "Album", "Popularity", "Duration (min)"]);
    assert_eq!(data.rows.len(), 3);
    assert_eq!(
        data.rows[0],
        vec![
            FieldValue::Text("Baby".to_string()),
            FieldValue::Text("New Energy".to_string()),
            FieldValue::Integer(55),
            FieldValue::Integer(4),
        ]
    );
}

#[test]
fn test_format_spec_presets() {
    let tracks = FormatSpec::top_tracks("Four Tet");
    assert_eq!(tracks.sheet_name, "TopTracks");
    assert_eq!(tracks.title, "Top Tracks for Four Tet");
    assert!(tracks.header_bold);
    assert_eq!(tracks.column("Track").truncate_at, Some(30));
    assert_eq!(tracks.column("Album").truncate_at, Some(30));

    let comparison = FormatSpec::comparison("Popularity");
    assert_eq!(comparison.sheet_name, "Comparison");
    assert_eq!(
        comparison.column("Followers").numeric_format,
        NumericFormat::ThousandsSeparated
    );
    assert_eq!(
        comparison.column("Popularity").numeric_format,
        NumericFormat::PlainInteger
    );

    // Unknown columns get a plain default
    let fallback = comparison.column("Unknown");
    assert_eq!(fallback.numeric_format, NumericFormat::PlainInteger);
    assert_eq!(fallback.truncate_at, None);
}

#[test]
fn test_column_render() {
    let spec = FormatSpec::comparison("Followers");

    assert_eq!(
        spec.column("Followers").render(&FieldValue::Integer(1_500_000)),
        "1,500,000"
    );
    assert_eq!(spec.column("Popularity").render(&FieldValue::Integer(1_500)), "1500");

    let long = FieldValue::Text("An Artist Name Longer Than Twenty".to_string());
    assert_eq!(spec.column("Artist").render(&long), "An Artist Name Longe");

    let genres = FieldValue::Text("idm, hip hop, j-pop".to_string());
    assert_eq!(spec.column("Genres").render(&genres), "Idm, Hip Hop, J-Pop");
    assert_eq!(spec.column("Genres").render(&FieldValue::Text("N/A".to_string())), "N/A");
}

#[test]
fn test_column_render_duration_suffix() {
    let spec = FormatSpec::top_tracks("Four Tet");

    assert_eq!(spec.column("Duration (min)").render(&FieldValue::Integer(4)), "4 min");
    assert_eq!(spec.column("Popularity").render(&FieldValue::Integer(55)), "55");
    // track titles are not title-cased
    assert_eq!(
        spec.column("Track").render(&FieldValue::Text("baby".to_string())),
        "baby"
    );
}
