use sportcli::{
    report::{FieldValue, RecordTable, SortOrder},
    types::{ArtistRecord, TrackRecord},
};

fn track(title: &str, album: &str, popularity: u8, duration_minutes: u64) -> TrackRecord {
    TrackRecord {
        title: title.to_string(),
        album: album.to_string(),
        popularity,
        duration_minutes,
    }
}

fn artist(id: &str, name: &str, followers: u64, popularity: u8) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: name.to_string(),
        followers,
        popularity,
        genres: Vec::new(),
        url: String::new(),
    }
}

fn titles(table: &RecordTable<TrackRecord>) -> Vec<&str> {
    table.records().iter().map(|t| t.title.as_str()).collect()
}

fn sample_tracks() -> RecordTable<TrackRecord> {
    RecordTable::new(vec![
        track("a", "x", 40, 3),
        track("b", "y", 90, 5),
        track("c", "z", 40, 2),
        track("d", "w", 70, 5),
        track("e", "v", 40, 4),
    ])
}

#[test]
fn test_unknown_field_sorts_like_default() {
    let table = sample_tracks();

    let by_invalid = table.sort("invalid", SortOrder::Descending);
    let by_default = table.sort("Popularity", SortOrder::Descending);

    assert_eq!(by_invalid, by_default);
    assert_eq!(titles(&by_invalid), vec!["b", "d", "a", "c", "e"]);
}

#[test]
fn test_sort_is_stable_descending() {
    let table = sample_tracks();
    let sorted = table.sort("popularity", SortOrder::Descending);

    // a, c, e share popularity 40 and keep their relative order
    assert_eq!(titles(&sorted), vec!["b", "d", "a", "c", "e"]);
}

#[test]
fn test_sort_is_stable_ascending() {
    let table = sample_tracks();
    let sorted = table.sort("Duration (min)", SortOrder::Ascending);

    assert_eq!(titles(&sorted), vec!["c", "a", "e", "b", "d"]);
}

#[test]
fn test_sort_field_aliases() {
    let table = sample_tracks();

    assert_eq!(
        table.sort("duration", SortOrder::Descending),
        table.sort("Duration (min)", SortOrder::Descending)
    );
    assert_eq!(
        RecordTable::<TrackRecord>::resolve_sort_field("  ALBUM "),
        "Album"
    );
    assert_eq!(RecordTable::<TrackRecord>::resolve_sort_field(""), "Popularity");
}

#[test]
fn test_sort_does_not_mutate_source() {
    let table = sample_tracks();
    let _ = table.sort("popularity", SortOrder::Ascending);

    assert_eq!(titles(&table), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_text_sort_ignores_case() {
    let table = RecordTable::new(vec![
        track("beta", "", 0, 0),
        track("Alpha", "", 0, 0),
        track("gamma", "", 0, 0),
    ]);

    let sorted = table.sort("track", SortOrder::Ascending);
    assert_eq!(titles(&sorted), vec!["Alpha", "beta", "gamma"]);
}

#[test]
fn test_comparison_by_popularity_descending() {
    let table = RecordTable::new(vec![
        artist("1", "Big Following", 500_000, 40),
        artist("2", "Very Popular", 100, 90),
    ]);

    let sorted = table.sort("Popularity", SortOrder::Descending);
    assert_eq!(sorted.records()[0].id, "2");

    let sorted = table.sort("followers", SortOrder::Descending);
    assert_eq!(sorted.records()[0].id, "1");
}

#[test]
fn test_comparison_default_is_followers() {
    assert_eq!(
        RecordTable::<ArtistRecord>::resolve_sort_field("whatever"),
        "Followers"
    );

    // Genres is declared but not sortable
    assert_eq!(
        RecordTable::<ArtistRecord>::resolve_sort_field("genres"),
        "Followers"
    );
}

#[test]
fn test_sort_order_from_input() {
    assert_eq!(SortOrder::from_input("asc"), SortOrder::Ascending);
    assert_eq!(SortOrder::from_input(" ASC "), SortOrder::Ascending);
    assert_eq!(SortOrder::from_input("ascending"), SortOrder::Ascending);
    assert_eq!(SortOrder::from_input("desc"), SortOrder::Descending);
    assert_eq!(SortOrder::from_input(""), SortOrder::Descending);
    assert_eq!(SortOrder::from_input("sideways"), SortOrder::Descending);
}

#[test]
fn test_to_record_sequence() {
    let mut first = artist("1", "Four Tet", 150_000, 70);
    first.genres = vec!["idm".to_string(), "electronica".to_string()];
    let table = RecordTable::new(vec![first, artist("2", "Nobody", 0, 0)]);

    let rows = table.to_record_sequence();

    assert_eq!(
        rows[0],
        vec![
            ("Artist", FieldValue::Text("Four Tet".to_string())),
            ("Followers", FieldValue::Integer(150_000)),
            ("Popularity", FieldValue::Integer(70)),
            ("Genres", FieldValue::Text("idm, electronica".to_string())),
        ]
    );
    assert_eq!(rows[1][3], ("Genres", FieldValue::Text("N/A".to_string())));
}
