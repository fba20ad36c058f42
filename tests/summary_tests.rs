mod common;

use common::counts;
use ratemap::summary::{build_display_table, summarize, DisplayTable};
use rstest::rstest;
use std::io::Read;
use tempfile::NamedTempFile;

#[test]
fn test_texas_totals_and_tooltip() {
    let table = build_display_table(&counts(&[("Texas", "A", 3), ("Texas", "B", 5)]));
    let texas = table.get("Texas").expect("Texas should be displayed");
    assert_eq!(texas.total_count, 8);
    assert_eq!(texas.tooltip_text, "A: 3<br>B: 5");
    assert_eq!(texas.state_code, "TX");
}

#[test]
fn test_empty_input_gives_empty_table() {
    let table = build_display_table(&[]);
    assert!(table.is_empty());
    assert!(table.state_options().is_empty());
}

#[rstest]
#[case("Puerto Rico")]
#[case("District of Columbia")]
#[case("texas")]
#[case("TX")]
#[case("")]
fn test_unknown_state_names_are_dropped(#[case] name: &str) {
    let table = build_display_table(&counts(&[(name, "A", 1), ("Ohio", "A", 2)]));
    assert_eq!(table.len(), 1);
    assert!(table.get(name).is_none());
    assert!(table.select(name).is_none());
    assert_eq!(table.state_options(), vec!["Ohio"]);
}

#[test]
fn test_state_options_are_sorted() {
    let table = build_display_table(&counts(&[
        ("Wyoming", "A", 1),
        ("Alabama", "A", 1),
        ("New York", "B", 4),
        ("Alabama", "B", 2),
        ("Maine", "A", 1),
    ]));
    assert_eq!(
        table.state_options(),
        vec!["Alabama", "Maine", "New York", "Wyoming"]
    );
}

#[test]
fn test_summaries_keep_unknown_states_until_lookup() {
    let summaries = summarize(&counts(&[("Guam", "A", 1), ("Iowa", "A", 1)]));
    assert_eq!(summaries.len(), 2);
    let table = DisplayTable::from_summaries(summaries);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_csv_export() {
    let table = build_display_table(&counts(&[("Texas", "A", 3), ("Texas", "B", 5)]));
    let file = NamedTempFile::new().unwrap();
    table.write_csv(file.path()).unwrap();

    let mut content = String::new();
    std::fs::File::open(file.path())
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("state,state_code,total_count,tooltip_text")
    );
    assert_eq!(lines.next(), Some("Texas,TX,8,A: 3<br>B: 5"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_reselect_keeps_previous_choice() {
    let table = build_display_table(&counts(&[("Texas", "A", 1), ("Ohio", "A", 1)]));
    assert_eq!(table.reselect(Some("Texas")).unwrap().as_str(), "Texas");
}

#[rstest]
#[case(None)]
#[case(Some("Vermont"))]
#[case(Some("Guam"))]
fn test_reselect_falls_back_to_first_option(#[case] previous: Option<&str>) {
    let table = build_display_table(&counts(&[("Texas", "A", 1), ("Ohio", "A", 1)]));
    assert_eq!(table.reselect(previous).unwrap().as_str(), "Ohio");
}

#[test]
fn test_reselect_on_empty_table_selects_nothing() {
    let table = build_display_table(&[]);
    assert!(table.reselect(Some("Texas")).is_none());
    assert!(table.reselect(None).is_none());
}
