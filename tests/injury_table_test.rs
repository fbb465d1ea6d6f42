//! Integration tests for the injury report table

use espn_fba::{
    injury::{export::export_rows, parse::table_from_rows},
    InjuryTable,
};

fn report_rows() -> Vec<Vec<String>> {
    [
        vec!["Player", "Position", "Updated", "Injury", "Injury Status"],
        vec!["J. Collins\nJohn Collins", "PF", "Nov 5", "Suspension", "Out"],
        vec!["L. Ball\nLonzo Ball", "PG", "Nov 6", "Ankle", "Game Time Decision"],
        vec!["Player", "Position", "Updated", "Injury", "Injury Status"],
        vec!["M. Wagner\nMoe Wagner", "C", "Nov 7", "Ankle", "Out"],
        vec!["Too", "Few", "Cells", "Here"],
        vec!["Too", "Many", "Cells", "In", "This", "Row"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect()
}

#[test]
fn test_report_then_manual_rows_export() {
    let mut table = table_from_rows(report_rows());
    assert_eq!(table.len(), 3);

    table.append_suspension("Deandre Ayton", "C", "Oct 28", "Dec 17");

    let rows = export_rows(&table).unwrap();
    assert_eq!(rows.len(), 5);
    let ayton = rows.iter().find(|r| r[0] == "Deandre Ayton").unwrap();
    assert_eq!(ayton[3], "Suspension");
    assert_eq!(ayton[4], "Expected to be out until at least Dec 17");
    assert!(rows.iter().all(|r| r.len() == 5));
}

#[test]
fn test_report_names_cleaned() {
    let table = table_from_rows(report_rows());
    assert_eq!(table.position_of("John Collins"), Some(0));
    assert_eq!(table.position_of("Moritz Wagner"), Some(2));
    assert_eq!(table.position_of("Moe Wagner"), None);
}

#[test]
fn test_update_existing_player_only_touches_that_row() {
    let mut table = table_from_rows(report_rows());
    let before = table.clone();

    assert!(table.update_injury("John Collins", "PF", "Nov 8", "Suspension", "Dec 23"));

    assert_eq!(
        table.row(0).unwrap(),
        vec![
            "John Collins",
            "PF",
            "Nov 8",
            "Suspension",
            "Expected to be out until at least Dec 23"
        ]
    );
    for i in 1..table.len() {
        assert_eq!(table.row(i), before.row(i));
    }
    assert_eq!(table.columns()[0], before.columns()[0]);
}

#[test]
fn test_update_absent_player_leaves_table_unchanged() {
    let mut table = table_from_rows(report_rows());
    let before = table.clone();

    assert!(!table.update_injury("Deandre Ayton", "C", "Oct 28", "Suspension", "Dec 17"));
    assert_eq!(table, before);
}

#[test]
fn test_empty_table_exports_header_only() {
    let rows = export_rows(&InjuryTable::new()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Player");
}
