//! Integration tests for roster import and handicap cell parsing.

use golf_tournament_web::{import_roster, parse_handicap, Gender, ImportError};

#[test]
fn import_assigns_registration_numbers_in_file_order() {
    let csv = "\
name,handicap,member_number,pre_group_code,gender
Alice,12.5,M100,G1,F
Bob,0,M101,,M
Carol,,M102,G1,
";
    let participants = import_roster(csv).unwrap();

    assert_eq!(participants.len(), 3);
    assert_eq!(participants[0].registration_number, "A01");
    assert_eq!(participants[1].registration_number, "A02");
    assert_eq!(participants[2].registration_number, "A03");

    assert_eq!(participants[0].name, "Alice");
    assert_eq!(participants[0].handicap, Some(12.5));
    assert_eq!(participants[0].gender, Gender::Female);
    assert_eq!(participants[0].pre_group_code.as_deref(), Some("G1"));

    // Zero parses as a real score; an empty cell as unknown.
    assert_eq!(participants[1].handicap, Some(0.0));
    assert_eq!(participants[1].pre_group_code, None);
    assert_eq!(participants[2].handicap, None);
    assert_eq!(participants[2].gender, Gender::Male);
}

#[test]
fn import_with_only_name_and_handicap_columns() {
    let csv = "name,handicap\nDave,7\nErin,(3.5)\n";
    let participants = import_roster(csv).unwrap();

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].handicap, Some(7.0));
    assert_eq!(participants[1].handicap, Some(3.5));
    assert!(participants.iter().all(|p| p.member_number.is_empty()));
    assert!(participants.iter().all(|p| p.pre_group_code.is_none()));
}

#[test]
fn import_of_header_only_file_is_an_error() {
    let err = import_roster("name,handicap\n").unwrap_err();
    assert!(matches!(err, ImportError::EmptyRoster));
}

#[test]
fn import_with_empty_name_reports_the_row() {
    let csv = "name,handicap\nAlice,5\n,7\n";
    let err = import_roster(csv).unwrap_err();
    assert!(matches!(err, ImportError::MissingName(2)));
}

#[test]
fn parse_handicap_accepts_plain_numbers() {
    assert_eq!(parse_handicap(Some("12.5")), Some(12.5));
    assert_eq!(parse_handicap(Some("-2")), Some(-2.0));
    assert_eq!(parse_handicap(Some("+3")), Some(3.0));
    assert_eq!(parse_handicap(Some("0")), Some(0.0));
}

#[test]
fn parse_handicap_extracts_from_text() {
    assert_eq!(parse_handicap(Some("(8.2)")), Some(8.2));
    assert_eq!(parse_handicap(Some("HCP 12")), Some(12.0));
    assert_eq!(parse_handicap(Some("index (4.5) new")), Some(4.5));
}

#[test]
fn parse_handicap_unknown_cases() {
    assert_eq!(parse_handicap(None), None);
    assert_eq!(parse_handicap(Some("")), None);
    assert_eq!(parse_handicap(Some("   ")), None);
    assert_eq!(parse_handicap(Some("nan")), None);
    assert_eq!(parse_handicap(Some("NaN")), None);
    assert_eq!(parse_handicap(Some("pending")), None);
}
