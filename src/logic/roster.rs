//! Roster import: CSV rows to participants, handicap cell parsing.

use crate::models::{Gender, Participant};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Errors that can occur while importing a roster file.
#[derive(Debug)]
pub enum ImportError {
    /// The CSV could not be parsed.
    Csv(csv::Error),
    /// The file contained no data rows.
    EmptyRoster,
    /// A data row had an empty name (1-based row number, excluding header).
    MissingName(usize),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Invalid CSV: {}", e),
            ImportError::EmptyRoster => write!(f, "Roster file contains no participants"),
            ImportError::MissingName(row) => write!(f, "Row {} has no name", row),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

/// One row of an imported roster file. Only `name` is required; the
/// remaining columns may be absent entirely.
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    handicap: Option<String>,
    #[serde(default)]
    member_number: Option<String>,
    #[serde(default)]
    pre_group_code: Option<String>,
    #[serde(default)]
    gender: Option<String>,
}

/// Parse CSV text (header row: name, handicap, member_number,
/// pre_group_code, gender) into participants. Registration numbers are
/// assigned A01, A02, ... in file order.
pub fn import_roster(data: &str) -> Result<Vec<Participant>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut participants = Vec::new();
    for (i, row) in reader.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        let name = row.name.trim();
        if name.is_empty() {
            return Err(ImportError::MissingName(i + 1));
        }
        let mut p = Participant::new(name, format!("A{:02}", i + 1));
        p.handicap = parse_handicap(row.handicap.as_deref());
        p.member_number = row.member_number.unwrap_or_default();
        p.pre_group_code = clean_cell(row.pre_group_code);
        p.gender = parse_gender(row.gender.as_deref());
        participants.push(p);
    }

    if participants.is_empty() {
        return Err(ImportError::EmptyRoster);
    }
    Ok(participants)
}

/// Extract a handicap value from a spreadsheet cell.
///
/// Accepts plain numbers ("12.5", "0", "-2"), parenthesized values
/// ("(8.2)"), and text containing a number ("HCP 12"). Empty cells, "nan",
/// and text without any number parse as unknown. A cell holding 0 is a real
/// score, not unknown.
pub fn parse_handicap(cell: Option<&str>) -> Option<f64> {
    static PARENS: OnceLock<Regex> = OnceLock::new();
    static NUMBER: OnceLock<Regex> = OnceLock::new();

    let cell = cell?.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return None;
    }
    if let Ok(v) = cell.parse::<f64>() {
        return Some(v);
    }
    let parens = PARENS.get_or_init(|| {
        Regex::new(r"\(([-+]?\d+(?:\.\d+)?)\)").expect("parenthesized handicap pattern")
    });
    if let Some(caps) = parens.captures(cell) {
        if let Ok(v) = caps[1].parse::<f64>() {
            return Some(v);
        }
    }
    let number = NUMBER
        .get_or_init(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("bare handicap pattern"));
    number.find(cell).and_then(|m| m.as_str().parse().ok())
}

fn parse_gender(cell: Option<&str>) -> Gender {
    match cell.map(str::trim) {
        Some(g) if g.eq_ignore_ascii_case("f") || g.eq_ignore_ascii_case("female") => {
            Gender::Female
        }
        _ => Gender::Male,
    }
}

fn clean_cell(cell: Option<String>) -> Option<String> {
    cell.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}
