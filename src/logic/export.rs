//! CSV roster import and spreadsheet-ready exports (group tables, score sheets, qualifiers).

use crate::models::{Entrant, EntryLabel, LeagueError, LeaguePlan};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Roster CSV row. Header: `affiliation,member_1,member_2`.
#[derive(Deserialize)]
struct RosterRow {
    #[serde(default)]
    affiliation: Option<String>,
    member_1: String,
    member_2: String,
}

#[derive(Serialize)]
struct GroupRow<'a> {
    group: char,
    label: String,
    affiliation: &'a str,
    member_1: &'a str,
    member_2: &'a str,
}

/// Score sheet row; the result and notes columns are left blank for hand entry.
#[derive(Serialize)]
struct MatchRow {
    group: char,
    #[serde(rename = "match")]
    number: usize,
    label_1: String,
    entrant_1: String,
    label_2: String,
    entrant_2: String,
    score_1: &'static str,
    score_2: &'static str,
    winner: &'static str,
    notes: &'static str,
}

#[derive(Serialize)]
struct QualifierRow {
    group: char,
    rank: Option<u32>,
    label: String,
    entrant: String,
}

/// Read a roster from CSV. Rows missing a member name are rejected with their 0-based row index.
pub fn import_roster<R: Read>(reader: R) -> Result<Vec<Entrant>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut roster = Vec::new();
    for (index, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        let entrant = Entrant::new(row.affiliation.as_deref(), row.member_1, row.member_2);
        if !entrant.is_valid() {
            return Err(LeagueError::InvalidEntrant { index });
        }
        roster.push(entrant);
    }
    if roster.is_empty() {
        return Err(LeagueError::EmptyRoster);
    }
    Ok(roster)
}

/// One row per entry: group, label and the pair's details.
pub fn export_groups<W: Write>(plan: &LeaguePlan, writer: W) -> Result<(), LeagueError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for group in &plan.groups {
        for entry in &group.entries {
            wtr.serialize(GroupRow {
                group: group.name,
                label: entry.label.to_string(),
                affiliation: entry.entrant.affiliation.as_deref().unwrap_or(""),
                member_1: &entry.entrant.member_1,
                member_2: &entry.entrant.member_2,
            })?;
        }
    }
    flush(wtr)
}

/// Score sheet: one row per group match in order of play.
pub fn export_matches<W: Write>(plan: &LeaguePlan, writer: W) -> Result<(), LeagueError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for m in &plan.matches {
        wtr.serialize(MatchRow {
            group: m.group,
            number: m.number,
            label_1: m.entry_1.to_string(),
            entrant_1: entrant_name(plan, m.entry_1),
            label_2: m.entry_2.to_string(),
            entrant_2: entrant_name(plan, m.entry_2),
            score_1: "",
            score_2: "",
            winner: "",
            notes: "",
        })?;
    }
    flush(wtr)
}

pub fn export_qualifiers<W: Write>(plan: &LeaguePlan, writer: W) -> Result<(), LeagueError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for q in &plan.qualifiers {
        wtr.serialize(QualifierRow {
            group: q.group,
            rank: q.rank,
            label: q.label.to_string(),
            entrant: entrant_name(plan, q.label),
        })?;
    }
    flush(wtr)
}

fn entrant_name(plan: &LeaguePlan, label: EntryLabel) -> String {
    plan.entrant(label).map(ToString::to_string).unwrap_or_default()
}

fn flush<W: Write>(mut wtr: csv::Writer<W>) -> Result<(), LeagueError> {
    wtr.flush().map_err(|e| LeagueError::Csv(e.to_string()))
}
