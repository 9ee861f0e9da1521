//! Integration tests for CSV roster import and exports.

use doubles_league::{
    export_groups, export_matches, export_qualifiers, import_roster, plan_league,
    AdvancementPolicy, Entrant, LeagueError, LeagueRequest, PartitionMode,
};

fn plan_for(n: usize, groups: usize) -> doubles_league::LeaguePlan {
    let roster: Vec<Entrant> = (0..n)
        .map(|i| Entrant::new(if i % 2 == 0 { Some("Club") } else { None }, format!("P{i}a"), format!("P{i}b")))
        .collect();
    let req = LeagueRequest {
        roster,
        partition: PartitionMode::Even { groups },
        advancement: Some(AdvancementPolicy::Top1),
        ..LeagueRequest::default()
    };
    plan_league(&req).unwrap()
}

fn to_lines(buf: Vec<u8>) -> Vec<String> {
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn import_reads_and_trims_rows() {
    let csv = "affiliation,member_1,member_2\nNorth, Sato , Suzuki\n,Tanaka,Ito\n";
    let roster = import_roster(csv.as_bytes()).unwrap();
    assert_eq!(
        roster,
        vec![
            Entrant::new(Some("North"), "Sato", "Suzuki"),
            Entrant::new(None, "Tanaka", "Ito"),
        ]
    );
}

#[test]
fn import_rejects_incomplete_and_empty_input() {
    let csv = "affiliation,member_1,member_2\nNorth,Sato,Suzuki\nSouth,Kato,\n";
    assert_eq!(
        import_roster(csv.as_bytes()),
        Err(LeagueError::InvalidEntrant { index: 1 })
    );
    assert_eq!(
        import_roster("affiliation,member_1,member_2\n".as_bytes()),
        Err(LeagueError::EmptyRoster)
    );
    assert!(matches!(
        import_roster("name\nSato\n".as_bytes()),
        Err(LeagueError::Csv(_))
    ));
}

#[test]
fn score_sheet_has_a_row_per_match_with_blank_results() {
    let plan = plan_for(4, 1);
    let mut buf = Vec::new();
    export_matches(&plan, &mut buf).unwrap();
    let lines = to_lines(buf);
    assert_eq!(lines.len(), 1 + 6);
    assert_eq!(
        lines[0],
        "group,match,label_1,entrant_1,label_2,entrant_2,score_1,score_2,winner,notes"
    );
    assert_eq!(lines[1], "A,1,A1,Club: P0a / P0b,A2,P1a / P1b,,,,");
    assert_eq!(lines[2], "A,2,A3,Club: P2a / P2b,A4,P3a / P3b,,,,");
}

#[test]
fn group_table_lists_every_entry() {
    let plan = plan_for(5, 2);
    let mut buf = Vec::new();
    export_groups(&plan, &mut buf).unwrap();
    let lines = to_lines(buf);
    assert_eq!(lines.len(), 1 + 5);
    assert_eq!(lines[0], "group,label,affiliation,member_1,member_2");
    assert_eq!(lines[1], "A,A1,Club,P0a,P0b");
    assert_eq!(lines[2], "A,A2,,P1a,P1b");
    assert_eq!(lines[4], "B,B1,,P3a,P3b");
}

#[test]
fn qualifier_list_carries_group_and_rank() {
    let plan = plan_for(6, 2);
    let mut buf = Vec::new();
    export_qualifiers(&plan, &mut buf).unwrap();
    let lines = to_lines(buf);
    assert_eq!(lines[0], "group,rank,label,entrant");
    // No ranks entered: first in draw order, rank left blank.
    assert_eq!(lines[1], "A,,A1,Club: P0a / P0b");
    assert_eq!(lines[2], "B,,B1,P3a / P3b");
}
