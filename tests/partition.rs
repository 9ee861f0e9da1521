//! Integration tests for roster partitioning: group sizes, remainder policies and labels.

use doubles_league::{draw, partition, partition_sizes, Entrant, LeagueError, PartitionMode};

fn roster(n: usize) -> Vec<Entrant> {
    (0..n)
        .map(|i| Entrant::new(Some("Club"), format!("P{i}a"), format!("P{i}b")))
        .collect()
}

fn even(groups: usize) -> PartitionMode {
    PartitionMode::Even { groups }
}

#[test]
fn even_split_sums_to_roster_and_differs_by_at_most_one() {
    for n in 1..=40 {
        for k in 1..=n.min(26) {
            let sizes = partition_sizes(n, &even(k)).unwrap();
            assert_eq!(sizes.len(), k);
            assert_eq!(sizes.iter().sum::<usize>(), n);
            let max = *sizes.iter().max().unwrap();
            let min = *sizes.iter().min().unwrap();
            assert!(max - min <= 1, "n={n} k={k} sizes={sizes:?}");
        }
    }
}

#[test]
fn even_split_front_loads_the_remainder() {
    assert_eq!(partition_sizes(10, &even(3)).unwrap(), vec![4, 3, 3]);
    assert_eq!(partition_sizes(11, &even(4)).unwrap(), vec![3, 3, 3, 2]);
}

#[test]
fn even_split_rejects_bad_group_counts() {
    assert_eq!(
        partition_sizes(3, &even(4)),
        Err(LeagueError::TooFewEntrants { entrants: 3, groups: 4 })
    );
    assert_eq!(partition_sizes(3, &even(0)), Err(LeagueError::ZeroGroups));
    assert_eq!(
        partition_sizes(30, &even(27)),
        Err(LeagueError::TooManyGroups { groups: 27 })
    );
    assert_eq!(partition_sizes(0, &even(1)), Err(LeagueError::EmptyRoster));
}

#[test]
fn manual_sizes_are_used_as_given() {
    let mode = PartitionMode::Manual {
        groups: 4,
        sizes: vec![4, 3, 3, 3],
    };
    assert_eq!(partition_sizes(13, &mode).unwrap(), vec![4, 3, 3, 3]);
}

#[test]
fn manual_open_groups_share_the_rest() {
    // Missing sizes count as 0: 8 left over split 4 + 4.
    let mode = PartitionMode::Manual {
        groups: 3,
        sizes: vec![5],
    };
    assert_eq!(partition_sizes(13, &mode).unwrap(), vec![5, 4, 4]);

    // 7 left for two open groups: 3 each, then the last one goes to B.
    let mode = PartitionMode::Manual {
        groups: 3,
        sizes: vec![3, 0, 0],
    };
    assert_eq!(partition_sizes(10, &mode).unwrap(), vec![3, 4, 3]);
}

#[test]
fn manual_open_groups_are_filled_before_set_ones() {
    // Share rounds down to 0; the leftover still lands in C and D.
    let mode = PartitionMode::Manual {
        groups: 4,
        sizes: vec![2, 2, 0, 0],
    };
    assert_eq!(partition_sizes(5, &mode).unwrap(), vec![2, 2, 1, 0]);
    assert_eq!(partition_sizes(6, &mode).unwrap(), vec![2, 2, 1, 1]);

    let mode = PartitionMode::Manual {
        groups: 3,
        sizes: vec![4, 0, 0],
    };
    assert_eq!(partition_sizes(5, &mode).unwrap(), vec![4, 1, 0]);
}

#[test]
fn manual_leftover_goes_one_by_one_in_label_order() {
    let mode = PartitionMode::Manual {
        groups: 3,
        sizes: vec![2, 2, 2],
    };
    assert_eq!(partition_sizes(10, &mode).unwrap(), vec![4, 3, 3]);
}

#[test]
fn manual_rejects_oversized_requests() {
    let mode = PartitionMode::Manual {
        groups: 2,
        sizes: vec![6, 5],
    };
    assert_eq!(
        partition_sizes(10, &mode),
        Err(LeagueError::SizesExceedRoster { assigned: 11, entrants: 10 })
    );
    let mode = PartitionMode::Manual {
        groups: 2,
        sizes: vec![3, 3, 3],
    };
    assert_eq!(
        partition_sizes(10, &mode),
        Err(LeagueError::TooManySizes { groups: 2, sizes: 3 })
    );
}

#[test]
fn target_mode_grows_exactly_the_selected_groups() {
    let mode = PartitionMode::Target {
        size: 4,
        targets: vec!['B'],
    };
    assert_eq!(partition_sizes(13, &mode).unwrap(), vec![4, 5, 4]);

    let exact = PartitionMode::Target {
        size: 4,
        targets: vec![],
    };
    assert_eq!(partition_sizes(12, &exact).unwrap(), vec![4, 4, 4]);
}

#[test]
fn target_mode_rejects_wrong_selection_count() {
    let none = PartitionMode::Target {
        size: 4,
        targets: vec![],
    };
    assert_eq!(
        partition_sizes(13, &none),
        Err(LeagueError::WrongTargetCount { needed: 1, selected: 0 })
    );
    let two = PartitionMode::Target {
        size: 4,
        targets: vec!['A', 'B'],
    };
    assert_eq!(
        partition_sizes(13, &two),
        Err(LeagueError::WrongTargetCount { needed: 1, selected: 2 })
    );
}

#[test]
fn target_mode_rejects_unknown_and_repeated_groups() {
    let unknown = PartitionMode::Target {
        size: 4,
        targets: vec!['D'],
    };
    assert_eq!(partition_sizes(13, &unknown), Err(LeagueError::UnknownGroup('D')));

    let repeated = PartitionMode::Target {
        size: 4,
        targets: vec!['A', 'A'],
    };
    assert_eq!(partition_sizes(14, &repeated), Err(LeagueError::DuplicateTarget('A')));

    let too_big = PartitionMode::Target {
        size: 4,
        targets: vec![],
    };
    assert_eq!(
        partition_sizes(3, &too_big),
        Err(LeagueError::GroupLargerThanRoster { size: 4, entrants: 3 })
    );
}

#[test]
fn last_group_absorbs_the_leftover() {
    let mode = PartitionMode::LastAbsorbs { size: 4 };
    assert_eq!(partition_sizes(13, &mode).unwrap(), vec![4, 4, 4, 1]);
    assert_eq!(partition_sizes(12, &mode).unwrap(), vec![4, 4, 4]);
    assert_eq!(partition_sizes(3, &mode).unwrap(), vec![3]);
    assert_eq!(
        partition_sizes(3, &PartitionMode::LastAbsorbs { size: 0 }),
        Err(LeagueError::ZeroGroupSize)
    );
}

#[test]
fn partition_labels_entries_in_roster_order() {
    let entrants = roster(7);
    let groups = partition(&entrants, &even(2)).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, 'A');
    assert_eq!(groups[1].name, 'B');

    let labels: Vec<String> = groups
        .iter()
        .flat_map(|g| g.labels())
        .map(|l| l.to_string())
        .collect();
    assert_eq!(labels, vec!["A1", "A2", "A3", "A4", "B1", "B2", "B3"]);

    // Every entrant placed exactly once, in order.
    let placed: Vec<Entrant> = groups
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.entrant.clone()))
        .collect();
    assert_eq!(placed, entrants);
}

#[test]
fn draw_with_same_seed_is_repeatable() {
    let entrants = roster(12);
    let first = draw(&entrants, 42);
    let second = draw(&entrants, 42);
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort_by(|a, b| a.member_1.cmp(&b.member_1));
    let mut expected = entrants.clone();
    expected.sort_by(|a, b| a.member_1.cmp(&b.member_1));
    assert_eq!(sorted, expected);
}
