//! Round-robin scheduling: every pair in a group meets once.

use crate::models::{Group, Match};

/// Order of play for a group of a given size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PairingOrder {
    /// Hand-tuned sequence (0-based positions) so nobody plays twice in a row where possible.
    Fixed(&'static [(usize, usize)]),
    /// Plain combinations: by first position, then second.
    Lexicographic,
}

const THREE: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2)];
const FOUR: &[(usize, usize)] = &[(0, 1), (2, 3), (0, 2), (1, 3), (0, 3), (1, 2)];

/// Fixed orders keyed by group size.
const FIXED_ORDERS: &[(usize, &[(usize, usize)])] = &[(3, THREE), (4, FOUR)];

/// Pairing order used for a group of `n` entries.
pub fn pairing_order(n: usize) -> PairingOrder {
    FIXED_ORDERS
        .iter()
        .find(|&&(size, _)| size == n)
        .map(|&(_, order)| PairingOrder::Fixed(order))
        .unwrap_or(PairingOrder::Lexicographic)
}

/// All 2-combinations of `0..n`, by first index then second.
pub fn combinations(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

/// Pairs of 0-based positions for a group of `n` entries, in order of play.
/// Always n*(n-1)/2 pairs; empty for n < 2.
pub fn round_robin_pairs(n: usize) -> Vec<(usize, usize)> {
    match pairing_order(n) {
        PairingOrder::Fixed(order) => order.to_vec(),
        PairingOrder::Lexicographic => combinations(n),
    }
}

/// Matches for one group, numbered from 1.
pub fn schedule_group(group: &Group) -> Vec<Match> {
    round_robin_pairs(group.len())
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| Match {
            group: group.name,
            number: i + 1,
            entry_1: group.entries[a].label,
            entry_2: group.entries[b].label,
        })
        .collect()
}

/// Matches for all groups, group by group.
pub fn schedule(groups: &[Group]) -> Vec<Match> {
    groups.iter().flat_map(schedule_group).collect()
}
