//! Advancement out of group play: validate entered ranks and pick qualifiers.

use crate::models::{AdvancementPolicy, EntryLabel, Group, LeagueError, Qualifier, Ranking};
use std::collections::HashSet;

/// Check every entered rank: the label must be drawn into a group, and the rank in 1..=group size.
pub fn validate_ranking(groups: &[Group], ranking: &Ranking) -> Result<(), LeagueError> {
    for (&label, &rank) in ranking {
        let group = groups
            .iter()
            .find(|g| g.contains(label))
            .ok_or(LeagueError::UnknownEntry(label))?;
        if rank == 0 || rank as usize > group.len() {
            return Err(LeagueError::InvalidRank { label, rank });
        }
    }
    Ok(())
}

/// Qualifiers under `policy`, group by group (manual picks keep the caller's order).
pub fn select_qualifiers(
    groups: &[Group],
    ranking: &Ranking,
    policy: &AdvancementPolicy,
) -> Result<Vec<Qualifier>, LeagueError> {
    validate_ranking(groups, ranking)?;
    let qualifiers = match policy {
        AdvancementPolicy::Top1 => groups
            .iter()
            .filter(|g| !g.is_empty())
            .flat_map(|g| best_ranked(g, ranking, 1))
            .collect(),
        AdvancementPolicy::Top2 => groups
            .iter()
            .filter(|g| g.len() >= 2)
            .flat_map(|g| best_ranked(g, ranking, 2))
            .collect(),
        AdvancementPolicy::Manual { labels } => manual_selection(groups, ranking, labels)?,
        AdvancementPolicy::RankLimit { limit } => groups
            .iter()
            .flat_map(|g| in_draw_order(g, *limit))
            .collect(),
    };
    Ok(qualifiers)
}

/// The `count` lowest-ranked entries of a group. Unranked entries come after ranked ones;
/// ties keep draw order.
fn best_ranked(group: &Group, ranking: &Ranking, count: usize) -> Vec<Qualifier> {
    let mut entries: Vec<_> = group
        .entries
        .iter()
        .map(|e| (e.label, ranking.get(&e.label).copied()))
        .collect();
    entries.sort_by_key(|(_, rank)| rank.unwrap_or(u32::MAX));
    entries
        .into_iter()
        .take(count)
        .map(|(label, rank)| Qualifier {
            label,
            group: group.name,
            rank,
        })
        .collect()
}

/// First `limit` entries in draw order, ranked by position.
fn in_draw_order(group: &Group, limit: usize) -> Vec<Qualifier> {
    group
        .entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, e)| Qualifier {
            label: e.label,
            group: group.name,
            rank: Some(i as u32 + 1),
        })
        .collect()
}

fn manual_selection(
    groups: &[Group],
    ranking: &Ranking,
    labels: &[EntryLabel],
) -> Result<Vec<Qualifier>, LeagueError> {
    let mut seen = HashSet::new();
    let mut qualifiers = Vec::with_capacity(labels.len());
    for &label in labels {
        if !groups.iter().any(|g| g.contains(label)) {
            return Err(LeagueError::UnknownEntry(label));
        }
        if !seen.insert(label) {
            return Err(LeagueError::DuplicateSelection(label));
        }
        qualifiers.push(Qualifier {
            label,
            group: label.group,
            rank: ranking.get(&label).copied(),
        });
    }
    Ok(qualifiers)
}
