//! Roster partitioning: how many groups, how big, and who goes where.

use crate::models::{
    group_position, Entrant, Group, LeagueError, PartitionMode, MAX_GROUPS,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Group sizes (in label order) for `entrants` entrants under `mode`. Sizes always sum to `entrants`.
pub fn partition_sizes(entrants: usize, mode: &PartitionMode) -> Result<Vec<usize>, LeagueError> {
    if entrants == 0 {
        return Err(LeagueError::EmptyRoster);
    }
    let sizes = match mode {
        PartitionMode::Even { groups } => even_sizes(entrants, *groups)?,
        PartitionMode::Manual { groups, sizes } => manual_sizes(entrants, *groups, sizes)?,
        PartitionMode::Target { size, targets } => target_sizes(entrants, *size, targets)?,
        PartitionMode::LastAbsorbs { size } => last_absorbs_sizes(entrants, *size)?,
    };
    debug_assert_eq!(sizes.iter().sum::<usize>(), entrants);
    Ok(sizes)
}

/// Split the roster into groups. Group A takes the first entrants, then B, and so on.
pub fn partition(roster: &[Entrant], mode: &PartitionMode) -> Result<Vec<Group>, LeagueError> {
    let sizes = partition_sizes(roster.len(), mode)?;
    let mut rest = roster;
    let mut groups = Vec::with_capacity(sizes.len());
    for (position, size) in sizes.into_iter().enumerate() {
        let (members, tail) = rest.split_at(size);
        groups.push(Group::new(position, members.to_vec())?);
        rest = tail;
    }
    Ok(groups)
}

/// Seeded shuffle of the roster. The same seed always gives the same order.
pub fn draw(roster: &[Entrant], seed: u64) -> Vec<Entrant> {
    let mut drawn = roster.to_vec();
    drawn.shuffle(&mut StdRng::seed_from_u64(seed));
    drawn
}

fn check_group_count(groups: usize) -> Result<(), LeagueError> {
    if groups == 0 {
        return Err(LeagueError::ZeroGroups);
    }
    if groups > MAX_GROUPS {
        return Err(LeagueError::TooManyGroups { groups });
    }
    Ok(())
}

fn even_sizes(entrants: usize, groups: usize) -> Result<Vec<usize>, LeagueError> {
    check_group_count(groups)?;
    if entrants < groups {
        return Err(LeagueError::TooFewEntrants { entrants, groups });
    }
    let base = entrants / groups;
    let extra = entrants % groups;
    Ok((0..groups).map(|i| base + usize::from(i < extra)).collect())
}

fn manual_sizes(entrants: usize, groups: usize, requested: &[usize]) -> Result<Vec<usize>, LeagueError> {
    check_group_count(groups)?;
    if entrants < groups {
        return Err(LeagueError::TooFewEntrants { entrants, groups });
    }
    if requested.len() > groups {
        return Err(LeagueError::TooManySizes {
            groups,
            sizes: requested.len(),
        });
    }
    let mut sizes = requested.to_vec();
    sizes.resize(groups, 0);

    let assigned: usize = sizes.iter().sum();
    if assigned > entrants {
        log::debug!("manual sizes {:?} exceed {} entrants", sizes, entrants);
        return Err(LeagueError::SizesExceedRoster { assigned, entrants });
    }
    let mut remaining = entrants - assigned;

    // Groups left at 0 take an equal share of what is unassigned.
    let open: Vec<usize> = (0..groups).filter(|&i| sizes[i] == 0).collect();
    if !open.is_empty() {
        let share = remaining / open.len();
        for &i in &open {
            sizes[i] = share;
        }
        remaining -= share * open.len();
    }

    // Leftover goes one at a time in label order, to open groups first.
    let targets = if open.is_empty() {
        (0..groups).collect()
    } else {
        open
    };
    for i in targets.iter().cycle().take(remaining) {
        sizes[*i] += 1;
    }
    Ok(sizes)
}

fn target_sizes(entrants: usize, size: usize, targets: &[char]) -> Result<Vec<usize>, LeagueError> {
    if size == 0 {
        return Err(LeagueError::ZeroGroupSize);
    }
    let groups = entrants / size;
    if groups == 0 {
        return Err(LeagueError::GroupLargerThanRoster { size, entrants });
    }
    check_group_count(groups)?;
    let remainder = entrants % size;

    let mut seen = HashSet::new();
    for &letter in targets {
        match group_position(letter) {
            Some(p) if p < groups => {}
            _ => return Err(LeagueError::UnknownGroup(letter)),
        }
        if !seen.insert(letter) {
            return Err(LeagueError::DuplicateTarget(letter));
        }
    }
    if targets.len() != remainder {
        log::debug!(
            "target mode needs {} groups for the remainder, got {:?}",
            remainder,
            targets
        );
        return Err(LeagueError::WrongTargetCount {
            needed: remainder,
            selected: targets.len(),
        });
    }

    let mut sizes = vec![size; groups];
    for &letter in targets {
        if let Some(p) = group_position(letter) {
            sizes[p] += 1;
        }
    }
    Ok(sizes)
}

fn last_absorbs_sizes(entrants: usize, size: usize) -> Result<Vec<usize>, LeagueError> {
    if size == 0 {
        return Err(LeagueError::ZeroGroupSize);
    }
    let groups = entrants.div_ceil(size);
    check_group_count(groups)?;
    let mut sizes = vec![size; groups];
    if let Some(last) = sizes.last_mut() {
        *last = entrants - size * (groups - 1);
    }
    Ok(sizes)
}
