//! Full pipeline: roster -> groups -> schedule -> qualifiers -> final stage.

use crate::logic::advancement::{select_qualifiers, validate_ranking};
use crate::logic::final_stage::pair_final_stage;
use crate::logic::partition::{draw, partition};
use crate::logic::schedule::schedule;
use crate::models::{normalize_roster, LeagueError, LeaguePlan, LeagueRequest};

/// Plan a league from a request snapshot.
///
/// Pure and repeatable: the same request always yields the same plan, and an error
/// leaves nothing half-built. Qualifiers and the final stage are only produced when
/// an advancement policy is set.
pub fn plan_league(request: &LeagueRequest) -> Result<LeaguePlan, LeagueError> {
    if request.roster.is_empty() {
        return Err(LeagueError::EmptyRoster);
    }
    let roster = normalize_roster(&request.roster)?;
    let roster = match request.draw_seed {
        Some(seed) => draw(&roster, seed),
        None => roster,
    };

    let groups = partition(&roster, &request.partition)?;
    let matches = schedule(&groups);
    // Entered ranks are checked even when no advancement policy is set yet.
    validate_ranking(&groups, &request.rankings)?;

    let (qualifiers, final_stage) = match &request.advancement {
        Some(policy) => {
            let qualifiers = select_qualifiers(&groups, &request.rankings, policy)?;
            let stage = request
                .final_format
                .map(|format| pair_final_stage(&qualifiers, format));
            (qualifiers, stage)
        }
        None => (Vec::new(), None),
    };

    log::debug!(
        "planned {} entrants into {} groups, {} matches, {} qualifiers",
        roster.len(),
        groups.len(),
        matches.len(),
        qualifiers.len()
    );

    Ok(LeaguePlan {
        groups,
        matches,
        qualifiers,
        final_stage,
    })
}
