//! Editable input snapshot kept between requests by the web layer.

use crate::models::entrant::{normalize_roster, Entrant};
use crate::models::league::{LeagueError, LeagueRequest, PartitionMode};
use crate::models::standings::{AdvancementPolicy, FinalFormat, Ranking};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// One organizer's working copy of a league request.
///
/// Labels depend on roster, partition and draw, so changing any of those drops
/// the rankings and any manual qualifier selection entered against the old labels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeagueSession {
    pub id: SessionId,
    pub request: LeagueRequest,
    pub updated_at: DateTime<Utc>,
}

impl LeagueSession {
    /// New session with an empty roster.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            request: LeagueRequest::default(),
            updated_at: Utc::now(),
        }
    }

    /// New session starting from a full request. The roster is checked like `set_roster`,
    /// but the request's rankings and selections are kept.
    pub fn with_request(request: LeagueRequest) -> Result<Self, LeagueError> {
        let roster = normalize_roster(&request.roster)?;
        Ok(Self {
            request: LeagueRequest { roster, ..request },
            ..Self::new()
        })
    }

    /// Replace the roster. Entrants are trimmed; any entrant without both names is rejected.
    pub fn set_roster(&mut self, roster: Vec<Entrant>) -> Result<(), LeagueError> {
        self.request.roster = normalize_roster(&roster)?;
        self.invalidate_labels();
        Ok(())
    }

    /// Append one entrant to the roster.
    pub fn add_entrant(&mut self, entrant: Entrant) -> Result<(), LeagueError> {
        let entrant = entrant.normalized();
        if !entrant.is_valid() {
            return Err(LeagueError::InvalidEntrant {
                index: self.request.roster.len(),
            });
        }
        self.request.roster.push(entrant);
        self.invalidate_labels();
        Ok(())
    }

    pub fn set_partition(&mut self, partition: PartitionMode) {
        self.request.partition = partition;
        self.invalidate_labels();
    }

    pub fn set_draw_seed(&mut self, seed: Option<u64>) {
        self.request.draw_seed = seed;
        self.invalidate_labels();
    }

    pub fn set_rankings(&mut self, rankings: Ranking) {
        self.request.rankings = rankings;
        self.touch();
    }

    pub fn set_advancement(&mut self, advancement: Option<AdvancementPolicy>) {
        self.request.advancement = advancement;
        self.touch();
    }

    pub fn set_final_format(&mut self, format: Option<FinalFormat>) {
        self.request.final_format = format;
        self.touch();
    }

    fn invalidate_labels(&mut self) {
        self.request.rankings.clear();
        if matches!(self.request.advancement, Some(AdvancementPolicy::Manual { .. })) {
            self.request.advancement = None;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for LeagueSession {
    fn default() -> Self {
        Self::new()
    }
}
