//! Entrant: one doubles pair with an optional affiliation.

use crate::models::league::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A doubles pair taking part in the league.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    /// Club or school; `None` when left blank.
    #[serde(default)]
    pub affiliation: Option<String>,
    pub member_1: String,
    pub member_2: String,
}

impl Entrant {
    /// Create an entrant, trimming names and turning a blank affiliation into `None`.
    pub fn new(
        affiliation: Option<&str>,
        member_1: impl Into<String>,
        member_2: impl Into<String>,
    ) -> Self {
        let affiliation = affiliation
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        Self {
            affiliation,
            member_1: member_1.into().trim().to_string(),
            member_2: member_2.into().trim().to_string(),
        }
    }

    /// Both member names must be present.
    pub fn is_valid(&self) -> bool {
        !self.member_1.trim().is_empty() && !self.member_2.trim().is_empty()
    }

    /// Same entrant with trimmed fields (used when a roster is accepted).
    pub fn normalized(&self) -> Self {
        Self::new(
            self.affiliation.as_deref(),
            self.member_1.as_str(),
            self.member_2.as_str(),
        )
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.affiliation {
            Some(a) => write!(f, "{}: {} / {}", a, self.member_1, self.member_2),
            None => write!(f, "{} / {}", self.member_1, self.member_2),
        }
    }
}

/// Trimmed copy of a roster; every entrant needs both member names.
pub fn normalize_roster(roster: &[Entrant]) -> Result<Vec<Entrant>, LeagueError> {
    let roster: Vec<Entrant> = roster.iter().map(Entrant::normalized).collect();
    match roster.iter().position(|e| !e.is_valid()) {
        Some(index) => Err(LeagueError::InvalidEntrant { index }),
        None => Ok(roster),
    }
}
