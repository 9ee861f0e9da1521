//! Data structures for the doubles league: entrants, groups, matches, standings, sessions.

mod entrant;
mod group;
mod league;
mod session;
mod standings;

pub use entrant::{normalize_roster, Entrant};
pub use group::{group_letter, group_position, Entry, EntryLabel, Group, Match, MAX_GROUPS};
pub use league::{LeagueError, LeaguePlan, LeagueRequest, PartitionMode};
pub use session::{LeagueSession, SessionId};
pub use standings::{
    AdvancementPolicy, BracketSlot, FinalFormat, FinalMatch, FinalStage, Qualifier, Ranking,
};
