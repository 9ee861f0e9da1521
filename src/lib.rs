//! Doubles league organizer: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    combinations, draw, export_groups, export_matches, export_qualifiers, import_roster,
    pair_final_stage, pairing_order, partition, partition_sizes, plan_league, round_robin_pairs,
    schedule, schedule_group, select_qualifiers, validate_ranking, PairingOrder,
};
pub use models::{
    group_letter, group_position, normalize_roster, AdvancementPolicy, BracketSlot, Entrant,
    Entry, EntryLabel, FinalFormat, FinalMatch, FinalStage, Group, LeagueError, LeaguePlan,
    LeagueRequest, LeagueSession, Match, PartitionMode, Qualifier, Ranking, SessionId,
    MAX_GROUPS,
};
