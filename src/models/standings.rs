//! Rankings, qualifiers and the final stage.

use crate::models::group::EntryLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-entered finishing rank per entry (1 = winner). Ties are allowed.
pub type Ranking = BTreeMap<EntryLabel, u32>;

/// Rule for picking the entries that advance out of group play.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum AdvancementPolicy {
    /// Best-ranked entry of each group.
    Top1,
    /// Two best-ranked entries of each group; groups with fewer than 2 entries are skipped.
    Top2,
    /// Hand-picked entries from any group, in the given order.
    Manual { labels: Vec<EntryLabel> },
    /// First `limit` entries of each group in draw order.
    RankLimit { limit: usize },
}

/// An entry advancing to the final stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Qualifier {
    pub label: EntryLabel,
    pub group: char,
    /// `None` for manual picks without an entered rank.
    pub rank: Option<u32>,
}

/// How qualifiers meet in the final stage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalFormat {
    /// Every qualifier plays every other once.
    #[default]
    RoundRobin,
    /// Qualifiers paired two at a time in list order.
    Bracket,
}

/// One final-stage round-robin match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalMatch {
    pub number: usize,
    pub entry_1: EntryLabel,
    pub entry_2: EntryLabel,
}

/// First-round bracket slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BracketSlot {
    Pair { entry_1: EntryLabel, entry_2: EntryLabel },
    /// Unpaired trailing qualifier (seeded into the next round).
    Bye { entry: EntryLabel },
}

/// Final-stage pairings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum FinalStage {
    RoundRobin { matches: Vec<FinalMatch> },
    Bracket { slots: Vec<BracketSlot> },
}
