//! League request (input snapshot), league plan (derived output) and errors.

use crate::models::entrant::Entrant;
use crate::models::group::{EntryLabel, Group, Match};
use crate::models::standings::{AdvancementPolicy, FinalFormat, FinalStage, Qualifier, Ranking};
use serde::{Deserialize, Serialize};

/// Errors that can occur while planning a league.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// No entrants to place.
    EmptyRoster,
    /// Entrant at this 0-based roster position is missing a member name.
    InvalidEntrant { index: usize },
    /// Group count of zero requested.
    ZeroGroups,
    /// Group size of zero requested.
    ZeroGroupSize,
    /// Requested group size is larger than the roster.
    GroupLargerThanRoster { size: usize, entrants: usize },
    /// More groups requested than there are entrants.
    TooFewEntrants { entrants: usize, groups: usize },
    /// Group names are single letters (A-Z).
    TooManyGroups { groups: usize },
    /// Manual mode listed more sizes than groups.
    TooManySizes { groups: usize, sizes: usize },
    /// Manual sizes add up to more than the roster.
    SizesExceedRoster { assigned: usize, entrants: usize },
    /// Target mode: must select exactly as many groups as there are leftover entrants.
    WrongTargetCount { needed: usize, selected: usize },
    /// Group letter does not name a group in this partition.
    UnknownGroup(char),
    /// Same group selected twice as a remainder target.
    DuplicateTarget(char),
    /// Text is not an entry label like "A1".
    InvalidLabel(String),
    /// Label does not belong to any group.
    UnknownEntry(EntryLabel),
    /// Rank outside 1..=group size.
    InvalidRank { label: EntryLabel, rank: u32 },
    /// Same entry selected twice for the final stage.
    DuplicateSelection(EntryLabel),
    /// CSV could not be read or written.
    Csv(String),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::EmptyRoster => write!(f, "Roster is empty"),
            LeagueError::InvalidEntrant { index } => {
                write!(f, "Entrant {} is missing a member name", index + 1)
            }
            LeagueError::ZeroGroups => write!(f, "Number of groups must be at least 1"),
            LeagueError::ZeroGroupSize => write!(f, "Group size must be at least 1"),
            LeagueError::GroupLargerThanRoster { size, entrants } => write!(
                f,
                "Group size {} is larger than the roster ({} entrants)",
                size, entrants
            ),
            LeagueError::TooFewEntrants { entrants, groups } => write!(
                f,
                "Cannot form {} groups from {} entrants",
                groups, entrants
            ),
            LeagueError::TooManyGroups { groups } => {
                write!(f, "At most 26 groups are supported (requested {})", groups)
            }
            LeagueError::TooManySizes { groups, sizes } => write!(
                f,
                "Got {} group sizes for {} groups",
                sizes, groups
            ),
            LeagueError::SizesExceedRoster { assigned, entrants } => write!(
                f,
                "Group sizes add up to {} but there are only {} entrants",
                assigned, entrants
            ),
            LeagueError::WrongTargetCount { needed, selected } => write!(
                f,
                "Must select exactly {} groups to take the remaining entrants (selected {})",
                needed, selected
            ),
            LeagueError::UnknownGroup(g) => write!(f, "Group {} does not exist", g),
            LeagueError::DuplicateTarget(g) => write!(f, "Group {} selected more than once", g),
            LeagueError::InvalidLabel(s) => write!(f, "Invalid entry label: {:?}", s),
            LeagueError::UnknownEntry(label) => write!(f, "Entry {} is not in any group", label),
            LeagueError::InvalidRank { label, rank } => {
                write!(f, "Rank {} is out of range for entry {}", rank, label)
            }
            LeagueError::DuplicateSelection(label) => {
                write!(f, "Entry {} selected more than once", label)
            }
            LeagueError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for LeagueError {}

impl From<csv::Error> for LeagueError {
    fn from(e: csv::Error) -> Self {
        LeagueError::Csv(e.to_string())
    }
}

/// How the roster is split into groups and where leftover entrants go.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PartitionMode {
    /// `groups` groups; the first `N mod groups` get one extra entrant.
    Even { groups: usize },
    /// Explicit size per group in label order; groups left at 0 share the rest.
    Manual { groups: usize, sizes: Vec<usize> },
    /// `N / size` groups of `size`; each listed target group takes one leftover entrant.
    Target { size: usize, targets: Vec<char> },
    /// `ceil(N / size)` groups of `size`; the last group takes what is left.
    LastAbsorbs { size: usize },
}

impl Default for PartitionMode {
    fn default() -> Self {
        PartitionMode::Even { groups: 1 }
    }
}

/// Everything needed to plan a league. Planning is a pure function of this snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueRequest {
    pub roster: Vec<Entrant>,
    #[serde(default)]
    pub partition: PartitionMode,
    /// Shuffle the roster with this seed before grouping; `None` keeps input order.
    #[serde(default)]
    pub draw_seed: Option<u64>,
    /// User-entered finishing ranks per entry.
    #[serde(default)]
    pub rankings: Ranking,
    #[serde(default)]
    pub advancement: Option<AdvancementPolicy>,
    #[serde(default)]
    pub final_format: Option<FinalFormat>,
}

/// Groups, per-group schedules, qualifiers and final stage derived from a request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeaguePlan {
    pub groups: Vec<Group>,
    /// All group matches, group by group in label order.
    pub matches: Vec<Match>,
    pub qualifiers: Vec<Qualifier>,
    pub final_stage: Option<FinalStage>,
}

impl LeaguePlan {
    /// Group by letter.
    pub fn group(&self, name: char) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Entrant behind a label, if the label belongs to this plan.
    pub fn entrant(&self, label: EntryLabel) -> Option<&Entrant> {
        self.group(label.group).and_then(|g| g.entrant(label))
    }

    /// Matches of one group in order of play.
    pub fn matches_for(&self, name: char) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.group == name)
    }
}
