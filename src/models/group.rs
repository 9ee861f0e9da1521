//! Groups (round-robin leagues), entry labels and matches.

use crate::models::entrant::Entrant;
use crate::models::league::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group names are single letters, so at most 26 groups.
pub const MAX_GROUPS: usize = 26;

/// Letter for the group at `position` (0 -> 'A').
pub fn group_letter(position: usize) -> Result<char, LeagueError> {
    if position >= MAX_GROUPS {
        return Err(LeagueError::TooManyGroups {
            groups: position + 1,
        });
    }
    Ok((b'A' + position as u8) as char)
}

/// Position of a group letter ('A' -> 0), if it is a valid group name.
pub fn group_position(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Short code for an entry: group letter plus 1-based position, e.g. "A1".
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EntryLabel {
    pub group: char,
    pub index: usize,
}

impl EntryLabel {
    pub fn new(group: char, index: usize) -> Self {
        Self { group, index }
    }
}

impl fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.group, self.index)
    }
}

impl FromStr for EntryLabel {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LeagueError::InvalidLabel(s.to_string());
        let mut chars = s.chars();
        let group = chars.next().filter(char::is_ascii_uppercase).ok_or_else(invalid)?;
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index: usize = rest.parse().map_err(|_| invalid())?;
        if index == 0 {
            return Err(invalid());
        }
        Ok(Self { group, index })
    }
}

impl From<EntryLabel> for String {
    fn from(label: EntryLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for EntryLabel {
    type Error = LeagueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An entrant placed in a group under its label.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub label: EntryLabel,
    pub entrant: Entrant,
}

/// One round-robin league. Entry order is the draw order within the group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: char,
    pub entries: Vec<Entry>,
}

impl Group {
    /// Build a group from its position and members, labelling them `<name>1..`.
    pub fn new(position: usize, entrants: Vec<Entrant>) -> Result<Self, LeagueError> {
        let name = group_letter(position)?;
        let entries = entrants
            .into_iter()
            .enumerate()
            .map(|(i, entrant)| Entry {
                label: EntryLabel::new(name, i + 1),
                entrant,
            })
            .collect();
        Ok(Self { name, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = EntryLabel> + '_ {
        self.entries.iter().map(|e| e.label)
    }

    pub fn contains(&self, label: EntryLabel) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }

    pub fn entrant(&self, label: EntryLabel) -> Option<&Entrant> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.entrant)
    }
}

/// One pairing of two entries from the same group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub group: char,
    /// 1-based order of play within the group.
    pub number: usize,
    pub entry_1: EntryLabel,
    pub entry_2: EntryLabel,
}
