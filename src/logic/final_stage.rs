//! Final stage: qualifiers meet in a round robin or a first-round bracket.

use crate::logic::schedule::combinations;
use crate::models::{BracketSlot, FinalFormat, FinalMatch, FinalStage, Qualifier};

/// Pair qualifiers in list order.
///
/// Round robin uses plain combinations (no small-group reordering). A bracket pairs
/// qualifiers two at a time; an odd one out gets a bye.
pub fn pair_final_stage(qualifiers: &[Qualifier], format: FinalFormat) -> FinalStage {
    match format {
        FinalFormat::RoundRobin => FinalStage::RoundRobin {
            matches: combinations(qualifiers.len())
                .into_iter()
                .enumerate()
                .map(|(i, (a, b))| FinalMatch {
                    number: i + 1,
                    entry_1: qualifiers[a].label,
                    entry_2: qualifiers[b].label,
                })
                .collect(),
        },
        FinalFormat::Bracket => FinalStage::Bracket {
            slots: qualifiers
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => BracketSlot::Pair {
                        entry_1: a.label,
                        entry_2: b.label,
                    },
                    [a] => BracketSlot::Bye { entry: a.label },
                    _ => unreachable!("chunks(2) yields one or two items"),
                })
                .collect(),
        },
    }
}
