//! League business logic: partition, schedule, advancement, final stage, export.

mod advancement;
mod export;
mod final_stage;
mod partition;
mod plan;
mod schedule;

pub use advancement::{select_qualifiers, validate_ranking};
pub use export::{export_groups, export_matches, export_qualifiers, import_roster};
pub use final_stage::pair_final_stage;
pub use partition::{draw, partition, partition_sizes};
pub use plan::plan_league;
pub use schedule::{combinations, pairing_order, round_robin_pairs, schedule, schedule_group, PairingOrder};
