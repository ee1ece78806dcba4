//! Tournament business logic: grouping, manual regroup, roster import/export.

mod export;
mod grouping;
mod regroup;
mod roster;

pub use export::{groups_to_csv, groups_to_html};
pub use grouping::{assign_groups, derive_groups, GroupCodeStyle, GroupingError, GroupingPolicy};
pub use regroup::{move_participant, MoveOutcome, MoveTarget, UndersizedGroupWarning};
pub use roster::{import_roster, parse_handicap, ImportError};
