//! Golf tournament web app: library with models and grouping logic.

pub mod logic;
pub mod models;

pub use logic::{
    assign_groups, derive_groups, groups_to_csv, groups_to_html, import_roster, move_participant,
    parse_handicap, GroupCodeStyle, GroupingError, GroupingPolicy, ImportError, MoveOutcome,
    MoveTarget, UndersizedGroupWarning,
};
pub use models::{
    CheckInStatus, Gender, Group, Participant, ParticipantId, Tournament, TournamentError,
    TournamentId,
};
