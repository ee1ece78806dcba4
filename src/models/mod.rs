//! Data structures for the golf tournament: participants, groups, tournament state.

mod group;
mod participant;
mod tournament;

pub use group::Group;
pub use participant::{CheckInStatus, Gender, Participant, ParticipantId};
pub use tournament::{Tournament, TournamentError, TournamentId};
