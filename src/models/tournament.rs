//! Tournament: roster ownership and registration/check-in CRUD.

use crate::models::participant::{CheckInStatus, Participant, ParticipantId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, PartialEq)]
pub enum TournamentError {
    /// Participant not found in this tournament's roster.
    ParticipantNotFound(ParticipantId),
    /// Referenced group code does not exist in this tournament.
    GroupNotFound(String),
    /// Target group already has the maximum of 4 members.
    GroupFull(String),
    /// Checked-in participants cannot be removed.
    ParticipantCheckedIn(ParticipantId),
    /// Participant name must be non-empty after trimming.
    EmptyName,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::ParticipantNotFound(_) => write!(f, "Participant not found"),
            TournamentError::GroupNotFound(code) => write!(f, "Group {} not found", code),
            TournamentError::GroupFull(code) => {
                write!(f, "Group {} already has 4 members", code)
            }
            TournamentError::ParticipantCheckedIn(_) => {
                write!(f, "Checked-in participants cannot be removed")
            }
            TournamentError::EmptyName => write!(f, "Participant name must not be empty"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A tournament: event metadata plus the owned participant roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub date: NaiveDate,
    pub participants: Vec<Participant>,
}

impl Tournament {
    /// Create a new tournament with an empty roster.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            participants: Vec::new(),
        }
    }

    /// Mutable reference to a participant by id.
    pub fn get_participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    /// Register a single participant by name; assigns the next registration
    /// number (A01, A02, ...). Returns the new participant's id.
    pub fn register(&mut self, name: &str) -> Result<ParticipantId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let registration_number = self.next_registration_number();
        let participant = Participant::new(name, registration_number);
        let id = participant.id;
        self.participants.push(participant);
        Ok(id)
    }

    /// Remove a participant by id. Checked-in participants cannot be removed.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), TournamentError> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        if self.participants[idx].is_checked_in() {
            return Err(TournamentError::ParticipantCheckedIn(id));
        }
        self.participants.remove(idx);
        Ok(())
    }

    /// Update a participant's check-in status. A `CheckedIn` status without a
    /// timestamp records the current time; any other status clears it.
    pub fn set_check_in(
        &mut self,
        id: ParticipantId,
        status: CheckInStatus,
        time: Option<DateTime<Utc>>,
    ) -> Result<(), TournamentError> {
        let p = self
            .get_participant_mut(id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        p.check_in_status = status;
        p.check_in_time = match status {
            CheckInStatus::CheckedIn => Some(time.unwrap_or_else(Utc::now)),
            _ => None,
        };
        Ok(())
    }

    /// Update a participant's free-text notes.
    pub fn set_notes(
        &mut self,
        id: ParticipantId,
        notes: Option<String>,
    ) -> Result<(), TournamentError> {
        let p = self
            .get_participant_mut(id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        p.notes = notes;
        Ok(())
    }

    /// Replace the whole roster (import replaces, it does not merge).
    pub fn replace_roster(&mut self, participants: Vec<Participant>) {
        self.participants = participants;
    }

    /// Next free registration number: one past the highest existing
    /// `A<number>`, zero-padded to two digits.
    pub fn next_registration_number(&self) -> String {
        let max = self
            .participants
            .iter()
            .filter_map(|p| p.registration_number.strip_prefix('A'))
            .filter_map(|rest| rest.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("A{:02}", max + 1)
    }
}
