//! Manual regroup: move one participant into an existing or new group.

use crate::logic::grouping::{code_number, derive_groups};
use crate::models::{Group, Participant, ParticipantId, TournamentError};
use serde::{Deserialize, Serialize};

/// Destination of a manual move.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTarget {
    /// Move into an existing group by code.
    Existing(String),
    /// Open a new group with the next free code.
    NewGroup,
}

/// Advisory signal: a move left the source group with fewer than 3 members.
/// Non-blocking; the move itself succeeded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UndersizedGroupWarning {
    pub group_code: String,
    pub remaining: usize,
}

impl std::fmt::Display for UndersizedGroupWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group {} now has {} member(s), fewer than 3",
            self.group_code, self.remaining
        )
    }
}

/// Result of a manual move: the updated group list plus optional warning.
#[derive(Clone, Debug, Serialize)]
pub struct MoveOutcome {
    pub groups: Vec<Group>,
    pub warning: Option<UndersizedGroupWarning>,
}

/// Move one participant into `target`, re-deriving display order for the
/// affected groups (destination and vacated source are re-sorted by
/// handicap ascending, unknown last).
///
/// Fails when the participant or target group does not exist, or the target
/// group already has 4 members. An undersized source group is reported as an
/// advisory warning, never an error.
pub fn move_participant(
    participants: &mut [Participant],
    participant_id: ParticipantId,
    target: &MoveTarget,
) -> Result<MoveOutcome, TournamentError> {
    let idx = participants
        .iter()
        .position(|p| p.id == participant_id)
        .ok_or(TournamentError::ParticipantNotFound(participant_id))?;
    let source_code = participants[idx].group_code.clone();

    let dest_code = match target {
        MoveTarget::Existing(code) => {
            let occupancy = participants
                .iter()
                .filter(|p| p.group_code.as_deref() == Some(code.as_str()))
                .count();
            if occupancy == 0 {
                return Err(TournamentError::GroupNotFound(code.clone()));
            }
            let already_there = source_code.as_deref() == Some(code.as_str());
            if occupancy >= 4 && !already_there {
                return Err(TournamentError::GroupFull(code.clone()));
            }
            code.clone()
        }
        MoveTarget::NewGroup => next_group_code(participants),
    };

    participants[idx].group_code = Some(dest_code.clone());

    renumber_group(participants, &dest_code);
    let mut warning = None;
    if let Some(code) = source_code.filter(|c| *c != dest_code) {
        let remaining = renumber_group(participants, &code);
        if remaining < 3 {
            warning = Some(UndersizedGroupWarning {
                group_code: code,
                remaining,
            });
        }
    }

    Ok(MoveOutcome {
        groups: derive_groups(participants),
        warning,
    })
}

/// Re-sort one group by handicap (stable, unknown last) and rewrite its
/// display order 1..=len. Returns the group's size.
fn renumber_group(participants: &mut [Participant], code: &str) -> usize {
    let mut members: Vec<usize> = (0..participants.len())
        .filter(|&i| participants[i].group_code.as_deref() == Some(code))
        .collect();
    members.sort_by(|&a, &b| {
        participants[a]
            .handicap_or_sentinel()
            .total_cmp(&participants[b].handicap_or_sentinel())
    });
    for (pos, &i) in members.iter().enumerate() {
        participants[i].display_order = Some(pos as u32 + 1);
    }
    members.len()
}

/// Next free group code: one past the highest numeric code, rendered in the
/// same style as the existing codes (lettered if any code is).
fn next_group_code(participants: &[Participant]) -> String {
    let mut max = 0;
    let mut lettered = false;
    for code in participants.iter().filter_map(|p| p.group_code.as_deref()) {
        if let Some(n) = code_number(code) {
            max = max.max(n);
        }
        if code.starts_with(|c: char| c.is_ascii_alphabetic()) {
            lettered = true;
        }
    }
    if lettered {
        format!("A{:02}", max + 1)
    } else {
        (max + 1).to_string()
    }
}
