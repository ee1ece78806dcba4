//! Group: one foursome produced by the grouping engine.

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// A single playing group: code plus ordered member ids.
///
/// Groups are not stored on their own; they are derived from the
/// `group_code`/`display_order` fields on participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Sequential identifier, e.g. "1" or "A01" depending on code style.
    pub code: String,
    /// Member ids in display order (ascending handicap).
    pub members: Vec<ParticipantId>,
}

impl Group {
    pub fn new(code: impl Into<String>, members: Vec<ParticipantId>) -> Self {
        Self {
            code: code.into(),
            members,
        }
    }
}
