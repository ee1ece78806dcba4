//! Participant data structures: identity, handicap, pre-group, check-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in groups and lookups).
pub type ParticipantId = Uuid;

/// Participant gender (used by the group export for highlighting).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Check-in state of a participant on tournament day.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    #[default]
    NotCheckedIn,
    CheckedIn,
    Cancelled,
}

/// A registered participant. `group_code` and `display_order` are the
/// grouping engine's output fields; everything else is registration data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    /// Club member number (free-form, may be empty).
    #[serde(default)]
    pub member_number: String,
    /// Sequential registration code: A01, A02, ...
    pub registration_number: String,
    /// Handicap score; `None` means unknown. A value of exactly 0.0 is a
    /// valid best score and is distinct from unknown.
    pub handicap: Option<f64>,
    /// Requested cluster set at import time; consumed by auto-grouping.
    pub pre_group_code: Option<String>,
    /// Assigned group identifier (authoritative once grouping has run).
    pub group_code: Option<String>,
    /// 1-based rank within the assigned group.
    pub display_order: Option<u32>,
    #[serde(default)]
    pub check_in_status: CheckInStatus,
    pub check_in_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Participant {
    /// Create a new participant with the given name and registration number.
    /// Grouping fields start unassigned.
    pub fn new(name: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender: Gender::Male,
            member_number: String::new(),
            registration_number: registration_number.into(),
            handicap: None,
            pre_group_code: None,
            group_code: None,
            display_order: None,
            check_in_status: CheckInStatus::NotCheckedIn,
            check_in_time: None,
            notes: None,
        }
    }

    /// Sort key for skill ordering: unknown handicap sorts after every real
    /// value.
    pub fn handicap_or_sentinel(&self) -> f64 {
        self.handicap.unwrap_or(f64::INFINITY)
    }

    /// Whether this participant has checked in.
    pub fn is_checked_in(&self) -> bool {
        self.check_in_status == CheckInStatus::CheckedIn
    }
}
