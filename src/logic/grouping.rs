//! Auto-grouping: partition a roster into foursomes of 3-4 players.

use crate::models::{Group, Participant};
use serde::{Deserialize, Serialize};

/// Errors from the grouping engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupingError {
    /// No participants to group.
    EmptyRoster,
}

impl std::fmt::Display for GroupingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingError::EmptyRoster => write!(f, "No participants to group"),
        }
    }
}

impl std::error::Error for GroupingError {}

/// How group codes are rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupCodeStyle {
    /// "1", "2", ...
    #[default]
    Numeric,
    /// "A01", "A02", ...
    Lettered,
}

impl GroupCodeStyle {
    /// Render the code for the nth group (1-based).
    pub fn format(&self, n: usize) -> String {
        match self {
            GroupCodeStyle::Numeric => n.to_string(),
            GroupCodeStyle::Lettered => format!("A{:02}", n),
        }
    }
}

/// Policy knobs for rules that differ between tournaments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingPolicy {
    /// Top pre-groups of 1-2 members up to 3 from the unassigned pool. When
    /// false, such pre-groups dissolve into the pool instead.
    pub top_up: bool,
    /// Treat a handicap of exactly 0 as the best score: those participants
    /// sort ahead of everyone, including negative handicaps.
    pub zero_first: bool,
    pub code_style: GroupCodeStyle,
}

impl Default for GroupingPolicy {
    fn default() -> Self {
        Self {
            top_up: false,
            zero_first: true,
            code_style: GroupCodeStyle::default(),
        }
    }
}

/// Skill ordering key. Unknown handicap sorts last via the +inf sentinel;
/// a real 0.0 never falls into that bucket.
fn sort_key(p: &Participant, policy: &GroupingPolicy) -> (u8, f64) {
    let front = policy.zero_first && p.handicap == Some(0.0);
    (if front { 0 } else { 1 }, p.handicap_or_sentinel())
}

fn sort_by_skill(participants: &[Participant], indices: &mut [usize], policy: &GroupingPolicy) {
    // Stable, so ties keep roster order.
    indices.sort_by(|&a, &b| {
        let ka = sort_key(&participants[a], policy);
        let kb = sort_key(&participants[b], policy);
        ka.0.cmp(&kb.0).then(ka.1.total_cmp(&kb.1))
    });
}

/// Partition the roster into playing groups of up to four.
///
/// 1. Bucket participants by pre-group code (first-encounter order);
///    participants without a code form the unassigned pool.
/// 2. Resolve each bucket: 3-4 members emit as one group; more than 4 split
///    into chunks of 4 with a short tail (< 3) overflowing into the pool;
///    1-2 members are kept for top-up or dissolved into the pool, per policy.
/// 3. Sort the pool by handicap ascending (stable; unknown last, zero first
///    when enabled), then top up undersized pre-groups from its front.
/// 4. Chunk the pool into fours; a final chunk of 1-2 is still emitted rather
///    than dropped.
/// 5. Assign sequential group codes (pre-groups first, then pool chunks) and
///    per-group display order by ascending handicap.
///
/// Writes `group_code` and `display_order` back into the slice and returns
/// the groups. Performs no I/O; the caller persists.
pub fn assign_groups(
    participants: &mut [Participant],
    policy: &GroupingPolicy,
) -> Result<Vec<Group>, GroupingError> {
    if participants.is_empty() {
        return Err(GroupingError::EmptyRoster);
    }

    // Bucket by pre-group code, preserving first-encounter order.
    let mut buckets: Vec<(String, Vec<usize>)> = Vec::new();
    let mut pool: Vec<usize> = Vec::new();
    for (i, p) in participants.iter().enumerate() {
        let code = p
            .pre_group_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        match code {
            Some(code) => match buckets.iter_mut().find(|(c, _)| c == code) {
                Some((_, members)) => members.push(i),
                None => buckets.push((code.to_string(), vec![i])),
            },
            None => pool.push(i),
        }
    }

    // Resolve buckets. Undersized ones stay in place (still in encounter
    // order) when the policy tops them up later.
    let mut pre_groups: Vec<Vec<usize>> = Vec::new();
    for (_, members) in buckets {
        if members.len() > 4 {
            for chunk in members.chunks(4) {
                if chunk.len() >= 3 {
                    pre_groups.push(chunk.to_vec());
                } else {
                    pool.extend_from_slice(chunk);
                }
            }
        } else if members.len() >= 3 || policy.top_up {
            pre_groups.push(members);
        } else {
            pool.extend(members);
        }
    }

    sort_by_skill(participants, &mut pool, policy);

    if policy.top_up {
        for group in pre_groups.iter_mut() {
            while group.len() < 3 && !pool.is_empty() {
                group.push(pool.remove(0));
            }
        }
    }

    let pool_groups = pool.chunks(4).map(<[usize]>::to_vec);
    let member_lists: Vec<Vec<usize>> = pre_groups.into_iter().chain(pool_groups).collect();

    let mut groups = Vec::with_capacity(member_lists.len());
    for (n, mut members) in member_lists.into_iter().enumerate() {
        let code = policy.code_style.format(n + 1);
        sort_by_skill(participants, &mut members, policy);
        for (pos, &i) in members.iter().enumerate() {
            participants[i].group_code = Some(code.clone());
            participants[i].display_order = Some(pos as u32 + 1);
        }
        let ids = members.iter().map(|&i| participants[i].id).collect();
        groups.push(Group::new(code, ids));
    }
    Ok(groups)
}

/// Rebuild the group list from the `group_code`/`display_order` fields.
/// Groups are ordered by numeric code where possible, members by display
/// order with registration number as tiebreak.
pub fn derive_groups(participants: &[Participant]) -> Vec<Group> {
    let mut codes: Vec<&str> = Vec::new();
    for p in participants {
        if let Some(code) = p.group_code.as_deref() {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
    }
    codes.sort_by(|a, b| match (code_number(a), code_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    });

    codes
        .into_iter()
        .map(|code| {
            let mut members: Vec<&Participant> = participants
                .iter()
                .filter(|p| p.group_code.as_deref() == Some(code))
                .collect();
            members.sort_by(|a, b| {
                let oa = a.display_order.unwrap_or(u32::MAX);
                let ob = b.display_order.unwrap_or(u32::MAX);
                oa.cmp(&ob)
                    .then_with(|| a.registration_number.cmp(&b.registration_number))
            });
            Group::new(code, members.iter().map(|p| p.id).collect())
        })
        .collect()
}

/// Numeric part of a group code ("3" -> 3, "A03" -> 3).
pub(crate) fn code_number(code: &str) -> Option<u32> {
    code.trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .ok()
}
