//! Integration tests for auto-grouping: pre-group consolidation and overflow
//! distribution.

use golf_tournament_web::{
    assign_groups, GroupCodeStyle, GroupingError, GroupingPolicy, Group, Participant,
};
use std::collections::HashSet;

/// Build a roster from (handicap, pre_group_code) pairs. Names and
/// registration numbers follow roster order.
fn roster(specs: &[(Option<f64>, Option<&str>)]) -> Vec<Participant> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (handicap, pre))| {
            let mut p = Participant::new(format!("P{i}"), format!("A{:02}", i + 1));
            p.handicap = *handicap;
            p.pre_group_code = pre.map(String::from);
            p
        })
        .collect()
}

/// Every group's members are in ascending handicap order (unknown last) and
/// carry display_order 1..=len.
fn assert_ordered(participants: &[Participant], groups: &[Group]) {
    for group in groups {
        let mut last = f64::NEG_INFINITY;
        for (pos, id) in group.members.iter().enumerate() {
            let p = participants.iter().find(|p| p.id == *id).unwrap();
            assert_eq!(p.group_code.as_deref(), Some(group.code.as_str()));
            assert_eq!(p.display_order, Some(pos as u32 + 1));
            let h = p.handicap.unwrap_or(f64::INFINITY);
            assert!(h >= last, "group {} not ascending", group.code);
            last = h;
        }
    }
}

#[test]
fn empty_roster_is_an_error() {
    let mut participants: Vec<Participant> = Vec::new();
    assert_eq!(
        assign_groups(&mut participants, &GroupingPolicy::default()),
        Err(GroupingError::EmptyRoster)
    );
}

#[test]
fn every_participant_appears_exactly_once() {
    let mut participants = roster(&[
        (Some(10.0), Some("G1")),
        (Some(11.0), Some("G1")),
        (Some(12.0), Some("G1")),
        (Some(13.0), Some("G1")),
        (Some(5.0), Some("G2")),
        (Some(6.0), Some("G2")),
        (Some(1.0), None),
        (Some(2.0), None),
        (Some(3.0), None),
        (None, None),
        (Some(0.0), None),
        (Some(20.0), None),
        (Some(21.0), None),
    ]);
    let input_ids: HashSet<_> = participants.iter().map(|p| p.id).collect();

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    let mut seen = HashSet::new();
    let mut total = 0;
    for g in &groups {
        for id in &g.members {
            assert!(seen.insert(*id), "participant assigned twice");
            total += 1;
        }
    }
    assert_eq!(total, participants.len());
    assert_eq!(seen, input_ids);
    assert!(participants.iter().all(|p| p.group_code.is_some()));
    assert!(participants.iter().all(|p| p.display_order.is_some()));
    assert_ordered(&participants, &groups);
}

#[test]
fn groups_are_sized_3_to_4_except_the_last() {
    // 9 ungrouped participants chunk into 4 + 4 + 1.
    let specs: Vec<_> = (0..9).map(|i| (Some(i as f64), None)).collect();
    let mut participants = roster(&specs);

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 3);
    for g in &groups[..groups.len() - 1] {
        assert!((3..=4).contains(&g.members.len()), "group {} size", g.code);
    }
    assert_eq!(groups[2].members.len(), 1);
}

#[test]
fn pre_group_of_four_passes_through_unchanged() {
    let mut participants = roster(&[
        (Some(1.0), Some("friends")),
        (Some(2.0), Some("friends")),
        (Some(3.0), Some("friends")),
        (Some(4.0), Some("friends")),
        (Some(9.0), None),
        (Some(8.0), None),
        (Some(7.0), None),
        (Some(6.0), None),
    ]);
    let friend_ids: Vec<_> = participants[..4].iter().map(|p| p.id).collect();

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 2);
    // Handicaps are already ascending, so the original relative order holds.
    assert_eq!(groups[0].members, friend_ids);
    assert_ordered(&participants, &groups);
}

#[test]
fn scenario_ten_participants_with_pre_group_of_five() {
    // Pre-group of 5 splits into 4 + 1; the singleton overflows into the
    // pool, which then chunks into 4 + 2.
    let mut participants = roster(&[
        (Some(12.0), Some("G3")),
        (Some(8.0), Some("G3")),
        (Some(15.0), Some("G3")),
        (Some(3.0), Some("G3")),
        (None, Some("G3")),
        (Some(7.0), None),
        (Some(0.0), None),
        (Some(22.0), None),
        (Some(18.0), None),
        (Some(9.0), None),
    ]);
    let zero_id = participants[6].id;
    let missing_id = participants[4].id;

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].members.len(), 4);
    // First unassigned-derived group is sorted ascending and led by the
    // zero-handicap participant.
    assert_eq!(groups[1].members.len(), 4);
    assert_eq!(groups[1].members[0], zero_id);
    // The overflowed missing-handicap member lands last in the tail group.
    assert_eq!(groups[2].members.len(), 2);
    assert_eq!(groups[2].members[1], missing_id);
    assert_ordered(&participants, &groups);
}

#[test]
fn zero_handicap_is_distinct_from_missing() {
    let mut participants = roster(&[(Some(0.0), None), (None, None), (Some(5.0), None)]);
    let zero_id = participants[0].id;
    let missing_id = participants[1].id;

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members[0], zero_id);
    assert_eq!(groups[0].members[2], missing_id);
}

#[test]
fn zero_front_policy_beats_negative_handicaps() {
    let specs = [(Some(0.0), None), (Some(-2.0), None), (Some(4.0), None)];

    let mut with_zero_first = roster(&specs);
    let groups = assign_groups(&mut with_zero_first, &GroupingPolicy::default()).unwrap();
    assert_eq!(groups[0].members[0], with_zero_first[0].id);

    let mut without = roster(&specs);
    let policy = GroupingPolicy {
        zero_first: false,
        ..GroupingPolicy::default()
    };
    let groups = assign_groups(&mut without, &policy).unwrap();
    assert_eq!(groups[0].members[0], without[1].id);
}

#[test]
fn undersized_pre_group_dissolves_into_pool() {
    // Default policy: a pre-group of 2 is not emitted on its own; its
    // members redistribute with the pool.
    let mut participants = roster(&[
        (Some(10.0), Some("pair")),
        (Some(11.0), Some("pair")),
        (Some(1.0), None),
        (Some(2.0), None),
        (Some(3.0), None),
        (Some(4.0), None),
    ]);

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].members.len(), 4);
    assert_eq!(groups[1].members.len(), 2);
    // Redistribution is by handicap: the pair (10, 11) sorts after the pool.
    assert_eq!(groups[1].members[0], participants[0].id);
    assert_eq!(groups[1].members[1], participants[1].id);
}

#[test]
fn top_up_policy_fills_undersized_pre_group_from_pool() {
    let mut participants = roster(&[
        (Some(10.0), Some("pair")),
        (Some(11.0), Some("pair")),
        (Some(1.0), None),
        (Some(2.0), None),
        (Some(3.0), None),
        (Some(4.0), None),
        (Some(5.0), None),
    ]);
    let best_pool_id = participants[2].id;
    let policy = GroupingPolicy {
        top_up: true,
        ..GroupingPolicy::default()
    };

    let groups = assign_groups(&mut participants, &policy).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].members.len(), 3);
    assert!(groups[0].members.contains(&best_pool_id));
    assert_eq!(groups[1].members.len(), 4);
    assert_ordered(&participants, &groups);
}

#[test]
fn rerunning_on_the_same_roster_gives_the_same_composition() {
    let mut first = roster(&[
        (Some(4.0), Some("G1")),
        (Some(3.0), Some("G1")),
        (Some(2.0), Some("G1")),
        (Some(9.0), None),
        (None, None),
        (Some(0.0), None),
        (Some(7.0), None),
    ]);
    let mut second = first.clone();

    let groups_a = assign_groups(&mut first, &GroupingPolicy::default()).unwrap();
    let groups_b = assign_groups(&mut second, &GroupingPolicy::default()).unwrap();
    assert_eq!(groups_a, groups_b);

    // Running again on the mutated roster also keeps the composition: the
    // engine keys on pre_group_code, not on previous output.
    let groups_c = assign_groups(&mut first, &GroupingPolicy::default()).unwrap();
    assert_eq!(groups_a, groups_c);
}

#[test]
fn single_participant_roster_forms_one_group() {
    let mut participants = roster(&[(Some(12.0), None)]);
    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].members.len(), 1);
    assert_eq!(participants[0].display_order, Some(1));
}

#[test]
fn one_big_pre_group_splits_in_original_chunk_order() {
    let specs: Vec<_> = (0..8).map(|i| (Some(i as f64), Some("club"))).collect();
    let mut participants = roster(&specs);
    let first_four: Vec<_> = participants[..4].iter().map(|p| p.id).collect();

    let groups = assign_groups(&mut participants, &GroupingPolicy::default()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].members, first_four);
}

#[test]
fn lettered_code_style() {
    let specs: Vec<_> = (0..8).map(|i| (Some(i as f64), None)).collect();
    let mut participants = roster(&specs);
    let policy = GroupingPolicy {
        code_style: GroupCodeStyle::Lettered,
        ..GroupingPolicy::default()
    };

    let groups = assign_groups(&mut participants, &policy).unwrap();

    assert_eq!(groups[0].code, "A01");
    assert_eq!(groups[1].code, "A02");
    assert_eq!(participants[0].group_code.as_deref(), Some("A01"));
}
