use pretty_assertions::assert_eq;

use aggregation::clutches::{compute_clutches, ClutchSituation};
use aggregation::snapshot::{RoundData, Side};

mod common;
use common::*;

/// Eliminates everyone except red(0) against blue(0) and blue(1) by
/// t=30000, then red(0) wins the 1v2.
fn one_v_two_events() -> Vec<aggregation::snapshot::RoundEventData> {
    let r0 = round_uuid(0);
    vec![
        kill(r0, 21000, blue(0), red(1)),
        kill(r0, 22000, blue(0), red(2)),
        kill(r0, 23000, blue(0), red(3)),
        kill(r0, 25000, red(0), blue(2)),
        kill(r0, 26000, red(0), blue(3)),
        kill(r0, 27000, red(0), blue(4)),
        kill(r0, 30000, blue(0), red(4)),
        kill(r0, 35000, red(0), blue(0)),
        kill(r0, 40000, red(0), blue(1)),
    ]
}

#[test]
fn one_v_two_post_plant_clutch_won() {
    let rounds = vec![RoundData {
        plant_time_ms: Some(20000),
        ..won_round(0, RED_TEAM)
    }];
    let players = roster();

    let clutches = compute_clutches(&rounds, &one_v_two_events(), &team_index(&players));

    assert_eq!(clutches.len(), 1);
    let clutch = &clutches[0];
    assert_eq!(clutch.clutcher_id, red(0));
    assert_eq!(clutch.clutch_type, 2);
    assert!(clutch.won);
    assert_eq!(clutch.situation, ClutchSituation::PostPlant);
    assert_eq!(clutch.opponent_ids, vec![blue(0), blue(1)]);
    assert_eq!(clutch.side, Side::Attack);
    assert_eq!(clutch.start_time_ms, 30000);
    assert_eq!(clutch.end_time_ms, 40000);
}

#[test]
fn candidate_dying_before_confirmation_voids_the_clutch() {
    let r0 = round_uuid(0);
    let mut events = vec![
        kill(r0, 21000, blue(0), red(1)),
        kill(r0, 22000, blue(0), red(2)),
        kill(r0, 23000, blue(0), red(3)),
        kill(r0, 30000, blue(0), red(4)),
    ];
    // The lone survivor dies 1.5s after becoming alone.
    events.push(kill(r0, 31500, blue(0), red(0)));

    let rounds = vec![won_round(0, BLUE_TEAM)];
    let players = roster();

    let clutches = compute_clutches(&rounds, &events, &team_index(&players));

    assert!(clutches.is_empty());
}

#[test]
fn surviving_candidate_confirms_at_estimated_round_end() {
    // Alone at t=5000, one more kill at t=7000, nothing afterwards. The
    // estimated round end (last kill + 1000 ms) is exactly the confirmation
    // threshold.
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 2000, blue(0), red(1)),
        kill(r0, 3000, blue(0), red(2)),
        kill(r0, 4000, blue(0), red(3)),
        kill(r0, 5000, blue(0), red(4)),
        kill(r0, 7000, red(0), blue(0)),
    ];
    let rounds = vec![won_round(0, BLUE_TEAM)];
    let players = roster();

    let clutches = compute_clutches(&rounds, &events, &team_index(&players));

    assert_eq!(clutches.len(), 1);
    let clutch = &clutches[0];
    assert_eq!(clutch.clutcher_id, red(0));
    assert_eq!(clutch.clutch_type, 5);
    assert!(!clutch.won);
    assert_eq!(clutch.situation, ClutchSituation::PrePlant);
    assert_eq!(clutch.start_time_ms, 5000);
}

#[test]
fn plant_at_clutch_start_counts_as_post_plant() {
    let rounds = vec![RoundData {
        plant_time_ms: Some(30000),
        ..won_round(0, RED_TEAM)
    }];
    let players = roster();

    let clutches = compute_clutches(&rounds, &one_v_two_events(), &team_index(&players));

    assert_eq!(clutches[0].situation, ClutchSituation::PostPlant);
}

#[test]
fn rounds_without_a_lone_survivor_have_no_clutch() {
    let r0 = round_uuid(0);
    let events = vec![kill(r0, 5000, red(0), blue(0))];
    let rounds = vec![won_round(0, RED_TEAM)];
    let players = roster();

    let clutches = compute_clutches(&rounds, &events, &team_index(&players));

    assert!(clutches.is_empty());
}
