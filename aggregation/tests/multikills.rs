use pretty_assertions::assert_eq;

use aggregation::multikills::{aggregate_for_player, compute_multikills};

mod common;
use common::*;

#[test]
fn two_kills_inside_the_window_are_a_double() {
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 3000, red(0), blue(1)),
    ];
    let players = roster();

    let results = compute_multikills(&events, &team_index(&players));
    let result = aggregate_for_player(&results, red(0));

    assert_eq!(result.multi_kills, 1);
    assert_eq!(result.double_kills, 1);
    assert_eq!(result.triple_kills, 0);
}

#[test]
fn a_long_gap_splits_the_streak() {
    // 6000 ms between kills: two singleton streaks, no multi-kill.
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 7000, red(0), blue(1)),
    ];
    let players = roster();

    let results = compute_multikills(&events, &team_index(&players));
    let result = aggregate_for_player(&results, red(0));

    assert_eq!(result.multi_kills, 0);
    assert_eq!(result.double_kills, 0);
}

#[test]
fn five_chained_kills_are_a_penta() {
    let r0 = round_uuid(0);
    let events = (0..5)
        .map(|n| kill(r0, 1000 + n * 4000, red(0), blue(n as u128)))
        .collect::<Vec<_>>();
    let players = roster();

    let results = compute_multikills(&events, &team_index(&players));
    let result = aggregate_for_player(&results, red(0));

    assert_eq!(result.multi_kills, 1);
    assert_eq!(result.penta_kills, 1);
    assert_eq!(result.double_kills, 0);
}

#[test]
fn teamkills_and_suicides_do_not_extend_streaks() {
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 2000, red(0), red(1)),
        kill(r0, 3000, red(0), red(0)),
    ];
    let players = roster();

    let results = compute_multikills(&events, &team_index(&players));
    let result = aggregate_for_player(&results, red(0));

    assert_eq!(result.multi_kills, 0);
}

#[test]
fn window_boundary_is_inclusive() {
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 6000, red(0), blue(1)),
    ];
    let players = roster();

    let results = compute_multikills(&events, &team_index(&players));
    assert_eq!(aggregate_for_player(&results, red(0)).double_kills, 1);
}
