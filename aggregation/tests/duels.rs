use std::collections::HashMap;

use pretty_assertions::assert_eq;

use aggregation::duels::{compute_duels, DuelKey};
use aggregation::entries::compute_entries;

mod common;
use common::*;

#[test]
fn kills_and_damage_are_recorded_from_both_directions() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        damage(r0, 900, red(0), blue(0), 60, (1, 1, 0)),
        headshot_kill(r0, 1000, red(0), blue(0)),
    ];
    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let duels = compute_duels(&events, &entries, &teams);

    let forward = &duels[&DuelKey { player_id: red(0), opponent_id: blue(0) }];
    assert_eq!(forward.kills, 1);
    assert_eq!(forward.headshot_kills, 1);
    assert_eq!(forward.damage_given, 60);
    assert_eq!(forward.first_kills, 1);

    let reverse = &duels[&DuelKey { player_id: blue(0), opponent_id: red(0) }];
    assert_eq!(reverse.deaths, 1);
    assert_eq!(reverse.damage_taken, 60);
    assert_eq!(reverse.first_deaths, 1);
}

#[test]
fn self_kills_and_teamkills_produce_no_duels() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        kill(r0, 1000, red(0), red(0)),
        kill(r0, 2000, red(1), red(2)),
        damage(r0, 3000, blue(0), blue(1), 25, (0, 1, 0)),
    ];
    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let duels = compute_duels(&events, &entries, &teams);

    assert_eq!(duels, HashMap::new());
}

#[test]
fn duel_totals_balance() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 2000, blue(1), red(0)),
        kill(r0, 3000, red(1), blue(1)),
        damage(r0, 500, red(0), blue(0), 80, (0, 2, 0)),
    ];
    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let duels = compute_duels(&events, &entries, &teams);

    let kills: i32 = duels.values().map(|d| d.kills).sum();
    let deaths: i32 = duels.values().map(|d| d.deaths).sum();
    let given: i32 = duels.values().map(|d| d.damage_given).sum();
    let taken: i32 = duels.values().map(|d| d.damage_taken).sum();
    assert_eq!(kills, deaths);
    assert_eq!(given, taken);

    // No duel ever pairs teammates or a player with themselves.
    for key in duels.keys() {
        assert_ne!(key.player_id, key.opponent_id);
        assert!(!teams.allies(key.player_id, key.opponent_id));
    }
}
