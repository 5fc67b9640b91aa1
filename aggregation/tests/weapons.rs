use pretty_assertions::assert_eq;

use aggregation::entries::compute_entries;
use aggregation::weapons::{compute_weapon_stats, WeaponKey};

mod common;
use common::*;

#[test]
fn kills_bucket_by_weapon_name_with_unknown_fallback() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        kill_with_weapon(r0, 1000, red(0), blue(0), "Vandal"),
        kill(r0, 2000, red(0), blue(1)),
    ];
    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let usage = compute_weapon_stats(&events, &entries, &teams);

    let vandal = &usage[&WeaponKey {
        player_id: red(0),
        weapon_id: None,
        weapon_name: "Vandal".to_owned(),
    }];
    assert_eq!(vandal.kills, 1);
    // The round's entry kill bumps the weapon's first-kill counter.
    assert_eq!(vandal.first_kills, 1);

    let unknown = &usage[&WeaponKey {
        player_id: red(0),
        weapon_id: None,
        weapon_name: "Unknown".to_owned(),
    }];
    assert_eq!(unknown.kills, 1);
    assert_eq!(unknown.first_kills, 0);
}

#[test]
fn spike_deaths_are_not_weapon_usage() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let events = vec![
        kill_with_weapon(r0, 1000, blue(0), blue(0), "Spike"),
        kill_with_weapon(r0, 2000, red(0), blue(1), "Spike"),
    ];
    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let usage = compute_weapon_stats(&events, &entries, &teams);

    assert!(usage.keys().all(|k| k.weapon_name != "Spike"));
    assert!(usage.is_empty());
}

#[test]
fn hit_flags_classify_kills_with_headshot_priority() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let mut both_flags = headshot_kill(r0, 1000, red(0), blue(0));
    both_flags.bodyshot = Some(1);
    both_flags.weapon = Some("Sheriff".to_owned());
    let mut leg = kill_with_weapon(r0, 2000, red(0), blue(1), "Sheriff");
    leg.legshot = Some(1);
    let events = vec![both_flags, leg];

    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let usage = compute_weapon_stats(&events, &entries, &teams);

    let sheriff = &usage[&WeaponKey {
        player_id: red(0),
        weapon_id: None,
        weapon_name: "Sheriff".to_owned(),
    }];
    assert_eq!(sheriff.kills, 2);
    assert_eq!(sheriff.headshot_kills, 1);
    assert_eq!(sheriff.bodyshot_kills, 0);
    assert_eq!(sheriff.legshot_kills, 1);

    // The victims' deaths land in the same weapon bucket.
    let victim = &usage[&WeaponKey {
        player_id: blue(0),
        weapon_id: None,
        weapon_name: "Sheriff".to_owned(),
    }];
    assert_eq!(victim.deaths, 1);
}

#[test]
fn damage_events_accumulate_given_and_taken() {
    let rounds = vec![round(0)];
    let r0 = rounds[0].id;
    let mut hit = damage(r0, 500, red(0), blue(0), 55, (0, 1, 0));
    hit.weapon = Some("Phantom".to_owned());
    let events = vec![hit];

    let players = roster();
    let teams = team_index(&players);
    let entries = compute_entries(&rounds, &events);

    let usage = compute_weapon_stats(&events, &entries, &teams);

    let phantom = WeaponKey {
        player_id: red(0),
        weapon_id: None,
        weapon_name: "Phantom".to_owned(),
    };
    assert_eq!(usage[&phantom].damage_given, 55);

    let victim = WeaponKey {
        player_id: blue(0),
        weapon_id: None,
        weapon_name: "Phantom".to_owned(),
    };
    assert_eq!(usage[&victim].damage_taken, 55);
}
