use std::collections::HashMap;

use pretty_assertions::assert_eq;
use uuid::Uuid;

use aggregation::build_aggregates;
use aggregation::rows::{AggregateSet, MatchPlayerStatsRow, RoundPlayerStatsRow};
use aggregation::snapshot::{
    CompositionData, MatchSnapshot, RoundPlayerLoadoutData, Side, TeamTag,
};

mod common;
use common::*;

fn round_row<'a>(
    set: &'a AggregateSet,
    round_id: Uuid,
    player_id: Uuid,
) -> &'a RoundPlayerStatsRow {
    set.round_player_stats
        .iter()
        .find(|r| r.round_id == round_id && r.player_id == player_id)
        .expect("round player row")
}

fn match_row<'a>(set: &'a AggregateSet, player_id: Uuid) -> &'a MatchPlayerStatsRow {
    set.match_player_stats
        .iter()
        .find(|r| r.player_id == player_id)
        .expect("match player row")
}

#[test]
fn single_kill_round() {
    let rounds = vec![won_round(0, RED_TEAM)];
    let r0 = rounds[0].id;
    let events = vec![kill(r0, 5000, red(0), blue(0))];
    let snap = snapshot(rounds, events);

    let set = build_aggregates(&snap);

    assert_eq!(set.round_player_stats.len(), 10);

    let killer = round_row(&set, r0, red(0));
    assert_eq!(killer.kills, 1);
    assert_eq!(killer.deaths, 0);
    assert!(killer.survived);
    assert!(killer.first_kill);
    assert_eq!(killer.trade_kill, 0);

    let victim = round_row(&set, r0, blue(0));
    assert_eq!(victim.deaths, 1);
    assert!(victim.first_death);
    assert!(!victim.survived);
    assert_eq!(victim.traded_death, 0);

    // Zero deaths keep the K/D at the zero sentinel.
    let killer_match = match_row(&set, red(0));
    assert_eq!(killer_match.kills, 1);
    assert_eq!(killer_match.kd, 0.0);
    assert_eq!(killer_match.multi_kills, 0);
    assert_eq!(killer_match.first_kills, 1);

    assert!(set.clutches.is_empty());
    assert_eq!(set.match_player_stats.iter().filter(|r| r.mvp).count(), 1);
}

#[test]
fn tied_attack_half_is_a_side_tie() {
    // Red attacks rounds 0-11 and wins exactly half of them.
    let rounds: Vec<_> = (0..12)
        .map(|n| {
            let winner = if n < 6 { RED_TEAM } else { BLUE_TEAM };
            won_round(n, winner)
        })
        .collect();
    let mut snap = snapshot(rounds, Vec::new());
    snap.team_red_score = 6;
    snap.team_blue_score = 6;

    let set = build_aggregates(&snap);

    let attack = set
        .team_match_side_stats
        .iter()
        .find(|r| r.team_id == RED_TEAM && r.team_side == Side::Attack)
        .expect("red attack row");
    assert_eq!(attack.rounds_played, 12);
    assert_eq!(attack.rounds_won, 6);
    assert_eq!(attack.rounds_lost, 6);
    assert_eq!(attack.side_outcome, "Tie");

    // No second-half rounds were played, so Red has no Defense row.
    assert!(!set
        .team_match_side_stats
        .iter()
        .any(|r| r.team_id == RED_TEAM && r.team_side == Side::Defense));
}

#[test]
fn pistol_rule_overrides_spend_in_round_team_stats() {
    let rounds = vec![won_round(0, RED_TEAM), won_round(1, BLUE_TEAM)];
    let mut snap = snapshot(rounds, Vec::new());
    // Every player spends 900, so each team spends 4500 per round.
    snap.round_player_loadouts = snap
        .round_player_states
        .iter()
        .map(|s| RoundPlayerLoadoutData {
            round_player_id: s.id,
            loadout_id: None,
            value: None,
            remaining: Some(100),
            spent: Some(900),
        })
        .collect();

    let set = build_aggregates(&snap);

    let pistol = set
        .round_team_stats
        .iter()
        .find(|r| r.round_id == round_uuid(0) && r.team_id == RED_TEAM)
        .expect("round 0 red row");
    assert_eq!(pistol.credits_spent, 4500);
    assert_eq!(pistol.buy_type, "Pistol");

    let semi = set
        .round_team_stats
        .iter()
        .find(|r| r.round_id == round_uuid(1) && r.team_id == RED_TEAM)
        .expect("round 1 red row");
    assert_eq!(semi.credits_spent, 4500);
    assert_eq!(semi.buy_type, "SEMI");
}

/// Two rounds exercising trades, a multi-kill, a teamkill, a spike death
/// and a lost 1v4 clutch.
fn composite_snapshot() -> MatchSnapshot {
    let rounds = vec![won_round(0, RED_TEAM), won_round(1, BLUE_TEAM)];
    let r0 = rounds[0].id;
    let r1 = rounds[1].id;

    let events = vec![
        damage(r0, 900, red(0), blue(0), 50, (1, 2, 0)),
        headshot_kill(r0, 1000, red(0), blue(0)),
        kill(r0, 2500, blue(1), red(0)),
        kill(r0, 3000, red(1), blue(1)),
        kill(r0, 6000, red(1), blue(2)),
        kill_with_weapon(r0, 15000, blue(3), blue(3), "Spike"),
        kill(r0, 21000, red(2), red(3)),
        kill(r1, 1000, blue(4), red(4)),
    ];

    let mut snap = snapshot(rounds, events);
    snap.team_red_score = 1;
    snap.team_blue_score = 1;
    snap.compositions = vec![
        CompositionData {
            match_id: MATCH_ID,
            team_tag: Some(TeamTag::Red),
            agent_list_hash: "red-comp".to_owned(),
        },
        CompositionData {
            match_id: MATCH_ID,
            team_tag: Some(TeamTag::Blue),
            agent_list_hash: "blue-comp".to_owned(),
        },
    ];
    // Combat score for red(1) in round 0 only.
    for state in &mut snap.round_player_states {
        if state.round_id == round_uuid(0) && state.player_id == red(1) {
            state.score = Some(300);
        }
    }
    snap
}

#[test]
fn composite_round_classification() {
    let snap = composite_snapshot();
    let set = build_aggregates(&snap);
    let r0 = round_uuid(0);

    let opener = round_row(&set, r0, red(0));
    assert_eq!(opener.kills, 1);
    assert_eq!(opener.deaths, 1);
    assert_eq!(opener.headshot_kills, 1);
    assert_eq!(opener.damage_given, 50);
    assert_eq!((opener.headshot_hit, opener.bodyshot_hit, opener.legshot_hit), (1, 2, 0));
    assert!((opener.headshot_percent - 100.0 / 3.0).abs() < 1e-9);
    assert!(opener.first_kill);
    assert_eq!(opener.traded_death, 1);

    let trader = round_row(&set, r0, blue(1));
    assert_eq!(trader.kills, 1);
    assert_eq!(trader.deaths, 1);
    assert_eq!(trader.trade_kill, 1);

    let spiked = round_row(&set, r0, blue(3));
    assert_eq!(spiked.deaths, 1);
    assert!(spiked.killed_by_spike);
    assert_eq!(spiked.suicides, 0);

    let teamkiller = round_row(&set, r0, red(2));
    assert_eq!(teamkiller.kills, 0);
    assert_eq!(teamkiller.teammates_killed, 1);

    let teamkilled = round_row(&set, r0, red(3));
    assert_eq!(teamkilled.deaths, 1);
    assert_eq!(teamkilled.deaths_by_teammate, 1);
}

#[test]
fn composite_clutch_rows_and_backlink() {
    let snap = composite_snapshot();
    let set = build_aggregates(&snap);
    let r0 = round_uuid(0);

    // blue(4) is alone from the spike death at t=15000 until the teamkill
    // at t=21000 confirms the 1v4.
    assert_eq!(set.clutches.len(), 5);

    let clutcher: Vec<_> = set.clutches.iter().filter(|c| c.is_clutcher).collect();
    assert_eq!(clutcher.len(), 1);
    let clutcher = clutcher[0];
    assert_eq!(clutcher.player_id, blue(4));
    assert_eq!(clutcher.clutch_type, 4);
    assert_eq!(clutcher.side, Side::Defense);
    assert!(!clutcher.won);
    assert_eq!(clutcher.situation, "pre-plant");

    for opponent in set.clutches.iter().filter(|c| !c.is_clutcher) {
        assert_eq!(opponent.side, Side::Attack);
        assert!(opponent.won);
        assert_eq!(opponent.clutch_type, 4);
    }

    let backlinked = round_row(&set, r0, blue(4));
    assert_eq!(backlinked.clutch_id, Some(clutcher.id));
    assert!(round_row(&set, r0, red(1)).clutch_id.is_none());

    // Denormalized projections agree with the clutch.
    assert_eq!(set.player_clutch_stats.len(), 1);
    assert_eq!(set.player_clutch_stats[0].player_id, blue(4));
    assert_eq!(set.player_clutch_stats[0].clutch_type, 4);
    assert_eq!(set.player_clutch_stats[0].played, 1);
    assert_eq!(set.player_clutch_stats[0].won, 0);

    assert_eq!(set.composition_clutch_stats.len(), 1);
    assert_eq!(set.composition_clutch_stats[0].composition_hash, "blue-comp");
    assert_eq!(set.composition_clutch_stats[0].played, 1);
}

#[test]
fn composite_match_rows() {
    let snap = composite_snapshot();
    let set = build_aggregates(&snap);

    let double = match_row(&set, red(1));
    assert_eq!(double.kills, 2);
    assert_eq!(double.multi_kills, 1);
    assert_eq!(double.double_kills, 1);
    assert_eq!(double.trade_kills, 1);
    assert_eq!(double.acs, 150.0);
    // Tied match: the MVP is the highest combat score overall.
    assert!(double.mvp);
    assert!(!double.match_won);

    let opener = match_row(&set, red(0));
    assert_eq!(opener.first_kills_traded, 1);
    assert_eq!(opener.first_kills, 1);

    let entry_victim = match_row(&set, blue(0));
    assert_eq!(entry_victim.first_deaths_traded, 1);

    // Blue took no deaths in round 1.
    for n in 0..5 {
        assert_eq!(match_row(&set, blue(n)).flawless_rounds, 1);
        assert_eq!(match_row(&set, red(n)).flawless_rounds, 0);
    }

    assert_eq!(set.match_player_stats.iter().filter(|r| r.mvp).count(), 1);
}

#[test]
fn composite_composition_weapon_rollup() {
    let snap = composite_snapshot();
    let set = build_aggregates(&snap);

    let by_comp: HashMap<&str, i32> = set
        .composition_weapon_stats
        .iter()
        .map(|r| (r.composition_hash.as_str(), r.kills))
        .collect();

    // Every kill event counts toward the actor team's composition; the
    // weapon category defaults to Ability.
    assert_eq!(by_comp["red-comp"], 4);
    assert_eq!(by_comp["blue-comp"], 3);
    assert!(set
        .composition_weapon_stats
        .iter()
        .all(|r| r.weapon_category == "Ability"));
    let red_row = set
        .composition_weapon_stats
        .iter()
        .find(|r| r.composition_hash == "red-comp")
        .unwrap();
    assert_eq!(red_row.headshot_kills, 1);
}

#[test]
fn universal_invariants_hold() {
    let snap = composite_snapshot();
    let set = build_aggregates(&snap);

    // Every match-grain row names this match and its date.
    for r in &set.match_player_stats {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }
    for r in &set.team_match_stats {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }
    for r in &set.team_match_side_stats {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }
    for r in &set.match_player_duels {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }
    for r in &set.match_player_weapon_stats {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }
    for r in &set.round_team_stats {
        assert_eq!((r.match_id, r.match_date), (snap.match_id, snap.match_date));
    }

    // Sum law: round rows add up to the match row.
    for mps in &set.match_player_stats {
        let rounds: Vec<_> = set
            .round_player_stats
            .iter()
            .filter(|r| r.player_id == mps.player_id)
            .collect();
        assert_eq!(mps.kills, rounds.iter().map(|r| i32::from(r.kills)).sum::<i32>());
        assert_eq!(mps.deaths, rounds.iter().map(|r| i32::from(r.deaths)).sum::<i32>());
        assert_eq!(mps.assists, rounds.iter().map(|r| i32::from(r.assists)).sum::<i32>());
        assert_eq!(mps.damage_given, rounds.iter().map(|r| r.damage_given).sum::<i32>());
        assert_eq!(mps.damage_taken, rounds.iter().map(|r| r.damage_taken).sum::<i32>());
        assert_eq!(mps.headshot_hit, rounds.iter().map(|r| r.headshot_hit).sum::<i32>());
        assert_eq!(
            mps.headshot_kills,
            rounds.iter().map(|r| r.headshot_kills).sum::<i32>()
        );
    }

    // Side partition: the two side rows add up to the team row.
    for tms in &set.team_match_stats {
        let sides: Vec<_> = set
            .team_match_side_stats
            .iter()
            .filter(|r| r.team_id == tms.team_id)
            .collect();
        assert_eq!(tms.kills, sides.iter().map(|r| r.kills).sum::<i32>());
        assert_eq!(tms.deaths, sides.iter().map(|r| r.deaths).sum::<i32>());
        assert_eq!(tms.damage_given, sides.iter().map(|r| r.damage_given).sum::<i32>());
        assert_eq!(tms.damage_taken, sides.iter().map(|r| r.damage_taken).sum::<i32>());
        assert_eq!(tms.rounds_played, sides.iter().map(|r| r.rounds_played).sum::<i32>());
    }

    // Clutch coherence: one clutcher per round, opponents inverted.
    let mut clutchers_per_round: HashMap<Uuid, usize> = HashMap::new();
    for c in set.clutches.iter().filter(|c| c.is_clutcher) {
        *clutchers_per_round.entry(c.round_id).or_default() += 1;
    }
    assert!(clutchers_per_round.values().all(|&n| n == 1));

    // Exactly one MVP.
    assert_eq!(set.match_player_stats.iter().filter(|r| r.mvp).count(), 1);

    // Overtime flags: nothing here reaches round 24 or 14 match points.
    assert!(set.round_player_stats.iter().all(|r| !r.is_overtime));
    assert!(set.match_player_stats.iter().all(|r| !r.is_overtime));
    assert!(set.team_match_stats.iter().all(|r| !r.is_overtime));

    // Trade symmetry.
    let trade_kills: i32 = set.round_player_stats.iter().map(|r| r.trade_kill).sum();
    let traded_deaths: i32 = set.round_player_stats.iter().map(|r| r.traded_death).sum();
    assert_eq!(trade_kills, traded_deaths);
    assert_eq!(trade_kills, 2);

    // No spike rows in weapon stats.
    assert!(set
        .match_player_weapon_stats
        .iter()
        .all(|r| r.weapon_name != "Spike"));
}

#[test]
fn reprocessing_is_idempotent() {
    let snap = composite_snapshot();

    let first = build_aggregates(&snap);
    let second = build_aggregates(&snap);

    // Identifiers and timestamps differ between runs, everything else must
    // match exactly.
    let key_rounds = |set: &AggregateSet| {
        let mut rows: Vec<_> = set
            .round_player_stats
            .iter()
            .map(|r| {
                (
                    (r.round_id, r.player_id),
                    (r.kills, r.deaths, r.assists, r.damage_given, r.damage_taken),
                    (r.trade_kill, r.traded_death, r.first_kill, r.first_death, r.survived),
                    (
                        r.killed_by_spike,
                        r.suicides,
                        r.deaths_by_teammate,
                        r.teammates_killed,
                        r.clutch_id.is_some(),
                    ),
                )
            })
            .collect();
        rows.sort();
        rows
    };
    assert_eq!(key_rounds(&first), key_rounds(&second));

    let key_match = |set: &AggregateSet| {
        let mut rows: Vec<_> = set
            .match_player_stats
            .iter()
            .map(|r| {
                (
                    r.player_id,
                    (r.kills, r.deaths, r.multi_kills, r.clutches_played),
                    (r.mvp, r.match_won),
                    (r.first_kills_traded, r.first_deaths_traded, r.flawless_rounds),
                    (r.kd.to_bits(), r.acs.to_bits(), r.kast.to_bits(), r.adr.to_bits()),
                )
            })
            .collect();
        rows.sort();
        rows
    };
    assert_eq!(key_match(&first), key_match(&second));

    let key_clutches = |set: &AggregateSet| {
        let mut rows: Vec<_> = set
            .clutches
            .iter()
            .map(|c| (c.round_id, c.player_id, c.is_clutcher, c.won, c.side, c.clutch_type))
            .collect();
        rows.sort_by_key(|r| (r.0, r.1));
        rows
    };
    assert_eq!(key_clutches(&first), key_clutches(&second));
}
