use pretty_assertions::assert_eq;

use aggregation::trades::{compute_trades, trade_result_for, TradeResult};

mod common;
use common::*;

#[test]
fn death_avenged_within_window_is_traded() {
    // E1 kills T1, then T1's teammate T2 kills E1 one second later.
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 5000, red(0), blue(0)),
        kill(r0, 6000, blue(1), red(0)),
    ];
    let players = roster();

    let trades = compute_trades(&events, &team_index(&players));

    assert_eq!(
        trade_result_for(&trades, r0, blue(0)),
        TradeResult { trade_kills: 0, traded_deaths: 1 }
    );
    assert_eq!(
        trade_result_for(&trades, r0, blue(1)),
        TradeResult { trade_kills: 1, traded_deaths: 0 }
    );
    // The opening killer gets no trade credit.
    assert_eq!(trade_result_for(&trades, r0, red(0)), TradeResult::default());
}

#[test]
fn window_boundary_is_inclusive() {
    let r0 = round_uuid(0);
    let players = roster();

    let inside = vec![
        kill(r0, 5000, red(0), blue(0)),
        kill(r0, 8000, blue(1), red(0)),
    ];
    let trades = compute_trades(&inside, &team_index(&players));
    assert_eq!(trade_result_for(&trades, r0, blue(0)).traded_deaths, 1);

    let outside = vec![
        kill(r0, 5000, red(0), blue(0)),
        kill(r0, 8001, blue(1), red(0)),
    ];
    let trades = compute_trades(&outside, &team_index(&players));
    assert_eq!(trade_result_for(&trades, r0, blue(0)).traded_deaths, 0);
    assert_eq!(trade_result_for(&trades, r0, blue(1)).trade_kills, 0);
}

#[test]
fn one_avenging_kill_trades_only_the_earliest_death() {
    // red(0) drops two defenders, then gets killed once. Only the first
    // death pairs with the avenging kill, keeping totals balanced.
    let r0 = round_uuid(0);
    let events = vec![
        kill(r0, 1000, red(0), blue(0)),
        kill(r0, 2000, red(0), blue(1)),
        kill(r0, 3000, blue(2), red(0)),
    ];
    let players = roster();

    let trades = compute_trades(&events, &team_index(&players));

    assert_eq!(trade_result_for(&trades, r0, blue(0)).traded_deaths, 1);
    assert_eq!(trade_result_for(&trades, r0, blue(1)).traded_deaths, 0);
    assert_eq!(trade_result_for(&trades, r0, blue(2)).trade_kills, 1);

    let round = &trades[&r0];
    let kills: i32 = round.values().map(|t| t.trade_kills).sum();
    let deaths: i32 = round.values().map(|t| t.traded_deaths).sum();
    assert_eq!(kills, deaths);
}

#[test]
fn teamkills_and_suicides_never_trade() {
    let r0 = round_uuid(0);
    let players = roster();

    // A teamkill followed by an enemy killing the teamkiller.
    let events = vec![
        kill(r0, 1000, red(0), red(1)),
        kill(r0, 2000, blue(0), red(0)),
    ];
    let trades = compute_trades(&events, &team_index(&players));
    assert_eq!(trade_result_for(&trades, r0, red(1)).traded_deaths, 0);
    assert_eq!(trade_result_for(&trades, r0, blue(0)).trade_kills, 0);

    // A suicide followed by a kill on a teammate of the dead player.
    let events = vec![
        kill(r0, 1000, red(0), red(0)),
        kill(r0, 2000, red(1), blue(0)),
    ];
    let trades = compute_trades(&events, &team_index(&players));
    assert_eq!(trade_result_for(&trades, r0, red(0)).traded_deaths, 0);
    assert_eq!(trade_result_for(&trades, r0, red(1)).trade_kills, 0);
}
