use std::collections::HashMap;

use uuid::Uuid;

use crate::snapshot::{
    combat_kill_events, events_by_round, RoundEventData, TeamIndex, TRADE_WINDOW_MS,
};

/// Trade counts for one player in one round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TradeResult {
    pub trade_kills: i32,
    pub traded_deaths: i32,
}

/// Trade kill / traded death detection over all rounds.
///
/// A death is traded when a teammate of the victim kills the killer within
/// the trade window. Deaths and avenging kills pair up one to one: a death is
/// traded at most once, and a kill trades at most one death, so the trade
/// kill and traded death totals always balance. Earlier qualifying deaths win
/// the pairing.
pub fn compute_trades(
    events: &[RoundEventData],
    teams: &TeamIndex,
) -> HashMap<Uuid, HashMap<Uuid, TradeResult>> {
    let mut results: HashMap<Uuid, HashMap<Uuid, TradeResult>> = HashMap::new();

    for (round_id, round_events) in events_by_round(events) {
        let kills = combat_kill_events(&round_events, teams);
        let round_results = results.entry(round_id).or_default();

        // Marks kills whose victim's death has already been avenged.
        let mut traded = vec![false; kills.len()];

        for (i, avenging) in kills.iter().enumerate() {
            // Walk earlier kills inside the window, oldest first, and take
            // the first one this kill avenges.
            for j in 0..i {
                if traded[j] {
                    continue;
                }
                let past = &kills[j];
                if past.timestamp_ms < avenging.timestamp_ms - TRADE_WINDOW_MS {
                    continue;
                }
                // The avenging kill must come strictly after the death.
                if past.timestamp_ms >= avenging.timestamp_ms {
                    continue;
                }
                if past.killer_id != avenging.victim_id {
                    continue;
                }
                if !teams.allies(past.victim_id, avenging.killer_id) {
                    continue;
                }

                traded[j] = true;
                round_results
                    .entry(avenging.killer_id)
                    .or_default()
                    .trade_kills += 1;
                round_results.entry(past.victim_id).or_default().traded_deaths += 1;
                break;
            }
        }
    }

    results
}

/// Trade counts for a (round, player) pair, zero when the player has none.
pub fn trade_result_for(
    trades: &HashMap<Uuid, HashMap<Uuid, TradeResult>>,
    round_id: Uuid,
    player_id: Uuid,
) -> TradeResult {
    trades
        .get(&round_id)
        .and_then(|round| round.get(&player_id))
        .copied()
        .unwrap_or_default()
}
