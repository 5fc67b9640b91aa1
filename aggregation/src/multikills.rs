use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::snapshot::{
    combat_kill_events, events_by_round, KillEvent, RoundEventData, TeamIndex,
    MULTI_KILL_WINDOW_MS,
};

/// Streak counts for one player in one round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MultiKillResult {
    pub multi_kills: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
}

impl MultiKillResult {
    pub fn add(&mut self, other: &MultiKillResult) {
        self.multi_kills += other.multi_kills;
        self.double_kills += other.double_kills;
        self.triple_kills += other.triple_kills;
        self.quadra_kills += other.quadra_kills;
        self.penta_kills += other.penta_kills;
    }
}

/// Multi-kill streak detection over all rounds.
///
/// A streak is a maximal run of a player's cross-team kills where consecutive
/// kills are at most the window apart. Streaks of length 2, 3, 4 and 5+ count
/// as double, triple, quadra and penta. Only players with at least one streak
/// appear in the result.
pub fn compute_multikills(
    events: &[RoundEventData],
    teams: &TeamIndex,
) -> HashMap<Uuid, HashMap<Uuid, MultiKillResult>> {
    let mut results = HashMap::new();

    for (round_id, round_events) in events_by_round(events) {
        let kills = combat_kill_events(&round_events, teams);

        let mut kills_by_player: HashMap<Uuid, Vec<KillEvent>> = HashMap::new();
        for kill in kills {
            kills_by_player.entry(kill.killer_id).or_default().push(kill);
        }

        let round_results: &mut HashMap<Uuid, MultiKillResult> =
            results.entry(round_id).or_default();

        for (player_id, player_kills) in kills_by_player {
            let result = streaks(&player_kills);
            if result.multi_kills > 0 {
                round_results.insert(player_id, result);
            }
        }
    }

    results
}

fn streaks(kills: &[KillEvent]) -> MultiKillResult {
    let mut result = MultiKillResult::default();
    if kills.len() < 2 {
        return result;
    }

    let mut streak_start = 0;
    for i in 1..=kills.len() {
        let continues = i < kills.len()
            && kills[i].timestamp_ms - kills[i - 1].timestamp_ms <= MULTI_KILL_WINDOW_MS;
        if continues {
            continue;
        }

        let streak_len = i - streak_start;
        if streak_len >= 2 {
            result.multi_kills += 1;
            match streak_len {
                2 => result.double_kills += 1,
                3 => result.triple_kills += 1,
                4 => result.quadra_kills += 1,
                _ => result.penta_kills += 1,
            }
        }
        streak_start = i;
    }

    result
}

/// Sum of a player's round results across the whole match.
pub fn aggregate_for_player(
    results: &HashMap<Uuid, HashMap<Uuid, MultiKillResult>>,
    player_id: Uuid,
) -> MultiKillResult {
    let mut total = MultiKillResult::default();
    for round_results in results.values() {
        if let Some(r) = round_results.get(&player_id) {
            total.add(r);
        }
    }
    total
}

/// Sum of a player's round results restricted to the given rounds.
pub fn aggregate_for_player_rounds(
    results: &HashMap<Uuid, HashMap<Uuid, MultiKillResult>>,
    player_id: Uuid,
    round_ids: &HashSet<Uuid>,
) -> MultiKillResult {
    let mut total = MultiKillResult::default();
    for (round_id, round_results) in results {
        if !round_ids.contains(round_id) {
            continue;
        }
        if let Some(r) = round_results.get(&player_id) {
            total.add(r);
        }
    }
    total
}
