use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entries::EntryResult;
use crate::rows::RoundPlayerStatsRow;
use crate::snapshot::{
    events_by_round, is_overtime_round, EventKind, MatchSnapshot, RoundEventData,
    RoundPlayerLoadoutData, RoundPlayerStateData, TeamIndex,
};
use crate::trades::{trade_result_for, TradeResult};

/// Raw combat sums for one player in one round, before the state universe is
/// applied.
#[derive(Debug, Default, Clone, Copy)]
struct CombatLine {
    kills: i16,
    deaths: i16,
    assists: i16,
    headshot_kills: i32,
    bodyshot_kills: i32,
    legshot_kills: i32,
    headshot_hit: i32,
    bodyshot_hit: i32,
    legshot_hit: i32,
    damage_given: i32,
    damage_taken: i32,
    suicides: i32,
    deaths_by_teammate: i32,
    teammates_killed: i32,
    spike_deaths: i32,
}

/// Round-level stats for every player in the round's state universe.
pub fn build_round_player_stats(
    data: &MatchSnapshot,
    teams: &TeamIndex,
    trades: &HashMap<Uuid, HashMap<Uuid, TradeResult>>,
    entries: &HashMap<Uuid, EntryResult>,
    now: DateTime<Utc>,
) -> Vec<RoundPlayerStatsRow> {
    let player_agent: HashMap<Uuid, &str> = data
        .match_players
        .iter()
        .map(|mp| (mp.player_id, mp.agent_name.as_str()))
        .collect();
    let by_round = events_by_round(&data.round_events);
    let loadouts: HashMap<Uuid, &RoundPlayerLoadoutData> = data
        .round_player_loadouts
        .iter()
        .map(|l| (l.round_player_id, l))
        .collect();

    let mut states_by_round: HashMap<Uuid, Vec<&RoundPlayerStateData>> = HashMap::new();
    for state in &data.round_player_states {
        states_by_round.entry(state.round_id).or_default().push(state);
    }

    let mut rows = Vec::new();

    for round in &data.rounds {
        let round_events = by_round.get(&round.id).map(Vec::as_slice).unwrap_or(&[]);
        let lines = combat_lines(round_events, teams);
        let entry = entries.get(&round.id);

        for state in states_by_round.get(&round.id).map(Vec::as_slice).unwrap_or(&[]) {
            let line = lines.get(&state.player_id).copied().unwrap_or_default();
            let trade = trade_result_for(trades, round.id, state.player_id);

            let total_hits = line.headshot_hit + line.bodyshot_hit + line.legshot_hit;
            let headshot_percent = if total_hits > 0 {
                f64::from(line.headshot_hit) / f64::from(total_hits) * 100.0
            } else {
                0.0
            };

            let loadout = loadouts.get(&state.id);

            rows.push(RoundPlayerStatsRow {
                id: Uuid::new_v4(),
                round_id: round.id,
                player_id: state.player_id,
                loadout_id: loadout.and_then(|l| l.loadout_id),
                agent: player_agent
                    .get(&state.player_id)
                    .map(|a| (*a).to_owned())
                    .unwrap_or_default(),
                cs: state.score.map(f64::from).unwrap_or(0.0),
                kills: line.kills,
                deaths: line.deaths,
                assists: line.assists,
                headshot_percent,
                headshot_kills: line.headshot_kills,
                bodyshot_kills: line.bodyshot_kills,
                legshot_kills: line.legshot_kills,
                headshot_hit: line.headshot_hit,
                bodyshot_hit: line.bodyshot_hit,
                legshot_hit: line.legshot_hit,
                damage_given: line.damage_given,
                damage_taken: line.damage_taken,
                survived: line.deaths == 0,
                first_kill: entry.map(|e| e.killer_id == state.player_id).unwrap_or(false),
                first_death: entry.map(|e| e.victim_id == state.player_id).unwrap_or(false),
                suicides: line.suicides,
                deaths_by_teammate: line.deaths_by_teammate,
                teammates_killed: line.teammates_killed,
                killed_by_spike: line.spike_deaths > 0,
                trade_kill: trade.trade_kills,
                traded_death: trade.traded_deaths,
                clutch_id: None,
                credits_spent: loadout.and_then(|l| l.spent).unwrap_or(0),
                credits_remaining: loadout.and_then(|l| l.remaining).unwrap_or(0),
                is_overtime: is_overtime_round(round.round_number),
                created_at: now,
            });
        }
    }

    rows
}

fn combat_lines(
    events: &[&RoundEventData],
    teams: &TeamIndex,
) -> HashMap<Uuid, CombatLine> {
    let mut lines: HashMap<Uuid, CombatLine> = HashMap::new();

    for event in events {
        match event.kind {
            EventKind::Kill => record_kill(event, teams, &mut lines),
            EventKind::Damage => {
                let actor = lines.entry(event.actor_id).or_default();
                if let Some(amount) = event.damage {
                    actor.damage_given += amount;
                }
                actor.headshot_hit += event.headshot.unwrap_or(0);
                actor.bodyshot_hit += event.bodyshot.unwrap_or(0);
                actor.legshot_hit += event.legshot.unwrap_or(0);

                if let (Some(victim_id), Some(amount)) = (event.victim_id, event.damage) {
                    lines.entry(victim_id).or_default().damage_taken += amount;
                }
            }
        }
    }

    lines
}

fn record_kill(
    event: &RoundEventData,
    teams: &TeamIndex,
    lines: &mut HashMap<Uuid, CombatLine>,
) {
    let victim_id = match event.victim_id {
        Some(v) => v,
        None => {
            // No victim attached, credit the raw kill to the actor.
            let actor = lines.entry(event.actor_id).or_default();
            actor.kills += 1;
            classify_kill_hit(event, actor);
            return;
        }
    };

    let victim = lines.entry(victim_id).or_default();
    victim.deaths += 1;

    if event.actor_id == victim_id {
        if event.is_spike_death() {
            victim.spike_deaths += 1;
        } else {
            victim.suicides += 1;
        }
    } else if teams.allies(event.actor_id, victim_id) {
        // Teamkill: the victim is marked, the killer gets no kill credit.
        victim.deaths_by_teammate += 1;
        lines.entry(event.actor_id).or_default().teammates_killed += 1;
    } else {
        let actor = lines.entry(event.actor_id).or_default();
        actor.kills += 1;
        classify_kill_hit(event, actor);
    }

    for assistant in &event.assistants {
        if teams.allies(*assistant, victim_id) || *assistant == victim_id {
            continue;
        }
        lines.entry(*assistant).or_default().assists += 1;
    }
}

fn classify_kill_hit(event: &RoundEventData, line: &mut CombatLine) {
    if event.headshot.unwrap_or(0) > 0 {
        line.headshot_kills += 1;
    } else if event.bodyshot.unwrap_or(0) > 0 {
        line.bodyshot_kills += 1;
    } else if event.legshot.unwrap_or(0) > 0 {
        line.legshot_kills += 1;
    }
}
