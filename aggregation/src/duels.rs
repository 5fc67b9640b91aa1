use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entries::EntryResult;
use crate::rows::MatchPlayerDuelsRow;
use crate::snapshot::{EventKind, RoundEventData, TeamIndex};

/// Directed pair: stats of `player_id` against `opponent_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuelKey {
    pub player_id: Uuid,
    pub opponent_id: Uuid,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DuelStats {
    pub kills: i32,
    pub deaths: i32,
    pub first_kills: i32,
    pub first_deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub headshot_kills: i32,
}

/// Head-to-head stats over all cross-team events. Every interaction is
/// recorded from both directions.
pub fn compute_duels(
    events: &[RoundEventData],
    entries: &HashMap<Uuid, EntryResult>,
    teams: &TeamIndex,
) -> HashMap<DuelKey, DuelStats> {
    let mut duels: HashMap<DuelKey, DuelStats> = HashMap::new();

    for event in events {
        let victim_id = match event.victim_id {
            Some(v) => v,
            None => continue,
        };
        if event.actor_id == victim_id || teams.allies(event.actor_id, victim_id) {
            continue;
        }

        match event.kind {
            EventKind::Kill => {
                let actor = duels
                    .entry(DuelKey {
                        player_id: event.actor_id,
                        opponent_id: victim_id,
                    })
                    .or_default();
                actor.kills += 1;
                if event.headshot.unwrap_or(0) > 0 {
                    actor.headshot_kills += 1;
                }

                duels
                    .entry(DuelKey {
                        player_id: victim_id,
                        opponent_id: event.actor_id,
                    })
                    .or_default()
                    .deaths += 1;
            }
            EventKind::Damage => {
                let amount = match event.damage {
                    Some(d) => d,
                    None => continue,
                };
                duels
                    .entry(DuelKey {
                        player_id: event.actor_id,
                        opponent_id: victim_id,
                    })
                    .or_default()
                    .damage_given += amount;
                duels
                    .entry(DuelKey {
                        player_id: victim_id,
                        opponent_id: event.actor_id,
                    })
                    .or_default()
                    .damage_taken += amount;
            }
        }
    }

    // Entry kills feed the first-kill/first-death pair counters.
    for entry in entries.values() {
        if entry.killer_id == entry.victim_id || teams.allies(entry.killer_id, entry.victim_id) {
            continue;
        }
        duels
            .entry(DuelKey {
                player_id: entry.killer_id,
                opponent_id: entry.victim_id,
            })
            .or_default()
            .first_kills += 1;
        duels
            .entry(DuelKey {
                player_id: entry.victim_id,
                opponent_id: entry.killer_id,
            })
            .or_default()
            .first_deaths += 1;
    }

    duels
}

/// Duel rows for the store, skipping pairs without any interaction.
pub fn build_match_player_duels(
    match_id: Uuid,
    match_date: NaiveDate,
    duels: &HashMap<DuelKey, DuelStats>,
    now: DateTime<Utc>,
) -> Vec<MatchPlayerDuelsRow> {
    duels
        .iter()
        .filter(|(_, stats)| {
            stats.kills != 0 || stats.deaths != 0 || stats.damage_given != 0 || stats.damage_taken != 0
        })
        .map(|(key, stats)| MatchPlayerDuelsRow {
            id: Uuid::new_v4(),
            match_id,
            match_date,
            player_id: key.player_id,
            opponent_id: key.opponent_id,
            kills: stats.kills,
            deaths: stats.deaths,
            first_kills: stats.first_kills,
            first_deaths: stats.first_deaths,
            damage_given: stats.damage_given,
            damage_taken: stats.damage_taken,
            headshot_kills: stats.headshot_kills,
            created_at: now,
        })
        .collect()
}
