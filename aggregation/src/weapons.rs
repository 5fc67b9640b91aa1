use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::entries::EntryResult;
use crate::rows::MatchPlayerWeaponStatsRow;
use crate::snapshot::{EventKind, RoundEventData, TeamIndex, SPIKE_WEAPON};

/// Per-player weapon bucket: the asset id when known, always the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeaponKey {
    pub player_id: Uuid,
    pub weapon_id: Option<Uuid>,
    pub weapon_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeaponUsage {
    pub category: Option<String>,
    pub kills: i32,
    pub deaths: i32,
    pub damage_given: i32,
    pub damage_taken: i32,
    pub first_kills: i32,
    pub headshot_kills: i32,
    pub bodyshot_kills: i32,
    pub legshot_kills: i32,
}

/// Per-(player, weapon) stats over cross-team events. Spike deaths are not
/// weapon usage and are excluded entirely.
pub fn compute_weapon_stats(
    events: &[RoundEventData],
    entries: &HashMap<Uuid, EntryResult>,
    teams: &TeamIndex,
) -> HashMap<WeaponKey, WeaponUsage> {
    let mut usage: HashMap<WeaponKey, WeaponUsage> = HashMap::new();

    for event in events {
        let weapon_name = event.weapon.as_deref().filter(|w| !w.is_empty()).unwrap_or("Unknown");
        if weapon_name == SPIKE_WEAPON {
            continue;
        }

        let victim_id = match event.victim_id {
            Some(v) => v,
            None => continue,
        };
        if event.actor_id == victim_id || teams.allies(event.actor_id, victim_id) {
            continue;
        }

        match event.kind {
            EventKind::Kill => {
                let actor = bucket(&mut usage, event.actor_id, event, weapon_name);
                actor.kills += 1;
                if event.headshot.unwrap_or(0) > 0 {
                    actor.headshot_kills += 1;
                } else if event.bodyshot.unwrap_or(0) > 0 {
                    actor.bodyshot_kills += 1;
                } else if event.legshot.unwrap_or(0) > 0 {
                    actor.legshot_kills += 1;
                }

                if let Some(entry) = entries.get(&event.round_id) {
                    if entry.killer_id == event.actor_id && entry.victim_id == victim_id {
                        actor.first_kills += 1;
                    }
                }

                bucket(&mut usage, victim_id, event, weapon_name).deaths += 1;
            }
            EventKind::Damage => {
                let amount = match event.damage {
                    Some(d) => d,
                    None => continue,
                };
                bucket(&mut usage, event.actor_id, event, weapon_name).damage_given += amount;
                bucket(&mut usage, victim_id, event, weapon_name).damage_taken += amount;
            }
        }
    }

    usage
}

fn bucket<'a>(
    usage: &'a mut HashMap<WeaponKey, WeaponUsage>,
    player_id: Uuid,
    event: &RoundEventData,
    weapon_name: &str,
) -> &'a mut WeaponUsage {
    let key = WeaponKey {
        player_id,
        weapon_id: event.weapon_id,
        weapon_name: weapon_name.to_owned(),
    };
    usage.entry(key).or_insert_with(|| WeaponUsage {
        category: event.weapon_category.clone(),
        ..WeaponUsage::default()
    })
}

/// Weapon rows for the store, skipping buckets without any interaction.
pub fn build_match_player_weapon_stats(
    match_id: Uuid,
    match_date: NaiveDate,
    usage: &HashMap<WeaponKey, WeaponUsage>,
    now: DateTime<Utc>,
) -> Vec<MatchPlayerWeaponStatsRow> {
    usage
        .iter()
        .filter(|(_, stats)| {
            stats.kills != 0 || stats.deaths != 0 || stats.damage_given != 0 || stats.damage_taken != 0
        })
        .map(|(key, stats)| MatchPlayerWeaponStatsRow {
            id: Uuid::new_v4(),
            match_id,
            match_date,
            player_id: key.player_id,
            weapon_id: key.weapon_id,
            weapon_name: key.weapon_name.clone(),
            weapon_category: stats.category.clone(),
            kills: stats.kills,
            deaths: stats.deaths,
            damage_given: stats.damage_given,
            damage_taken: stats.damage_taken,
            first_kills: stats.first_kills,
            headshot_kills: stats.headshot_kills,
            bodyshot_kills: stats.bodyshot_kills,
            legshot_kills: stats.legshot_kills,
            created_at: now,
        })
        .collect()
}
