use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clutches::ClutchResult;
use crate::rows::{
    CompositionClutchStatsRow, CompositionWeaponStatsRow, MatchPlayerStatsRow,
    PlayerClutchStatsRow,
};
use crate::snapshot::{EventKind, MatchSnapshot, TeamIndex, TeamTag};

/// Unpivots the per-type clutch columns into one row per (player, type) with
/// at least one clutch played.
pub fn build_player_clutch_stats(
    match_id: Uuid,
    match_date: chrono::NaiveDate,
    match_player_stats: &[MatchPlayerStatsRow],
    now: DateTime<Utc>,
) -> Vec<PlayerClutchStatsRow> {
    let mut rows = Vec::new();

    for mps in match_player_stats {
        let per_type: [(i16, i32, i32); 5] = [
            (1, mps.v1_played, mps.v1_won),
            (2, mps.v2_played, mps.v2_won),
            (3, mps.v3_played, mps.v3_won),
            (4, mps.v4_played, mps.v4_won),
            (5, mps.v5_played, mps.v5_won),
        ];

        for (clutch_type, played, won) in per_type {
            if played == 0 {
                continue;
            }
            rows.push(PlayerClutchStatsRow {
                id: Uuid::new_v4(),
                match_id,
                match_date,
                player_id: mps.player_id,
                clutch_type,
                played,
                won,
                created_at: now,
            });
        }
    }

    rows
}

fn composition_by_tag(data: &MatchSnapshot) -> HashMap<TeamTag, &str> {
    data.compositions
        .iter()
        .filter(|c| !c.agent_list_hash.is_empty())
        .filter_map(|c| c.team_tag.map(|tag| (tag, c.agent_list_hash.as_str())))
        .collect()
}

/// Kill totals per (team composition, weapon category).
pub fn build_composition_weapon_stats(
    data: &MatchSnapshot,
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<CompositionWeaponStatsRow> {
    let comp_by_tag = composition_by_tag(data);

    #[derive(Default)]
    struct Totals {
        kills: i32,
        headshot_kills: i32,
        bodyshot_kills: i32,
        legshot_kills: i32,
        damage: i32,
    }

    let mut stats: HashMap<(String, String), Totals> = HashMap::new();

    for event in &data.round_events {
        if !matches!(event.kind, EventKind::Kill) {
            continue;
        }
        let comp_hash = match teams
            .team_of(event.actor_id)
            .and_then(|team| teams.tag_of(team))
            .and_then(|tag| comp_by_tag.get(&tag))
        {
            Some(hash) => (*hash).to_owned(),
            None => continue,
        };
        let category = event
            .weapon_category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Ability")
            .to_owned();

        let totals = stats.entry((comp_hash, category)).or_default();
        totals.kills += 1;
        if event.headshot.unwrap_or(0) > 0 {
            totals.headshot_kills += 1;
        } else if event.bodyshot.unwrap_or(0) > 0 {
            totals.bodyshot_kills += 1;
        } else if event.legshot.unwrap_or(0) > 0 {
            totals.legshot_kills += 1;
        }
        if let Some(amount) = event.damage {
            totals.damage += amount;
        }
    }

    stats
        .into_iter()
        .map(|((composition_hash, weapon_category), totals)| CompositionWeaponStatsRow {
            id: Uuid::new_v4(),
            match_id: data.match_id,
            match_date: data.match_date,
            composition_hash,
            weapon_category,
            kills: totals.kills,
            headshot_kills: totals.headshot_kills,
            bodyshot_kills: totals.bodyshot_kills,
            legshot_kills: totals.legshot_kills,
            damage: totals.damage,
            created_at: now,
        })
        .collect()
}

/// Clutch played/won counts per (team composition, clutch type).
pub fn build_composition_clutch_stats(
    data: &MatchSnapshot,
    clutches: &[ClutchResult],
    teams: &TeamIndex,
    now: DateTime<Utc>,
) -> Vec<CompositionClutchStatsRow> {
    let comp_by_tag = composition_by_tag(data);

    let mut stats: HashMap<(String, i16), (i32, i32)> = HashMap::new();

    for clutch in clutches {
        if !(1..=5).contains(&clutch.clutch_type) {
            continue;
        }
        let comp_hash = match teams
            .team_of(clutch.clutcher_id)
            .and_then(|team| teams.tag_of(team))
            .and_then(|tag| comp_by_tag.get(&tag))
        {
            Some(hash) => (*hash).to_owned(),
            None => continue,
        };

        let (played, won) = stats.entry((comp_hash, clutch.clutch_type)).or_default();
        *played += 1;
        if clutch.won {
            *won += 1;
        }
    }

    stats
        .into_iter()
        .map(|((composition_hash, clutch_type), (played, won))| CompositionClutchStatsRow {
            id: Uuid::new_v4(),
            match_id: data.match_id,
            match_date: data.match_date,
            composition_hash,
            clutch_type,
            played,
            won,
            created_at: now,
        })
        .collect()
}
