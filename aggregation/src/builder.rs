use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clutches::{compute_clutches, ClutchResult};
use crate::denormalized::{
    build_composition_clutch_stats, build_composition_weapon_stats, build_player_clutch_stats,
};
use crate::duels::{build_match_player_duels, compute_duels};
use crate::entries::compute_entries;
use crate::match_player::build_match_player_stats;
use crate::multikills::compute_multikills;
use crate::round_player::build_round_player_stats;
use crate::round_team::build_round_team_stats;
use crate::rows::{AggregateSet, ClutchRow, RoundPlayerStatsRow};
use crate::snapshot::{MatchSnapshot, TeamIndex};
use crate::team_match::build_team_match_stats;
use crate::team_side::build_team_match_side_stats;
use crate::trades::compute_trades;
use crate::weapons::{build_match_player_weapon_stats, compute_weapon_stats};

/// Runs every detection and projection for one match snapshot.
pub fn build_aggregates(data: &MatchSnapshot) -> AggregateSet {
    let now = Utc::now();
    let teams = TeamIndex::new(&data.match_players);

    let trades = compute_trades(&data.round_events, &teams);
    let entries = compute_entries(&data.rounds, &data.round_events);
    let clutch_results = compute_clutches(&data.rounds, &data.round_events, &teams);
    let multikills = compute_multikills(&data.round_events, &teams);
    let duels = compute_duels(&data.round_events, &entries, &teams);
    let weapon_usage = compute_weapon_stats(&data.round_events, &entries, &teams);

    let mut round_player_stats =
        build_round_player_stats(data, &teams, &trades, &entries, now);
    let round_team_stats = build_round_team_stats(data, &round_player_stats, &teams, now);
    let match_player_stats = build_match_player_stats(
        data,
        &round_player_stats,
        &clutch_results,
        &multikills,
        &entries,
        &trades,
        &teams,
        now,
    );
    let team_match_stats = build_team_match_stats(
        data,
        &round_player_stats,
        &clutch_results,
        &multikills,
        &teams,
        now,
    );
    let team_match_side_stats = build_team_match_side_stats(
        data,
        &round_player_stats,
        &clutch_results,
        &multikills,
        &teams,
        now,
    );
    let match_player_duels = build_match_player_duels(data.match_id, data.match_date, &duels, now);
    let match_player_weapon_stats =
        build_match_player_weapon_stats(data.match_id, data.match_date, &weapon_usage, now);

    let clutches = build_clutch_rows(&clutch_results, now);
    link_clutches(&mut round_player_stats, &clutches);

    let player_clutch_stats =
        build_player_clutch_stats(data.match_id, data.match_date, &match_player_stats, now);
    let composition_weapon_stats = build_composition_weapon_stats(data, &teams, now);
    let composition_clutch_stats =
        build_composition_clutch_stats(data, &clutch_results, &teams, now);

    AggregateSet {
        match_id: data.match_id,
        match_date: data.match_date,
        clutches,
        round_player_stats,
        round_team_stats,
        match_player_stats,
        team_match_stats,
        team_match_side_stats,
        match_player_duels,
        match_player_weapon_stats,
        player_clutch_stats,
        composition_weapon_stats,
        composition_clutch_stats,
    }
}

/// One participant row for the clutcher and one per opponent at clutch start.
/// Opponents carry the inverted side and the inverted outcome.
fn build_clutch_rows(clutch_results: &[ClutchResult], now: DateTime<Utc>) -> Vec<ClutchRow> {
    let mut rows = Vec::new();

    for result in clutch_results {
        rows.push(ClutchRow {
            id: Uuid::new_v4(),
            round_id: result.round_id,
            player_id: result.clutcher_id,
            side: result.side,
            won: result.won,
            is_clutcher: true,
            situation: result.situation.as_str().to_owned(),
            clutch_type: result.clutch_type,
            clutch_start_time_ms: result.start_time_ms,
            clutch_end_time_ms: result.end_time_ms,
            created_at: now,
        });

        for opponent_id in &result.opponent_ids {
            rows.push(ClutchRow {
                id: Uuid::new_v4(),
                round_id: result.round_id,
                player_id: *opponent_id,
                side: result.side.opposite(),
                won: !result.won,
                is_clutcher: false,
                situation: result.situation.as_str().to_owned(),
                clutch_type: result.clutch_type,
                clutch_start_time_ms: result.start_time_ms,
                clutch_end_time_ms: result.end_time_ms,
                created_at: now,
            });
        }
    }

    rows
}

/// Back-links the clutcher's round row to its clutch row.
fn link_clutches(stats: &mut [RoundPlayerStatsRow], clutches: &[ClutchRow]) {
    let lookup: HashMap<(Uuid, Uuid), Uuid> = clutches
        .iter()
        .filter(|c| c.is_clutcher)
        .map(|c| ((c.round_id, c.player_id), c.id))
        .collect();

    for row in stats {
        if let Some(clutch_id) = lookup.get(&(row.round_id, row.player_id)) {
            row.clutch_id = Some(*clutch_id);
        }
    }
}
