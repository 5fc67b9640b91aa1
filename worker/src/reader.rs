use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use aggregation::snapshot::{
    CompositionData, EventKind, MatchPlayerData, MatchSnapshot, RoundData, RoundEventData,
    RoundPlayerLoadoutData, RoundPlayerStateData, TeamTag,
};

use crate::models;

#[derive(Debug)]
pub enum ReadError {
    Pool(crate::PoolError),
    Query(diesel::result::Error),
}

impl From<crate::PoolError> for ReadError {
    fn from(value: crate::PoolError) -> Self {
        Self::Pool(value)
    }
}

impl From<diesel::result::Error> for ReadError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Query(value)
    }
}

/// Read-only access to the canonical tables.
pub struct CanonicalReader {
    pool: crate::DbPool,
}

impl CanonicalReader {
    pub fn new(pool: crate::DbPool) -> Self {
        Self { pool }
    }

    pub async fn match_exists(&self, match_id: Uuid) -> Result<bool, ReadError> {
        let mut conn = self.pool.get().await?;

        let found: Option<Uuid> = crate::schema::matches::dsl::matches
            .filter(crate::schema::matches::dsl::id.eq(match_id))
            .select(crate::schema::matches::dsl::id)
            .first(&mut conn)
            .await
            .optional()?;

        Ok(found.is_some())
    }

    /// Loads everything one job needs for a match into an owned snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn load_snapshot(&self, match_id: Uuid) -> Result<MatchSnapshot, ReadError> {
        let mut conn = self.pool.get().await?;

        let match_row: models::MatchRow = crate::schema::matches::dsl::matches
            .filter(crate::schema::matches::dsl::id.eq(match_id))
            .select(models::MatchRow::as_select())
            .first(&mut conn)
            .await?;

        let round_rows: Vec<models::RoundRow> = crate::schema::rounds::dsl::rounds
            .filter(crate::schema::rounds::dsl::match_id.eq(match_id))
            .order(crate::schema::rounds::dsl::round_number.asc())
            .select(models::RoundRow::as_select())
            .load(&mut conn)
            .await?;

        let match_player_rows: Vec<models::MatchPlayerRow> =
            crate::schema::match_players::dsl::match_players
                .filter(crate::schema::match_players::dsl::match_id.eq(match_id))
                .select(models::MatchPlayerRow::as_select())
                .load(&mut conn)
                .await?;

        let agent_ids: Vec<Uuid> = match_player_rows.iter().filter_map(|mp| mp.agent_id).collect();
        let agent_rows: Vec<models::AssetAgentRow> = crate::schema::asset_agents::dsl::asset_agents
            .filter(crate::schema::asset_agents::dsl::id.eq_any(agent_ids))
            .select(models::AssetAgentRow::as_select())
            .load(&mut conn)
            .await?;
        let agent_names: HashMap<Uuid, String> =
            agent_rows.into_iter().map(|a| (a.id, a.name)).collect();

        let event_rows: Vec<models::RoundEventRow> = crate::schema::round_events::dsl::round_events
            .filter(crate::schema::round_events::dsl::match_id.eq(match_id))
            .order((
                crate::schema::round_events::dsl::round_id.asc(),
                crate::schema::round_events::dsl::timestamp_ms.asc(),
            ))
            .select(models::RoundEventRow::as_select())
            .load(&mut conn)
            .await?;

        let round_ids: Vec<Uuid> = round_rows.iter().map(|r| r.id).collect();
        let state_rows: Vec<models::RoundPlayerStateRow> =
            crate::schema::round_player_state::dsl::round_player_state
                .filter(crate::schema::round_player_state::dsl::round_id.eq_any(&round_ids))
                .select(models::RoundPlayerStateRow::as_select())
                .load(&mut conn)
                .await?;

        let state_ids: Vec<Uuid> = state_rows.iter().map(|s| s.id).collect();
        let loadout_rows: Vec<models::RoundPlayerLoadoutRow> =
            crate::schema::round_player_loadouts::dsl::round_player_loadouts
                .filter(
                    crate::schema::round_player_loadouts::dsl::round_player_id.eq_any(&state_ids),
                )
                .select(models::RoundPlayerLoadoutRow::as_select())
                .load(&mut conn)
                .await?;

        let composition_rows: Vec<models::CompositionRow> =
            crate::schema::compositions::dsl::compositions
                .filter(crate::schema::compositions::dsl::match_id.eq(match_id))
                .select(models::CompositionRow::as_select())
                .load(&mut conn)
                .await?;

        Ok(MatchSnapshot {
            match_id,
            match_key: match_row.match_id,
            match_date: match_row.match_date,
            match_type: match_row.match_type,
            team_red_score: match_row.team_red_score,
            team_blue_score: match_row.team_blue_score,
            rounds: round_rows.into_iter().map(round_data).collect(),
            match_players: match_player_rows
                .into_iter()
                .map(|mp| match_player_data(mp, &agent_names))
                .collect(),
            round_events: event_rows.into_iter().filter_map(event_data).collect(),
            round_player_states: state_rows.into_iter().map(state_data).collect(),
            round_player_loadouts: loadout_rows.into_iter().map(loadout_data).collect(),
            compositions: composition_rows.into_iter().map(composition_data).collect(),
        })
    }
}

fn round_data(row: models::RoundRow) -> RoundData {
    RoundData {
        id: row.id,
        round_number: row.round_number,
        winner_team_id: row.winner,
        winning_team: row.winning_team,
        win_method: row.win_method,
        spike_event: row.spike_event,
        plant_time_ms: row.plant_time_ms,
    }
}

fn match_player_data(
    row: models::MatchPlayerRow,
    agent_names: &HashMap<Uuid, String>,
) -> MatchPlayerData {
    let agent_name = row
        .agent_id
        .and_then(|id| agent_names.get(&id).cloned())
        .unwrap_or_else(|| "Unknown".to_owned());

    MatchPlayerData {
        id: row.id,
        match_id: row.match_id,
        player_id: row.player_id,
        team_id: row.team_id,
        team_tag: row.team_tag.as_deref().and_then(TeamTag::parse),
        agent_id: row.agent_id,
        agent_name,
    }
}

fn event_data(row: models::RoundEventRow) -> Option<RoundEventData> {
    let kind = match row.event_type.as_str() {
        "kill" => EventKind::Kill,
        "damage" => EventKind::Damage,
        _ => return None,
    };

    Some(RoundEventData {
        id: row.id,
        round_id: row.round_id,
        timestamp_ms: row.timestamp_ms,
        kind,
        actor_id: row.player_id,
        victim_id: row.victim_id,
        damage: row.damage_given,
        headshot: row.headshot,
        bodyshot: row.bodyshot,
        legshot: row.legshot,
        weapon: row.weapon,
        weapon_id: row.weapon_id,
        weapon_category: row.weapon_category,
        assistants: row.assistants.unwrap_or_default(),
    })
}

fn state_data(row: models::RoundPlayerStateRow) -> RoundPlayerStateData {
    RoundPlayerStateData {
        id: row.id,
        round_id: row.round_id,
        player_id: row.player_id,
        score: row.score,
    }
}

fn loadout_data(row: models::RoundPlayerLoadoutRow) -> RoundPlayerLoadoutData {
    RoundPlayerLoadoutData {
        round_player_id: row.round_player_id,
        loadout_id: row.loadout_id,
        value: row.value,
        remaining: row.remaining,
        spent: row.spent,
    }
}

fn composition_data(row: models::CompositionRow) -> CompositionData {
    CompositionData {
        match_id: row.match_id,
        team_tag: TeamTag::parse(&row.team_tag),
        agent_list_hash: row.agent_list_hash,
    }
}
