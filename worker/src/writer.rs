use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use aggregation::rows::AggregateSet;

use crate::models;

/// Fixed advisory-lock key shared with the canonical ingest writer. Both
/// writers touch referentially related tables, so they serialize on this one
/// key instead of deadlocking on foreign-key parent rows.
pub const WRITER_LOCK_KEY: i64 = 0x7374617469717721;

#[derive(Debug)]
pub enum WriteError {
    Pool(crate::PoolError),
    Query(diesel::result::Error),
}

impl From<crate::PoolError> for WriteError {
    fn from(value: crate::PoolError) -> Self {
        Self::Pool(value)
    }
}

impl From<diesel::result::Error> for WriteError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Query(value)
    }
}

/// Writes one match's aggregate output atomically.
pub struct AggregateWriter {
    pool: crate::DbPool,
}

impl AggregateWriter {
    pub fn new(pool: crate::DbPool) -> Self {
        Self { pool }
    }

    /// Replaces the match's previous output inside a single transaction:
    /// advisory lock, purge in reverse FK order, insert in FK order.
    #[tracing::instrument(skip(self, set), fields(match_id = %set.match_id))]
    pub async fn write_all(&self, set: &AggregateSet) -> Result<(), WriteError> {
        let match_id = set.match_id;

        let clutches: Vec<models::Clutch> = set.clutches.iter().map(Into::into).collect();
        let round_player_stats: Vec<models::RoundPlayerStats> =
            set.round_player_stats.iter().map(Into::into).collect();
        let round_team_stats: Vec<models::RoundTeamStats> =
            set.round_team_stats.iter().map(Into::into).collect();
        let match_player_stats: Vec<models::MatchPlayerStats> =
            set.match_player_stats.iter().map(Into::into).collect();
        let team_match_stats: Vec<models::TeamMatchStats> =
            set.team_match_stats.iter().map(Into::into).collect();
        let team_match_side_stats: Vec<models::TeamMatchSideStats> =
            set.team_match_side_stats.iter().map(Into::into).collect();
        let match_player_duels: Vec<models::MatchPlayerDuel> =
            set.match_player_duels.iter().map(Into::into).collect();
        let match_player_weapon_stats: Vec<models::MatchPlayerWeaponStats> =
            set.match_player_weapon_stats.iter().map(Into::into).collect();
        let player_clutch_stats: Vec<models::PlayerClutchStats> =
            set.player_clutch_stats.iter().map(Into::into).collect();
        let composition_weapon_stats: Vec<models::CompositionWeaponStats> =
            set.composition_weapon_stats.iter().map(Into::into).collect();
        let composition_clutch_stats: Vec<models::CompositionClutchStats> =
            set.composition_clutch_stats.iter().map(Into::into).collect();

        let mut conn = self.pool.get().await?;

        conn.build_transaction()
            .run::<_, WriteError, _>(|conn| {
                Box::pin(async move {
                    diesel::sql_query("SELECT pg_advisory_xact_lock($1)")
                        .bind::<diesel::sql_types::BigInt, _>(WRITER_LOCK_KEY)
                        .execute(conn)
                        .await?;

                    purge_match(conn, match_id).await?;

                    if !clutches.is_empty() {
                        diesel::dsl::insert_into(crate::schema::clutches::dsl::clutches)
                            .values(&clutches)
                            .execute(conn)
                            .await?;
                    }
                    if !round_player_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::round_player_stats::dsl::round_player_stats,
                        )
                        .values(&round_player_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !round_team_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::round_team_stats::dsl::round_team_stats,
                        )
                        .values(&round_team_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !match_player_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::match_player_stats::dsl::match_player_stats,
                        )
                        .values(&match_player_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !team_match_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::team_match_stats::dsl::team_match_stats,
                        )
                        .values(&team_match_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !team_match_side_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::team_match_side_stats::dsl::team_match_side_stats,
                        )
                        .values(&team_match_side_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !match_player_duels.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::match_player_duels::dsl::match_player_duels,
                        )
                        .values(&match_player_duels)
                        .execute(conn)
                        .await?;
                    }
                    if !match_player_weapon_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::match_player_weapon_stats::dsl::match_player_weapon_stats,
                        )
                        .values(&match_player_weapon_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !player_clutch_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::player_clutch_stats::dsl::player_clutch_stats,
                        )
                        .values(&player_clutch_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !composition_weapon_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::composition_weapon_stats::dsl::composition_weapon_stats,
                        )
                        .values(&composition_weapon_stats)
                        .execute(conn)
                        .await?;
                    }
                    if !composition_clutch_stats.is_empty() {
                        diesel::dsl::insert_into(
                            crate::schema::composition_clutch_stats::dsl::composition_clutch_stats,
                        )
                        .values(&composition_clutch_stats)
                        .execute(conn)
                        .await?;
                    }

                    Ok(())
                })
            })
            .await
    }
}

/// Deletes the match's previous output, children before parents.
async fn purge_match(
    conn: &mut AsyncPgConnection,
    match_id: Uuid,
) -> Result<(), diesel::result::Error> {
    diesel::delete(
        crate::schema::composition_clutch_stats::dsl::composition_clutch_stats
            .filter(crate::schema::composition_clutch_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::composition_weapon_stats::dsl::composition_weapon_stats
            .filter(crate::schema::composition_weapon_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::player_clutch_stats::dsl::player_clutch_stats
            .filter(crate::schema::player_clutch_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::match_player_weapon_stats::dsl::match_player_weapon_stats
            .filter(crate::schema::match_player_weapon_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::match_player_duels::dsl::match_player_duels
            .filter(crate::schema::match_player_duels::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::team_match_side_stats::dsl::team_match_side_stats
            .filter(crate::schema::team_match_side_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::team_match_stats::dsl::team_match_stats
            .filter(crate::schema::team_match_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::match_player_stats::dsl::match_player_stats
            .filter(crate::schema::match_player_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    diesel::delete(
        crate::schema::round_team_stats::dsl::round_team_stats
            .filter(crate::schema::round_team_stats::dsl::match_id.eq(match_id)),
    )
    .execute(conn)
    .await?;

    // Round-grain tables only reference rounds, so the match scope comes from
    // a join against the rounds table.
    diesel::sql_query(
        "DELETE FROM round_player_stats rps USING rounds r \
         WHERE rps.round_id = r.id AND r.match_id = $1",
    )
    .bind::<diesel::sql_types::Uuid, _>(match_id)
    .execute(conn)
    .await?;

    diesel::sql_query(
        "DELETE FROM clutches c USING rounds r \
         WHERE c.round_id = r.id AND r.match_id = $1",
    )
    .bind::<diesel::sql_types::Uuid, _>(match_id)
    .execute(conn)
    .await?;

    Ok(())
}
