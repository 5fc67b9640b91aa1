use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel_async::RunQueryDsl;

/// Continuous aggregates derived from the tables this worker writes, in
/// dependency order.
const CONTINUOUS_AGGREGATES: &[&str] = &[
    "ca_player_daily_stats",
    "ca_player_side_daily_stats",
    "ca_player_map_stats",
    "ca_player_agent_stats",
    "ca_player_map_side_stats",
    "ca_player_economy_daily_stats",
    "ca_player_weapon_daily_stats",
    "ca_player_clutch_stats",
    "ca_player_situation_stats",
    "ca_player_pistol_stats",
    "ca_player_round_outcome_stats",
    "ca_composition_daily_stats",
    "ca_composition_map_daily_stats",
    "ca_composition_economy_stats",
    "ca_composition_weapon_stats",
    "ca_composition_clutch_stats",
    "ca_team_daily_stats",
    "ca_team_player_daily_stats",
    "ca_team_map_daily_stats",
    "ca_team_agent_daily_stats",
    "ca_team_outcome_daily_stats",
    "ca_team_player_duels_daily_stats",
];

#[derive(Debug)]
pub enum RefreshError {
    Pool(crate::PoolError),
    AllFailed,
}

impl From<crate::PoolError> for RefreshError {
    fn from(value: crate::PoolError) -> Self {
        Self::Pool(value)
    }
}

/// Best-effort refresh of the downstream continuous aggregates. The
/// aggregate write has already committed when this runs, so individual
/// refresh failures are only logged.
pub struct CaRefresher {
    pool: crate::DbPool,
}

impl CaRefresher {
    pub fn new(pool: crate::DbPool) -> Self {
        Self { pool }
    }

    /// Refreshes the window around one match date. One day of padding on
    /// each end keeps the containing time bucket fully covered.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_for_match_date(&self, match_date: NaiveDate) -> Result<(), RefreshError> {
        let window_start = day_start(match_date - chrono::Duration::days(1));
        let window_end = day_start(match_date + chrono::Duration::days(2));

        let mut conn = self.pool.get().await?;

        tracing::info!(
            "Refreshing {} continuous aggregates for window [{}, {})",
            CONTINUOUS_AGGREGATES.len(),
            window_start,
            window_end
        );
        let start = std::time::Instant::now();
        let mut refreshed = 0;

        for view in CONTINUOUS_AGGREGATES {
            let result = diesel::sql_query(
                "CALL refresh_continuous_aggregate($1::regclass, $2, $3)",
            )
            .bind::<diesel::sql_types::Text, _>(*view)
            .bind::<diesel::sql_types::Timestamptz, _>(window_start)
            .bind::<diesel::sql_types::Timestamptz, _>(window_end)
            .execute(&mut conn)
            .await;

            match result {
                Ok(_) => refreshed += 1,
                Err(e) => tracing::warn!("Refreshing {}: {:?}", view, e),
            }
        }

        tracing::info!(
            "Continuous aggregate refresh completed: {}/{} in {:?}",
            refreshed,
            CONTINUOUS_AGGREGATES.len(),
            start.elapsed()
        );

        if refreshed == 0 {
            return Err(RefreshError::AllFailed);
        }
        Ok(())
    }

    /// Unbounded refresh of every continuous aggregate, for backfills.
    pub async fn refresh_all(&self) -> Result<(), RefreshError> {
        let mut conn = self.pool.get().await?;

        tracing::info!(
            "Performing full refresh of {} continuous aggregates",
            CONTINUOUS_AGGREGATES.len()
        );
        let start = std::time::Instant::now();
        let mut refreshed = 0;

        for view in CONTINUOUS_AGGREGATES {
            let result =
                diesel::sql_query("CALL refresh_continuous_aggregate($1::regclass, NULL, NULL)")
                    .bind::<diesel::sql_types::Text, _>(*view)
                    .execute(&mut conn)
                    .await;

            match result {
                Ok(_) => refreshed += 1,
                Err(e) => tracing::warn!("Refreshing {}: {:?}", view, e),
            }
        }

        tracing::info!(
            "Full continuous aggregate refresh completed: {}/{} in {:?}",
            refreshed,
            CONTINUOUS_AGGREGATES.len(),
            start.elapsed()
        );

        if refreshed == 0 {
            return Err(RefreshError::AllFailed);
        }
        Ok(())
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
