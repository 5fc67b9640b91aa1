use futures::FutureExt;

use crate::queue::JobHandler;
use crate::reader::{CanonicalReader, ReadError};
use crate::refresher::CaRefresher;
use crate::writer::{AggregateWriter, WriteError};

/// Queue message naming the match to aggregate. Unknown fields are ignored.
#[derive(Debug, serde::Deserialize)]
pub struct JobPayload {
    pub match_id: String,
}

#[derive(Debug)]
pub enum JobError {
    Payload(serde_json::Error),
    MatchId(uuid::Error),
    Read(ReadError),
    Write(WriteError),
}

impl From<serde_json::Error> for JobError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<uuid::Error> for JobError {
    fn from(value: uuid::Error) -> Self {
        Self::MatchId(value)
    }
}

impl From<ReadError> for JobError {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}

impl From<WriteError> for JobError {
    fn from(value: WriteError) -> Self {
        Self::Write(value)
    }
}

/// Runs the full lifecycle of one aggregate job.
pub struct AggregateProcessor {
    reader: CanonicalReader,
    writer: AggregateWriter,
    refresher: Option<CaRefresher>,
}

impl AggregateProcessor {
    pub fn new(
        reader: CanonicalReader,
        writer: AggregateWriter,
        refresher: Option<CaRefresher>,
    ) -> Self {
        Self {
            reader,
            writer,
            refresher,
        }
    }

    #[tracing::instrument(name = "aggregate_job", skip(self, payload))]
    pub async fn process(&self, payload: &[u8]) -> Result<(), JobError> {
        let start = std::time::Instant::now();

        let job: JobPayload = serde_json::from_slice(payload)?;
        let match_id = uuid::Uuid::parse_str(&job.match_id)?;

        tracing::info!("Processing aggregate job for match {}", match_id);

        // A match that never arrived is not an error, the job is acknowledged.
        if !self.reader.match_exists(match_id).await? {
            tracing::warn!("Match {} not found, skipping", match_id);
            return Ok(());
        }

        let snapshot = self.reader.load_snapshot(match_id).await?;
        tracing::info!(
            "Loaded canonical data: {} rounds, {} players, {} events",
            snapshot.rounds.len(),
            snapshot.match_players.len(),
            snapshot.round_events.len()
        );

        let set = aggregation::build_aggregates(&snapshot);
        tracing::info!(
            "Computed aggregates: {} clutches, {} round player rows, {} round team rows, {} match player rows, {} team rows, {} side rows, {} duels, {} weapon rows",
            set.clutches.len(),
            set.round_player_stats.len(),
            set.round_team_stats.len(),
            set.match_player_stats.len(),
            set.team_match_stats.len(),
            set.team_match_side_stats.len(),
            set.match_player_duels.len(),
            set.match_player_weapon_stats.len()
        );

        self.writer.write_all(&set).await?;

        // The aggregates are committed at this point; refresh failures only
        // warn.
        if let Some(refresher) = &self.refresher {
            if let Err(e) = refresher.refresh_for_match_date(snapshot.match_date).await {
                tracing::warn!(
                    "Continuous aggregate refresh failed for match {}: {:?}",
                    match_id,
                    e
                );
            }
        }

        tracing::info!(
            "Aggregate job for match {} completed in {:?}",
            match_id,
            start.elapsed()
        );
        Ok(())
    }
}

impl JobHandler for AggregateProcessor {
    fn handle<'a>(
        &'a self,
        payload: &'a [u8],
    ) -> futures::future::BoxFuture<'a, Result<(), String>> {
        async move { self.process(payload).await.map_err(|e| format!("{:?}", e)) }.boxed()
    }
}
