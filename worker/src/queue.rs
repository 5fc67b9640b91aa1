use std::sync::Arc;

use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use tokio_util::sync::CancellationToken;

const RETRY_SUFFIX: &str = ":retry";
const DLQ_SUFFIX: &str = ":dlq";
const RETRY_COUNTER_SUFFIX: &str = ":retry-count:";
const MAX_RETRY_ATTEMPTS: i64 = 3;
const POP_BLOCK_SECS: f64 = 5.0;
const RETRY_COUNTER_TTL_SECS: i64 = 24 * 60 * 60;

/// Processes one job payload. Any error sends the payload through the
/// retry/DLQ path.
pub trait JobHandler: Send + Sync {
    fn handle<'a>(
        &'a self,
        payload: &'a [u8],
    ) -> futures::future::BoxFuture<'a, Result<(), String>>;
}

/// Redis-list backed job queue with retry and dead-letter bookkeeping.
pub struct JobQueue {
    conn: redis::aio::MultiplexedConnection,
    queue: String,
}

impl JobQueue {
    pub async fn connect(url: &str, queue: String) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(Self { conn, queue })
    }

    /// Pops jobs with BRPOP (retry list first) and feeds them to a fixed pool
    /// of workers over a bounded channel. Pops stall while the channel is
    /// full. Cancellation stops the pop loop, lets in-flight jobs finish and
    /// joins the workers.
    pub async fn consume(
        &self,
        token: CancellationToken,
        worker_count: usize,
        buffer_size: usize,
        handler: Arc<dyn JobHandler>,
    ) -> Result<(), redis::RedisError> {
        let retry_key = format!("{}{}", self.queue, RETRY_SUFFIX);
        let dlq_key = format!("{}{}", self.queue, DLQ_SUFFIX);

        let (tx, rx) = tokio::sync::mpsc::channel::<Vec<u8>>(buffer_size);
        let rx = Arc::new(tokio::sync::Mutex::new(rx));

        let mut workers = tokio::task::JoinSet::new();
        for worker_id in 0..worker_count {
            let rx = rx.clone();
            let handler = handler.clone();
            let mut conn = self.conn.clone();
            let queue = self.queue.clone();
            let retry_key = retry_key.clone();
            let dlq_key = dlq_key.clone();

            workers.spawn(async move {
                loop {
                    let payload = {
                        let mut rx = rx.lock().await;
                        rx.recv().await
                    };
                    let payload = match payload {
                        Some(p) => p,
                        None => break,
                    };

                    match handler.handle(&payload).await {
                        Ok(()) => {
                            let _ = clear_retry_counter(&mut conn, &queue, &payload).await;
                        }
                        Err(e) => {
                            tracing::warn!(
                                "Worker {}: handler error, scheduling retry: {}",
                                worker_id,
                                e
                            );
                            if let Err(e) =
                                schedule_retry(&mut conn, &queue, &retry_key, &dlq_key, &payload)
                                    .await
                            {
                                tracing::error!(
                                    "Worker {}: retry handling failed: {:?}",
                                    worker_id,
                                    e
                                );
                            }
                        }
                    }
                }
                tracing::info!("Worker {} exiting", worker_id);
            });
        }
        tracing::info!("Started {} workers for queue {}", worker_count, self.queue);

        let mut conn = self.conn.clone();
        let keys = [retry_key, self.queue.clone()];

        loop {
            let popped: Option<(String, Vec<u8>)> = tokio::select! {
                _ = token.cancelled() => break,
                result = conn.brpop(&keys[..], POP_BLOCK_SECS) => match result {
                    Ok(popped) => popped,
                    Err(e) => {
                        tracing::warn!("Queue pop failed: {:?}", e);
                        continue;
                    }
                },
            };

            let (_, payload) = match popped {
                Some(p) => p,
                None => continue,
            };

            tokio::select! {
                _ = token.cancelled() => break,
                sent = tx.send(payload) => {
                    if sent.is_err() {
                        break;
                    }
                }
            }
        }

        // Closing the channel drains the workers.
        drop(tx);
        while workers.join_next().await.is_some() {}

        Ok(())
    }
}

async fn schedule_retry(
    conn: &mut redis::aio::MultiplexedConnection,
    queue: &str,
    retry_key: &str,
    dlq_key: &str,
    payload: &[u8],
) -> Result<(), redis::RedisError> {
    let counter = retry_counter_key(queue, payload);
    let attempt: i64 = conn.incr(&counter, 1).await?;
    let _: bool = conn.expire(&counter, RETRY_COUNTER_TTL_SECS).await?;

    if attempt > MAX_RETRY_ATTEMPTS {
        tracing::warn!("Moving job to DLQ after {} attempts", attempt - 1);
        let _: i64 = conn.lpush(dlq_key, payload).await?;
        let _: i64 = conn.del(&counter).await?;
        return Ok(());
    }

    let _: i64 = conn.lpush(retry_key, payload).await?;
    Ok(())
}

async fn clear_retry_counter(
    conn: &mut redis::aio::MultiplexedConnection,
    queue: &str,
    payload: &[u8],
) -> Result<(), redis::RedisError> {
    let counter = retry_counter_key(queue, payload);
    let _: i64 = conn.del(&counter).await?;
    Ok(())
}

fn retry_counter_key(queue: &str, payload: &[u8]) -> String {
    let digest = Sha256::digest(payload);
    format!("{}{}{:x}", queue, RETRY_COUNTER_SUFFIX, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_counter_key_hashes_the_payload() {
        let key = retry_counter_key("aggregate_matches", b"{\"match_id\":\"x\"}");

        assert!(key.starts_with("aggregate_matches:retry-count:"));
        // SHA-256 in lowercase hex.
        let digest = key.rsplit(':').next().unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identical_payloads_share_a_counter() {
        let a = retry_counter_key("q", b"payload");
        let b = retry_counter_key("q", b"payload");
        let c = retry_counter_key("q", b"other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
