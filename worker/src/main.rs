use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(clap::Parser)]
struct CliArgs {
    /// Run a full refresh of every continuous aggregate, then exit.
    #[clap(long = "refresh-all", default_value_t = false)]
    refresh_all: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    use clap::Parser;

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("worker") || meta.target().contains("aggregation")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    let args = CliArgs::parse();

    let cfg = match worker::config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {:?}", e);
            std::process::exit(1);
        }
    };

    let pool = match worker::db_pool(&cfg.db_url, cfg.worker_count) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Configuring store pool: {:?}", e);
            std::process::exit(1);
        }
    };

    if args.refresh_all {
        let refresher = worker::refresher::CaRefresher::new(pool);
        if let Err(e) = refresher.refresh_all().await {
            tracing::error!("Full refresh failed: {:?}", e);
            std::process::exit(1);
        }
        return;
    }

    let queue = match worker::queue::JobQueue::connect(&cfg.redis_url, cfg.redis_queue.clone()).await
    {
        Ok(q) => q,
        Err(e) => {
            tracing::error!("Connecting to queue: {:?}", e);
            std::process::exit(1);
        }
    };

    let processor = std::sync::Arc::new(worker::processor::AggregateProcessor::new(
        worker::reader::CanonicalReader::new(pool.clone()),
        worker::writer::AggregateWriter::new(pool.clone()),
        Some(worker::refresher::CaRefresher::new(pool)),
    ));

    let token = tokio_util::sync::CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            let mut terminate =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()).unwrap();
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
            tracing::info!("Shutdown signal received");
            token.cancel();
        });
    }

    tracing::info!(
        "Consuming queue {} with {} workers",
        cfg.redis_queue,
        cfg.worker_count
    );
    if let Err(e) = queue
        .consume(token, cfg.worker_count, cfg.job_buffer_size, processor)
        .await
    {
        tracing::error!("Queue consumption ended: {:?}", e);
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}
