pub mod config;
pub mod models;
pub mod processor;
pub mod queue;
pub mod reader;
pub mod refresher;
pub mod schema;
pub mod writer;

pub type DbPool = diesel_async::pooled_connection::deadpool::Pool<diesel_async::AsyncPgConnection>;
pub type PoolError = diesel_async::pooled_connection::deadpool::PoolError;

/// One shared connection pool, sized at least to the worker count so every
/// worker can hold a connection during its write transaction.
pub fn db_pool(
    url: &str,
    size: usize,
) -> Result<DbPool, diesel_async::pooled_connection::deadpool::BuildError> {
    let manager = diesel_async::pooled_connection::AsyncDieselConnectionManager::<
        diesel_async::AsyncPgConnection,
    >::new(url);

    diesel_async::pooled_connection::deadpool::Pool::builder(manager)
        .max_size(size)
        .build()
}
