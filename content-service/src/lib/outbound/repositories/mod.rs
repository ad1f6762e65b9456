use std::future::Future;
use std::time::Duration;

pub mod memory;
pub mod post;
pub mod user;

pub use memory::InMemoryStore;
pub use post::PostgresPostRepository;
pub use user::PostgresUserRepository;

/// Failure of a single record store round trip.
#[derive(Debug)]
pub(crate) enum QueryError {
    TimedOut(&'static str),
    Database(sqlx::Error),
}

/// Run one query under the per-request store timeout.
///
/// A timeout is surfaced, never retried: the write may or may not have happened.
pub(crate) async fn timed<F, T>(
    limit: Duration,
    operation: &'static str,
    query: F,
) -> Result<T, QueryError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, query).await {
        Ok(result) => result.map_err(QueryError::Database),
        Err(_) => {
            tracing::error!(
                operation,
                timeout_ms = limit.as_millis() as u64,
                "Record store query timed out"
            );
            Err(QueryError::TimedOut(operation))
        }
    }
}
