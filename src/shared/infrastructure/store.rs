// Errors shared by every store port, and the deadline applied to store calls.
//
// Boundaries
// - Adapters translate their backend failures into StoreError.
// - Handlers decide whether a StoreError fails the command (primary write) or is
//   only recorded (secondary bookkeeping).

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("table `{0}` is not provisioned")]
    MissingTable(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("row not found: {0}")]
    NotFound(String),
}

/// Run a store call under a deadline. Expiry counts as the store being unavailable.
pub async fn within<T, F>(limit: Duration, operation: &str, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_ms = limit.as_millis() as u64, "store call timed out");
            Err(StoreError::Unavailable(format!(
                "{operation} timed out after {}ms",
                limit.as_millis()
            )))
        }
    }
}
