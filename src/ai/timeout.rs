//! Timeout helpers for provider calls
//!
//! ```ignore
//! let response = with_timeout(
//!     Duration::from_secs(45),
//!     provider.complete(&request),
//!     "reliability completion",
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{Result, ScopeError};

/// Execute an async operation with a timeout
///
/// Returns `ScopeError::Timeout` if the operation doesn't complete within the
/// specified duration. The inner future is dropped on expiry.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(ScopeError::timeout(operation_name, timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_success() {
        let result = with_timeout(
            Duration::from_secs(1),
            async { Ok::<_, ScopeError>(42) },
            "test operation",
        )
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result = with_timeout(
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, ScopeError>(42)
            },
            "slow operation",
        )
        .await;
        assert!(matches!(result.unwrap_err(), ScopeError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let result: Result<u8> = with_timeout(
            Duration::from_secs(1),
            async { Err(ScopeError::LlmApi("boom".to_string())) },
            "failing operation",
        )
        .await;
        assert!(matches!(result.unwrap_err(), ScopeError::LlmApi(_)));
    }
}
