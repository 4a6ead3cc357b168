use crate::domain::record::Record;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A request record bound to the remote operation that consumes it.
pub trait Operation: Record {
    const OPERATION_NAME: &'static str;

    type Output: Record;
}

/// Carries a marshaled request to the service and returns the marshaled response.
///
/// Signing, retries, endpoint resolution and pagination all live behind this
/// trait; the record layer never performs I/O itself.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self,
        operation: &'static str,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value>;
}
