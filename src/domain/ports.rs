use crate::domain::model::TransportResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Issues a GET and resolves once the request reaches a terminal state.
///
/// `Err` is reserved for transport-level failures (DNS, refused connection,
/// unreadable body). Any completed response, whatever its status, is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<TransportResponse>;
}
