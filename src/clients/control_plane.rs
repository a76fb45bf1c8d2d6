use crate::{definition::ApiSummary, error::PublishError};
use async_trait::async_trait;

/// The API-management service hosting the generated definition
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Every API the control plane knows about
    async fn list_apis(&self) -> Result<Vec<ApiSummary>, PublishError>;

    /// Create a new API from an OpenAPI body, returning its id
    async fn import_api(&self, body: &[u8]) -> Result<String, PublishError>;

    /// Merge an OpenAPI body into the existing API `api_id`
    async fn merge_api(&self, api_id: &str, body: &[u8]) -> Result<(), PublishError>;
}
