use crate::{clients::ControlPlane, definition::ApiSummary, error::PublishError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_apigateway::{
    config::Region,
    error::DisplayErrorContext,
    primitives::Blob,
    types::PutMode,
    Client,
};
use tracing::{debug, warn};

const PAGE_SIZE: i32 = 500;

/// Amazon API Gateway (REST APIs) as the control plane
#[derive(Debug, Clone)]
pub struct ApiGatewayControlPlane {
    client: Client,
}

impl ApiGatewayControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS credential and region chain.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl ControlPlane for ApiGatewayControlPlane {
    async fn list_apis(&self) -> Result<Vec<ApiSummary>, PublishError> {
        let mut apis = Vec::new();
        let mut position: Option<String> = None;

        loop {
            let page = self
                .client
                .get_rest_apis()
                .limit(PAGE_SIZE)
                .set_position(position.take())
                .send()
                .await
                .map_err(|e| PublishError::call_failed("GetRestApis", DisplayErrorContext(&e)))?;

            for api in page.items() {
                match (api.id(), api.name()) {
                    (Some(id), Some(name)) => apis.push(ApiSummary::new(id, name)),
                    _ => warn!("Skipping REST API without id or name: {:?}", api),
                }
            }

            match page.position() {
                Some(next) if !next.is_empty() => position = Some(next.to_string()),
                _ => break,
            }
        }

        debug!("Control plane lists {} REST APIs", apis.len());
        Ok(apis)
    }

    async fn import_api(&self, body: &[u8]) -> Result<String, PublishError> {
        let output = self
            .client
            .import_rest_api()
            .fail_on_warnings(false)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| PublishError::call_failed("ImportRestApi", DisplayErrorContext(&e)))?;

        output
            .id()
            .map(str::to_string)
            .ok_or_else(|| PublishError::call_failed("ImportRestApi", "response carried no API id"))
    }

    async fn merge_api(&self, api_id: &str, body: &[u8]) -> Result<(), PublishError> {
        self.client
            .put_rest_api()
            .rest_api_id(api_id)
            .mode(PutMode::Merge)
            .fail_on_warnings(false)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| PublishError::call_failed("PutRestApi", DisplayErrorContext(&e)))?;
        Ok(())
    }
}
