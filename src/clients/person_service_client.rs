use crate::{
    definition::API_KEY_HEADER,
    models::{CreatePersonRequest, CreatePersonResponse},
    routes::OPERATION_CREATE_PERSON,
};
use reqwest::Client;
use tracing::debug;

/// Calls the create-person endpoint, either directly or through the gateway
#[derive(Debug, Clone)]
pub struct PersonServiceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PersonServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    /// Send `x-api-key` with every call, as the gateway requires
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub async fn create_person(
        &self,
        request: &CreatePersonRequest,
    ) -> Result<CreatePersonResponse, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, OPERATION_CREATE_PERSON);
        let mut call = self.client.post(&url).json(request);
        if let Some(api_key) = &self.api_key {
            call = call.header(API_KEY_HEADER, api_key);
        }

        let response = call.send().await?.error_for_status()?;
        debug!("POST {} answered {}", url, response.status());
        response.json().await
    }
}
