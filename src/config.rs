use crate::definition::ApiMetadata;
use serde::Deserialize;
use tracing::{info, error};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name of the managed API, also the lookup key when updating
    #[serde(default = "default_api_name")]
    pub api_name: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    #[serde(default = "default_api_description")]
    pub api_description: String,

    /// Where the gateway proxies calls to
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,

    /// AWS region of the control plane; the SDK's default chain applies when unset
    pub aws_region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match envy::from_env::<Config>() {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(ConfigError::EnvError(e))
            }
        }
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn api_metadata(&self) -> ApiMetadata {
        ApiMetadata {
            name: self.api_name.clone(),
            version: self.api_version.clone(),
            description: self.api_description.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_name: default_api_name(),
            api_version: default_api_version(),
            api_description: default_api_description(),
            backend_base_url: default_backend_base_url(),
            aws_region: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_api_name() -> String {
    "sample-generated-api".to_string()
}

fn default_api_version() -> String {
    "1.0.0".to_string()
}

fn default_api_description() -> String {
    "Sample Generated API from Rust code".to_string()
}

fn default_backend_base_url() -> String {
    "http://myecshost-1234567890.us-east-1.elb.amazonaws.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_an_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8888");
        assert_eq!(config.api_name, "sample-generated-api");
        assert_eq!(config.aws_region, None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = vec![
            ("PORT".to_string(), "9000".to_string()),
            ("API_NAME".to_string(), "people".to_string()),
            ("BACKEND_BASE_URL".to_string(), "http://internal:8888".to_string()),
            ("AWS_REGION".to_string(), "eu-west-1".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_metadata().name, "people");
        assert_eq!(config.backend_base_url, "http://internal:8888");
        assert_eq!(config.aws_region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
