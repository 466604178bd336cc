//! Configuration for the Bedrock demo.

use serde::{Deserialize, Serialize};

/// Connection settings for the demo.
///
/// Bedrock uses AWS IAM/STS authentication rather than API keys.
/// Credentials are loaded from the environment via the AWS SDK
/// (environment variables, `~/.aws/credentials`, IMDS, etc.), so the only
/// knobs here are the region and an optional endpoint override. The model
/// invoked by the demo is a fixed constant, not configuration.
///
/// # Example
///
/// ```rust,ignore
/// use bedrock_demo::BedrockConfig;
///
/// // Default: us-east-1
/// let config = BedrockConfig::default();
///
/// // Custom region
/// let config = BedrockConfig::new("eu-west-1");
///
/// // With a custom endpoint (e.g., a VPC endpoint)
/// let config = BedrockConfig::new("us-west-2")
///     .with_endpoint_url("https://vpce-xxx.bedrock.us-west-2.vpce.amazonaws.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    /// AWS region for the Bedrock endpoints (e.g., `"us-east-1"`).
    pub region: String,
    /// Optional custom endpoint URL applied to both SDK clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self { region: "us-east-1".to_string(), endpoint_url: None }
    }
}

impl BedrockConfig {
    /// Create a config for the given region.
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), ..Default::default() }
    }

    /// Set a custom endpoint URL (e.g., a VPC endpoint).
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let config = BedrockConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_new_overrides_region() {
        let config = BedrockConfig::new("eu-central-1");
        assert_eq!(config.region, "eu-central-1");
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_with_endpoint_url() {
        let config = BedrockConfig::default().with_endpoint_url("http://localhost:4566");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }
}
