//! Bedrock demo driver.
//!
//! Pairs one control-plane client (model catalog) with one runtime client
//! (inference) and walks through the demo flow: list the foundation models
//! available to the account, then send a single prompt to Claude v2.
//! Credentials are loaded automatically from the environment via
//! `aws-config` (environment variables, shared config, IMDS, etc.).

use crate::config::BedrockConfig;
use crate::convert::{CLAUDE_MODEL_ID, ClaudeRequest, ClaudeResponse};
use crate::error::{Result, classify_sdk_error};
use crate::models::{ModelSummary, SEPARATOR};
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{debug, error, info, instrument, warn};

/// Prompt used when a caller has none of their own.
pub const DEFAULT_PROMPT: &str = "Hello, how are you?";

/// Prompt sent to Claude during the end-to-end demo run.
pub const DEMO_PROMPT: &str = "What can I do with Rust?";

/// Outcome of one end-to-end demo run.
///
/// `models` is empty when the listing step failed, and `completion` is
/// `None` when the invocation step failed or was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoReport {
    pub models: Vec<ModelSummary>,
    pub completion: Option<String>,
}

/// High-level driver for the Bedrock demo.
///
/// Wraps one control-plane client (model catalog) and one runtime client
/// (inference) for a single region. AWS credentials are loaded from the
/// standard credential chain (environment variables, `~/.aws/credentials`,
/// IMDS, etc.).
///
/// Every public operation reports failure through its return value (an
/// empty list or `None`) after logging it, so a demo run never aborts
/// halfway because one call was denied.
///
/// # Example
///
/// ```rust,ignore
/// use bedrock_demo::{BedrockConfig, BedrockManager};
///
/// let manager = BedrockManager::new(BedrockConfig::default()).await;
/// let report = manager.run().await;
/// println!("{} models, completion: {:?}", report.models.len(), report.completion);
/// ```
pub struct BedrockManager {
    control_plane: aws_sdk_bedrock::Client,
    runtime: aws_sdk_bedrockruntime::Client,
    region: String,
}

impl BedrockManager {
    /// Create a new manager from the given configuration.
    ///
    /// Loads AWS credentials from the standard credential chain
    /// (environment variables, shared config, IMDS, etc.) and constructs
    /// both SDK clients from the shared configuration.
    pub async fn new(config: BedrockConfig) -> Self {
        let region = config.region.clone();

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()));

        if let Some(endpoint_url) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint_url);
        }

        let sdk_config = sdk_config_loader.load().await;
        let control_plane = aws_sdk_bedrock::Client::new(&sdk_config);
        let runtime = aws_sdk_bedrockruntime::Client::new(&sdk_config);

        info!("bedrock clients created for region={region}");

        Self { control_plane, runtime, region }
    }

    /// Build a manager from already-constructed SDK clients.
    ///
    /// Useful when the clients carry custom middleware or point at a
    /// non-default endpoint, for example a local HTTP server in tests.
    pub fn from_clients(
        control_plane: aws_sdk_bedrock::Client,
        runtime: aws_sdk_bedrockruntime::Client,
        region: impl Into<String>,
    ) -> Self {
        Self { control_plane, runtime, region: region.into() }
    }

    /// List the foundation models available to the account and print each
    /// one to the console.
    ///
    /// Returns an empty list when the call fails. An authorization failure
    /// additionally prints a hint about requesting model access in the AWS
    /// console; any other failure is logged with its full error chain.
    #[instrument(skip_all, fields(region = %self.region))]
    pub async fn list_foundation_models(&self) -> Vec<ModelSummary> {
        match self.try_list_models().await {
            Ok(models) => {
                println!("\n📋 {} foundation models available:", models.len());
                println!("{SEPARATOR}");

                for model in &models {
                    println!("{model}");
                }

                models
            }
            Err(err) if err.is_access_denied() => {
                error!("bedrock access denied, model access may need to be granted");
                println!("\n❌ Bedrock access denied!");
                println!(
                    "💡 Fix: AWS Console > Amazon Bedrock > Model access > Request model access"
                );
                Vec::new()
            }
            Err(err) => {
                error!("failed to list foundation models: {err}");
                Vec::new()
            }
        }
    }

    async fn try_list_models(&self) -> Result<Vec<ModelSummary>> {
        let response = self
            .control_plane
            .list_foundation_models()
            .send()
            .await
            .map_err(|err| classify_sdk_error("ListFoundationModels", err))?;

        Ok(response.model_summaries().iter().map(ModelSummary::from).collect())
    }

    /// Send one prompt to Claude v2 and print the completion.
    ///
    /// The prompt is wrapped in the conversational template the model
    /// expects and sent with fixed sampling parameters. Returns the trimmed
    /// completion, or `None` when the call fails. An authorization failure
    /// additionally prints a hint naming the model to request access for.
    #[instrument(skip_all, fields(model_id = CLAUDE_MODEL_ID, region = %self.region))]
    pub async fn invoke_claude(&self, prompt: &str) -> Option<String> {
        println!("\n🤖 Talking to Claude:");
        println!("📝 Prompt: {prompt}");
        println!("⏳ Waiting for response...");

        match self.try_invoke_claude(prompt).await {
            Ok(completion) => {
                println!("💬 Claude: {completion}");
                Some(completion)
            }
            Err(err) if err.is_access_denied() => {
                error!("access to the claude model was denied");
                println!("\n❌ Claude model access denied!");
                println!("💡 Fix: AWS Console > Amazon Bedrock > Model access > {CLAUDE_MODEL_ID}");
                None
            }
            Err(err) => {
                error!("claude invocation failed: {err}");
                None
            }
        }
    }

    async fn try_invoke_claude(&self, prompt: &str) -> Result<String> {
        let body = serde_json::to_vec(&ClaudeRequest::new(prompt))?;

        debug!("invoking model={CLAUDE_MODEL_ID}");
        let response = self
            .runtime
            .invoke_model()
            .model_id(CLAUDE_MODEL_ID)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|err| classify_sdk_error("InvokeModel", err))?;

        let decoded: ClaudeResponse = serde_json::from_slice(response.body().as_ref())?;
        debug!(stop_reason = ?decoded.stop_reason, "claude invocation complete");

        Ok(decoded.completion.trim().to_string())
    }

    /// Run the full demo flow.
    ///
    /// Lists the foundation models first, and only talks to Claude when at
    /// least one model came back. An empty listing means the account has no
    /// model access yet, so the run stops after the connectivity check
    /// instead of failing a second call.
    #[instrument(skip_all)]
    pub async fn run(&self) -> DemoReport {
        let models = self.list_foundation_models().await;

        let completion = if models.is_empty() {
            warn!("no models listed, skipping claude invocation");
            println!("\n⚠️  No model access, only API connectivity was verified.");
            None
        } else {
            self.invoke_claude(DEMO_PROMPT).await
        };

        DemoReport { models, completion }
    }
}
