//! Model summaries returned by the listing step.
//!
//! Provides [`ModelSummary`], a plain snapshot of the control-plane
//! `FoundationModelSummary` holding only the fields the demo displays.

use aws_sdk_bedrock::types::FoundationModelSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal rule used between listed models, matching the banner width.
pub(crate) const SEPARATOR: &str =
    "------------------------------------------------------------";

/// A foundation model as reported by `ListFoundationModels`.
///
/// Built fresh on every listing call and used only for console output;
/// nothing is persisted. Optional fields the API did not fill in render as
/// empty strings.
///
/// # Example
///
/// ```rust,ignore
/// use bedrock_demo::{BedrockConfig, BedrockManager};
///
/// let manager = BedrockManager::new(BedrockConfig::default()).await;
/// for model in manager.list_foundation_models().await {
///     println!("{}: {}", model.model_id, model.provider_name);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Unique model identifier (e.g., "anthropic.claude-v2").
    pub model_id: String,
    /// Organization providing the model (e.g., "Anthropic").
    pub provider_name: String,
    /// Human-readable name for the model.
    pub model_name: String,
    /// Input data types the model accepts (e.g., "TEXT", "IMAGE").
    pub input_modalities: Vec<String>,
    /// Output data types the model produces.
    pub output_modalities: Vec<String>,
}

impl From<&FoundationModelSummary> for ModelSummary {
    fn from(summary: &FoundationModelSummary) -> Self {
        Self {
            model_id: summary.model_id().to_string(),
            provider_name: summary.provider_name().unwrap_or_default().to_string(),
            model_name: summary.model_name().unwrap_or_default().to_string(),
            input_modalities: summary
                .input_modalities()
                .iter()
                .map(|modality| modality.as_str().to_string())
                .collect(),
            output_modalities: summary
                .output_modalities()
                .iter()
                .map(|modality| modality.as_str().to_string())
                .collect(),
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🤖 Model ID: {}", self.model_id)?;
        writeln!(f, "   Provider: {}", self.provider_name)?;
        writeln!(f, "   Name: {}", self.model_name)?;
        writeln!(f, "   Input: {}", self.input_modalities.join(", "))?;
        writeln!(f, "   Output: {}", self.output_modalities.join(", "))?;
        write!(f, "{SEPARATOR}")
    }
}
