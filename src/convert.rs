//! Wire shapes for the fixed Claude invocation.
//!
//! `anthropic.claude-v2` uses Bedrock's raw `InvokeModel` API with the
//! Anthropic text-completions body: a `Human:`/`Assistant:` wrapped prompt
//! plus sampling parameters in, a `completion` string out. The model
//! identifier and sampling parameters are demo constants, not policy.

use serde::{Deserialize, Serialize};

pub(crate) const CLAUDE_MODEL_ID: &str = "anthropic.claude-v2";

pub(crate) const MAX_TOKENS_TO_SAMPLE: u32 = 300;
pub(crate) const TEMPERATURE: f64 = 0.7;
pub(crate) const TOP_P: f64 = 1.0;

/// Wrap a free-text prompt in the conversational template Claude v2 expects.
pub(crate) fn wrap_prompt(prompt: &str) -> String {
    format!("\n\nHuman: {prompt}\n\nAssistant:")
}

/// Request body for `InvokeModel` against the Claude text-completions format.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClaudeRequest {
    pub(crate) prompt: String,
    pub(crate) max_tokens_to_sample: u32,
    pub(crate) temperature: f64,
    pub(crate) top_p: f64,
}

impl ClaudeRequest {
    /// Build the fixed demo request for the given prompt.
    pub(crate) fn new(prompt: &str) -> Self {
        Self {
            prompt: wrap_prompt(prompt),
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// Response body returned by Claude v2. A missing `completion` decodes as
/// the empty string so a malformed-but-parseable body degrades gracefully.
#[derive(Debug, Deserialize)]
pub(crate) struct ClaudeResponse {
    #[serde(default)]
    pub(crate) completion: String,
    pub(crate) stop_reason: Option<String>,
}
