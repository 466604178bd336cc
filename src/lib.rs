//! # bedrock-demo
//!
//! A small end-to-end demo of Amazon Bedrock: list the foundation models
//! available to an AWS account, then send one prompt to Anthropic's Claude v2
//! and print the completion.
//!
//! ## Overview
//!
//! - [`BedrockManager`] - pairs the control-plane and runtime clients and
//!   drives the demo flow
//! - [`BedrockConfig`] - region and optional endpoint override
//! - [`ModelSummary`] - console-friendly view of one catalog entry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bedrock_demo::{BedrockConfig, BedrockManager, init_telemetry};
//!
//! init_telemetry("bedrock-demo");
//!
//! let manager = BedrockManager::new(BedrockConfig::default()).await;
//! let report = manager.run().await;
//! ```
//!
//! ## Authentication
//!
//! Bedrock uses AWS IAM credentials loaded from the standard credential chain
//! (environment variables, `~/.aws/credentials`, IMDS, etc.). No API key is
//! needed, but model access must be granted in the AWS console before either
//! step succeeds.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

mod convert;

pub use client::{BedrockManager, DEFAULT_PROMPT, DEMO_PROMPT, DemoReport};
pub use config::BedrockConfig;
pub use error::{DemoError, Result};
pub use models::ModelSummary;
pub use telemetry::init_telemetry;
