//! Amazon Bedrock demo binary.
//!
//! Lists the foundation models available to the account, then sends one
//! prompt to Claude v2 and prints the completion. Requires AWS credentials
//! in the environment and Bedrock model access granted in the AWS console.
//!
//! ```bash
//! export AWS_ACCESS_KEY_ID=...
//! export AWS_SECRET_ACCESS_KEY=...
//! cargo run
//! ```
//!
//! API failures are reported on the console but never abort the run; the
//! process exits with status 0 either way.

use bedrock_demo::{BedrockConfig, BedrockManager, init_telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_telemetry("bedrock-demo");

    println!("🚀 Amazon Bedrock Demo");
    println!("{}", "=".repeat(50));

    let config = match std::env::var("AWS_REGION") {
        Ok(region) => BedrockConfig::new(region),
        Err(_) => BedrockConfig::default(),
    };

    let manager = BedrockManager::new(config).await;
    manager.run().await;

    println!("\n✅ Demo finished!");
}
