//! Minimal end-to-end conversion: resolve the credential from the
//! environment, synthesize one sentence, print the artifact path.
//!
//! Run with: EVENT_TOKEN=<api-key> cargo run --example tts

use eventlab::{TtsClient, TtsOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = TtsClient::builder().build()?;

    let path = client
        .convert(
            "Hello! This is a text-to-speech conversion.",
            &TtsOptions::default(),
        )
        .await?;

    println!("audio written to {}", path.display());
    Ok(())
}
