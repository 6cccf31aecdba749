//! TTS (Text-to-Speech) client.

use super::storage::ArtifactStore;
use super::types::{AudioFormat, AudioOutput, SynthesisRequest, TtsOptions, VoiceSettings, MODEL_ID};
use crate::{Error, ErrorContext, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const XI_API_KEY_HEADER: &str = "xi-api-key";
const APPLICATION_JSON: &str = "application/json";
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const DEFAULT_OUTPUT_DIR: &str = "tmp";

/// Client for text-to-speech conversion.
///
/// Each call is one independent request/response exchange with the provider;
/// the client holds no per-call state and is safe to share across tasks.
pub struct TtsClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
    store: ArtifactStore,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Synthesize `text` and return the audio payload without touching disk.
    ///
    /// Issues a single POST to the provider's text-to-speech endpoint and
    /// awaits the full binary response. A non-success status yields
    /// [`Error::Provider`] carrying the status code and the raw error body.
    pub async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<AudioOutput> {
        let voice = options.voice_id();
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.base_url.trim_end_matches('/'),
            voice
        );
        let body = serde_json::to_vec(&SynthesisRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        })?;

        debug!(voice, text_len = text.len(), "dispatching synthesis request");
        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .header(reqwest::header::ACCEPT, AudioFormat::Mp3.mime_type())
            .header(XI_API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            info!(
                http_status = status.as_u16(),
                voice,
                duration_ms = start.elapsed().as_millis() as u64,
                "synthesis request failed"
            );
            return Err(Error::provider(status.as_u16(), error_body));
        }

        let data = response.bytes().await?;
        debug!(
            bytes = data.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "synthesis response received"
        );

        Ok(AudioOutput {
            data,
            format: AudioFormat::Mp3,
        })
    }

    /// Convert `text` to speech and persist the audio under the output
    /// directory, returning the written file's path.
    ///
    /// The write happens only after the full response body is in memory, so
    /// no partial file is left behind on any failure path. Every invocation
    /// produces a new provider request and a new file.
    pub async fn convert(&self, text: &str, options: &TtsOptions) -> Result<PathBuf> {
        let audio = self.synthesize(text, options).await?;
        let path = self.store.persist(&audio.data).await?;
        info!(
            path = %path.display(),
            bytes = audio.data.len(),
            "audio artifact written"
        );
        Ok(path)
    }

    /// Output directory conversions are written into.
    pub fn output_dir(&self) -> &std::path::Path {
        self.store.dir()
    }
}

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct TtsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    output_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            output_dir: None,
            timeout: None,
        }
    }

    /// Set the provider API key explicitly. Without this, `build` falls back
    /// to the `EVENT_TOKEN` environment variable.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the provider base URL.
    ///
    /// This is primarily for testing with mock servers. In production the
    /// default ElevenLabs endpoint is used.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Directory audio artifacts are written into. Defaults to `tmp` under
    /// the process working directory, created on first write.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Bound the full request/response exchange. There is no timeout by
    /// default: a hung connection blocks the calling task until the
    /// underlying socket gives up.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("EVENT_TOKEN").ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required (set EVENT_TOKEN or use TtsClientBuilder::api_key)",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("builder"),
                )
            })?;

        let mut http_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http_client = http_builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(TtsClient {
            http_client,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            store: ArtifactStore::new(
                self.output_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            ),
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_api_key_builds_without_environment() {
        let client = TtsClient::builder().api_key("secret").build().unwrap();
        assert_eq!(client.api_key, "secret");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.output_dir(), std::path::Path::new("tmp"));
    }

    #[test]
    fn builder_applies_overrides() {
        let client = TtsClient::builder()
            .api_key("secret")
            .base_url("http://localhost:9999/")
            .output_dir("/var/audio")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/");
        assert_eq!(client.output_dir(), std::path::Path::new("/var/audio"));
    }
}
