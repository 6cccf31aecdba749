//! Text-to-speech conversion: synthesize text through the provider API and
//! persist the returned audio to local disk.

mod client;
mod storage;
mod types;

pub use client::{TtsClient, TtsClientBuilder};
pub use storage::ArtifactStore;
pub use types::{AudioFormat, AudioOutput, TtsOptions, VoiceSettings};
