//! # eventlab
//!
//! Text-to-speech conversion client for the ElevenLabs API.
//!
//! ## Overview
//!
//! This library converts a text string into a synthesized speech audio file:
//! one authenticated POST to the provider's text-to-speech endpoint, one
//! awaited binary response, one file written to a local output directory.
//! There is no retry policy, no caching, and no streaming pipeline; each
//! call is an independent request/response exchange.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eventlab::{TtsClient, TtsOptions};
//!
//! #[tokio::main]
//! async fn main() -> eventlab::Result<()> {
//!     // Credential resolves from the builder, falling back to EVENT_TOKEN.
//!     let client = TtsClient::builder().build()?;
//!
//!     let path = client.convert("Hello, world!", &TtsOptions::default()).await?;
//!     println!("audio written to {}", path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Synthesis client, request/response types, artifact storage |
//! | [`error`] | Unified error type and structured error context |

pub mod tts;

// Re-export main types for convenience
pub use tts::{
    AudioFormat, AudioOutput, TtsClient, TtsClientBuilder, TtsOptions, VoiceSettings,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
