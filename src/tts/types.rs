//! TTS (Text-to-Speech) types.

use bytes::Bytes;
use serde::Serialize;

/// Voice identifier used when [`TtsOptions::voice`] is not set.
pub(crate) const DEFAULT_VOICE_ID: &str = "vwfl76D5KBjKuSGfTbLB";

/// Synthesis model requested from the provider. Fixed, not per-call.
pub(crate) const MODEL_ID: &str = "eleven_multilingual_v1";

/// Provider-side voice tuning. The values are fixed for every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 1.0,
            similarity_boost: 0.8,
        }
    }
}

/// JSON body of a synthesis request.
#[derive(Debug, Serialize)]
pub(crate) struct SynthesisRequest<'a> {
    pub text: &'a str,
    pub model_id: &'static str,
    pub voice_settings: VoiceSettings,
}

/// Audio payload returned by a successful synthesis.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
    pub format: AudioFormat,
}

/// Audio container format of a synthesis response.
///
/// The provider endpoint is always asked for MPEG audio (`accept:
/// audio/mpeg`), so this currently has a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct TtsOptions {
    /// Voice identifier; `None` selects the default voice.
    pub voice: Option<String>,
}

impl TtsOptions {
    pub fn with_voice(voice: impl Into<String>) -> Self {
        Self {
            voice: Some(voice.into()),
        }
    }

    pub(crate) fn voice_id(&self) -> &str {
        self.voice.as_deref().unwrap_or(DEFAULT_VOICE_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesis_request_serializes_to_provider_wire_format() {
        let request = SynthesisRequest {
            text: "hello",
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["model_id"], "eleven_multilingual_v1");
        assert_eq!(json["voice_settings"]["stability"], 1.0);
        assert_eq!(json["voice_settings"]["similarity_boost"], 0.8);
    }

    #[test]
    fn default_options_select_default_voice() {
        assert_eq!(TtsOptions::default().voice_id(), DEFAULT_VOICE_ID);
        assert_eq!(TtsOptions::with_voice("abc").voice_id(), "abc");
    }

    #[test]
    fn mp3_mime_type() {
        assert_eq!(AudioFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    }
}
