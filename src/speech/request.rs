//! Wire types of the `text:synthesize` call

use serde::{Deserialize, Serialize};

use crate::config::SpeechConfig;

/// Audio encoding requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    /// 16-bit signed little-endian PCM wrapped in a WAV header
    Linear16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelection,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub speaking_rate: f64,
}

impl SynthesisRequest {
    /// Request for already-sanitized `text`, always LINEAR16
    pub fn new(text: impl Into<String>, config: &SpeechConfig) -> Self {
        Self {
            input: SynthesisInput { text: text.into() },
            voice: VoiceSelection {
                language_code: config.language_code.clone(),
                name: config.voice_name.clone(),
            },
            audio_config: AudioConfig {
                audio_encoding: AudioEncoding::Linear16,
                speaking_rate: config.speaking_rate,
            },
        }
    }
}

/// Successful response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResponse {
    /// Base64 audio
    pub audio_content: String,
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
