//! Configuration structures for shipspeak

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub credentials: CredentialsConfig,
    pub speech: SpeechConfig,
    pub text: TextConfig,
    pub playback: PlaybackConfig,
    pub alert: AlertConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, crate::error::ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            crate::error::ConfigError::FileNotFound(path.display().to_string())
        })?;

        toml::from_str(&content)
            .map_err(|e| crate::error::ConfigError::Parse(e.to_string()))
    }
}

/// Where the encrypted credential blob comes from and where it is unpacked
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Base64 ciphertext given inline
    pub ciphertext: Option<String>,
    /// File holding the base64 ciphertext (used when `ciphertext` is unset)
    pub ciphertext_file: Option<PathBuf>,
    /// Destination of the decrypted document (None = `<temp-dir>/gcp_auth.json`)
    pub path: Option<PathBuf>,
}

impl CredentialsConfig {
    /// Destination of the decrypted credentials
    pub fn output_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(crate::credentials::default_credentials_path)
    }
}

/// Speech synthesis service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Synthesis endpoint
    pub endpoint: String,
    /// BCP-47 language code
    pub language_code: String,
    /// Voice name within the language
    pub voice_name: String,
    /// Speaking rate (1.0 = normal speed)
    pub speaking_rate: f64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://texttospeech.googleapis.com/v1/text:synthesize".to_string(),
            language_code: "en-US".to_string(),
            voice_name: "en-US-Standard-C".to_string(),
            speaking_rate: 1.0,
            timeout_secs: 30,
        }
    }
}

/// Text clean-up configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Literal replacements for tokens the voice mispronounces, applied in order
    pub corrections: Vec<Correction>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            corrections: vec![Correction::new("CMACGM", "CMA CGM")],
        }
    }
}

/// A single literal find-and-replace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub from: String,
    pub to: String,
}

impl Correction {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Audio output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Audio output device name (None = default device)
    pub device: Option<String>,
    /// Seconds of audio held by the playback buffer
    pub buffer_seconds: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            device: None,
            buffer_seconds: 3.0,
        }
    }
}

/// Alert configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Text spoken once at startup
    pub greeting: String,
    /// Alert tone per ship category
    pub tones: ToneConfig,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            greeting: "hello".to_string(),
            tones: ToneConfig::default(),
        }
    }
}

/// Tone file for each ship category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub cargo: PathBuf,
    pub tanker: PathBuf,
    pub passenger: PathBuf,
    pub fishing: PathBuf,
    pub tug: PathBuf,
    pub sailing: PathBuf,
    pub military: PathBuf,
    pub generic: PathBuf,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            cargo: PathBuf::from("sounds/cargo.wav"),
            tanker: PathBuf::from("sounds/tanker.wav"),
            passenger: PathBuf::from("sounds/passenger.wav"),
            fishing: PathBuf::from("sounds/fishing.wav"),
            tug: PathBuf::from("sounds/tug.wav"),
            sailing: PathBuf::from("sounds/sailing.wav"),
            military: PathBuf::from("sounds/military.wav"),
            generic: PathBuf::from("sounds/alert.mp3"),
        }
    }
}
