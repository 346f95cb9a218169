//! Custom error types for shipspeak

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `Alerter::alert` and `Alerter::say`
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}

/// Credential provisioning errors
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to decrypt credentials: {0}")]
    Decrypt(String),

    #[error("Failed to load encrypted secret: {0}")]
    Secret(String),

    #[error("Failed to write credentials file: {0}")]
    Io(#[from] std::io::Error),
}

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Credentials have not been provisioned")]
    NotProvisioned,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Speech service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Invalid response from speech service: {0}")]
    InvalidResponse(String),
}

/// Audio playback errors
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Could not open audio file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode audio: {0}")]
    Decode(String),

    #[error("No audio output device available")]
    NoOutputDevice,

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to get device configuration: {0}")]
    DeviceConfig(String),

    #[error("Failed to build audio stream: {0}")]
    StreamBuild(String),

    #[error("Stream playback error: {0}")]
    StreamPlay(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, AlertError>;
