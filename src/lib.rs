//! Spoken Ship Alerts
//!
//! Turns ship sightings into audible notifications: an alert tone chosen by
//! ship category, then a one-sentence spoken summary synthesized by Google
//! Cloud Text-to-Speech and played on a local output device.
//!
//! # Architecture
//!
//! - `text`: clean-up of record text before synthesis
//! - `credentials`: unsealing the speech service credentials
//! - `speech`: the synthesis client
//! - `playback`: WAV/MP3 decoding and blocking device playback
//! - `alert`: tone selection, summary phrasing and orchestration
//! - `config`: Configuration structures
//! - `error`: Error types
//!
//! # Example
//!
//! ```no_run
//! use shipspeak::credentials::{self, Provisioner};
//! use shipspeak::{Alerter, Config, GoogleTts, Sanitizer, ShipRecord, SpeakerPlayer};
//!
//! let config = Config::default();
//!
//! // Unseal the credentials once
//! let provisioner = Provisioner::new(config.credentials.output_path());
//! let source = credentials::secret::from_config(&config.credentials).unwrap();
//! let creds = provisioner.provision(source.as_ref(), "passphrase").unwrap();
//!
//! let tts = GoogleTts::new(
//!     config.speech.clone(),
//!     Sanitizer::new(config.text.corrections.clone()),
//!     Some(creds),
//! )
//! .unwrap();
//! let player = SpeakerPlayer::new(config.playback.clone());
//! let alerter = Alerter::new(tts, player, config.alert.tones.clone());
//!
//! let record = ShipRecord {
//!     mmsi: 366999712,
//!     name: "EVER GIVEN".to_string(),
//!     ship_type: "Cargo".to_string(),
//!     course: 271.4,
//!     speed: 11.3,
//!     sightings: 0,
//! };
//! alerter.alert(&record).unwrap();
//! ```

pub mod alert;
pub mod config;
pub mod credentials;
pub mod error;
pub mod playback;
pub mod speech;
pub mod text;

// Re-exports for convenience
pub use alert::{Alerter, ShipRecord, ToneCategory};
pub use config::{
    AlertConfig, Config, Correction, CredentialsConfig, PlaybackConfig, SpeechConfig, TextConfig,
    ToneConfig,
};
pub use credentials::{Credentials, Provisioner};
pub use error::{AlertError, ConfigError, CredentialError, PlaybackError, Result, SpeechError};
pub use playback::{AudioStream, Player, SpeakerPlayer, StreamFormat};
pub use speech::{GoogleTts, Synthesizer};
pub use text::{readable, Sanitizer};
