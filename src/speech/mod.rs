//! Speech synthesis

pub mod google;
pub mod request;

pub use google::GoogleTts;
pub use request::{AudioEncoding, SynthesisRequest};

use crate::error::SpeechError;

/// Turns text into encoded audio bytes
pub trait Synthesizer {
    /// Returns WAV-wrapped audio; never plays it
    fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}
