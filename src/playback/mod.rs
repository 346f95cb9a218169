//! Audio playback: decoding, buffering and device output

pub mod buffer;
pub mod completion;
pub mod decode;
pub mod player;

use std::path::Path;

pub use buffer::PlaybackBuffer;
pub use decode::{AudioStream, Container, StreamFormat};
pub use player::SpeakerPlayer;

use crate::error::PlaybackError;

/// Blocking playback of audio files and in-memory clips
pub trait Player {
    /// Play a WAV or MP3 file to the end
    fn play_file(&self, path: &Path) -> Result<(), PlaybackError>;

    /// Play an in-memory WAV clip to the end
    fn play_bytes(&self, bytes: &[u8]) -> Result<(), PlaybackError>;
}
