//! Container decoding into interleaved f32 samples

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use rodio::Source;
use tracing::debug;

use crate::error::PlaybackError;

/// Sample rate and channel layout of a decoded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// A fully decoded clip
#[derive(Debug, Clone)]
pub struct AudioStream {
    /// Interleaved samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    pub format: StreamFormat,
}

impl AudioStream {
    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        let frames = self.samples.len() / self.format.channels.max(1) as usize;
        frames as f32 / self.format.sample_rate as f32
    }
}

/// Supported containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Wav,
    Mp3,
}

impl Container {
    /// `.wav` (any case) is WAV; everything else is tried as MP3
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("wav") => Container::Wav,
            _ => Container::Mp3,
        }
    }
}

/// Open and decode an audio file
pub fn open_file(path: &Path) -> Result<AudioStream, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let container = Container::from_path(path);
    debug!("Decoding {} as {:?}", path.display(), container);

    match container {
        Container::Wav => decode_wav(BufReader::new(file)),
        Container::Mp3 => decode_mp3(BufReader::new(file)),
    }
}

/// Decode an in-memory WAV clip, as returned by the speech service
pub fn decode_bytes(bytes: &[u8]) -> Result<AudioStream, PlaybackError> {
    decode_wav(Cursor::new(bytes))
}

/// Decode a WAV container
pub fn decode_wav<R: Read>(reader: R) -> Result<AudioStream, PlaybackError> {
    let reader = hound::WavReader::new(reader)
        .map_err(|e| PlaybackError::Decode(format!("WAV: {}", e)))?;

    let spec = reader.spec();
    debug!(
        "WAV format: {} channels, {} Hz, {} bits",
        spec.channels, spec.sample_rate, spec.bits_per_sample
    );

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| PlaybackError::Decode(format!("WAV: {}", e)))?,
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_val))
                .collect::<Result<_, _>>()
                .map_err(|e| PlaybackError::Decode(format!("WAV: {}", e)))?
        }
    };

    finish(
        samples,
        StreamFormat {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        },
    )
}

/// Decode an MP3 stream
pub fn decode_mp3<R>(reader: R) -> Result<AudioStream, PlaybackError>
where
    R: Read + Seek + Send + Sync + 'static,
{
    let decoder = rodio::Decoder::new_mp3(reader)
        .map_err(|e| PlaybackError::Decode(format!("MP3: {}", e)))?;

    let format = StreamFormat {
        sample_rate: decoder.sample_rate(),
        channels: decoder.channels(),
    };
    let samples: Vec<f32> = decoder.map(|s| s as f32 / 32768.0).collect();

    finish(samples, format)
}

fn finish(samples: Vec<f32>, format: StreamFormat) -> Result<AudioStream, PlaybackError> {
    if samples.is_empty() {
        return Err(PlaybackError::Decode("Stream contains no samples".to_string()));
    }
    if format.sample_rate == 0 || format.channels == 0 {
        return Err(PlaybackError::Decode(format!(
            "Unusable format: {} channels @ {} Hz",
            format.channels, format.sample_rate
        )));
    }
    Ok(AudioStream { samples, format })
}
