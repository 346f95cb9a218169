//! Audio output using cpal

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host, SampleFormat, SampleRate, StreamConfig, SupportedStreamConfigRange};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use super::buffer::PlaybackBuffer;
use super::completion::{self, CompletionTrigger};
use super::decode::{self, AudioStream, StreamFormat};
use super::Player;
use crate::config::PlaybackConfig;
use crate::error::PlaybackError;

/// How long the feeder sleeps when the buffer is full
const FEED_INTERVAL: Duration = Duration::from_millis(20);

/// Plays decoded clips on a local output device, one at a time
pub struct SpeakerPlayer {
    config: PlaybackConfig,
    host: Host,
}

impl SpeakerPlayer {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            host: cpal::default_host(),
        }
    }

    /// Play `stream` to the end, blocking the calling thread
    pub fn play(&self, stream: &AudioStream) -> Result<(), PlaybackError> {
        let device = self.output_device()?;
        let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());

        let format = stream.format;
        let supported = device
            .supported_output_configs()
            .map_err(|e| PlaybackError::DeviceConfig(e.to_string()))?;
        let config = matching_config(supported, format).ok_or_else(|| {
            PlaybackError::DeviceConfig(format!(
                "{} cannot play {} Hz, {} channel f32 audio",
                device_name, format.sample_rate, format.channels
            ))
        })?;

        let buffer = PlaybackBuffer::new(
            format.sample_rate,
            format.channels,
            self.config.buffer_seconds,
        );
        debug!(
            "Opening {} at {} Hz, {} channels, buffer of {} samples",
            device_name,
            format.sample_rate,
            format.channels,
            buffer.capacity()
        );

        let (trigger, waiter) = completion::one_shot();
        let finished = Arc::new(AtomicBool::new(false));

        let source = buffer.clone_handle();
        let fed = finished.clone();
        let output = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    render(&source, &fed, &trigger, data);
                },
                move |err| {
                    error!("Audio output error: {}", err);
                },
                None,
            )
            .map_err(|e| PlaybackError::StreamBuild(e.to_string()))?;

        output
            .play()
            .map_err(|e| PlaybackError::StreamPlay(e.to_string()))?;

        info!(
            "Playing {:.2}s of audio on {}",
            stream.duration(),
            device_name
        );

        let mut remaining = &stream.samples[..];
        while !remaining.is_empty() {
            let written = buffer.write(remaining);
            remaining = &remaining[written..];
            if written == 0 {
                std::thread::sleep(FEED_INTERVAL);
            }
        }
        finished.store(true, Ordering::Release);

        if !waiter.wait() {
            return Err(PlaybackError::StreamPlay(
                "Output stream closed before playback completed".to_string(),
            ));
        }

        drop(output);
        debug!("Playback complete");
        Ok(())
    }

    fn output_device(&self) -> Result<Device, PlaybackError> {
        match self.config.device {
            Some(ref name) => self.find_device_by_name(name),
            None => self
                .host
                .default_output_device()
                .ok_or(PlaybackError::NoOutputDevice),
        }
    }

    fn find_device_by_name(&self, name: &str) -> Result<Device, PlaybackError> {
        let devices = self
            .host
            .output_devices()
            .map_err(|e| PlaybackError::DeviceConfig(e.to_string()))?;

        for device in devices {
            if let Ok(device_name) = device.name() {
                if device_name.contains(name) {
                    return Ok(device);
                }
            }
        }

        Err(PlaybackError::DeviceNotFound(name.to_string()))
    }
}

/// Output config for `format` if one of the device's ranges allows it
fn matching_config<I>(ranges: I, format: StreamFormat) -> Option<StreamConfig>
where
    I: IntoIterator<Item = SupportedStreamConfigRange>,
{
    let rate = SampleRate(format.sample_rate);
    for range in ranges {
        debug!(
            "Supported config: channels={}, sample_rate={:?}-{:?}, format={:?}",
            range.channels(),
            range.min_sample_rate(),
            range.max_sample_rate(),
            range.sample_format()
        );

        if range.channels() == format.channels
            && range.sample_format() == SampleFormat::F32
            && range.min_sample_rate() <= rate
            && rate <= range.max_sample_rate()
        {
            return Some(StreamConfig {
                channels: format.channels,
                sample_rate: rate,
                buffer_size: cpal::BufferSize::Default,
            });
        }
    }
    None
}

/// Fill one device period from `buffer`, padding with silence
///
/// Fires `trigger` once `finished` is set and the buffer has drained.
fn render(
    buffer: &PlaybackBuffer,
    finished: &AtomicBool,
    trigger: &CompletionTrigger,
    out: &mut [f32],
) {
    let copied = buffer.read_into(out);
    out[copied..].fill(0.0);

    if finished.load(Ordering::Acquire) && buffer.is_empty() {
        trigger.fire();
    }
}

impl Player for SpeakerPlayer {
    fn play_file(&self, path: &Path) -> Result<(), PlaybackError> {
        let stream = decode::open_file(path)?;
        self.play(&stream)
    }

    fn play_bytes(&self, bytes: &[u8]) -> Result<(), PlaybackError> {
        let stream = decode::decode_bytes(bytes)?;
        self.play(&stream)
    }
}
