//! Ring buffer between the feeding thread and the device callback

use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe bounded ring buffer of interleaved samples
///
/// Unlike a capture buffer it never overwrites: `write` takes only what
/// fits, so the feeder waits for the device instead of dropping audio.
pub struct PlaybackBuffer {
    inner: Arc<Mutex<RingBuffer>>,
}

struct RingBuffer {
    data: Vec<f32>,
    write_pos: usize,
    read_pos: usize,
    len: usize,
}

impl PlaybackBuffer {
    /// Buffer holding `duration_secs` of audio in the given layout
    pub fn new(sample_rate: u32, channels: u16, duration_secs: f32) -> Self {
        let capacity = (sample_rate as f32 * duration_secs) as usize * channels as usize;
        Self::with_capacity(capacity)
    }

    /// Buffer holding exactly `capacity` samples (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RingBuffer {
                data: vec![0.0; capacity.max(1)],
                write_pos: 0,
                read_pos: 0,
                len: 0,
            })),
        }
    }

    /// Write as many samples as fit, returning how many were taken
    pub fn write(&self, samples: &[f32]) -> usize {
        let mut buffer = self.inner.lock();
        let capacity = buffer.data.len();
        let to_write = samples.len().min(capacity - buffer.len);

        for &sample in &samples[..to_write] {
            let write_pos = buffer.write_pos;
            buffer.data[write_pos] = sample;
            buffer.write_pos = (write_pos + 1) % capacity;
        }
        buffer.len += to_write;

        to_write
    }

    /// Fill `out` from the buffer, returning how many samples were copied
    pub fn read_into(&self, out: &mut [f32]) -> usize {
        let mut buffer = self.inner.lock();
        let capacity = buffer.data.len();
        let to_read = out.len().min(buffer.len);

        for slot in &mut out[..to_read] {
            *slot = buffer.data[buffer.read_pos];
            buffer.read_pos = (buffer.read_pos + 1) % capacity;
        }
        buffer.len -= to_read;

        to_read
    }

    /// Number of samples currently queued
    pub fn len(&self) -> usize {
        self.inner.lock().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of samples the buffer can hold
    pub fn capacity(&self) -> usize {
        self.inner.lock().data.len()
    }

    /// Clone the buffer handle
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
