//! Text clean-up ahead of speech synthesis

pub mod sanitize;

pub use sanitize::{readable, Sanitizer};
