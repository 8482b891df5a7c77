//! Audio infrastructure module

mod pactl;

pub use pactl::PactlAudioSources;
