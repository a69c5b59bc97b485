pub mod audio;
pub mod playback;
pub mod scheduler;

pub use audio::SargamSynth;
pub use playback::{DirectionPlayer, HighlightState, NullTrigger, PlaybackEvent, SoundTrigger};
pub use scheduler::Tempo;
