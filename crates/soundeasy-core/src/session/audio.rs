//! Audio collaborator
//!
//! Playback itself lives outside this crate. The session only asks for a
//! recording to be played and never lets a failure reach scheduling state.

/// Playback failure reported by an [`AudioPlayer`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Audio playback failed for {item_id}: {reason}")]
pub struct AudioError {
    pub item_id: String,
    pub reason: String,
}

impl AudioError {
    pub fn new(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }
}

/// Something that can play an item's recording
pub trait AudioPlayer {
    fn play(&mut self, item_id: &str, audio_file: &str) -> Result<(), AudioError>;
}

/// Player that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play(&mut self, _item_id: &str, _audio_file: &str) -> Result<(), AudioError> {
        Ok(())
    }
}

impl<T: AudioPlayer + ?Sized> AudioPlayer for &mut T {
    fn play(&mut self, item_id: &str, audio_file: &str) -> Result<(), AudioError> {
        (**self).play(item_id, audio_file)
    }
}
