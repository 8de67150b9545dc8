//! Recording audio player

use soundeasy_core::{AudioError, AudioPlayer};

/// Audio player that remembers every request
///
/// Set `fail` to make every request return an error after being recorded.
#[derive(Debug, Default)]
pub struct MockAudio {
    /// `(item_id, audio_file)` in request order
    pub played: Vec<(String, String)>,
    pub fail: bool,
}

impl MockAudio {
    pub fn failing() -> Self {
        Self {
            played: Vec::new(),
            fail: true,
        }
    }

    /// Item ids in request order
    pub fn played_ids(&self) -> Vec<&str> {
        self.played.iter().map(|(id, _)| id.as_str()).collect()
    }
}

impl AudioPlayer for MockAudio {
    fn play(&mut self, item_id: &str, audio_file: &str) -> Result<(), AudioError> {
        self.played.push((item_id.to_string(), audio_file.to_string()));
        if self.fail {
            return Err(AudioError::new(item_id, "mock output device unavailable"));
        }
        Ok(())
    }
}
