//! Voice-note recordings.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

/// A voice-note recording attached to a message.
///
/// `url` is `None` while the recording is still being captured, or when it
/// failed to persist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Length in seconds.
    pub duration_secs: f64,

    /// Amplitude samples for waveform rendering, in capture order.
    pub waveform_samples: Vec<f32>,

    /// Location of the persisted audio file.
    pub url: Option<Url>,
}

// Floats are hashed by bit pattern so Recording can participate in the
// Message hash. Two recordings compare equal only when the bit patterns
// match, so this stays consistent with PartialEq.
impl Hash for Recording {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.duration_secs.to_bits().hash(state);
        for sample in &self.waveform_samples {
            sample.to_bits().hash(state);
        }
        self.url.hash(state);
    }
}
