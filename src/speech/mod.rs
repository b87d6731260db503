//! Speech output capability
//!
//! The system speech-synthesis service sits behind a narrow `SpeechOutput`
//! trait so the UI never talks to audio hardware directly and tests can
//! substitute a fake.

#[cfg(feature = "speech")]
pub mod synthesizer;

#[cfg(feature = "speech")]
pub use synthesizer::SystemSpeech;

use parking_lot::Mutex;
use std::sync::Arc;

/// Narrow capability for text-to-speech playback
///
/// `speak` enqueues an utterance with the speech service and returns
/// immediately; playback ordering and interruption are the service's concern.
/// Implementations must be safe to call with empty text.
pub trait SpeechOutput {
    /// Enqueue `text` for playback, tagged with a language code
    fn speak(&mut self, text: &str, lang: &str);
}

/// Speech output that discards every utterance
///
/// Used when no speech service is available on the host.
pub struct NullSpeech;

impl SpeechOutput for NullSpeech {
    fn speak(&mut self, _text: &str, _lang: &str) {}
}

/// Speech output that records utterances instead of playing them
///
/// Test double: keeps every `(text, lang)` pair in a shared list that the
/// test inspects after driving the UI state.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    utterances: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything spoken so far
    pub fn utterances(&self) -> Vec<(String, String)> {
        self.utterances.lock().clone()
    }
}

impl SpeechOutput for RecordingSpeech {
    fn speak(&mut self, text: &str, lang: &str) {
        self.utterances
            .lock()
            .push((text.to_string(), lang.to_string()));
    }
}
