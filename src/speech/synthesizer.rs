//! System speech synthesizer
//!
//! Wraps the platform speech-synthesis service (Speech Dispatcher on Linux,
//! AVSpeechSynthesizer on macOS, WinRT on Windows) via the `tts` crate.
//! Utterances are enqueued fire-and-forget; the service owns playback order
//! and interruption. Synthesis failures are logged and swallowed, they never
//! reach the UI state.

use crate::speech::SpeechOutput;
use crate::{PolyglotError, Result};
use tracing::{debug, info, warn};
use tts::Tts;

/// Speech output backed by the operating system's speech service
pub struct SystemSpeech {
    tts: Tts,
}

impl SystemSpeech {
    /// Connect to the platform speech service
    pub fn new() -> Result<Self> {
        let tts = Tts::default().map_err(|e| PolyglotError::SpeechError(e.to_string()))?;

        info!("System speech synthesizer initialized");

        Ok(Self { tts })
    }

    /// Switch to an installed voice matching the language code, if any
    ///
    /// Voice availability depends entirely on what the host has installed;
    /// when nothing matches, the current voice keeps speaking.
    fn select_voice(&mut self, lang: &str) {
        let voices = match self.tts.voices() {
            Ok(voices) => voices,
            Err(e) => {
                debug!("Could not list voices: {}", e);
                return;
            }
        };

        match voices
            .iter()
            .find(|v| v.language().primary_language().eq_ignore_ascii_case(lang))
        {
            Some(voice) => {
                if let Err(e) = self.tts.set_voice(voice) {
                    warn!("Failed to set voice for '{}': {}", lang, e);
                }
            }
            None => debug!("No installed voice for language '{}'", lang),
        }
    }
}

impl SpeechOutput for SystemSpeech {
    fn speak(&mut self, text: &str, lang: &str) {
        self.select_voice(lang);

        // interrupt=false: concurrent utterances queue per the service's rules
        if let Err(e) = self.tts.speak(text, false) {
            warn!("Speech output failed: {}", e);
        }
    }
}
