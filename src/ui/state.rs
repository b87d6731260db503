//! Application state management
//!
//! This module provides the central state for the Polyglot UI: the current
//! translation session, the channel ends of the translation pipeline, and the
//! injected speech capability. All mutation happens synchronously on the UI
//! thread; the worker only talks back through events drained once per frame.

use crate::languages::{self, DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::speech::SpeechOutput;
use crate::translate::{TranslateCommand, TranslateEvent};
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};
use uuid::Uuid;

/// Which of the two language selectors is being set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    /// The language being translated from
    Source,
    /// The language being translated into
    Target,
}

/// Central application state
pub struct AppState {
    /// Text the user wants translated
    pub source_text: String,

    /// Last received translation result
    ///
    /// Overwritten wholesale on each successful response. Nothing ties it to
    /// the current `source_text`; editing after a translation leaves it stale
    /// until the next translate.
    pub translated_text: String,

    /// Source language code (always a catalog key)
    pub source_lang: String,

    /// Target language code (always a catalog key)
    pub target_lang: String,

    /// Whether a translation request is in flight
    ///
    /// A plain flag with no request identity: any settling request clears it,
    /// matching the provider call's unconditional cleanup.
    pub is_loading: bool,

    /// Last error message (diagnostic only, never rendered)
    pub last_error: Option<String>,

    /// Channel to send translate commands
    pub translate_command_tx: Option<Sender<TranslateCommand>>,

    /// Channel to receive translate events
    pub translate_event_rx: Option<Receiver<TranslateEvent>>,

    /// Injected speech-output capability
    speech: Box<dyn SpeechOutput>,
}

impl AppState {
    /// Create a new session with default languages and no text
    pub fn new(speech: Box<dyn SpeechOutput>) -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang: DEFAULT_SOURCE.to_string(),
            target_lang: DEFAULT_TARGET.to_string(),
            is_loading: false,
            last_error: None,
            translate_command_tx: None,
            translate_event_rx: None,
            speech,
        }
    }

    /// Wire up the translation pipeline channel ends
    pub fn with_channels(
        mut self,
        command_tx: Sender<TranslateCommand>,
        event_rx: Receiver<TranslateEvent>,
    ) -> Self {
        self.translate_command_tx = Some(command_tx);
        self.translate_event_rx = Some(event_rx);
        self
    }

    /// Set the source or target language
    ///
    /// Codes outside the catalog are ignored; the selectors only ever offer
    /// catalog entries, so this is belt-and-braces for programmatic callers.
    /// The existing translation is left untouched.
    pub fn select_language(&mut self, role: LanguageRole, code: &str) {
        if !languages::is_supported(code) {
            warn!("Ignoring unknown language code '{}'", code);
            return;
        }

        match role {
            LanguageRole::Source => self.source_lang = code.to_string(),
            LanguageRole::Target => self.target_lang = code.to_string(),
        }
    }

    /// Exchange the language pair and both texts in one transition
    ///
    /// Lets the user answer in the reverse direction without retyping. No
    /// request is issued; the swapped translation may be stale until the next
    /// translate.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }

    /// Whether the translate control should be enabled
    pub fn can_translate(&self) -> bool {
        !self.is_loading && !self.source_text.trim().is_empty()
    }

    /// Request a translation of the current source text
    ///
    /// No-op when the trimmed text is empty. Otherwise marks the session
    /// loading and sends exactly one command to the worker. Nothing stops a
    /// second call while the first is still in flight; both run and their
    /// responses apply in arrival order.
    pub fn translate(&mut self) {
        if self.source_text.trim().is_empty() {
            return;
        }

        if let Some(tx) = &self.translate_command_tx {
            let request_id = Uuid::new_v4();
            self.is_loading = true;

            debug!(
                "Issuing translation request {} ({}|{})",
                request_id, self.source_lang, self.target_lang
            );

            let send_result = tx.send(TranslateCommand::Translate {
                text: self.source_text.clone(),
                source: self.source_lang.clone(),
                target: self.target_lang.clone(),
                request_id,
            });

            // A dead worker settles nothing, so clear the flag here or the
            // translate button would stay stuck at "Translating…"
            if let Err(e) = send_result {
                warn!("Translation worker unavailable: {}", e);
                self.last_error = Some(e.to_string());
                self.is_loading = false;
            }
        }
    }

    /// Speak the source text in the source language
    pub fn speak_source(&mut self) {
        self.speech.speak(&self.source_text, &self.source_lang);
    }

    /// Speak the translated text in the target language
    pub fn speak_translated(&mut self) {
        self.speech.speak(&self.translated_text, &self.target_lang);
    }

    /// Drain pending worker events and apply them in arrival order
    ///
    /// Called once per frame. A response from a superseded request still
    /// overwrites the translation; last settled wins.
    pub fn poll_events(&mut self) {
        let events: Vec<TranslateEvent> = match &self.translate_event_rx {
            Some(rx) => {
                let mut collected = Vec::new();
                while let Ok(event) = rx.try_recv() {
                    collected.push(event);
                }
                collected
            }
            None => Vec::new(),
        };

        for event in events {
            match event {
                TranslateEvent::Completed {
                    translated,
                    request_id,
                } => {
                    debug!("Translation request {} completed", request_id);
                    self.translated_text = translated;
                    self.is_loading = false;
                }
                TranslateEvent::Failed { error, request_id } => {
                    warn!("Translation request {} failed: {}", request_id, error);
                    self.last_error = Some(error);
                    self.is_loading = false;
                }
                TranslateEvent::Shutdown => {
                    debug!("Translation pipeline shut down");
                    self.is_loading = false;
                }
            }
        }
    }
}
