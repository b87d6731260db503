//! Polyglot - Desktop translator with speech playback
//!
//! Main entry point for the Polyglot application.

use eframe::egui;
use polyglot::speech::{NullSpeech, SpeechOutput};
use polyglot::translate::{ProviderConfig, TranslatePipeline};
use polyglot::ui::PolyglotApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Connect to the platform speech service, or stay silent if unavailable
#[cfg(feature = "speech")]
fn speech_output() -> Box<dyn SpeechOutput> {
    match polyglot::speech::SystemSpeech::new() {
        Ok(speech) => Box::new(speech),
        Err(e) => {
            tracing::warn!("Speech synthesis unavailable: {}", e);
            Box::new(NullSpeech)
        }
    }
}

#[cfg(not(feature = "speech"))]
fn speech_output() -> Box<dyn SpeechOutput> {
    tracing::warn!("Built without the 'speech' feature; playback is disabled");
    Box::new(NullSpeech)
}

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polyglot=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Polyglot translator");

    // Translation worker runs for the lifetime of the process
    let pipeline = TranslatePipeline::new(ProviderConfig::default());
    let command_tx = pipeline.command_sender();
    let event_rx = pipeline.event_receiver();
    match pipeline.start_worker() {
        Ok(_handle) => {}
        Err(e) => tracing::error!("Failed to start translation worker: {}", e),
    }

    let speech = speech_output();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([560.0, 440.0])
            .with_title("Polyglot"),
        ..Default::default()
    };

    eframe::run_native(
        "Polyglot",
        options,
        Box::new(move |cc| Ok(Box::new(PolyglotApp::new(cc, command_tx, event_rx, speech)))),
    )
}
