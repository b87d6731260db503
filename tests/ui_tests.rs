//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests drive the translator view through the accessibility tree:
//! typing into the source field, clicking translate/swap/speak, and checking
//! the session state afterwards. The translation pipeline is replaced by
//! bare channels and the speech service by a recording fake, so no test
//! touches the network or audio hardware.

use crossbeam_channel::{bounded, Receiver, Sender};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use polyglot::speech::RecordingSpeech;
use polyglot::translate::{TranslateCommand, TranslateEvent};
use polyglot::ui::{AppState, LanguageBar, TextPanels, Theme, TranslateButton};

/// Application state wrapper for testing
struct TestApp {
    state: AppState,
    theme: Theme,
    speech: RecordingSpeech,
    cmd_rx: Receiver<TranslateCommand>,
    event_tx: Sender<TranslateEvent>,
}

impl TestApp {
    fn new() -> Self {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (event_tx, event_rx) = bounded(8);
        let speech = RecordingSpeech::new();
        let state = AppState::new(Box::new(speech.clone())).with_channels(cmd_tx, event_rx);

        Self {
            state,
            theme: Theme::light(),
            speech,
            cmd_rx,
            event_tx,
        }
    }

    fn with_source_text(mut self, text: &str) -> Self {
        self.state.source_text = text.to_string();
        self
    }
}

/// Render the translator view for testing
fn render_translator_ui(app: &mut TestApp, ui: &mut egui::Ui) {
    app.state.poll_events();

    LanguageBar::new(&mut app.state, &app.theme).show(ui);
    ui.separator();
    TextPanels::new(&mut app.state, &app.theme).show(ui);
    ui.separator();
    TranslateButton::new(&mut app.state, &app.theme).show(ui);
}

fn build_harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(700.0, 500.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_translator_ui(app, ui);
                });
            },
            app,
        )
}

/// Test that the source text area exists and is accessible
#[test]
fn test_source_text_area_exists() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _input = harness.get_by_label("Source text");
}

/// Test that the translated text area exists and is accessible
#[test]
fn test_translated_text_area_exists() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _output = harness.get_by_label("Translated text");
}

/// Test that the translate button exists and is accessible
#[test]
fn test_translate_button_exists() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _button = harness.get_by_label("Translate");
}

/// Test that typing text into the source area updates the session
#[test]
fn test_type_text_into_source() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Source text").focus();
    harness.run();

    harness.get_by_label("Source text").type_text("Hello, world!");
    harness.run();

    assert_eq!(harness.state().state.source_text, "Hello, world!");
}

/// Test that clicking translate issues exactly one request and shows loading
#[test]
fn test_translate_click_issues_request() {
    let mut harness = build_harness(TestApp::new().with_source_text("Hello"));
    harness.run();

    harness.get_by_label("Translate").click();
    harness.run();

    assert!(harness.state().state.is_loading);

    match harness.state().cmd_rx.try_recv().unwrap() {
        TranslateCommand::Translate { text, source, target, .. } => {
            assert_eq!(text, "Hello");
            assert_eq!(source, "fr");
            assert_eq!(target, "en");
        }
        other => panic!("Unexpected command: {:?}", other),
    }
    assert!(
        harness.state().cmd_rx.try_recv().is_err(),
        "Exactly one request per click"
    );
}

/// Test that the translate button does nothing while the input is empty
#[test]
fn test_translate_disabled_on_empty_input() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    harness.get_by_label("Translate").click();
    harness.run();

    assert!(!harness.state().state.is_loading);
    assert!(harness.state().cmd_rx.try_recv().is_err());
}

/// Test that a completed response lands in the translated text area
#[test]
fn test_response_updates_translation() {
    let mut harness = build_harness(TestApp::new().with_source_text("Hello"));
    harness.run();

    harness.get_by_label("Translate").click();
    harness.run();

    let request_id = match harness.state().cmd_rx.try_recv().unwrap() {
        TranslateCommand::Translate { request_id, .. } => request_id,
        other => panic!("Unexpected command: {:?}", other),
    };

    harness
        .state()
        .event_tx
        .send(TranslateEvent::Completed {
            translated: "Bonjour".to_string(),
            request_id,
        })
        .unwrap();
    harness.run();

    assert_eq!(harness.state().state.translated_text, "Bonjour");
    assert!(!harness.state().state.is_loading);
}

/// Test that the swap button exchanges languages and texts
#[test]
fn test_swap_button_exchanges_state() {
    let mut app = TestApp::new().with_source_text("Hello");
    app.state.translated_text = "Bonjour".to_string();
    app.state.source_lang = "en".to_string();
    app.state.target_lang = "fr".to_string();

    let mut harness = build_harness(app);
    harness.run();

    harness.get_by_label("Swap languages").click();
    harness.run();

    let state = &harness.state().state;
    assert_eq!(state.source_lang, "fr");
    assert_eq!(state.target_lang, "en");
    assert_eq!(state.source_text, "Bonjour");
    assert_eq!(state.translated_text, "Hello");
}

/// Test that the playback buttons hand text to the speech capability
#[test]
fn test_speak_buttons_reach_speech_capability() {
    let mut app = TestApp::new().with_source_text("Hello");
    app.state.translated_text = "Bonjour".to_string();
    app.state.source_lang = "en".to_string();
    app.state.target_lang = "fr".to_string();

    let mut harness = build_harness(app);
    harness.run();

    harness.get_by_label("Speak source text").click();
    harness.run();
    harness.get_by_label("Speak translation").click();
    harness.run();

    let spoken = harness.state().speech.utterances();
    assert_eq!(spoken.len(), 2);
    assert_eq!(spoken[0], ("Hello".to_string(), "en".to_string()));
    assert_eq!(spoken[1], ("Bonjour".to_string(), "fr".to_string()));
}

/// Test that both language selectors are present
#[test]
fn test_language_selectors_exist() {
    let mut harness = build_harness(TestApp::new());
    harness.run();

    let _source = harness.get_by_label("Source language");
    let _target = harness.get_by_label("Target language");
}
