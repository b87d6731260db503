//! Main application struct and eframe integration
//!
//! This module contains the main PolyglotApp that implements eframe::App.

use crate::speech::SpeechOutput;
use crate::translate::{TranslateCommand, TranslateEvent};
use crate::ui::components::{LanguageBar, TextPanels, TranslateButton};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crossbeam_channel::{Receiver, Sender};
use egui::{self, CentralPanel, RichText, TopBottomPanel};

/// Main Polyglot application
pub struct PolyglotApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Whether the app has been initialized
    initialized: bool,
}

impl PolyglotApp {
    /// Create a new Polyglot application
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        command_tx: Sender<TranslateCommand>,
        event_rx: Receiver<TranslateEvent>,
        speech: Box<dyn SpeechOutput>,
    ) -> Self {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        Self {
            state: AppState::new(speech).with_channels(command_tx, event_rx),
            theme,
            initialized: false,
        }
    }

    /// One-time setup on the first frame
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        tracing::info!("Polyglot UI initialized");
        self.initialized = true;
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Polyglot")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.label(
                        RichText::new("Universal Translator")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
    }

    /// Show the footer credit line
    fn show_footer(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Powered by MyMemory Translation API")
                            .size(12.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
    }

    /// Show the main translator card
    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                LanguageBar::new(&mut self.state, &self.theme).show(ui);
                ui.add_space(self.theme.spacing);

                TextPanels::new(&mut self.state, &self.theme).show(ui);
                ui.add_space(self.theme.spacing);

                ui.vertical_centered(|ui| {
                    TranslateButton::new(&mut self.state, &self.theme).show(ui);
                });
            });
    }
}

impl eframe::App for PolyglotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        // Apply worker events before rendering
        self.state.poll_events();

        self.show_header(ctx);
        self.show_footer(ctx);
        self.show_content(ctx);

        // Keep draining events while a request is in flight
        if self.state.is_loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(tx) = &self.state.translate_command_tx {
            let _ = tx.send(TranslateCommand::Shutdown);
        }
        tracing::info!("Polyglot shutting down");
    }
}
