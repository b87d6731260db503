//! Source and translation text panels
//!
//! Two side-by-side text areas: the editable source text and the read-only
//! translation, each with a playback button that hands the text to the
//! speech capability.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// The two text areas of the translator view
pub struct TextPanels<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> TextPanels<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let state = self.state;

        ui.columns(2, |columns| {
            Self::panel_frame(theme).show(&mut columns[0], |ui| {
                let editor = egui::TextEdit::multiline(&mut state.source_text)
                    .hint_text("Enter text to translate...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Body);

                let response = ui.add(editor);
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Source text")
                });

                if Self::speak_button(ui, theme, "Speak source text").clicked() {
                    state.speak_source();
                }
            });

            Self::panel_frame(theme).show(&mut columns[1], |ui| {
                // Read-only buffer; edits from the UI are impossible
                let mut translated = state.translated_text.as_str();
                let viewer = egui::TextEdit::multiline(&mut translated)
                    .hint_text("Translation will appear here...")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Body);

                let response = ui.add(viewer);
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, false, "Translated text")
                });

                if Self::speak_button(ui, theme, "Speak translation").clicked() {
                    state.speak_translated();
                }
            });
        });
    }

    fn panel_frame(theme: &Theme) -> egui::Frame {
        egui::Frame::none()
            .fill(theme.bg_secondary)
            .rounding(theme.card_rounding)
            .inner_margin(theme.spacing_sm)
    }

    fn speak_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> egui::Response {
        let button = egui::Button::new(
            RichText::new("🔊").size(16.0).color(theme.text_secondary),
        )
        .min_size(Vec2::splat(32.0))
        .rounding(theme.button_rounding);

        let response = ui
            .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(button)
            })
            .inner;

        let label = label.to_string();
        response.widget_info(move || {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &label)
        });

        response
    }
}
