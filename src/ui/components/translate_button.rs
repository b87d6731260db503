//! Translate button
//!
//! Disabled while a request is in flight or while the trimmed source text is
//! empty. The label switches to "Translating…" while loading; the flag is
//! cleared by whichever request settles next, so the label never sticks.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// The single action button of the translator view
pub struct TranslateButton<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> TranslateButton<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let enabled = self.state.can_translate();
        let label = if self.state.is_loading {
            "Translating…"
        } else {
            "Translate"
        };

        let button = egui::Button::new(
            RichText::new(label)
                .size(15.0)
                .strong()
                .color(self.theme.bg_primary),
        )
        .min_size(Vec2::new(160.0, 40.0))
        .rounding(self.theme.button_rounding)
        .fill(self.theme.primary);

        let response = ui.add_enabled(enabled, button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, "Translate")
        });

        if response.clicked() {
            self.state.translate();
        }
    }
}
