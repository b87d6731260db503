//! Language selection bar
//!
//! Two catalog-driven selectors with a swap control between them. The
//! selectors only ever offer catalog entries, which is what keeps the
//! session's language codes valid.

use crate::languages;
use crate::ui::state::{AppState, LanguageRole};
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};

/// Language bar component: source selector, swap button, target selector
pub struct LanguageBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> LanguageBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.show_selector(ui, LanguageRole::Source);

            ui.add_space(self.theme.spacing_sm);
            self.show_swap_button(ui);
            ui.add_space(self.theme.spacing_sm);

            self.show_selector(ui, LanguageRole::Target);
        });
    }

    fn show_selector(&mut self, ui: &mut egui::Ui, role: LanguageRole) {
        let (id, label, selected) = match role {
            LanguageRole::Source => (
                "source_lang",
                "Source language",
                self.state.source_lang.clone(),
            ),
            LanguageRole::Target => (
                "target_lang",
                "Target language",
                self.state.target_lang.clone(),
            ),
        };
        let selected_name = languages::display_name(&selected).unwrap_or("Unknown");

        let response = egui::ComboBox::from_id_salt(id)
            .selected_text(selected_name)
            .width(140.0)
            .show_ui(ui, |ui| {
                for lang in &languages::CATALOG {
                    if ui
                        .selectable_label(selected == lang.code, lang.name)
                        .clicked()
                    {
                        self.state.select_language(role, lang.code);
                    }
                }
            })
            .response;

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::ComboBox, true, label)
        });
    }

    fn show_swap_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            RichText::new("⇄").size(18.0).color(self.theme.primary),
        )
        .min_size(Vec2::splat(36.0))
        .rounding(self.theme.button_rounding);

        let response = ui.add(button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Swap languages")
        });

        let clicked = response.clicked();
        response.on_hover_text("Swap languages");

        if clicked {
            self.state.swap_languages();
        }
    }
}
