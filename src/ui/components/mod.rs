//! UI components module
//!
//! Reusable components for the Polyglot translator view.

pub mod language_bar;
pub mod text_panels;
pub mod translate_button;

pub use language_bar::LanguageBar;
pub use text_panels::TextPanels;
pub use translate_button::TranslateButton;
