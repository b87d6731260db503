//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Polyglot.

mod app;
pub mod components;
mod state;
mod theme;

pub use app::PolyglotApp;
pub use components::{LanguageBar, TextPanels, TranslateButton};
pub use state::{AppState, LanguageRole};
pub use theme::Theme;
