//! Translation provider integration
//!
//! HTTP client for the translation provider plus the background worker
//! pipeline that keeps requests off the UI thread.

pub mod provider;
pub mod worker;

pub use provider::{ProviderConfig, TranslationClient, DEFAULT_ENDPOINT};
pub use worker::{TranslateCommand, TranslateEvent, TranslatePipeline};
