pub mod languages;
pub mod speech;
pub mod translate;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PolyglotError {
    #[error("Translation request error: {0}")]
    RequestError(String),

    #[error("Provider response error: {0}")]
    ResponseError(String),

    #[error("Speech output error: {0}")]
    SpeechError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),
}

impl From<reqwest::Error> for PolyglotError {
    fn from(e: reqwest::Error) -> Self {
        PolyglotError::RequestError(e.to_string())
    }
}

impl PolyglotError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Network and provider errors clear up on the next attempt
            PolyglotError::RequestError(_) => true,
            PolyglotError::ResponseError(_) => true,
            PolyglotError::SpeechError(_) => true,
            PolyglotError::ConfigError(_) => false,
            PolyglotError::ChannelError(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            PolyglotError::RequestError(_) => {
                "Translation request failed. Please check your connection.".to_string()
            }
            PolyglotError::ResponseError(_) => {
                "The translation service returned an unexpected response.".to_string()
            }
            PolyglotError::SpeechError(_) => {
                "Speech playback failed. Text is still shown.".to_string()
            }
            PolyglotError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            PolyglotError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PolyglotError>;
