//! Translation pipeline with channel-based communication
//!
//! A worker thread owns the HTTP client and a tokio runtime. Each translate
//! command is spawned as its own task, so requests may overlap; completion
//! events are delivered in whatever order the responses arrive. A late
//! response from an earlier request still produces its event after a faster
//! later one (last-settled wins at the consumer).

use crate::translate::provider::{ProviderConfig, TranslationClient};
use crate::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Command sent to the translation pipeline
#[derive(Clone, Debug)]
pub enum TranslateCommand {
    /// Translate a piece of text
    Translate {
        /// The text to translate, as typed (not trimmed)
        text: String,
        /// Source language code
        source: String,
        /// Target language code
        target: String,
        /// Request ID for log correlation
        request_id: Uuid,
    },

    /// Shutdown the pipeline
    Shutdown,
}

/// Event emitted by the translation pipeline
#[derive(Clone, Debug)]
pub enum TranslateEvent {
    /// A request settled with a translation
    Completed {
        /// The translated text
        translated: String,
        /// Request ID this result belongs to
        request_id: Uuid,
    },

    /// A request settled with a failure
    Failed {
        /// Error message (diagnostic only)
        error: String,
        /// Request ID the failure belongs to
        request_id: Uuid,
    },

    /// Pipeline has shut down
    Shutdown,
}

/// Translation pipeline with channel-based communication
pub struct TranslatePipeline {
    /// Configuration
    config: ProviderConfig,

    /// Command sender
    command_tx: Sender<TranslateCommand>,

    /// Command receiver (for worker)
    command_rx: Receiver<TranslateCommand>,

    /// Event sender (for worker)
    event_tx: Sender<TranslateEvent>,

    /// Event receiver
    event_rx: Receiver<TranslateEvent>,
}

impl TranslatePipeline {
    /// Create a new translation pipeline
    pub fn new(config: ProviderConfig) -> Self {
        let (command_tx, command_rx) = bounded(config.queue_size);
        let (event_tx, event_rx) = bounded(config.queue_size);

        Self {
            config,
            command_tx,
            command_rx,
            event_tx,
            event_rx,
        }
    }

    /// Get a sender for commands
    pub fn command_sender(&self) -> Sender<TranslateCommand> {
        self.command_tx.clone()
    }

    /// Get a receiver for events
    pub fn event_receiver(&self) -> Receiver<TranslateEvent> {
        self.event_rx.clone()
    }

    /// Start the pipeline worker thread
    /// Returns the JoinHandle for the worker thread.
    pub fn start_worker(self) -> Result<thread::JoinHandle<()>> {
        let config = self.config.clone();
        let command_rx = self.command_rx.clone();
        let event_tx = self.event_tx.clone();

        let handle = thread::spawn(move || {
            info!("Translation worker starting");

            let runtime = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to start translation runtime: {}", e);
                    let _ = event_tx.send(TranslateEvent::Shutdown);
                    return;
                }
            };

            let client = match TranslationClient::new(config) {
                Ok(client) => client,
                Err(e) => {
                    error!("Failed to initialize translation client: {}", e);
                    let _ = event_tx.send(TranslateEvent::Shutdown);
                    return;
                }
            };

            info!("Translation worker ready");

            loop {
                match command_rx.recv() {
                    Ok(TranslateCommand::Translate {
                        text,
                        source,
                        target,
                        request_id,
                    }) => {
                        debug!("Dispatching request {} ({}|{})", request_id, source, target);

                        let client = client.clone();
                        let event_tx = event_tx.clone();

                        // One task per request; nothing serializes them
                        runtime.spawn(async move {
                            match client.translate(&text, &source, &target).await {
                                Ok(translated) => {
                                    let _ = event_tx.send(TranslateEvent::Completed {
                                        translated,
                                        request_id,
                                    });
                                }
                                Err(e) => {
                                    warn!("Translation request {} failed: {}", request_id, e);
                                    let _ = event_tx.send(TranslateEvent::Failed {
                                        error: e.to_string(),
                                        request_id,
                                    });
                                }
                            }
                        });
                    }

                    Ok(TranslateCommand::Shutdown) => {
                        info!("Translation worker shutting down");
                        let _ = event_tx.send(TranslateEvent::Shutdown);
                        break;
                    }

                    Err(e) => {
                        error!("Command channel error: {}", e);
                        break;
                    }
                }
            }

            info!("Translation worker stopped");
        });

        Ok(handle)
    }
}
