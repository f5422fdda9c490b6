//! Worker wrapper holding the current engine.
//!
//! Reconfiguration never mutates an engine: a new one is built and the
//! shared reference is swapped. Calls already in flight finish on the engine
//! they started with.

use std::sync::{Arc, PoisonError, RwLock};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::engine::ValidationEngine;
use crate::result::ValidationResult;
use crate::value::Record;

#[derive(Debug)]
pub struct ValidationWorker {
    engine: RwLock<Arc<ValidationEngine>>,
}

impl ValidationWorker {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            engine: RwLock::new(Arc::new(engine)),
        }
    }

    /// Snapshot of the engine currently in use.
    pub fn engine(&self) -> Arc<ValidationEngine> {
        let guard = self.engine.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swaps in a new engine and returns the previous one.
    pub fn reconfigure(&self, engine: ValidationEngine) -> Arc<ValidationEngine> {
        let mut guard = self.engine.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::new(engine));

        #[cfg(feature = "tracing")]
        tracing::info!("Validation worker reconfigured");

        previous
    }

    pub fn validate(&self, record: &Record) -> ValidationResult {
        self.engine().validate(record)
    }

    /// Validates `record` and sends the result through `tx`.
    ///
    /// Nothing is sent if `token` is already cancelled.
    #[cfg(feature = "async")]
    pub async fn validate_tx(
        &self,
        record: &Record,
        token: CancellationToken,
        tx: mpsc::Sender<ValidationResult>,
    ) {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Validation cancelled before start");
            return;
        }

        let result = self.validate(record);

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send validation result: {}", _e);
        }
    }
}
