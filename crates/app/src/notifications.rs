//! User-facing error surface.

use mockall::automock;
use tracing::warn;

/// Receives one human-readable message per failed cart operation.
#[automock]
pub trait ErrorSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Sink that forwards messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn error(&self, message: &str) {
        warn!(target: "rocketcart::toast", "{message}");
    }
}
