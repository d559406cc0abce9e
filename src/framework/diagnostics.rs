//! # Diagnostics
//!
//! Fetch failures never reach the caller as errors. Instead each one is
//! recorded on a [`DiagnosticSink`] injected into the client. Production code
//! uses [`TracingSink`]; tests use [`MemorySink`] to assert on, or ignore,
//! what was reported.

use std::sync::{Arc, Mutex};
use tracing::warn;

use super::FetchError;

/// A single absorbed failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Collection the request targeted, e.g. `actors`.
    pub resource: &'static str,
    /// Request path, with an `[index]` suffix for rejected list elements.
    pub path: String,
    pub error: FetchError,
}

/// Receiver of diagnostics emitted by the resource framework.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Emits every diagnostic as a structured `warn!` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        warn!(
            resource = diagnostic.resource,
            path = %diagnostic.path,
            error = %diagnostic.error,
            "Discarded remote payload"
        );
    }
}

/// Keeps diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}
