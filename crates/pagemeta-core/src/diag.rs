//! Diagnostic reporting for the generation pipeline.
//!
//! Generation failures are contained, never propagated; diagnostics are the
//! observability side channel that accompanies a suppressed or failed
//! generation. Sinks are injectable so the functional core stays
//! side-effect-free under test.

use std::fmt;
use std::sync::Mutex;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A non-fatal observability message.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,

    /// Component that produced the message (schema type or assembler kind).
    pub origin: String,

    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    #[must_use]
    pub fn warning(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Create an error diagnostic.
    #[must_use]
    pub fn error(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            origin: origin.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.origin, self.message)
    }
}

/// Receiver for pipeline diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic. Must not panic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Routes diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(origin = %diagnostic.origin, "{}", diagnostic.message);
            }
            Severity::Error => {
                tracing::error!(origin = %diagnostic.origin, "{}", diagnostic.message);
            }
        }
    }
}

/// Collects diagnostics in memory for inspection in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().expect("diagnostic sink poisoned"))
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("diagnostic sink poisoned").len()
    }

    /// Whether the sink is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .expect("diagnostic sink poisoned")
            .push(diagnostic);
    }
}
