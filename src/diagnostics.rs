//! Diagnostic accumulation for resolution errors.
//!
//! Diagnostics are recorded, never thrown: one invalid method must not stop
//! resolution of its siblings. The driver inspects the sink once the whole
//! compilation unit has been processed and fails the build if anything was
//! recorded.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::SourceRef;

/// Diagnostic for an observable query whose dependency set is empty.
pub const OBSERVABLE_QUERY_NOTHING_TO_OBSERVE: &str =
    "observable query has nothing to observe; the query references no tables \
     and its result adapter depends on none";

/// One recorded compilation error, tied to the method that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The exact method/type responsible.
    pub source: SourceRef,
    /// Human-readable message.
    pub message: String,
}

/// Accumulating sink for resolution diagnostics.
///
/// Safe to share across threads; reporting never halts the caller.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        DiagnosticSink {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Records an error against a source location.
    pub fn report_error(&self, source: &SourceRef, message: &str) {
        log::debug!("diagnostic for {source}: {message}");
        self.entries.lock().push(Diagnostic {
            source: source.clone(),
            message: message.to_string(),
        });
    }

    /// Returns true if any diagnostic has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.entries.lock().is_empty()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if no diagnostics have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns a snapshot of the recorded diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Consumes the sink, returning all recorded diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries.into_inner()
    }
}
