//! Diagnostic sinks for duration balancing.
//!
//! Balancing reports intermediate values (the total nanosecond count and the
//! extracted day count) to a caller-supplied sink instead of a global logger.

use tracing::trace;

/// Receives diagnostic messages. Has no influence on the computation.
pub trait DiagnosticSink {
    fn record(&mut self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&str),
{
    fn record(&mut self, message: &str) {
        self(message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&mut self, _message: &str) {}
}

/// Forwards messages as `TRACE` events to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, message: &str) {
        trace!(target: "civil_calendar::duration", "{message}");
    }
}
