//! Diagnostic output for handlers.
//!
//! Handlers never log directly. They receive an [`Observer`] so production
//! code can forward to `tracing` while tests capture the exact lines.

use std::sync::Mutex;
use tracing::info;

/// Sink for the diagnostic lines a handler emits during an invocation.
pub trait Observer: Send + Sync {
    fn log(&self, line: &str);
}

/// Forwards every line to `tracing` at INFO, tagged with the handler name.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    handler: &'static str,
}

impl TracingObserver {
    #[must_use]
    pub fn new(handler: &'static str) -> Self {
        Self { handler }
    }
}

impl Observer for TracingObserver {
    fn log(&self, line: &str) {
        info!(handler = self.handler, "{}", line);
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    lines: Mutex<Vec<String>>,
}

impl RecordingObserver {
    /// Snapshot of the lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Observer for RecordingObserver {
    fn log(&self, line: &str) {
        let mut lines = self
            .lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        lines.push(line.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn log(&self, _line: &str) {}
}
