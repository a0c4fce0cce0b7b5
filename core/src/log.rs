// Log sink injected into the Cube API client

/// Destination for the client's diagnostic messages
///
/// The hosting framework passes its own implementation; standalone callers
/// use [`TracingLog`] or [`NullLog`].
pub trait ResourceLog: Send + Sync {
    fn error(&self, message: &str);

    fn warn(&self, message: &str);

    fn info(&self, message: &str);

    fn debug(&self, message: &str);
}

/// Forwards every message to `tracing` under the `cube` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ResourceLog for TracingLog {
    fn error(&self, message: &str) {
        tracing::error!(target: "cube", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "cube", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "cube", "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "cube", "{}", message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ResourceLog for NullLog {
    fn error(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}
}
