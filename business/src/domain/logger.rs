/// Logging port for the shopping list use cases. Adapters choose the sink.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Verbose diagnostics, off unless the adapter's filter enables them.
    fn debug(&self, message: &str);
}
