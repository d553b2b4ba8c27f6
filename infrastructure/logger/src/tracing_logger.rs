use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under a single target,
/// so they can be filtered with `RUST_LOG=shopping_list=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shopping_list", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shopping_list", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shopping_list", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shopping_list", "{}", message);
    }
}
