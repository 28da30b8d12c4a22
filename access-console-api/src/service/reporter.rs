use tracing::warn;

use crate::error::ConsoleError;

/// Receives failures the list engine recovers from.
///
/// Implementations must not panic: reporting is the last step of error
/// handling and its own failures have nowhere to go.
pub trait ErrorReporter: Send + Sync {
    /// Record a failure that happened while performing `context`
    fn report(&self, context: &str, error: &ConsoleError);
}

/// Reporter that writes every failure to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &str, error: &ConsoleError) {
        warn!(context, %error, "list engine recovered from error");
    }
}
