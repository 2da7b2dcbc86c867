//! The executor capability invoked when a command line resolves to a
//! terminal node.
//!
//! Executors receive the positional values collected during resolution, in
//! left-to-right command-line order, always as raw strings. An executor's
//! failure is never caught by the dispatcher; it propagates to whoever called
//! [`dispatch`](crate::dispatch::CommandDispatcher::dispatch).

/// A callable bound to exactly one terminal node of the command tree.
///
/// Implemented for any `Fn(&[String]) -> anyhow::Result<()>` closure, so most
/// registrations can pass a closure directly.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, values: &[String]) -> anyhow::Result<()>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&[String]) -> anyhow::Result<()> + Send + Sync,
{
    fn execute(&self, values: &[String]) -> anyhow::Result<()> {
        self(values)
    }
}
