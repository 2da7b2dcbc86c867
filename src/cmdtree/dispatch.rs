//! # Dispatcher
//!
//! One full dispatch is tokenize → resolve → invoke for a single input line.
//!
//! The resolver is a cursor-driven walk over the token sequence, carrying the
//! current node (starting at the root), a mode flag (`in_option_phase`,
//! starting false) and the positional values collected so far. Per token the
//! branches apply in this order. Reordering them changes which tokens are
//! accepted:
//!
//! 1. `--name`: exact-name child lookup, descend, enter option phase
//!    (regardless of the prior mode).
//! 2. `-x`: scan children for an option with alias `x`, descend, enter
//!    option phase.
//! 3. plain token while in option phase: a positional value. Collect it and
//!    descend to the child named after the *current* node, the argument node
//!    bound to the option; the shared name is the tree invariant that makes
//!    this step work.
//! 4. plain token in action phase: exact-name child lookup, descend.
//!
//! Any failed lookup is an immediate `CommandNotFound`; there is no
//! backtracking and no alternate interpretation. The node reached by the last
//! token is handed to the invoker together with the collected values.

use crate::error::{CommandError, Result};
use crate::register::CommandRegister;
use crate::token::{tokenize, LONG_OPTION_PREFIX, SHORT_OPTION_PREFIX};
use crate::tree::{CommandNode, NodeRef};

/// Routes one raw command line through the registered tree and invokes the
/// matching terminal's executor.
#[derive(Clone)]
pub struct CommandDispatcher {
    register: CommandRegister,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::with_register(CommandRegister::new())
    }

    pub fn with_register(register: CommandRegister) -> Self {
        Self { register }
    }

    pub fn register(&self) -> &CommandRegister {
        &self.register
    }

    /// Run one full dispatch for `line`.
    ///
    /// Fails with [`CommandError::NotFound`] when no tree path matches or the
    /// resolved node has no bound executor. An executor's own failure is not
    /// caught here; it surfaces as [`CommandError::Executor`].
    pub fn dispatch(&self, line: &str) -> Result<()> {
        let tokens = tokenize(line);
        tracing::debug!(?tokens, "dispatching command line");

        if tokens.is_empty() {
            return Err(CommandError::NotFound(format!("Command '{line}' not found")));
        }

        let (node, values) = self.resolve(&tokens, line)?;
        invoke(&node, &values, line)
    }

    fn resolve(&self, tokens: &[String], line: &str) -> Result<(NodeRef, Vec<String>)> {
        let mut node = self.register.root().clone();
        let mut in_option_phase = false;
        let mut values: Vec<String> = Vec::new();

        for token in tokens {
            let next = if let Some(name) = token.strip_prefix(LONG_OPTION_PREFIX) {
                in_option_phase = true;
                node.child(name)
            } else if let Some(alias) = token.strip_prefix(SHORT_OPTION_PREFIX) {
                in_option_phase = true;
                node.child_by_alias(alias)
            } else if in_option_phase {
                values.push(token.clone());
                node.child(node.name())
            } else {
                // Terminal leaves are reached by the invoker, never by name.
                node.child(token).filter(|child| child.as_exec().is_none())
            };

            node = next.ok_or_else(|| {
                CommandError::NotFound(format!(
                    "No command definition matches '{token}' in '{line}'"
                ))
            })?;
        }

        Ok((node, values))
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Invoke the executor reachable from the resolved node.
///
/// A resolved terminal is invoked directly. A routing node is invokable only
/// through a terminal leaf bound at it; root, actions without a bound leaf
/// and options that did not resolve further all fail here.
fn invoke(node: &NodeRef, values: &[String], line: &str) -> Result<()> {
    let terminal = match node.as_ref() {
        CommandNode::Exec(_) => Some(node.clone()),
        _ => node.exec_child(),
    };

    let terminal = terminal.ok_or_else(|| {
        CommandError::NotFound(format!("No executor bound for command '{line}'"))
    })?;
    let exec = terminal.as_exec().ok_or_else(|| {
        CommandError::NotFound(format!("No executor bound for command '{line}'"))
    })?;

    exec.executor().execute(values)?;
    Ok(())
}
