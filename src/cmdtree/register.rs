//! Registration API: a chained builder that grows the command tree.
//!
//! ```
//! use cmdtree::register::CommandRegister;
//!
//! let register = CommandRegister::new();
//! register
//!     .build()
//!     .action("add")
//!     .option("value", "v")
//!     .argument("value")
//!     .executor(|values: &[String]| {
//!         println!("adding {values:?}");
//!         Ok(())
//!     });
//! ```
//!
//! Every step is get-or-insert, so chains sharing a prefix converge on the
//! same nodes and registration may happen at any time, including while a
//! dispatch is in flight on another thread. The builder does not validate the
//! tree invariants (unique sibling names, one-character aliases, argument
//! nodes named after their option); callers guarantee those.

use std::sync::Arc;

use crate::executor::CommandExecutor;
use crate::tree::{ActionNode, CommandNode, ExecNode, NodeRef, OptionNode, RootNode};

/// Owner of the command tree root. Cheap to clone; clones share the tree.
#[derive(Clone)]
pub struct CommandRegister {
    root: NodeRef,
}

impl CommandRegister {
    pub fn new() -> Self {
        Self {
            root: Arc::new(CommandNode::Root(RootNode::new())),
        }
    }

    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Start a registration chain at the root.
    pub fn build(&self) -> CommandBuilder {
        CommandBuilder {
            cursor: self.root.clone(),
            root: self.root.clone(),
            command: None,
        }
    }

    /// Top-level command names with a registered terminal. No ordering
    /// guarantee.
    pub fn execution_names(&self) -> Vec<String> {
        if let CommandNode::Root(root) = self.root.as_ref() {
            root.execution_names()
        } else {
            Vec::new()
        }
    }
}

impl Default for CommandRegister {
    fn default() -> Self {
        Self::new()
    }
}

/// A cursor over the tree that inserts missing nodes as the chain descends.
pub struct CommandBuilder {
    cursor: NodeRef,
    root: NodeRef,
    /// First action name of this chain; terminals are listed under it.
    command: Option<String>,
}

impl CommandBuilder {
    /// Descend into an action, creating it if absent. Actions attached below
    /// another node are marked as sub-actions.
    pub fn action(mut self, name: &str) -> Self {
        let is_sub = !matches!(self.cursor.as_ref(), CommandNode::Root(_));
        let node = self.get_or_insert(name, || {
            CommandNode::Action(ActionNode::new(name, is_sub))
        });
        if self.command.is_none() {
            self.command = Some(name.to_string());
        }
        self.cursor = node;
        self
    }

    /// Descend into an option, creating it if absent.
    pub fn option(mut self, long: &str, alias: &str) -> Self {
        let node = self.get_or_insert(long, || {
            CommandNode::Option(OptionNode::new(long, alias))
        });
        self.cursor = node;
        self
    }

    /// Descend into the argument node bound to the enclosing option. The name
    /// must equal the option's long name for the resolver to find it.
    pub fn argument(mut self, name: &str) -> Self {
        let node = self.get_or_insert(name, || {
            CommandNode::Action(ActionNode::new(name, true))
        });
        self.cursor = node;
        self
    }

    /// Finish the chain: bind a terminal leaf carrying `executor` at the
    /// current position and list it under the chain's top-level command name.
    pub fn executor<E>(self, executor: E)
    where
        E: CommandExecutor + 'static,
    {
        let name = self.command.clone().unwrap_or_default();
        let key = name.clone();
        let executor: Arc<dyn CommandExecutor> = Arc::new(executor);
        let node = self.get_or_insert(&key, || CommandNode::Exec(ExecNode::new(name, executor)));
        if let CommandNode::Root(root) = self.root.as_ref() {
            root.record_execution(node.name(), node.clone());
        }
    }

    fn get_or_insert(&self, name: &str, make: impl FnOnce() -> CommandNode) -> NodeRef {
        let children = self
            .cursor
            .children()
            .expect("builder cursor is always a routing node");
        children
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(make()))
            .value()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[String]) -> anyhow::Result<()> {
        Ok(())
    }

    #[test]
    fn chains_sharing_a_prefix_converge_on_the_same_nodes() {
        let register = CommandRegister::new();
        register
            .build()
            .action("remote")
            .action("add")
            .executor(noop);
        register
            .build()
            .action("remote")
            .action("remove")
            .executor(noop);

        let remote = register.root().child("remote").expect("remote exists");
        let children = remote.children().expect("remote has children");
        assert!(children.contains_key("add"));
        assert!(children.contains_key("remove"));
    }

    #[test]
    fn top_level_actions_are_not_sub_actions() {
        let register = CommandRegister::new();
        register
            .build()
            .action("remote")
            .action("add")
            .executor(noop);

        let remote = register.root().child("remote").expect("remote exists");
        match remote.as_ref() {
            CommandNode::Action(a) => assert!(!a.is_sub_action()),
            _ => panic!("expected an action node"),
        }
        let add = remote.child("add").expect("add exists");
        match add.as_ref() {
            CommandNode::Action(a) => assert!(a.is_sub_action()),
            _ => panic!("expected an action node"),
        }
    }

    #[test]
    fn executor_is_listed_under_the_top_level_name() {
        let register = CommandRegister::new();
        register
            .build()
            .action("add")
            .option("value", "v")
            .argument("value")
            .executor(noop);

        assert_eq!(register.execution_names(), vec!["add".to_string()]);
    }

    #[test]
    fn option_owns_its_argument_node() {
        let register = CommandRegister::new();
        register
            .build()
            .action("add")
            .option("value", "v")
            .argument("value")
            .executor(noop);

        let add = register.root().child("add").expect("add exists");
        let option = add.child("value").expect("option exists");
        assert!(matches!(option.as_ref(), CommandNode::Option(_)));
        let argument = option.child("value").expect("argument exists");
        assert!(matches!(argument.as_ref(), CommandNode::Action(_)));
        assert!(argument.exec_child().is_some());
    }

    #[test]
    fn registering_twice_keeps_the_first_terminal() {
        let register = CommandRegister::new();
        register.build().action("greet").executor(noop);
        register.build().action("greet").executor(noop);

        assert_eq!(register.execution_names().len(), 1);
    }
}
