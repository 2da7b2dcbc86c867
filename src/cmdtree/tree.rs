//! # Command Tree
//!
//! The data model the dispatcher resolves against: a tree of named nodes,
//! built once by the registration API and only ever read during dispatch.
//!
//! [`CommandNode`] is a sum type over four kinds:
//!
//! - **Root**: anonymous; owns the top-level children plus a derived mapping
//!   of top-level command name → terminal node used for introspection.
//! - **Action**: a routing node with a unique name among its siblings. Bound
//!   argument nodes (the child an option steps to when it consumes a value)
//!   reuse this variant, since they are plain named routing nodes.
//! - **Option**: matched by `--long` or `-a`; may own one child, the bound
//!   argument node, which must be named identically to the option's long
//!   name. The resolver relies on that naming to step from option to value.
//! - **Exec**: a terminal leaf carrying exactly one executor. Only terminals
//!   can be invoked.
//!
//! ## Invariants (caller-guaranteed)
//!
//! The tree does not validate itself. Registration must guarantee: sibling
//! names are unique, aliases are exactly one character, an option's argument
//! child shares the option's long name, and only terminals carry executors.
//!
//! ## Concurrency
//!
//! Every children mapping is a [`DashMap`] so registration from another
//! thread cannot corrupt an in-flight dispatch read. No snapshot isolation is
//! provided: a node added mid-dispatch may or may not be visible to that
//! dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::executor::CommandExecutor;

/// Shared handle to a node. Cloning is cheap.
pub type NodeRef = Arc<CommandNode>;

/// Concurrency-safe name-keyed children mapping.
pub type ChildMap = DashMap<String, NodeRef>;

pub enum CommandNode {
    Root(RootNode),
    Action(ActionNode),
    Option(OptionNode),
    Exec(ExecNode),
}

impl CommandNode {
    /// The name this node is keyed under in its parent's children mapping.
    /// The root has no name of its own.
    pub fn name(&self) -> &str {
        match self {
            CommandNode::Root(_) => "",
            CommandNode::Action(n) => &n.name,
            CommandNode::Option(n) => &n.long,
            CommandNode::Exec(n) => &n.name,
        }
    }

    /// The children mapping, absent on terminals (they own no children).
    pub fn children(&self) -> Option<&ChildMap> {
        match self {
            CommandNode::Root(n) => Some(&n.children),
            CommandNode::Action(n) => Some(&n.children),
            CommandNode::Option(n) => Some(&n.children),
            CommandNode::Exec(_) => None,
        }
    }

    /// Exact-name child lookup.
    pub fn child(&self, name: &str) -> Option<NodeRef> {
        self.children()?.get(name).map(|e| e.value().clone())
    }

    /// Scan children for an option whose alias matches. Non-option children
    /// are skipped; aliases are unique among siblings by invariant.
    pub fn child_by_alias(&self, alias: &str) -> Option<NodeRef> {
        for entry in self.children()?.iter() {
            if let CommandNode::Option(opt) = entry.value().as_ref() {
                if opt.alias == alias {
                    return Some(entry.value().clone());
                }
            }
        }
        None
    }

    pub fn as_exec(&self) -> Option<&ExecNode> {
        match self {
            CommandNode::Exec(n) => Some(n),
            _ => None,
        }
    }

    /// The terminal leaf bound at this node, if one was registered.
    pub fn exec_child(&self) -> Option<NodeRef> {
        for entry in self.children()?.iter() {
            if matches!(entry.value().as_ref(), CommandNode::Exec(_)) {
                return Some(entry.value().clone());
            }
        }
        None
    }
}

pub struct RootNode {
    children: ChildMap,
    executions: DashMap<String, NodeRef>,
}

impl RootNode {
    pub fn new() -> Self {
        Self {
            children: ChildMap::new(),
            executions: DashMap::new(),
        }
    }

    /// Record a registered terminal under its top-level command name.
    pub fn record_execution(&self, name: impl Into<String>, node: NodeRef) {
        self.executions.insert(name.into(), node);
    }

    /// Top-level command names with a registered terminal. No ordering
    /// guarantee.
    pub fn execution_names(&self) -> Vec<String> {
        self.executions.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for RootNode {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ActionNode {
    name: String,
    is_sub_action: bool,
    children: ChildMap,
}

impl ActionNode {
    pub fn new(name: impl Into<String>, is_sub_action: bool) -> Self {
        Self {
            name: name.into(),
            is_sub_action,
            children: ChildMap::new(),
        }
    }

    pub fn is_sub_action(&self) -> bool {
        self.is_sub_action
    }

    /// The nested actions under this node, keyed by name.
    ///
    /// When the node is itself marked as a sub-action this always returns
    /// `None`, even if nested actions exist. That is the observed behavior of
    /// the system this was modeled on, preserved literally; see the tests
    /// below before changing it.
    pub fn sub_actions(&self) -> Option<HashMap<String, NodeRef>> {
        if self.is_sub_action {
            return None;
        }

        let mut actions = HashMap::new();
        for entry in self.children.iter() {
            if matches!(entry.value().as_ref(), CommandNode::Action(_)) {
                actions.insert(entry.key().clone(), entry.value().clone());
            }
        }
        Some(actions)
    }
}

pub struct OptionNode {
    long: String,
    alias: String,
    children: ChildMap,
}

impl OptionNode {
    pub fn new(long: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            alias: alias.into(),
            children: ChildMap::new(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

pub struct ExecNode {
    name: String,
    executor: Arc<dyn CommandExecutor>,
}

impl ExecNode {
    pub fn new(name: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            name: name.into(),
            executor,
        }
    }

    pub fn executor(&self) -> &dyn CommandExecutor {
        self.executor.as_ref()
    }
}
