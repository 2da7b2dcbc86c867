//! # cmdtree Architecture
//!
//! cmdtree is a **UI-agnostic command dispatcher**. A host application
//! declares a tree of named commands (actions, options with long/short
//! forms, bound positional arguments) and cmdtree routes each incoming line
//! to the single terminal node that matches it, invoking the bound executor
//! with the positional values collected along the way.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console (console.rs)                                       │
//! │  - Externally-owned context, no global state                │
//! │  - Background loop: source → dispatch, with a stop channel  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatch.rs, token.rs)                         │
//! │  - Tokenizer: split + merged-short-option expansion         │
//! │  - Resolver: stateful walk of tokens against the tree       │
//! │  - Invoker: calls the terminal's executor with the values   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Tree (tree.rs, register.rs)                        │
//! │  - Sum-typed nodes: Root / Action / Option / Exec           │
//! │  - Concurrent children maps; built by the chained builder   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! The library never touches stdout/stderr and never assumes a terminal.
//! Input arrives through the [`source::CommandSource`] capability, output is
//! whatever the registered [`executor::CommandExecutor`]s do, and diagnostics
//! go through `tracing`. The shipped binary is one thin client of this API;
//! an embedded scripting console or a network shell would be another.
//!
//! ## Concurrency Model
//!
//! Dispatches run strictly one at a time on the background loop. Registration
//! may happen concurrently from any thread (the tree's maps tolerate
//! reads-during-writes), but there is no snapshot isolation: a node added
//! mid-dispatch may or may not be visible to that dispatch.
//!
//! ## Module Overview
//!
//! - [`console`]: the owning context and background loop
//! - [`dispatch`]: tokenize → resolve → invoke for one line
//! - [`token`]: command-line tokenizer
//! - [`tree`]: the node data model
//! - [`register`]: chained registration builder
//! - [`executor`]: the executor capability trait
//! - [`source`]: input-source capability and implementations
//! - [`error`]: error types

pub mod console;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod register;
pub mod source;
pub mod token;
pub mod tree;
