//! # Console
//!
//! The externally-owned context tying the pieces together: a [`Console`]
//! owns the dispatcher (and through it the command tree) and runs the
//! background input loop. There is no hidden global: construct one at
//! process start and pass it by reference to whatever registers or
//! dispatches.
//!
//! ## Loop model
//!
//! [`Console::start`] spawns two threads:
//!
//! - a reader thread doing blocking pulls from the [`CommandSource`] and
//!   forwarding lines over a channel; it exits at end-of-stream;
//! - a dispatch thread selecting over the line channel and an explicit stop
//!   channel. Lines are dispatched strictly one at a time; a dispatch error
//!   is logged and the loop moves on, so one bad command never ends the
//!   session. There is no backpressure: if an executor blocks, the loop
//!   blocks with it.
//!
//! [`ConsoleHandle::stop`] ends the dispatch thread deterministically even
//! while the reader is blocked mid-pull. The reader thread itself is
//! detached; a portable way to interrupt a blocking read does not exist, so
//! it is left to die with the source or the process.
//!
//! A console starts at most once. There is no restart path: after the loop
//! ends, `start` keeps refusing with [`CommandError::AlreadyRunning`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Sender};

use crate::dispatch::CommandDispatcher;
use crate::error::{CommandError, Result};
use crate::register::{CommandBuilder, CommandRegister};
use crate::source::CommandSource;

pub struct Console {
    dispatcher: CommandDispatcher,
    running: AtomicBool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            dispatcher: CommandDispatcher::new(),
            running: AtomicBool::new(false),
        }
    }

    /// Start a registration chain on the console's command tree.
    pub fn register(&self) -> CommandBuilder {
        self.dispatcher.register().build()
    }

    /// A shared handle to the underlying register, for registering from
    /// other threads or from inside executors.
    pub fn command_register(&self) -> CommandRegister {
        self.dispatcher.register().clone()
    }

    /// Dispatch a single line synchronously, outside the background loop.
    pub fn dispatch(&self, line: &str) -> Result<()> {
        self.dispatcher.dispatch(line)
    }

    /// Top-level command names with a registered terminal.
    pub fn command_names(&self) -> Vec<String> {
        self.dispatcher.register().execution_names()
    }

    /// Spawn the background loop pulling lines from `source`.
    ///
    /// Fails with [`CommandError::AlreadyRunning`] if the console was ever
    /// started before.
    pub fn start<S>(&self, mut source: S) -> Result<ConsoleHandle>
    where
        S: CommandSource + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(CommandError::AlreadyRunning);
        }

        let (line_tx, line_rx) = unbounded::<String>();
        let (stop_tx, stop_rx) = bounded::<()>(1);

        // Reader: blocking pulls until end-of-stream. Dropping line_tx is
        // what tells the dispatch loop the stream is done.
        std::thread::spawn(move || {
            while let Some(line) = source.next_line() {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        });

        let dispatcher = self.dispatcher.clone();
        let thread = std::thread::spawn(move || loop {
            crossbeam_channel::select! {
                recv(stop_rx) -> _ => break,
                recv(line_rx) -> msg => match msg {
                    Ok(line) => {
                        if let Err(err) = dispatcher.dispatch(&line) {
                            tracing::warn!(error = %err, line = %line, "command dispatch failed");
                        }
                    }
                    Err(_) => break,
                },
            }
        });

        Ok(ConsoleHandle {
            stop: stop_tx,
            thread: Some(thread),
        })
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running console loop.
#[derive(Debug)]
pub struct ConsoleHandle {
    stop: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl ConsoleHandle {
    /// Signal the stop channel and wait for the dispatch thread to exit.
    pub fn stop(mut self) {
        let _ = self.stop.send(());
        self.join_inner();
    }

    /// Wait until the source reaches end-of-stream and the loop drains.
    pub fn join(mut self) {
        self.join_inner();
    }

    fn join_inner(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
