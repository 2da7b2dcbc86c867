use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),

    #[error("Bad command syntax: {0}")]
    Syntax(String),

    #[error("Console is already running")]
    AlreadyRunning,

    #[error("Executor failed: {0}")]
    Executor(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
