//! Error types and error classification.
//!
//! Every error the engine knows about answers `prints_help()`. The dispatch
//! shell never matches on error identities; it asks [`recoverable`] and acts
//! on the flag.

use switchyard_dispatch::{RouteError, RouteTableError};
use switchyard_input::{InputError, ValidationError};
use thiserror::Error;

/// A recoverable failure raised by a command handler.
///
/// ```rust
/// use switchyard::CommandError;
///
/// let err = CommandError::new("nothing to release").with_help();
/// assert!(err.prints_help());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
    print_help: bool,
}

impl CommandError {
    /// A command error that does not print help.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            print_help: false,
        }
    }

    pub fn with_help(mut self) -> Self {
        self.print_help = true;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn prints_help(&self) -> bool {
        self.print_help
    }
}

/// Any error the engine produces.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    RouteTable(#[from] RouteTableError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl CliError {
    pub fn prints_help(&self) -> bool {
        match self {
            CliError::Validation(err) => err.prints_help(),
            CliError::RouteTable(err) => err.prints_help(),
            CliError::Route(err) => err.prints_help(),
            CliError::Input(err) => err.prints_help(),
            CliError::Command(err) => err.prints_help(),
        }
    }
}

/// Classifies a handler error.
///
/// Walks the error chain and returns the help flag of the first known
/// error, or `None` when nothing in the chain is a recoverable kind.
pub fn recoverable(err: &anyhow::Error) -> Option<bool> {
    err.chain().find_map(|cause| {
        if let Some(err) = cause.downcast_ref::<CliError>() {
            Some(err.prints_help())
        } else if let Some(err) = cause.downcast_ref::<CommandError>() {
            Some(err.prints_help())
        } else if let Some(err) = cause.downcast_ref::<InputError>() {
            Some(err.prints_help())
        } else if let Some(err) = cause.downcast_ref::<RouteError>() {
            Some(err.prints_help())
        } else if let Some(err) = cause.downcast_ref::<ValidationError>() {
            Some(err.prints_help())
        } else {
            cause
                .downcast_ref::<RouteTableError>()
                .map(RouteTableError::prints_help)
        }
    })
}
