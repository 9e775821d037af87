//! Error types for route tables and route resolution.

use thiserror::Error;

/// A route table was built with an unusable segment name.
///
/// Raised while the tables are assembled at startup; never prints help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// The segment name contains whitespace.
    #[error("Cannot use whitespaces in route \"{0}\"")]
    Whitespace(String),

    /// The segment name is empty.
    #[error("Route names cannot be empty")]
    Empty,

    /// The segment name starts with `-` and would always be read as an option.
    #[error("Route \"{0}\" cannot start with '-'")]
    LeadingHyphen(String),

    /// The segment name is already registered in the same table.
    #[error("Route \"{0}\" is registered twice")]
    Duplicate(String),
}

impl RouteTableError {
    pub fn prints_help(&self) -> bool {
        false
    }
}

/// A token did not match any entry of the table being walked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Carries the full attempted path: the segments already consumed plus
    /// the one that failed.
    #[error("Command \"{}\" not found.", .path.join(" "))]
    NotFound { path: Vec<String> },
}

impl RouteError {
    pub fn not_found(path: Vec<String>) -> Self {
        RouteError::NotFound { path }
    }

    /// The attempted path.
    pub fn path(&self) -> &[String] {
        match self {
            RouteError::NotFound { path } => path,
        }
    }

    /// The segments that did resolve before the failure.
    pub fn resolved_path(&self) -> &[String] {
        let path = self.path();
        &path[..path.len().saturating_sub(1)]
    }

    /// An unknown route is the user's mistake; show them what exists.
    pub fn prints_help(&self) -> bool {
        true
    }
}
