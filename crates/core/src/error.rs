// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for issuebox-core operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// All possible errors that can occur in issuebox-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid page: {0}\n  hint: pages start at 1")]
    InvalidPage(u32),

    #[error("invalid page size: {0}\n  hint: page size must be between 1 and 100")]
    InvalidPageSize(u32),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: Open, In Progress, Closed")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: Low, Medium, High")]
    InvalidPriority(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Coarse classification of errors as seen by callers of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The requested record does not exist.
    NotFound,
    /// The caller supplied a malformed or out-of-range value.
    InvalidArgument,
    /// Anything the caller cannot fix by changing the request.
    Internal,
}

impl ErrorKind {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Error {
    /// Classifies this error for reporting to a caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IssueNotFound(_) => ErrorKind::NotFound,
            Error::InvalidPage(_)
            | Error::InvalidPageSize(_)
            | Error::InvalidStatus(_)
            | Error::InvalidPriority(_)
            | Error::Json(_) => ErrorKind::InvalidArgument,
            Error::Config(_) => ErrorKind::Internal,
        }
    }
}

/// A specialized Result type for issuebox-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
