//! Error types for the juegos API client.
//!
//! # Design
//! Failures fall in two families that callers must be able to tell apart:
//! `Transport` (no response was received at all) and `Response` (a response
//! arrived but its status fails the operation's success check). The two
//! JSON variants cover payloads that could not be encoded or decoded.

use std::fmt;

/// The catalog operation a request or failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Destroy,
    GetPaginated,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Destroy => "destroy",
            Operation::GetPaginated => "get_paginated",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by `JuegoClient`, `Transport` implementations and
/// `JuegoService`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was received (connection refused, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a status the operation does not accept.
    #[error("{operation} failed with HTTP {status}: {body}")]
    Response {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of a `Response` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
