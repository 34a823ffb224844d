// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket protocol messages for client-server communication.
//!
//! Every client request gets exactly one server response:
//! - `list_issues` -> `issue_page`
//! - `get_issue`, `create_issue`, `update_issue` -> `issue`
//! - `health` -> `health`
//! - `ping` -> `pong`
//!
//! Any failure is reported as `error` with a coarse kind.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::issue::{Issue, IssueDraft, IssuePatch};
use crate::query::{QueryResult, QuerySpec};

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// List issues with search, filters, sorting, and paging.
    ///
    /// Query fields sit alongside `type`, all optional.
    ListIssues(QuerySpec),

    /// Fetch a single issue.
    GetIssue {
        id: String,
    },

    /// Create an issue. Draft fields sit alongside `type`.
    CreateIssue(IssueDraft),

    /// Change some fields of an existing issue.
    UpdateIssue {
        id: String,
        #[serde(default)]
        patch: IssuePatch,
    },

    /// Liveness probe answered by the service.
    Health,

    /// Ping message for keepalive.
    Ping {
        /// Client-chosen ID echoed in Pong.
        id: u64,
    },
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Response to `list_issues`.
    IssuePage(QueryResult),

    /// Response to `get_issue`, `create_issue`, and `update_issue`.
    Issue(Issue),

    /// Response to `health`.
    Health {
        /// Always "ok" while the server is answering.
        status: String,
    },

    /// Pong response to client Ping.
    Pong {
        /// Echoed from the Ping message.
        id: u64,
    },

    /// Error message.
    Error {
        /// Coarse classification for the client to branch on.
        kind: ErrorKind,
        /// Human-readable error description.
        message: String,
    },
}

impl ClientMessage {
    /// Creates a ListIssues message.
    pub fn list_issues(spec: QuerySpec) -> Self {
        ClientMessage::ListIssues(spec)
    }

    /// Creates a GetIssue message.
    pub fn get_issue(id: impl Into<String>) -> Self {
        ClientMessage::GetIssue { id: id.into() }
    }

    /// Creates a CreateIssue message.
    pub fn create_issue(draft: IssueDraft) -> Self {
        ClientMessage::CreateIssue(draft)
    }

    /// Creates an UpdateIssue message.
    pub fn update_issue(id: impl Into<String>, patch: IssuePatch) -> Self {
        ClientMessage::UpdateIssue { id: id.into(), patch }
    }

    /// Creates a Health message.
    pub fn health() -> Self {
        ClientMessage::Health
    }

    /// Creates a Ping message.
    pub fn ping(id: u64) -> Self {
        ClientMessage::Ping { id }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl ServerMessage {
    /// Creates an IssuePage message.
    pub fn issue_page(result: QueryResult) -> Self {
        ServerMessage::IssuePage(result)
    }

    /// Creates an Issue message.
    pub fn issue(issue: Issue) -> Self {
        ServerMessage::Issue(issue)
    }

    /// Creates a Health message reporting "ok".
    pub fn health_ok() -> Self {
        ServerMessage::Health { status: "ok".to_string() }
    }

    /// Creates a Pong message.
    pub fn pong(id: u64) -> Self {
        ServerMessage::Pong { id }
    }

    /// Creates an Error message.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        ServerMessage::Error { kind, message: message.into() }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl From<&Error> for ServerMessage {
    fn from(err: &Error) -> Self {
        ServerMessage::error(err.kind(), err.to_string())
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
