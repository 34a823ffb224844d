// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the issuebox tracker.
//!
//! This module contains the stored record (`Issue`), the creation input
//! (`IssueDraft`), the partial update input (`IssuePatch`), and the closed
//! vocabularies for status and priority.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Not yet started. Initial state for new issues.
    #[default]
    Open,
    /// Currently being worked on.
    InProgress,
    /// Finished or abandoned.
    Closed,
}

impl Status {
    /// Returns the canonical spelling used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in progress" | "in_progress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Relative urgency of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Returns the canonical spelling used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked work item.
///
/// `status` and `priority` are stored as text. Whether they are held to the
/// [`Status`] and [`Priority`] vocabularies is a service-level setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier (format: `iss-{hash}`), assigned by the store.
    pub id: String,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Current workflow state.
    pub status: String,
    /// Relative urgency.
    pub priority: String,
    /// Person or queue this issue is assigned to.
    pub assignee: String,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new issue.
///
/// Everything except the title falls back to a documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub assignee: String,
}

fn default_status() -> String {
    Status::default().as_str().to_string()
}

fn default_priority() -> String {
    Priority::default().as_str().to_string()
}

impl IssueDraft {
    /// Creates a draft with the given title and every other field defaulted.
    pub fn new(title: impl Into<String>) -> Self {
        IssueDraft {
            title: title.into(),
            description: String::new(),
            status: default_status(),
            priority: default_priority(),
            assignee: String::new(),
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }
}

/// A partial update to an issue.
///
/// `None` means "leave unchanged"; `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl IssuePatch {
    /// Sets a new title (builder pattern).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description (builder pattern).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new status (builder pattern).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a new priority (builder pattern).
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets a new assignee (builder pattern).
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
    }

    /// Overwrites every present field on `issue`. Timestamps are untouched.
    pub fn apply_to(&self, issue: &mut Issue) {
        if let Some(title) = &self.title {
            issue.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            issue.description.clone_from(description);
        }
        if let Some(status) = &self.status {
            issue.status.clone_from(status);
        }
        if let Some(priority) = &self.priority {
            issue.priority.clone_from(priority);
        }
        if let Some(assignee) = &self.assignee {
            issue.assignee.clone_from(assignee);
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
