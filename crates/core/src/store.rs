// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The record store: an ordered, in-memory collection of issues.
//!
//! The store is the only owner of issue records. It assigns ids, stamps
//! timestamps, and keeps records in insertion order. It performs no locking;
//! callers that share a store across tasks serialize access themselves.

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::id::generate_unique_id;
use crate::issue::{Issue, IssueDraft, IssuePatch};

/// In-memory issue collection in insertion order.
pub struct IssueStore {
    issues: Vec<Issue>,
    clock: Arc<dyn Clock>,
    /// Number of inserts so far, mixed into generated ids.
    next_seq: u64,
}

impl IssueStore {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store with a custom clock source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        IssueStore { issues: Vec::new(), clock, next_seq: 0 }
    }

    /// Stores a new issue built from `draft` and returns it.
    ///
    /// The draft is taken as-is; defaults and validation belong to the caller.
    pub fn insert(&mut self, draft: IssueDraft) -> Issue {
        let now = self.clock.now();
        let seq = self.next_seq;
        self.next_seq += 1;

        let id = generate_unique_id(&draft.title, &now, seq, |candidate| self.contains(candidate));

        let issue = Issue {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            created_at: now,
            updated_at: now,
        };
        self.issues.push(issue.clone());
        issue
    }

    /// Looks up an issue by id.
    pub fn get(&self, id: &str) -> Result<&Issue> {
        self.issues
            .iter()
            .find(|issue| issue.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Applies `patch` to the issue with the given id and refreshes `updated_at`.
    ///
    /// `updated_at` always moves forward, even when the clock has not.
    pub fn apply_update(&mut self, id: &str, patch: &IssuePatch) -> Result<Issue> {
        let now = self.clock.now();
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

        patch.apply_to(issue);
        issue.updated_at = next_stamp(issue.updated_at, now);
        Ok(issue.clone())
    }

    /// Returns every issue in insertion order.
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns true if an issue with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.issues.iter().any(|issue| issue.id == id)
    }

    /// Returns the number of stored issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if the store holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

fn next_stamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
