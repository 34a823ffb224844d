// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue service: the operations exposed to transport adapters.
//!
//! The service owns one [`IssueStore`] and is the only component that asks
//! it to mutate. Listing runs the query engine over the store's current
//! contents. The service itself is not synchronized; a shared service must
//! sit behind a single lock so listings never observe a half-applied write.

use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::issue::{Issue, IssueDraft, IssuePatch, Priority, Status};
use crate::query::{self, QueryResult, QuerySpec};
use crate::seed;
use crate::store::IssueStore;

/// Behavioural switches for an [`IssueService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Reject status and priority values outside the documented vocabularies.
    pub strict_fields: bool,
}

/// Create, read, update, and list issues held in memory.
pub struct IssueService {
    store: IssueStore,
    config: ServiceConfig,
}

impl IssueService {
    /// Creates a service over an empty store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(IssueStore::new(), config)
    }

    /// Creates a service over an existing store.
    pub fn with_store(store: IssueStore, config: ServiceConfig) -> Self {
        IssueService { store, config }
    }

    /// Creates a service with an empty store stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        Self::with_store(IssueStore::with_clock(clock), config)
    }

    /// Creates a service pre-populated with the sample issues.
    pub fn seeded(config: ServiceConfig) -> Self {
        let mut service = Self::new(config);
        service.seed();
        service
    }

    /// Inserts the sample issues into the store.
    pub fn seed(&mut self) {
        for draft in seed::sample_drafts() {
            self.store.insert(draft);
        }
        debug!("seeded {} sample issues", self.store.len());
    }

    /// Lists issues matching `spec`.
    pub fn list(&self, spec: &QuerySpec) -> Result<QueryResult> {
        let result = query::execute(self.store.all(), spec)?;
        debug!(
            "list: sort {} {}, {} of {} issues on page {}/{}",
            spec.sort_by,
            spec.sort_order,
            result.issues.len(),
            result.total,
            result.page,
            result.total_pages
        );
        Ok(result)
    }

    /// Fetches one issue by id.
    pub fn get(&self, id: &str) -> Result<Issue> {
        self.store.get(id).cloned().inspect_err(|_| debug!("get: no issue {}", id))
    }

    /// Creates an issue from `draft`.
    pub fn create(&mut self, mut draft: IssueDraft) -> Result<Issue> {
        if self.config.strict_fields {
            draft.status = canonical_status(&draft.status)?;
            draft.priority = canonical_priority(&draft.priority)?;
        }
        let issue = self.store.insert(draft);
        debug!("created issue {}", issue.id);
        Ok(issue)
    }

    /// Applies `patch` to the issue with the given id.
    ///
    /// Only fields present in the patch change. `updated_at` is always refreshed.
    /// An unknown id is reported before any field validation.
    pub fn update(&mut self, id: &str, mut patch: IssuePatch) -> Result<Issue> {
        self.store.get(id)?;
        if self.config.strict_fields {
            if let Some(status) = &patch.status {
                patch.status = Some(canonical_status(status)?);
            }
            if let Some(priority) = &patch.priority {
                patch.priority = Some(canonical_priority(priority)?);
            }
        }
        let issue = self.store.apply_update(id, &patch)?;
        debug!("updated issue {}", issue.id);
        Ok(issue)
    }

    /// Returns the number of stored issues.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no issues are stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

fn canonical_status(value: &str) -> Result<String> {
    value
        .parse::<Status>()
        .map(|s| s.as_str().to_string())
        .map_err(|_| Error::InvalidStatus(value.to_string()))
}

fn canonical_priority(value: &str) -> Result<String> {
    value
        .parse::<Priority>()
        .map(|p| p.as_str().to_string())
        .map_err(|_| Error::InvalidPriority(value.to_string()))
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
