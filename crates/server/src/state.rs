// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the issue service for shared access from connection tasks. Every
//! operation holds the same lock, so a listing sees the store either before
//! or after a write, never during one.

use std::sync::Arc;
use tokio::sync::Mutex;

use issuebox_core::{
    Issue, IssueDraft, IssuePatch, IssueService, QueryResult, QuerySpec, Result, ServiceConfig,
};

/// Shared server state containing the issue service.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    /// The only issue service for this server (protected by mutex).
    service: Mutex<IssueService>,
}

impl ServerState {
    /// Creates a new server state, optionally loaded with the sample issues.
    pub fn new(config: ServiceConfig, seed: bool) -> Self {
        let service = if seed {
            IssueService::seeded(config)
        } else {
            IssueService::new(config)
        };
        Self::with_service(service)
    }

    /// Wraps an existing service.
    pub fn with_service(service: IssueService) -> Self {
        ServerState {
            inner: Arc::new(ServerStateInner { service: Mutex::new(service) }),
        }
    }

    /// Lists issues matching the query.
    pub async fn list(&self, spec: &QuerySpec) -> Result<QueryResult> {
        let service = self.inner.service.lock().await;
        service.list(spec)
    }

    /// Fetches one issue.
    pub async fn get(&self, id: &str) -> Result<Issue> {
        let service = self.inner.service.lock().await;
        service.get(id)
    }

    /// Creates an issue.
    pub async fn create(&self, draft: IssueDraft) -> Result<Issue> {
        let mut service = self.inner.service.lock().await;
        service.create(draft)
    }

    /// Updates an issue.
    pub async fn update(&self, id: &str, patch: IssuePatch) -> Result<Issue> {
        let mut service = self.inner.service.lock().await;
        service.update(id, patch)
    }

    /// Returns the number of stored issues.
    pub async fn issue_count(&self) -> usize {
        self.inner.service.lock().await.len()
    }
}
