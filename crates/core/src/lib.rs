// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! issuebox-core: In-memory issue store and query engine.
//!
//! This crate provides the issue record type, the record store that owns the
//! collection, the query engine behind the listing operation, and the issue
//! service that ties them together for the issuebox server.

pub mod clock;
pub mod error;
pub mod id;
pub mod issue;
pub mod protocol;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, ErrorKind, Result};
pub use issue::{Issue, IssueDraft, IssuePatch, Priority, Status};
pub use query::{QueryResult, QuerySpec, SortField, SortOrder};
pub use service::{IssueService, ServiceConfig};
pub use store::IssueStore;
