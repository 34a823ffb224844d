// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query engine behind the issue listing operation.
//!
//! A query runs in a fixed order over a read-only slice of issues:
//!
//! 1. Title search (case-insensitive substring)
//! 2. Status filter (exact)
//! 3. Priority filter (exact)
//! 4. Assignee filter (case-insensitive substring)
//! 5. Stable sort by the requested field
//! 6. Page slicing
//!
//! Empty filter values are treated as absent. An unrecognized sort field
//! leaves the filtered order untouched. A page past the end is empty, not
//! an error.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Largest page size a query may request.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Sort field used when the caller does not pick one.
pub const DEFAULT_SORT_BY: &str = "updatedAt";

/// Fields an issue listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Status,
    Priority,
    Assignee,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Every sortable field, in the order they are documented.
    pub const ALL: [SortField; 6] = [
        SortField::Title,
        SortField::Status,
        SortField::Priority,
        SortField::Assignee,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Returns the field name as it appears in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::Priority => "priority",
            SortField::Assignee => "assignee",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Resolves a request field name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        SortField::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Ascending comparison of two issues on this field.
    ///
    /// Text fields compare lexicographically, timestamps chronologically.
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        match self {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Priority => a.priority.cmp(&b.priority),
            SortField::Assignee => a.assignee.cmp(&b.assignee),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum SortOrder {
    Asc,
    /// Newest or largest first. Also the fallback for unrecognized values.
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the string representation used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parses a sort order, falling back to descending for anything but "asc".
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

impl From<Option<String>> for SortOrder {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(SortOrder::parse_lenient).unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Search, filter, sort, and pagination parameters for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpec {
    /// Case-insensitive substring to look for in titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact status to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Exact priority to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Case-insensitive substring to look for in assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Name of the field to sort by. See [`SortField`].
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for QuerySpec {
    fn default() -> Self {
        QuerySpec {
            search: None,
            status: None,
            priority: None,
            assignee: None,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    /// Sets the title search term (builder pattern).
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the status filter (builder pattern).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority filter (builder pattern).
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the assignee filter (builder pattern).
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the sort field and direction (builder pattern).
    pub fn sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = sort_by.into();
        self.sort_order = order;
        self
    }

    /// Sets the page number and size (builder pattern).
    pub fn paged(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Returns the resolved sort field, or `None` if the name is unrecognized.
    pub fn sort_field(&self) -> Option<SortField> {
        SortField::parse(&self.sort_by)
    }

    /// Rejects pagination parameters outside their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(Error::InvalidPage(self.page));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

/// One page of a listing plus totals across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub issues: Vec<Issue>,
    /// Number of issues that matched the filters.
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: usize,
}

/// Runs a query over `issues` without modifying them.
///
/// Pagination parameters are validated before any filtering happens.
pub fn execute(issues: &[Issue], spec: &QuerySpec) -> Result<QueryResult> {
    spec.validate()?;

    let mut matched = filter(issues, spec);
    if let Some(field) = spec.sort_field() {
        sort(&mut matched, field, spec.sort_order);
    }

    let total = matched.len();
    let page_size = spec.page_size as usize;
    let start = (spec.page as usize - 1).saturating_mul(page_size);
    let page: Vec<Issue> = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Ok(QueryResult {
        issues: page,
        total,
        page: spec.page,
        page_size: spec.page_size,
        total_pages: total.div_ceil(page_size),
    })
}

/// Applies the search and field filters, keeping input order.
pub fn filter<'a>(issues: &'a [Issue], spec: &QuerySpec) -> Vec<&'a Issue> {
    let search = active(&spec.search).map(str::to_lowercase);
    let status = active(&spec.status);
    let priority = active(&spec.priority);
    let assignee = active(&spec.assignee).map(str::to_lowercase);

    let mut matched: Vec<&Issue> = issues.iter().collect();

    if let Some(needle) = &search {
        matched.retain(|issue| issue.title.to_lowercase().contains(needle.as_str()));
    }
    if let Some(status) = status {
        matched.retain(|issue| issue.status == status);
    }
    if let Some(priority) = priority {
        matched.retain(|issue| issue.priority == priority);
    }
    if let Some(needle) = &assignee {
        matched.retain(|issue| issue.assignee.to_lowercase().contains(needle.as_str()));
    }

    matched
}

/// Stable sort. Descending order keeps ties in their incoming order.
pub fn sort(issues: &mut [&Issue], field: SortField, order: SortOrder) {
    match order {
        SortOrder::Asc => issues.sort_by(|a, b| field.compare(a, b)),
        SortOrder::Desc => issues.sort_by(|a, b| field.compare(b, a)),
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
