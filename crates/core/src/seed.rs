// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample issues loaded into a fresh server for manual exploration.

use crate::issue::IssueDraft;

/// Four fixed issues covering every status and priority.
pub fn sample_drafts() -> Vec<IssueDraft> {
    vec![
        IssueDraft::new("Login page not responsive")
            .with_description("The login page doesn't work properly on mobile devices")
            .with_status("Open")
            .with_priority("High")
            .with_assignee("John Doe"),
        IssueDraft::new("Database connection timeout")
            .with_description("Users experiencing timeout when connecting to database")
            .with_status("In Progress")
            .with_priority("High")
            .with_assignee("Jane Smith"),
        IssueDraft::new("Update user profile feature")
            .with_description("Add ability to update profile picture")
            .with_status("Open")
            .with_priority("Medium")
            .with_assignee("Bob Wilson"),
        IssueDraft::new("Performance optimization")
            .with_description("Optimize query performance for large datasets")
            .with_status("Closed")
            .with_priority("Low")
            .with_assignee("Alice Brown"),
    ]
}
