// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::query::SortOrder;
use chrono::{TimeZone, Utc};
use yare::parameterized;

fn test_issue() -> Issue {
    let at = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    Issue {
        id: "iss-deadbeef".to_string(),
        title: "Test Issue".to_string(),
        description: String::new(),
        status: "Open".to_string(),
        priority: "Medium".to_string(),
        assignee: String::new(),
        created_at: at,
        updated_at: at,
    }
}

// ClientMessage roundtrip tests
#[parameterized(
    list_default = { ClientMessage::list_issues(QuerySpec::default()) },
    list_full = { ClientMessage::list_issues(QuerySpec::default().search("db").status("Open").sort("title", SortOrder::Asc).paged(2, 5)) },
    get = { ClientMessage::get_issue("iss-1") },
    create = { ClientMessage::create_issue(IssueDraft::new("Title").with_assignee("Ann")) },
    update = { ClientMessage::update_issue("iss-1", IssuePatch::default().status("Closed")) },
    health = { ClientMessage::health() },
    ping = { ClientMessage::ping(12345) },
)]
fn client_message_roundtrip(msg: ClientMessage) {
    let json = msg.to_json().unwrap();
    let parsed = ClientMessage::from_json(&json).unwrap();
    assert_eq!(msg, parsed);
}

#[parameterized(
    issue = { ServerMessage::issue(test_issue()) },
    health = { ServerMessage::health_ok() },
    pong = { ServerMessage::pong(12345) },
    error = { ServerMessage::error(ErrorKind::NotFound, "issue not found: iss-1") },
)]
fn server_message_roundtrip(msg: ServerMessage) {
    let json = msg.to_json().unwrap();
    let parsed = ServerMessage::from_json(&json).unwrap();
    assert_eq!(msg, parsed);
}

#[test]
fn server_message_issue_page_roundtrip() {
    let result = QueryResult {
        issues: vec![test_issue()],
        total: 1,
        page: 1,
        page_size: 10,
        total_pages: 1,
    };
    let msg = ServerMessage::issue_page(result);
    let json = msg.to_json().unwrap();
    assert_eq!(ServerMessage::from_json(&json).unwrap(), msg);
}

#[test]
fn list_issues_accepts_flat_camel_case_fields() {
    let msg = ClientMessage::from_json(
        r#"{"type":"list_issues","priority":"High","sortBy":"title","sortOrder":"asc","pageSize":2}"#,
    )
    .unwrap();
    let spec = match msg {
        ClientMessage::ListIssues(spec) => spec,
        other => panic!("expected list_issues, got {:?}", other),
    };
    assert_eq!(spec.priority.as_deref(), Some("High"));
    assert_eq!(spec.sort_by, "title");
    assert_eq!(spec.sort_order, SortOrder::Asc);
    assert_eq!(spec.page, 1);
    assert_eq!(spec.page_size, 2);
}

#[test]
fn list_issues_with_no_fields_uses_defaults() {
    let msg = ClientMessage::from_json(r#"{"type":"list_issues"}"#).unwrap();
    assert_eq!(msg, ClientMessage::list_issues(QuerySpec::default()));
}

#[test]
fn create_issue_requires_title() {
    assert!(ClientMessage::from_json(r#"{"type":"create_issue","status":"Open"}"#).is_err());
}

#[test]
fn update_issue_keeps_empty_string_distinct_from_missing() {
    let msg = ClientMessage::from_json(
        r#"{"type":"update_issue","id":"iss-1","patch":{"assignee":""}}"#,
    )
    .unwrap();
    let (id, patch) = match msg {
        ClientMessage::UpdateIssue { id, patch } => (id, patch),
        other => panic!("expected update_issue, got {:?}", other),
    };
    assert_eq!(id, "iss-1");
    assert_eq!(patch.assignee, Some(String::new()));
    assert_eq!(patch.status, None);
}

#[test]
fn update_issue_without_patch_is_empty_patch() {
    let msg = ClientMessage::from_json(r#"{"type":"update_issue","id":"iss-1"}"#).unwrap();
    assert_eq!(msg, ClientMessage::update_issue("iss-1", IssuePatch::default()));
}

#[test]
fn error_message_from_core_error() {
    let err = Error::IssueNotFound("iss-9".into());
    let msg = ServerMessage::from(&err);
    assert_eq!(
        msg,
        ServerMessage::error(ErrorKind::NotFound, "issue not found: iss-9")
    );
}

#[test]
fn message_json_format() {
    let json = ClientMessage::health().to_json().unwrap();
    assert_eq!(json, r#"{"type":"health"}"#);

    let json = ServerMessage::health_ok().to_json().unwrap();
    assert!(json.contains("\"type\":\"health\""));
    assert!(json.contains("\"status\":\"ok\""));

    let json = ServerMessage::error(ErrorKind::InvalidArgument, "bad page").to_json().unwrap();
    assert!(json.contains("\"type\":\"error\""));
    assert!(json.contains("\"kind\":\"invalid_argument\""));
    assert!(json.contains("\"message\":\"bad page\""));

    let json = ServerMessage::issue(test_issue()).to_json().unwrap();
    assert!(json.contains("\"type\":\"issue\""));
    assert!(json.contains("\"createdAt\""));
}
