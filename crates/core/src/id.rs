// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Prefix shared by every issue id.
pub const ID_PREFIX: &str = "iss";

/// Generate an issue ID from title, timestamp, and store sequence number.
/// Format: iss-{hash} where hash is first 8 hex chars of SHA256(title + timestamp + seq)
pub fn generate_id(title: &str, created_at: &DateTime<Utc>, seq: u64) -> String {
    let input = format!("{}{}{}", title, created_at.to_rfc3339(), seq);
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]);
    format!("{}-{}", ID_PREFIX, short_hash)
}

/// Generate a unique ID, handling collisions by appending incrementing suffix.
pub fn generate_unique_id<F>(title: &str, created_at: &DateTime<Utc>, seq: u64, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(title, created_at, seq);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
