use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::types::{Post, User};

/// Decode a JSON array of users.
pub fn parse_users(bytes: &[u8]) -> Result<Vec<User>> {
    parse_collection(bytes, "user")
}

/// Decode a JSON array of posts.
pub fn parse_posts(bytes: &[u8]) -> Result<Vec<Post>> {
    parse_collection(bytes, "post")
}

/// Elements are decoded one at a time so that an error names the offending
/// element, e.g. `post #4: missing field `title``.
fn parse_collection<T: DeserializeOwned>(bytes: &[u8], kind: &str) -> Result<Vec<T>> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(bytes)
        .with_context(|| format!("Failed to parse {kind} collection (expected a JSON array)"))?;

    items.into_iter()
        .enumerate()
        .map(|(i, item)| serde_json::from_value(item).with_context(|| format!("{kind} #{i}")))
        .collect()
}
