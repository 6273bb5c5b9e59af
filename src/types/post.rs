use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// A post as it arrives from the source collection.
///
/// `title` is not unique across posts. `body` is carried for completeness
/// but nothing downstream of decoding reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    pub fn new(id: PostId, owner_id: UserId, title: impl Into<String>) -> Self {
        Self { id, owner_id, title: title.into(), body: None }
    }

    /// The fields of this post that are kept after merging.
    pub fn summary(&self) -> PostSummary {
        PostSummary { id: self.id, owner_id: self.owner_id, title: self.title.clone() }
    }
}

/// The subset of a post attached to its owner by the merge step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    pub title: String,
}
