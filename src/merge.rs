use ahash::AHashMap;
use serde::Serialize;
use tracing::debug;

use crate::spatial::Located;
use crate::types::{Coordinate, Post, PostSummary, User, UserId};

/// A user together with the posts they wrote, in source order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedUser {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<PostSummary>,
}

impl Located for MergedUser {
    fn username(&self) -> &str { &self.user.username }
    fn coordinate(&self) -> Coordinate { self.user.coordinate }
}

/// Attach each post to the user whose id matches its `owner_id`.
///
/// The result has one entry per user, in the order of `users`. Posts keep
/// their relative order; only id, owner and title are retained. Posts whose
/// owner is not among `users` are left out.
pub fn merge(users: &[User], posts: &[Post]) -> Vec<MergedUser> {
    let (by_owner, orphaned) = bucket_by_owner(users, posts);
    debug!(users = users.len(), posts = posts.len(), orphaned, "merged posts onto users");

    users.iter()
        .map(|user| MergedUser {
            user: user.clone(),
            posts: by_owner.get(&user.id).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Post summaries keyed by owner, with one (possibly empty) bucket per known
/// user id, plus the number of posts whose owner has no bucket.
fn bucket_by_owner(users: &[User], posts: &[Post]) -> (AHashMap<UserId, Vec<PostSummary>>, usize) {
    let mut by_owner: AHashMap<UserId, Vec<PostSummary>> =
        users.iter().map(|user| (user.id, Vec::new())).collect();
    let mut orphaned = 0;
    for post in posts {
        match by_owner.get_mut(&post.owner_id) {
            Some(bucket) => bucket.push(post.summary()),
            None => orphaned += 1,
        }
    }
    (by_owner, orphaned)
}
