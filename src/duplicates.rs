use ahash::AHashSet;
use tracing::debug;

use crate::types::Post;

/// Titles that occur more than once among `posts`.
///
/// Each repeated title is reported once, in the order in which its first
/// repeat shows up while scanning `posts` front to back.
pub fn find_duplicate_titles(posts: &[Post]) -> Vec<String> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(posts.len());
    let mut reported: AHashSet<&str> = AHashSet::new();
    let mut repeated = Vec::new();

    for post in posts {
        let title = post.title.as_str();
        if !seen.insert(title) && reported.insert(title) {
            repeated.push(title.to_owned());
        }
    }

    debug!(posts = posts.len(), distinct = seen.len(), repeated = repeated.len(), "scanned post titles");
    repeated
}
