use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::duplicates::find_duplicate_titles;
use crate::merge::{merge, MergedUser};
use crate::spatial::{find_nearest, Located};
use crate::types::{Post, User, UserId};

/// The nearest other user, reduced to identity and distance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NeighborSummary {
    pub id: UserId,
    pub username: String,
    pub distance_m: u64,
}

/// Nearest-neighbour entry for one user. `neighbor` is `None` when the
/// user is the only one in the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NearestUser {
    pub username: String,
    pub neighbor: Option<NeighborSummary>,
}

/// Everything derived from one pair of input collections.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub users: Vec<MergedUser>,
    pub duplicate_titles: Vec<String>,
    pub nearest: Vec<NearestUser>,
}

/// Merge posts onto users, find repeated titles and every user's nearest
/// neighbour.
///
/// Fails only if two users share a username.
pub fn analyze(users: &[User], posts: &[Post]) -> Result<Report> {
    let start = Instant::now();
    let merged = merge(users, posts);
    debug!(elapsed = ?start.elapsed(), "merge");

    let start = Instant::now();
    let duplicate_titles = find_duplicate_titles(posts);
    debug!(elapsed = ?start.elapsed(), "duplicate titles");

    let start = Instant::now();
    let nearest = find_nearest(&merged)
        .context("Failed to compute nearest neighbours")?
        .iter()
        .map(|entry| NearestUser {
            username: entry.entity.username().to_owned(),
            neighbor: entry.neighbor.map(|n| NeighborSummary {
                id: n.entity.user.id,
                username: n.entity.user.username.clone(),
                distance_m: n.distance_m,
            }),
        })
        .collect();
    debug!(elapsed = ?start.elapsed(), "nearest neighbours");

    Ok(Report { users: merged, duplicate_titles, nearest })
}
