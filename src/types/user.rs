use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::{Coordinate, UserId};

/// A user profile reduced to what the pipeline needs: identity and location.
///
/// Decodes from either the source shape, where the position lives under
/// `address.geo`, or the flat shape with a top-level `geo`. Every other
/// source field (name, email, company, ...) is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUser")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(rename = "geo")]
    pub coordinate: Coordinate,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, coordinate: Coordinate) -> Self {
        Self { id, username: username.into(), coordinate }
    }
}

#[derive(Deserialize)]
struct RawAddress {
    #[serde(default)]
    geo: Option<Coordinate>,
}

#[derive(Deserialize)]
struct RawUser {
    id: UserId,
    username: String,
    #[serde(default)]
    geo: Option<Coordinate>,
    #[serde(default)]
    address: Option<RawAddress>,
}

impl TryFrom<RawUser> for User {
    type Error = anyhow::Error;

    fn try_from(raw: RawUser) -> Result<Self> {
        let coordinate = raw.geo
            .or_else(|| raw.address.and_then(|address| address.geo))
            .ok_or_else(|| anyhow!("user {} ({:?}) has no coordinate", raw.id, raw.username))?;
        Ok(Self { id: raw.id, username: raw.username, coordinate })
    }
}
