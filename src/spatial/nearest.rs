use ahash::AHashMap;
use anyhow::{bail, Result};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use tracing::{debug, trace};

use crate::types::{Coordinate, User};

/// Anything that can take part in a nearest-neighbour search: a unique
/// username and a position.
pub trait Located {
    fn username(&self) -> &str;
    fn coordinate(&self) -> Coordinate;
}

impl Located for User {
    fn username(&self) -> &str { &self.username }
    fn coordinate(&self) -> Coordinate { self.coordinate }
}

/// The closest other entity and its distance in metres.
#[derive(Debug)]
pub struct Neighbor<'a, T> {
    pub entity: &'a T,
    pub distance_m: u64,
}

impl<T> Clone for Neighbor<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Neighbor<'_, T> {}

/// Result slot for one input entity. `neighbor` is `None` only when the
/// input holds no other entity.
#[derive(Debug)]
pub struct Nearest<'a, T> {
    pub entity: &'a T,
    pub neighbor: Option<Neighbor<'a, T>>,
}

/// Nearest neighbour of every input entity, in input order, addressable by
/// username.
#[derive(Debug)]
pub struct NearestNeighbors<'a, T> {
    entries: Vec<Nearest<'a, T>>,
    index: AHashMap<&'a str, usize>,
}

impl<'a, T: Located> NearestNeighbors<'a, T> {
    /// Number of entries (always the number of input entities).
    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Look up the entry for `username`, or `None` if no such entity was given.
    pub fn get(&self, username: &str) -> Option<&Nearest<'a, T>> {
        self.index.get(username).map(|&i| &self.entries[i])
    }

    /// Iterate over entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Nearest<'a, T>> + '_ {
        self.entries.iter()
    }
}

/// Find, for every entity, the closest *other* entity by great-circle
/// distance.
///
/// Each unordered pair is measured once (O(N²)). The first candidate seen
/// for an entity is always taken; later candidates replace it only when
/// strictly closer, so ties keep the earlier entity. A zero distance is a
/// regular candidate.
///
/// Fails if two entities share a username, since results are keyed by it.
pub fn find_nearest<T: Located>(entities: &[T]) -> Result<NearestNeighbors<'_, T>> {
    let mut index = AHashMap::with_capacity(entities.len());
    for (i, entity) in entities.iter().enumerate() {
        if index.insert(entity.username(), i).is_some() {
            bail!("duplicate username {:?}: usernames must be unique to key nearest neighbours", entity.username());
        }
    }

    let coords: Vec<Coordinate> = entities.iter().map(Located::coordinate).collect();
    let mut best: Vec<Option<(usize, u64)>> = vec![None; entities.len()];

    for i in 0..entities.len() {
        for j in i + 1..entities.len() {
            let distance = coords[i].distance_to(&coords[j]);
            if offer(&mut best[i], j, distance) {
                trace!(from = entities[i].username(), to = entities[j].username(), distance, "closer neighbour");
            }
            if offer(&mut best[j], i, distance) {
                trace!(from = entities[j].username(), to = entities[i].username(), distance, "closer neighbour");
            }
        }
    }

    debug!(entities = entities.len(), pairs = entities.len() * entities.len().saturating_sub(1) / 2, "nearest neighbours computed");

    let entries = entities.iter().zip(best)
        .map(|(entity, best)| Nearest {
            entity,
            neighbor: best.map(|(j, distance_m)| Neighbor { entity: &entities[j], distance_m }),
        })
        .collect();

    Ok(NearestNeighbors { entries, index })
}

/// Record `candidate` in `slot` if the slot is empty or `distance` is
/// strictly smaller than the current best. Returns whether it was recorded.
fn offer(slot: &mut Option<(usize, u64)>, candidate: usize, distance: u64) -> bool {
    match slot {
        Some((_, current)) if *current <= distance => false,
        _ => {
            *slot = Some((candidate, distance));
            true
        }
    }
}

impl<T: Located> Serialize for Neighbor<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Neighbor", 2)?;
        state.serialize_field("username", self.entity.username())?;
        state.serialize_field("distance_m", &self.distance_m)?;
        state.end()
    }
}
