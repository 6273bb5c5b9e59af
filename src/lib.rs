#![doc = "Users, their posts, repeated titles and nearest neighbours"]
mod duplicates;
mod merge;
mod pipeline;
mod report;
mod types;

pub mod io;
pub mod spatial;

#[doc(inline)]
pub use types::{Coordinate, Post, PostId, PostSummary, User, UserId};

#[doc(inline)]
pub use merge::{merge, MergedUser};

#[doc(inline)]
pub use duplicates::find_duplicate_titles;

#[doc(inline)]
pub use spatial::{distance_meters, find_nearest, Located, NearestNeighbors};

#[doc(inline)]
pub use pipeline::{analyze, NearestUser, NeighborSummary, Report};
