mod coord;
mod id;
mod post;
mod user;

pub use coord::Coordinate;
pub use id::{PostId, UserId};
pub use post::{Post, PostSummary};
pub use user::User;
