mod distance;
mod nearest;

pub use distance::{distance_meters, point_distance, EARTH_RADIUS_M};
pub use nearest::{find_nearest, Located, Nearest, NearestNeighbors, Neighbor};
