//! Getting the raw collections in and out of the process.
//!
//! - `json` - decoding JSON arrays of users/posts into typed values
//! - `source` - where collections come from (directory, memory, HTTP)
//! - `fs` - output/data directory checks and atomic file writes

mod fs;
mod json;
mod source;

pub use fs::{prepare_output_dir, write_atomic};
pub use json::{parse_posts, parse_users};
pub use source::{load, save, DiskSource, MemSource, Source, DEFAULT_BASE_URL, POSTS, USERS};

#[cfg(feature = "download")]
pub use source::HttpSource;
