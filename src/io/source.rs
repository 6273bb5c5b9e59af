use std::path::{Path, PathBuf};

use ahash::AHashMap;
use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info};

use super::fs::{check_data_dir, write_atomic};
use super::json::{parse_posts, parse_users};
use crate::types::{Post, User};

/// Collection name of the user profiles.
pub const USERS: &str = "users";

/// Collection name of the posts.
pub const POSTS: &str = "posts";

/// Public service the collections are fetched from when nothing else is given.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Read-only access to raw collections by name ("users", "posts").
pub trait Source {
    fn get(&self, name: &str) -> Result<Vec<u8>>;

    /// Human-readable location of `name`, for logs and errors.
    fn describe(&self, name: &str) -> String;
}

/// Directory holding `users.json` and `posts.json`.
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    /// Like `new`, but fails if `root` is not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        check_data_dir(&root)?;
        Ok(Self { root })
    }

    fn full(&self, name: &str) -> PathBuf { self.root.join(format!("{name}.json")) }
}

impl Source for DiskSource {
    fn get(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.full(name);
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn describe(&self, name: &str) -> String { self.full(name).display().to_string() }
}

/// In-memory collections, keyed by name.
#[derive(Default, Clone)]
pub struct MemSource {
    files: AHashMap<String, Vec<u8>>,
}

impl MemSource {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.to_owned(), bytes.into());
        self
    }
}

impl Source for MemSource {
    fn get(&self, name: &str) -> Result<Vec<u8>> {
        self.files.get(name)
            .cloned()
            .ok_or_else(|| anyhow!("No collection named {name:?} in memory source"))
    }

    fn describe(&self, name: &str) -> String { format!("memory:{name}") }
}

#[cfg(feature = "download")]
pub use http::HttpSource;

#[cfg(feature = "download")]
mod http {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use reqwest::{blocking::Client, redirect::Policy};

    use super::Source;

    /// Collections served as JSON at `<base>/<name>`.
    pub struct HttpSource {
        base: String,
        client: Client,
    }

    impl HttpSource {
        pub fn new(base: &str) -> Result<Self> {
            let client = Client::builder()
                .user_agent(concat!("geomatch/", env!("CARGO_PKG_VERSION")))
                .redirect(Policy::limited(10))
                .timeout(Duration::from_secs(30))
                .build()
                .context("Failed to build HTTP client")?;
            Ok(Self { base: base.trim_end_matches('/').to_owned(), client })
        }
    }

    impl Source for HttpSource {
        fn get(&self, name: &str) -> Result<Vec<u8>> {
            let url = self.describe(name);
            let resp = self.client.get(&url)
                .send()
                .with_context(|| format!("GET {url}"))?
                .error_for_status()
                .with_context(|| format!("GET {url} returned error status"))?;
            let body = resp.bytes().with_context(|| format!("read body of {url}"))?;
            Ok(body.to_vec())
        }

        fn describe(&self, name: &str) -> String { format!("{}/{name}", self.base) }
    }

}

/// Fetch and decode both collections from `src`.
pub fn load(src: &dyn Source) -> Result<(Vec<User>, Vec<Post>)> {
    let users = parse_users(&src.get(USERS)?)
        .with_context(|| format!("Invalid users from {}", src.describe(USERS)))?;
    let posts = parse_posts(&src.get(POSTS)?)
        .with_context(|| format!("Invalid posts from {}", src.describe(POSTS)))?;
    debug!(users = users.len(), posts = posts.len(), "loaded collections");
    Ok((users, posts))
}

/// Copy both collections from `src` into `out_dir` as `users.json` and
/// `posts.json`. Nothing is written unless both fetch and decode, and
/// (without `force`) neither target exists yet. Returns the written paths.
pub fn save(src: &dyn Source, out_dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let users = src.get(USERS)?;
    let user_count = parse_users(&users)
        .with_context(|| format!("Invalid users from {}", src.describe(USERS)))?
        .len();
    let posts = src.get(POSTS)?;
    let post_count = parse_posts(&posts)
        .with_context(|| format!("Invalid posts from {}", src.describe(POSTS)))?
        .len();

    let staged = [(USERS, users, user_count), (POSTS, posts, post_count)]
        .map(|(name, bytes, count)| (name, out_dir.join(format!("{name}.json")), bytes, count));

    if !force {
        if let Some((_, path, ..)) = staged.iter().find(|(_, path, ..)| path.exists()) {
            bail!("Refusing to overwrite existing file: {} (use --force)", path.display());
        }
    }

    let mut written = Vec::with_capacity(staged.len());
    for (name, path, bytes, count) in staged {
        info!(from = %src.describe(name), to = %path.display(), count, "saving {name}");
        write_atomic(&path, &bytes, force)?;
        written.push(path);
    }
    Ok(written)
}
