pub mod download;
pub mod report;

use anyhow::Result;
use geomatch::io::Source;

/// Pick the collection source for a command: a local directory if given,
/// otherwise an HTTP base URL (the public sample API by default).
pub(crate) fn open_source(dir: Option<&std::path::Path>, url: Option<&str>) -> Result<Box<dyn Source>> {
    if let Some(dir) = dir {
        return Ok(Box::new(geomatch::io::DiskSource::open(dir)?));
    }
    http_source(url.unwrap_or(geomatch::io::DEFAULT_BASE_URL))
}

#[cfg(feature = "download")]
fn http_source(url: &str) -> Result<Box<dyn Source>> {
    Ok(Box::new(geomatch::io::HttpSource::new(url)?))
}

#[cfg(not(feature = "download"))]
fn http_source(url: &str) -> Result<Box<dyn Source>> {
    anyhow::bail!("Cannot fetch {url}: built without the `download` feature (use --dir)")
}
