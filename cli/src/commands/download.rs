use anyhow::Result;
use geomatch::io::{prepare_output_dir, save};
use tracing::info;

use crate::cli::{Cli, DownloadArgs};

pub fn run(_cli: &Cli, args: &DownloadArgs) -> Result<()> {
    let out_dir = &args.output.clone().unwrap_or(".".into());
    prepare_output_dir(out_dir)?;

    let source = super::open_source(None, args.url.as_deref())?;
    for path in save(&*source, out_dir, args.force)? {
        info!("[download] wrote {}", path.display());
    }

    Ok(())
}
