use anyhow::Result;
use geomatch::{analyze, io::load};
use tracing::info;

use crate::cli::{Cli, Format, ReportArgs};

pub fn run(_cli: &Cli, args: &ReportArgs) -> Result<()> {
    let source = super::open_source(args.dir.as_deref(), args.url.as_deref())?;

    info!("[report] loading users and posts");
    let (users, posts) = load(&*source)?;

    info!("[report] analysing {} users and {} posts", users.len(), posts.len());
    let report = analyze(&users, &posts)?;

    match args.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
