use std::path::PathBuf;

/// Users, posts and nearest neighbours
#[derive(clap::Parser, Debug)]
#[command(name = "geomatch", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print post counts, repeated titles and nearest neighbours
    Report(ReportArgs),

    /// Fetch users and posts and store them as JSON files
    Download(DownloadArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Directory containing users.json and posts.json
    #[arg(short, long, env = "GEOMATCH_DIR", conflicts_with = "url", value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Base URL serving /users and /posts, defaults to the public sample API
    #[arg(short, long, env = "GEOMATCH_URL", value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Base URL serving /users and /posts, defaults to the public sample API
    #[arg(short, long, env = "GEOMATCH_URL", value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}
