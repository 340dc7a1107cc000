use clap::Parser;
use std::path::PathBuf;

use guidedesk::config::Config;
use guidedesk::logging::init_tracing;
use guidedesk::ui::runtime;

/// Terminal browser for study-abroad country guides and student reviews.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Override the content API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Load configuration from an explicit path instead of the default
    /// config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url.trim_end_matches('/').to_string();
        config.validate()?;
    }

    runtime::run(config)
}
