use anyhow::Result;
use clap::Parser;
use cv_site::cli::{run, Cli};
use cv_site::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    logging::init(cli.log_file.as_deref())?;

    run(cli).await
}
