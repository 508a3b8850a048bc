mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let success = Cli::parse().run().await?;

    if !success {
        std::process::exit(1);
    }

    Ok(())
}
