mod constants;
mod csv_writer;
mod error;
mod loader;
mod models;
mod network;
mod render;
mod rpc;
mod site;
mod state;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::constants::PORTFOLIO_OBJECT_ID;
use crate::loader::PortfolioLoader;
use crate::network::Network;
use crate::rpc::HttpTransport;
use crate::site::{build_site, INDEX_FILE};

#[derive(Debug, Parser)]
#[command(about = "Render the portfolio page, overlaying fields read from a Sui object")]
struct Args {
    /// Network shown on index.html and queried first
    #[arg(long, value_enum, default_value_t = Network::Mainnet)]
    network: Network,

    /// Portfolio object to read
    #[arg(long, default_value = PORTFOLIO_OBJECT_ID)]
    object_id: String,

    /// Directory the pages, stylesheet and CSV export are written to
    #[arg(long, default_value = "site")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting portfolio page build");

    let loader = PortfolioLoader::new(HttpTransport::new(), args.object_id);
    let written = build_site(&loader, args.network, &args.out_dir).await?;

    info!(
        "Build complete! {} files written, open {}",
        written.len(),
        args.out_dir.join(INDEX_FILE).display()
    );

    Ok(())
}
