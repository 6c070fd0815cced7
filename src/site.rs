use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::csv_writer::CsvExporter;
use crate::loader::{LoadOutcome, PortfolioLoader};
use crate::network::Network;
use crate::render::{page_file_name, render_page, STYLESHEET, STYLESHEET_FILE};
use crate::rpc::RpcTransport;
use crate::state::PortfolioState;

pub const INDEX_FILE: &str = "index.html";
pub const EXPORT_FILE: &str = "portfolio.csv";

/// Loads `selected` first, then toggles through the other networks, writing
/// one page per network so every "Switch to" link resolves. `index.html`
/// shows `selected`. Returns the paths written.
pub async fn build_site<T: RpcTransport>(
    loader: &PortfolioLoader<T>,
    selected: Network,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    let mut loaded = Vec::new();
    let mut index_html = None;

    let export_path = out_dir.join(EXPORT_FILE);
    let mut csv_writer = CsvExporter::new(&export_path)?;
    csv_writer.write_header()?;

    let state = PortfolioState::init(selected);
    let mut outcome = loader.refresh(&state, selected).await;

    loop {
        let snapshot = state.snapshot();
        match &outcome {
            LoadOutcome::Applied => info!("Loaded portfolio from {}", snapshot.network),
            LoadOutcome::Fallback { notice } => warn!("{}", notice),
            LoadOutcome::Superseded => info!("Load for {} was superseded", snapshot.network),
        }

        let html = render_page(&snapshot, loader.object_id());
        written.push(write_file(&out_dir.join(page_file_name(snapshot.network)), &html)?);
        csv_writer.write_snapshot(&snapshot)?;
        if snapshot.network == selected {
            index_html = Some(html);
        }
        loaded.push(snapshot.network);

        if loaded.contains(&snapshot.network.toggle()) {
            break;
        }
        outcome = loader.toggle(&state).await;
    }

    for network in Network::all().filter(|n| !loaded.contains(n)) {
        warn!("{} is not reachable by toggling; its page was not written", network);
    }

    if let Some(html) = index_html {
        written.push(write_file(&out_dir.join(INDEX_FILE), &html)?);
    }
    written.push(write_file(&out_dir.join(STYLESHEET_FILE), STYLESHEET)?);
    csv_writer.finalize()?;
    written.push(export_path);

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}
