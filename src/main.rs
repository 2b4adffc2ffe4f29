use anyhow::Context;
use clap::Parser;
use log::info;

use tag_graph::config::{Cli, Config};
use tag_graph::delicious::LazyClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Cli::parse());
    let mut source = LazyClient::new(&config);

    let summary = tag_graph::run(&config, &mut source)
        .await
        .context("tag graph run failed")?;

    if let Some(edges) = summary.edges {
        info!("done: {} bookmarks, {} edges", summary.bookmarks, edges);
    }
    Ok(())
}
