// Command line parsing and run configuration.
// Every option has a default so a bare invocation performs a full run.

use std::path::PathBuf;

use clap::Parser;

/// Default location of the fetched tags cache.
pub const DEFAULT_TAGS_FILE: &str = "tags.json";
/// Default location of the exported edge list.
pub const DEFAULT_EDGES_FILE: &str = "tags.csv";
/// Default Delicious API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.delicious.com";
/// Default number of bookmarks requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// JSON cache of fetched tag sets
    #[arg(long, default_value = DEFAULT_TAGS_FILE)]
    pub tags_file: PathBuf,

    /// Output edge list (CSV)
    #[arg(long, default_value = DEFAULT_EDGES_FILE)]
    pub edges_file: PathBuf,

    /// Delicious OAuth access token, only needed when the cache is missing
    #[arg(long, env = "DELICIOUS_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the Delicious API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Bookmarks requested per API page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// Only fetch bookmarks carrying this tag
    #[arg(long)]
    pub tag: Option<String>,
}

/// Settings shared by the tag loader and edge builder.
#[derive(Debug, Clone)]
pub struct Config {
    pub tags_file: PathBuf,
    pub edges_file: PathBuf,
    pub token: Option<String>,
    pub api_base: String,
    pub page_size: u32,
    pub tag: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags_file: PathBuf::from(DEFAULT_TAGS_FILE),
            edges_file: PathBuf::from(DEFAULT_EDGES_FILE),
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            tag: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            tags_file: cli.tags_file,
            edges_file: cli.edges_file,
            token: cli.token.filter(|t| !t.trim().is_empty()),
            api_base: cli.api_base.trim_end_matches('/').to_string(),
            page_size: cli.page_size,
            tag: cli.tag,
        }
    }
}
