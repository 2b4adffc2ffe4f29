// tag-graph: turn Delicious bookmark tags into a co-occurrence edge list.
// Loads tags (cache first), then writes the graph unless it already exists.

pub mod cache;
pub mod config;
pub mod delicious;
pub mod error;
pub mod graph;
pub mod tags;

use log::info;

use crate::config::Config;
use crate::delicious::BookmarkSource;
use crate::error::Result;

/// What a run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of bookmarks (tag sets) loaded.
    pub bookmarks: usize,
    /// Edges written, or `None` when an existing edge file was kept.
    pub edges: Option<usize>,
}

/// Load tags then build the edge list if `config.edges_file` is absent.
pub async fn run<S: BookmarkSource>(config: &Config, source: &mut S) -> Result<RunSummary> {
    let tags = tags::load_tags(config, source).await?;
    println!("Loaded {} bookmarks", tags.len());

    if config.edges_file.exists() {
        info!(
            "{} already exists, skipping edge export",
            config.edges_file.display()
        );
        return Ok(RunSummary {
            bookmarks: tags.len(),
            edges: None,
        });
    }

    let edges = graph::build_edges(config, &tags)?;
    Ok(RunSummary {
        bookmarks: tags.len(),
        edges: Some(edges),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delicious::Bookmark;
    use std::fs;
    use tempfile::TempDir;

    struct StaticSource(Vec<Vec<&'static str>>);

    impl BookmarkSource for StaticSource {
        async fn fetch_all(&mut self) -> Result<Vec<Bookmark>> {
            Ok(self
                .0
                .iter()
                .map(|tags| Bookmark {
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                    ..Default::default()
                })
                .collect())
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        Config {
            tags_file: dir.path().join("tags.json"),
            edges_file: dir.path().join("tags.csv"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_cold_run_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let mut source = StaticSource(vec![vec!["a", "b"], vec!["b", "a"], vec!["a", "c"]]);

        let summary = run(&config, &mut source).await.unwrap();

        assert_eq!(
            summary,
            RunSummary {
                bookmarks: 3,
                edges: Some(2)
            }
        );
        assert_eq!(
            fs::read_to_string(&config.tags_file).unwrap(),
            r#"[["a","b"],["b","a"],["a","c"]]"#
        );
        assert_eq!(
            fs::read_to_string(&config.edges_file).unwrap(),
            "Source,Target,Weight,Type\na,b,2,Undirected\na,c,1,Undirected\n"
        );
    }

    #[tokio::test]
    async fn test_existing_edge_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.tags_file, r#"[["x","y","z"]]"#).unwrap();
        fs::write(&config.edges_file, "sentinel").unwrap();

        let summary = run(&config, &mut StaticSource(vec![])).await.unwrap();

        assert_eq!(summary.bookmarks, 1);
        assert_eq!(summary.edges, None);
        assert_eq!(fs::read_to_string(&config.edges_file).unwrap(), "sentinel");
    }

    #[tokio::test]
    async fn test_warm_run_needs_no_token() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(&config.tags_file, r#"[["x","y","z"]]"#).unwrap();
        let mut source = delicious::LazyClient::new(&config);

        let summary = run(&config, &mut source).await.unwrap();

        assert_eq!(summary.edges, Some(3));
        assert_eq!(
            fs::read_to_string(&config.edges_file).unwrap(),
            "Source,Target,Weight,Type\nx,y,1,Undirected\nx,z,1,Undirected\ny,z,1,Undirected\n"
        );
    }
}
