use log::info;

use crate::cache;
use crate::config::Config;
use crate::delicious::BookmarkSource;
use crate::error::Result;

use super::TagSetCollection;

/// Load every bookmark's tags.
///
/// A cache file at `config.tags_file` is used as-is and `source` is never
/// contacted. Otherwise all bookmarks are fetched from `source`, their tag
/// lists written to the cache and returned. The cache never expires; delete
/// the file to force a refetch.
pub async fn load_tags<S: BookmarkSource>(
    config: &Config,
    source: &mut S,
) -> Result<TagSetCollection> {
    if let Some(tags) = cache::read_json::<TagSetCollection>(&config.tags_file)? {
        info!("using cached tags from {}", config.tags_file.display());
        return Ok(tags);
    }

    info!(
        "no cache at {}, fetching bookmarks",
        config.tags_file.display()
    );
    let tags: TagSetCollection = source
        .fetch_all()
        .await?
        .into_iter()
        .map(|bookmark| bookmark.tags)
        .collect();

    cache::write_json(&config.tags_file, &tags)?;
    info!("cached {} tag sets to {}", tags.len(), config.tags_file.display());

    Ok(tags)
}
