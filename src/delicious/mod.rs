// Delicious API module.
// Provides the client, response types and the bookmark source seam used by the tag loader.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{DeliciousClient, LazyClient};
pub use types::Bookmark;

use crate::error::Result;

/// Anything that can hand over the full list of an account's bookmarks.
#[allow(async_fn_in_trait)]
pub trait BookmarkSource {
    async fn fetch_all(&mut self) -> Result<Vec<Bookmark>>;
}
