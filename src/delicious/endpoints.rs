// Delicious API endpoint functions.
// Provides typed methods for fetching bookmarks, including paging through a whole account.

use log::{debug, info};

use crate::error::Result;

use super::BookmarkSource;
use super::client::{DeliciousClient, LazyClient};
use super::types::{Bookmark, PostsResponse};

impl DeliciousClient {
    /// Get one page of bookmarks, newest first.
    pub async fn get_bookmarks(
        &self,
        start: u32,
        results: u32,
        tag: Option<&str>,
    ) -> Result<Vec<Bookmark>> {
        let start = start.to_string();
        let results = results.to_string();
        let mut params = vec![
            ("format", "json"),
            ("start", start.as_str()),
            ("results", results.as_str()),
        ];
        if let Some(tag) = tag {
            params.push(("tag", tag));
        }

        let response = self.get_with_params("/v1/posts/all", &params).await?;
        let wrapper: PostsResponse = response.json().await?;
        Ok(wrapper.posts)
    }
}

impl BookmarkSource for DeliciousClient {
    /// Page through every bookmark until the API returns a short page.
    async fn fetch_all(&mut self) -> Result<Vec<Bookmark>> {
        let mut bookmarks = Vec::new();
        let mut start = 0u32;

        loop {
            let page = self
                .get_bookmarks(start, self.page_size, self.tag.as_deref())
                .await?;
            let count = page.len();
            debug!("fetched {} bookmarks starting at {}", count, start);

            bookmarks.extend(page);
            if count < self.page_size as usize {
                break;
            }
            start = start.saturating_add(count as u32);
        }

        info!("fetched {} bookmarks from Delicious", bookmarks.len());
        Ok(bookmarks)
    }
}

impl BookmarkSource for LazyClient<'_> {
    async fn fetch_all(&mut self) -> Result<Vec<Bookmark>> {
        self.client()?.fetch_all().await
    }
}
