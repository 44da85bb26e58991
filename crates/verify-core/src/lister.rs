//! Marker-based pagination over a remote listing.

use crate::{Entry, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use tracing::debug;

/// One store's paged listing.
///
/// Implementations return items in strictly ascending order of
/// [`PageSource::item_key`], starting strictly after `marker`. An empty page
/// means the listing is finished.
#[async_trait]
pub trait PageSource: Send {
    /// Raw listing item, carrying whatever metadata `transform` needs.
    type Item: Send;

    /// The raw key used as the marker for the following page.
    fn item_key(item: &Self::Item) -> &str;

    /// Fetch the page that starts after `marker` (`None` for the first page).
    async fn next_page(&mut self, marker: Option<&str>) -> Result<Vec<Self::Item>>;

    /// Turn a raw item into a comparable entry.
    async fn transform(&mut self, item: Self::Item) -> Result<Entry>;
}

/// A lazy, forward-only, non-restartable sequence of entries.
#[async_trait]
pub trait EntryStream: Send {
    /// Returns the next entry, or `Ok(None)` once the sequence has ended.
    async fn try_next(&mut self) -> Result<Option<Entry>>;
}

/// Cursor that drives a [`PageSource`] one page at a time.
///
/// Only the current page is held in memory. Once an empty page has been seen
/// the lister reports end-of-sequence forever without fetching again.
pub struct PagedLister<S: PageSource> {
    source: S,
    last_key: Option<String>,
    buffer: VecDeque<S::Item>,
    pages_fetched: u64,
    exhausted: bool,
}

impl<S: PageSource> PagedLister<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_key: None,
            buffer: VecDeque::new(),
            pages_fetched: 0,
            exhausted: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of page requests issued so far, including the final empty one.
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    async fn fill(&mut self) -> Result<()> {
        let page = self.source.next_page(self.last_key.as_deref()).await?;
        self.pages_fetched += 1;
        debug!(
            "Fetched page {} after marker {:?}: {} items",
            self.pages_fetched,
            self.last_key,
            page.len()
        );

        match page.last() {
            Some(last) => self.last_key = Some(S::item_key(last).to_string()),
            None => self.exhausted = true,
        }
        self.buffer = page.into();
        Ok(())
    }
}

#[async_trait]
impl<S: PageSource> EntryStream for PagedLister<S> {
    async fn try_next(&mut self) -> Result<Option<Entry>> {
        if self.exhausted {
            return Ok(None);
        }
        if self.buffer.is_empty() {
            self.fill().await?;
        }
        match self.buffer.pop_front() {
            Some(item) => self.source.transform(item).await.map(Some),
            None => Ok(None),
        }
    }
}
