//! Show listing data source.

use async_trait::async_trait;

use super::SourceStream;
use crate::error::SourceError;
use crate::models::{Page, ShowList, SourceKind};

/// A paged show listing backed by storage the source manages itself.
///
/// `stream` and `refresh` are independent: refreshing mutates the underlying
/// storage, and any new value reaches subscribers through `stream`.
///
/// # Example
///
/// ```ignore
/// use discover::traits::DataSource;
/// use discover::models::Page;
///
/// async fn first_page<S: DataSource>(source: &S) {
///     let mut shows = source.stream(Page::FIRST);
///     source.refresh(Page::FIRST).await?;
/// }
/// ```
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Which listing this source backs.
    fn kind(&self) -> SourceKind;

    /// Subscribe to the listing for `page`.
    ///
    /// The stream is continuous and replays the latest stored value on
    /// subscribe, when one exists.
    fn stream(&self, page: Page) -> SourceStream<ShowList>;

    /// Fetch fresh data for `page` into storage.
    async fn refresh(&self, page: Page) -> Result<(), SourceError>;
}
