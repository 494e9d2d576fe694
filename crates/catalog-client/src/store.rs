//! Catalog store trait and error type
//!
//! This module defines the core `CatalogStore` trait that all backend
//! implementations must satisfy.

use crate::types::{ArtistRecord, DeliverableRecord, ReleaseRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors a store lookup can produce.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the query.
    #[error("backend error: {0}")]
    Backend(String),

    /// The requested collection is not reachable right now.
    #[error("collection unavailable: {0}")]
    Unavailable(String),
}

/// Catalog entity lookup
///
/// Defines the interface the dock uses to search catalog collections.
/// Every method performs a case-insensitive substring match against the
/// entity display name and returns at most `limit` records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_client::{ArtistRecord, CatalogStore, StoreError};
///
/// async fn lookup(store: &dyn CatalogStore) -> Result<Vec<ArtistRecord>, StoreError> {
///     store.find_artists("miles", 10).await
/// }
/// ```
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Find artists whose name contains `term` (case-insensitive)
    async fn find_artists(&self, term: &str, limit: usize)
        -> Result<Vec<ArtistRecord>, StoreError>;

    /// Find releases whose title contains `term` (case-insensitive)
    async fn find_releases(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ReleaseRecord>, StoreError>;

    /// Find deliverables (files and folders) whose name contains `term`
    /// (case-insensitive)
    async fn find_deliverables(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<DeliverableRecord>, StoreError>;
}
