//! In-memory catalog store
//!
//! A linear-scan implementation of [`CatalogStore`]. Used by the binary as
//! a stand-in backend and by tests as a deterministic fixture.

use crate::store::{CatalogStore, StoreError};
use crate::types::{ArtistRecord, DeliverableRecord, ReleaseRecord};
use async_trait::async_trait;

/// In-memory catalog backed by plain vectors
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    artists: Vec<ArtistRecord>,
    releases: Vec<ReleaseRecord>,
    deliverables: Vec<DeliverableRecord>,
}

impl MemoryCatalog {
    pub fn new(
        artists: Vec<ArtistRecord>,
        releases: Vec<ReleaseRecord>,
        deliverables: Vec<DeliverableRecord>,
    ) -> Self {
        Self {
            artists,
            releases,
            deliverables,
        }
    }
}

/// Case-insensitive contains check shared by all three collections
fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn find_artists(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ArtistRecord>, StoreError> {
        Ok(self
            .artists
            .iter()
            .filter(|a| name_contains(&a.name, term))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_releases(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ReleaseRecord>, StoreError> {
        Ok(self
            .releases
            .iter()
            .filter(|r| name_contains(&r.title, term))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_deliverables(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<DeliverableRecord>, StoreError> {
        Ok(self
            .deliverables
            .iter()
            .filter(|d| name_contains(&d.name, term))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeliverableKind;

    fn fixture() -> MemoryCatalog {
        MemoryCatalog::new(
            vec![
                ArtistRecord {
                    id: "a1".into(),
                    name: "Miles Davis".into(),
                    region: Some("Alton".into()),
                    country: Some("USA".into()),
                },
                ArtistRecord {
                    id: "a2".into(),
                    name: "Milton Nascimento".into(),
                    region: None,
                    country: Some("Brazil".into()),
                },
                ArtistRecord {
                    id: "a3".into(),
                    name: "Nina Simone".into(),
                    region: None,
                    country: Some("USA".into()),
                },
            ],
            vec![ReleaseRecord {
                id: "r1".into(),
                title: "Milestones".into(),
                release_type: Some("Album".into()),
                catalog_number: Some("CL-1193".into()),
                status: Some("Delivered".into()),
            }],
            vec![DeliverableRecord {
                id: "d1".into(),
                name: "milestones-master.wav".into(),
                kind: DeliverableKind::File,
                file_type: Some("WAV".into()),
                status: Some("Uploaded".into()),
                release_id: Some("r1".into()),
            }],
        )
    }

    #[tokio::test]
    async fn find_artists_is_case_insensitive() {
        let catalog = fixture();
        let hits = catalog.find_artists("MIL", 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Miles Davis");
        assert_eq!(hits[1].name, "Milton Nascimento");
    }

    #[tokio::test]
    async fn find_artists_respects_limit() {
        let catalog = fixture();
        let hits = catalog.find_artists("mil", 1).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn find_releases_matches_title_substring() {
        let catalog = fixture();
        let hits = catalog.find_releases("stone", 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "r1");
    }

    #[tokio::test]
    async fn no_match_returns_empty() {
        let catalog = fixture();
        assert!(catalog.find_artists("zzz", 10).await.unwrap().is_empty());
        assert!(catalog.find_deliverables("zzz", 10).await.unwrap().is_empty());
    }
}
