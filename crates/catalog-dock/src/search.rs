//! Entity search aggregation
//!
//! Issues scoped lookups against the catalog store and normalizes the
//! heterogeneous records into a single result shape. `search_all` runs all
//! three scopes concurrently and interleaves the hits round-robin in the
//! fixed priority order artist → release → deliverable, so no single
//! entity type can monopolize the visible result window.
//!
//! Failure policy: a failing or timed-out scope is logged and contributes
//! an empty list; the aggregate call itself never fails.

use crate::query::SearchScope;
use catalog_client::{
    ArtistRecord, CatalogStore, DeliverableKind, DeliverableRecord, ReleaseRecord,
};
use std::time::Duration;
use strum::Display;

/// Per-scope result cap for artist and release lookups
const ARTIST_RELEASE_LIMIT: usize = 10;
/// Per-scope result cap for deliverable lookups in the all-scope case
const DELIVERABLE_LIMIT: usize = 5;
/// Cap on the interleaved all-scope result list
const MAX_RESULTS: usize = 10;
/// Result cap for a single-scope (prefixed) search
const SCOPED_LIMIT: usize = 10;

/// Bound on one scoped lookup; expiry counts as a scoped failure so the
/// pending flag can never stick
const SCOPE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which section/icon a normalized hit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SearchResultKind {
    Artist,
    Release,
    Deliverable,
    Folder,
}

/// A normalized hit from the aggregator
///
/// `id` is only unique within one kind; disambiguation is by `(kind, id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub kind: SearchResultKind,
    /// Primary display label
    pub title: String,
    /// Secondary line built from the present descriptive fields
    pub subtitle: Option<String>,
    /// Navigable path the UI follows on selection
    pub destination: String,
}

/// Join the present descriptive fields with a bullet separator
fn build_subtitle(parts: &[Option<&str>]) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|p| *p)
        .filter(|s| !s.is_empty())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(" • "))
    }
}

impl SearchResult {
    fn from_artist(record: ArtistRecord) -> Self {
        let subtitle = build_subtitle(&[record.region.as_deref(), record.country.as_deref()]);
        Self {
            destination: format!("/artists/{}", record.id),
            id: record.id,
            kind: SearchResultKind::Artist,
            title: record.name,
            subtitle,
        }
    }

    fn from_release(record: ReleaseRecord) -> Self {
        let subtitle = build_subtitle(&[
            record.release_type.as_deref(),
            record.catalog_number.as_deref(),
            record.status.as_deref(),
        ]);
        Self {
            destination: format!("/releases/{}", record.id),
            id: record.id,
            kind: SearchResultKind::Release,
            title: record.title,
            subtitle,
        }
    }

    fn from_deliverable(record: DeliverableRecord) -> Self {
        let kind = match record.kind {
            DeliverableKind::File => SearchResultKind::Deliverable,
            DeliverableKind::Folder => SearchResultKind::Folder,
        };
        let subtitle = build_subtitle(&[record.file_type.as_deref(), record.status.as_deref()]);
        Self {
            destination: format!("/deliverables/{}", record.id),
            id: record.id,
            kind,
            title: record.name,
            subtitle,
        }
    }
}

/// Run one scoped lookup, mapping failure and timeout to an empty list
async fn lookup_scope(
    store: &dyn CatalogStore,
    scope: SearchScope,
    term: &str,
    limit: usize,
) -> Vec<SearchResult> {
    let outcome = tokio::time::timeout(SCOPE_TIMEOUT, async {
        match scope {
            SearchScope::Artist => store
                .find_artists(term, limit)
                .await
                .map(|hits| hits.into_iter().map(SearchResult::from_artist).collect()),
            SearchScope::Release => store
                .find_releases(term, limit)
                .await
                .map(|hits| hits.into_iter().map(SearchResult::from_release).collect()),
            SearchScope::Deliverable => store.find_deliverables(term, limit).await.map(|hits| {
                hits.into_iter()
                    .map(SearchResult::from_deliverable)
                    .collect()
            }),
        }
    })
    .await;

    match outcome {
        Ok(Ok(results)) => results,
        Ok(Err(e)) => {
            log::warn!("Search scope {} failed: {}", scope, e);
            Vec::new()
        }
        Err(_) => {
            log::warn!("Search scope {} timed out after {:?}", scope, SCOPE_TIMEOUT);
            Vec::new()
        }
    }
}

/// Search a single entity scope (prefixed query like `a: miles`)
///
/// Empty/whitespace terms short-circuit to an empty list without touching
/// the store.
pub async fn search_scope(
    store: &dyn CatalogStore,
    scope: SearchScope,
    term: &str,
) -> Vec<SearchResult> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    lookup_scope(store, scope, term, SCOPED_LIMIT).await
}

/// Search all scopes concurrently and interleave the hits
///
/// The three lookups are issued together and awaited jointly; results are
/// merged only after all three have settled. The merged list is
/// round-robin interleaved (artist → release → deliverable) and truncated
/// to [`MAX_RESULTS`].
pub async fn search_all(store: &dyn CatalogStore, term: &str) -> Vec<SearchResult> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    let (artists, releases, deliverables) = tokio::join!(
        lookup_scope(store, SearchScope::Artist, term, ARTIST_RELEASE_LIMIT),
        lookup_scope(store, SearchScope::Release, term, ARTIST_RELEASE_LIMIT),
        lookup_scope(store, SearchScope::Deliverable, term, DELIVERABLE_LIMIT),
    );

    interleave([artists, releases, deliverables], MAX_RESULTS)
}

/// Round-robin merge preserving order within each group, capped at `cap`
fn interleave(groups: [Vec<SearchResult>; 3], cap: usize) -> Vec<SearchResult> {
    let mut merged = Vec::new();
    let longest = groups.iter().map(Vec::len).max().unwrap_or(0);
    let mut iters: Vec<_> = groups.into_iter().map(Vec::into_iter).collect();

    'outer: for _ in 0..longest {
        for iter in iters.iter_mut() {
            if let Some(result) = iter.next() {
                merged.push(result);
                if merged.len() == cap {
                    break 'outer;
                }
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_client::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Store fake with per-collection call counters and injectable failures
    #[derive(Default)]
    struct MockStore {
        artists: Vec<ArtistRecord>,
        releases: Vec<ReleaseRecord>,
        deliverables: Vec<DeliverableRecord>,
        fail_releases: bool,
        stall_artists: bool,
        pub calls: AtomicUsize,
    }

    fn artist(id: &str, name: &str) -> ArtistRecord {
        ArtistRecord {
            id: id.into(),
            name: name.into(),
            region: None,
            country: Some("USA".into()),
        }
    }

    fn release(id: &str, title: &str) -> ReleaseRecord {
        ReleaseRecord {
            id: id.into(),
            title: title.into(),
            release_type: Some("Album".into()),
            catalog_number: None,
            status: Some("Draft".into()),
        }
    }

    fn deliverable(id: &str, name: &str) -> DeliverableRecord {
        DeliverableRecord {
            id: id.into(),
            name: name.into(),
            kind: DeliverableKind::File,
            file_type: Some("WAV".into()),
            status: None,
            release_id: None,
        }
    }

    #[async_trait]
    impl CatalogStore for MockStore {
        async fn find_artists(
            &self,
            _term: &str,
            limit: usize,
        ) -> Result<Vec<ArtistRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.stall_artists {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(self.artists.iter().take(limit).cloned().collect())
        }

        async fn find_releases(
            &self,
            _term: &str,
            limit: usize,
        ) -> Result<Vec<ReleaseRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_releases {
                return Err(StoreError::Backend("boom".into()));
            }
            Ok(self.releases.iter().take(limit).cloned().collect())
        }

        async fn find_deliverables(
            &self,
            _term: &str,
            limit: usize,
        ) -> Result<Vec<DeliverableRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.deliverables.iter().take(limit).cloned().collect())
        }
    }

    #[tokio::test]
    async fn empty_term_issues_no_lookups() {
        let store = MockStore::default();
        assert!(search_all(&store, "").await.is_empty());
        assert!(search_all(&store, "   ").await.is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn results_interleave_round_robin() {
        let store = MockStore {
            artists: vec![artist("a0", "x"), artist("a1", "x"), artist("a2", "x")],
            releases: vec![release("r0", "x")],
            deliverables: vec![deliverable("d0", "x"), deliverable("d1", "x")],
            ..Default::default()
        };

        let ids: Vec<String> = search_all(&store, "x")
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a0", "r0", "d0", "a1", "d1", "a2"]);
    }

    #[tokio::test]
    async fn interleaved_list_is_capped() {
        let store = MockStore {
            artists: (0..10).map(|i| artist(&format!("a{i}"), "x")).collect(),
            releases: (0..10).map(|i| release(&format!("r{i}"), "x")).collect(),
            deliverables: (0..5)
                .map(|i| deliverable(&format!("d{i}"), "x"))
                .collect(),
            ..Default::default()
        };

        let results = search_all(&store, "x").await;
        assert_eq!(results.len(), 10);
        // First round of each scope comes before any second-round hit
        assert_eq!(results[0].id, "a0");
        assert_eq!(results[1].id, "r0");
        assert_eq!(results[2].id, "d0");
    }

    #[tokio::test]
    async fn one_failing_scope_does_not_abort_the_others() {
        let store = MockStore {
            artists: vec![artist("a0", "x")],
            releases: vec![release("r0", "x")],
            deliverables: vec![deliverable("d0", "x")],
            fail_releases: true,
            ..Default::default()
        };

        let results = search_all(&store, "x").await;
        let kinds: Vec<SearchResultKind> = results.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![SearchResultKind::Artist, SearchResultKind::Deliverable]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_scope_times_out_as_empty() {
        let store = MockStore {
            artists: vec![artist("a0", "x")],
            releases: vec![release("r0", "x")],
            stall_artists: true,
            ..Default::default()
        };

        let results = search_all(&store, "x").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchResultKind::Release);
    }

    #[tokio::test]
    async fn scoped_search_hits_only_one_collection() {
        let store = MockStore {
            artists: vec![artist("a0", "x")],
            releases: vec![release("r0", "x")],
            ..Default::default()
        };

        let results = search_scope(&store, SearchScope::Release, "x").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchResultKind::Release);
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn subtitle_joins_present_fields_only() {
        let store = MockStore {
            releases: vec![release("r0", "x")],
            deliverables: vec![deliverable("d0", "x")],
            ..Default::default()
        };

        let results = search_all(&store, "x").await;
        let by_id = |id: &str| results.iter().find(|r| r.id == id).unwrap();
        // catalog_number is absent and must be skipped, not rendered empty
        assert_eq!(by_id("r0").subtitle.as_deref(), Some("Album • Draft"));
        assert_eq!(by_id("d0").subtitle.as_deref(), Some("WAV"));
    }

    #[tokio::test]
    async fn folder_records_map_to_folder_kind() {
        let store = MockStore {
            deliverables: vec![DeliverableRecord {
                id: "d0".into(),
                name: "artwork".into(),
                kind: DeliverableKind::Folder,
                file_type: None,
                status: None,
                release_id: None,
            }],
            ..Default::default()
        };

        let results = search_all(&store, "art").await;
        assert_eq!(results[0].kind, SearchResultKind::Folder);
        assert!(results[0].subtitle.is_none());
    }
}
