//! Remote data client tests against a scripted transport
//!
//! Covers cache-first list reads, stale-while-revalidate detail reads,
//! failure surfacing and out-of-order responses.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_core::details::DetailsTracker;
use catalog_core::listing::{correct_page, parse_page, MAX_PAGE};
use catalog_core::{
    CatalogClient, CatalogError, CatalogResult, CharacterStatus, FetchPolicy, GraphqlTransport,
    QueryState,
};
use serde_json::{json, Value};
use tokio::sync::Notify;

/// Serves a fake dataset of `total_pages` pages with two characters each.
struct FakeDataset {
    total_pages: u32,
    calls: AtomicUsize,
    failing: Mutex<bool>,
    /// Ids whose detail response waits for `release`
    held: HashSet<String>,
    release: Notify,
}

impl FakeDataset {
    fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            calls: AtomicUsize::new(0),
            failing: Mutex::new(false),
            held: HashSet::new(),
            release: Notify::new(),
        }
    }

    fn holding(mut self, id: &str) -> Self {
        self.held.insert(id.to_string());
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    fn character_json(id: u32) -> Value {
        json!({
            "id": id.to_string(),
            "name": format!("Character {id}"),
            "status": if id % 2 == 0 { "Dead" } else { "Alive" },
            "species": "Human",
            "type": "",
            "gender": "unknown",
            "image": format!("https://example.invalid/{id}.jpeg"),
            "origin": { "name": format!("Origin {id}") },
            "location": { "name": "unknown" },
            "episode": (1..=id).map(|n| json!({
                "id": n.to_string(),
                "name": format!("Episode {n}"),
                "episode": format!("S01E{n:02}"),
                "air_date": "December 2, 2013"
            })).collect::<Vec<_>>()
        })
    }
}

#[async_trait]
impl GraphqlTransport for FakeDataset {
    async fn execute(&self, _query: &str, variables: Value) -> CatalogResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock().unwrap() {
            return Err(CatalogError::GraphQl(vec!["upstream unavailable".into()]));
        }

        if let Some(page) = variables.get("page").and_then(Value::as_u64) {
            // GraphQL `Int` is a signed 32-bit value.
            if page > i32::MAX as u64 {
                return Err(CatalogError::GraphQl(vec![format!(
                    "Int cannot represent non 32-bit signed integer value: {page}"
                )]));
            }
            let page = page as u32;
            let results: Vec<Value> = if page <= self.total_pages {
                let first = (page - 1) * 2 + 1;
                (first..first + 2)
                    .map(|id| {
                        let full = Self::character_json(id);
                        json!({
                            "id": full["id"], "name": full["name"], "status": full["status"],
                            "species": full["species"], "gender": full["gender"], "image": full["image"]
                        })
                    })
                    .collect()
            } else {
                Vec::new()
            };
            return Ok(json!({
                "characters": {
                    "info": {
                        "pages": self.total_pages,
                        "next": if page < self.total_pages { Some(page + 1) } else { None },
                        "prev": if page > 1 { Some(page - 1) } else { None }
                    },
                    "results": results
                }
            }));
        }

        let id = variables["id"].as_str().unwrap_or_default().to_string();
        if self.held.contains(&id) {
            self.release.notified().await;
        }
        match id.parse::<u32>() {
            Ok(n) if n >= 1 && n <= self.total_pages * 2 => {
                Ok(json!({ "character": Self::character_json(n) }))
            }
            _ => Ok(json!({ "character": null })),
        }
    }
}

fn client_for(dataset: &Arc<FakeDataset>) -> CatalogClient {
    CatalogClient::new(dataset.clone())
}

#[tokio::test]
async fn test_list_is_cache_first() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    let first = client.characters(1).await.unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_pages(), 5);
    assert!(first.has_next());
    assert!(!first.has_prev());

    let again = client.characters(1).await.unwrap();
    assert_eq!(again, first);
    assert_eq!(dataset.calls(), 1);

    client.characters(2).await.unwrap();
    assert_eq!(dataset.calls(), 2);
}

#[tokio::test]
async fn test_list_failure_is_not_cached() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    dataset.set_failing(true);
    let err = client.characters(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::GraphQl(_)));

    dataset.set_failing(false);
    assert!(client.characters(1).await.is_ok());
    assert_eq!(dataset.calls(), 2);
}

#[tokio::test]
async fn test_page_zero_rejected_without_network() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    assert!(matches!(
        client.characters(0).await,
        Err(CatalogError::InvalidArgument(_))
    ));
    assert_eq!(dataset.calls(), 0);
}

#[tokio::test]
async fn test_out_of_range_page_corrects_to_last() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    let page = client.characters(7).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(correct_page(7, page.total_pages()), Some(5));
}

#[tokio::test]
async fn test_huge_page_query_corrects_instead_of_failing() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    for raw in ["3000000000", "1e20"] {
        let requested = parse_page(Some(raw));
        assert_eq!(requested, MAX_PAGE);

        let page = client.characters(requested).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(correct_page(requested, page.total_pages()), Some(5));
    }
}

#[tokio::test]
async fn test_detail_cache_first_after_list() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    client.characters(1).await.unwrap();
    // The list seeds list fields only.
    assert_eq!(client.peek_summary("1").unwrap().name, "Character 1");
    assert!(client.peek_character("1").is_none());

    let detail = client.character("1", FetchPolicy::CacheFirst).await.unwrap();
    assert_eq!(detail.origin.as_deref(), Some("Origin 1"));
    assert_eq!(dataset.calls(), 2);

    client.character("1", FetchPolicy::CacheFirst).await.unwrap();
    assert_eq!(dataset.calls(), 2);

    client.character("1", FetchPolicy::NetworkOnly).await.unwrap();
    assert_eq!(dataset.calls(), 3);
}

#[tokio::test]
async fn test_detail_not_found() {
    let dataset = Arc::new(FakeDataset::new(1));
    let client = client_for(&dataset);

    let err = client.character("999", FetchPolicy::CacheFirst).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if id == "999"));
}

#[tokio::test]
async fn test_swr_emits_cached_then_fresh() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    let mut first = Vec::new();
    client.character_swr("2", |state| first.push(state)).await;
    assert_eq!(first.len(), 2);
    assert_eq!(first[0], QueryState::Loading);
    assert!(matches!(&first[1], QueryState::Ready { refreshing: false, data } if data.status == CharacterStatus::Dead));

    let mut second = Vec::new();
    client.character_swr("2", |state| second.push(state)).await;
    assert!(matches!(&second[0], QueryState::Ready { refreshing: true, data } if data.id == "2"));
    assert!(matches!(&second[1], QueryState::Ready { refreshing: false, .. }));
    // Revalidation still went to the network.
    assert_eq!(dataset.calls(), 2);
}

#[tokio::test]
async fn test_swr_failure_keeps_stale_copy() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);
    client.character("3", FetchPolicy::NetworkOnly).await.unwrap();

    dataset.set_failing(true);
    let mut states = Vec::new();
    client.character_swr("3", |state| states.push(state)).await;

    match &states[1] {
        QueryState::Failed { message, stale } => {
            assert!(message.contains("upstream unavailable"));
            assert_eq!(stale.as_ref().unwrap().id, "3");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_switching_characters_never_mixes_results() {
    let dataset = Arc::new(FakeDataset::new(5).holding("1"));
    let client = client_for(&dataset);
    let tracker = Mutex::new(DetailsTracker::new());

    tracker.lock().unwrap().open(Some("1"));

    let slow = client.character_swr("1", |state| {
        tracker.lock().unwrap().apply("1", state);
    });
    let fast = async {
        tracker.lock().unwrap().open(Some("2"));
        client
            .character_swr("2", |state| {
                tracker.lock().unwrap().apply("2", state);
            })
            .await;
        // Character 1 resolves only after the user has moved on.
        dataset.release.notify_one();
    };
    tokio::join!(slow, fast);

    let tracker = tracker.into_inner().unwrap();
    assert_eq!(tracker.current(), Some("2"));
    let shown = tracker.character().unwrap();
    assert_eq!(shown.id, "2");
    assert_eq!(shown.name, "Character 2");
    assert_eq!(shown.episodes.len(), 2);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let dataset = Arc::new(FakeDataset::new(5));
    let client = client_for(&dataset);

    client.characters(1).await.unwrap();
    client.clear_cache();
    client.characters(1).await.unwrap();
    assert_eq!(dataset.calls(), 2);
}
