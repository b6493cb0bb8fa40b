//! In-memory help-request store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;
use neighborly_core::types::{PageRequest, PageResponse, RequestId, RequestSort, UserId};
use neighborly_entity::request::{
    HelpRequest, HistoryEntry, RequestFilter, RequestStatus,
};

use crate::store::{RequestStore, RequestTotals};

/// Memory-backed request store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRequestStore {
    requests: Arc<RwLock<HashMap<RequestId, HelpRequest>>>,
}

impl MemoryRequestStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether a request satisfies every constraint in the filter.
fn matches(filter: &RequestFilter, request: &HelpRequest) -> bool {
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let haystack_hit = request.title.to_lowercase().contains(&needle)
            || request.description.to_lowercase().contains(&needle)
            || request.location.address().to_lowercase().contains(&needle);
        if !haystack_hit {
            return false;
        }
    }
    if let Some(category) = filter.category {
        if request.category != category {
            return false;
        }
    }
    if let Some(urgency) = filter.urgency {
        if request.urgency != urgency {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if request.status != status {
            return false;
        }
    }
    if let Some(after) = filter.created_after {
        if request.created_at < after {
            return false;
        }
    }
    if let Some(before) = filter.created_before {
        if request.created_at > before {
            return false;
        }
    }
    true
}

/// Order requests according to the sort key.
fn sort_requests(requests: &mut [HelpRequest], sort: RequestSort) {
    match sort {
        RequestSort::Newest => requests.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        RequestSort::Oldest => requests.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        RequestSort::UrgencyHigh => requests.sort_by(|a, b| {
            b.urgency
                .weight()
                .cmp(&a.urgency.weight())
                .then(b.created_at.cmp(&a.created_at))
        }),
        RequestSort::UrgencyLow => requests.sort_by(|a, b| {
            a.urgency
                .weight()
                .cmp(&b.urgency.weight())
                .then(b.created_at.cmp(&a.created_at))
        }),
        RequestSort::Title => {
            requests.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
}

#[async_trait]
impl RequestStore for MemoryRequestStore {
    async fn insert(&self, request: &HelpRequest) -> AppResult<()> {
        debug_assert!(request.check_invariants());
        self.requests
            .write()
            .await
            .insert(request.id, request.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RequestId) -> AppResult<Option<HelpRequest>> {
        Ok(self.requests.read().await.get(&id).cloned())
    }

    async fn update(&self, request: &HelpRequest) -> AppResult<()> {
        debug_assert!(request.check_invariants());
        let mut guard = self.requests.write().await;
        match guard.get_mut(&request.id) {
            Some(existing) => {
                *existing = request.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Request {} not found",
                request.id
            ))),
        }
    }

    async fn claim_if_open(
        &self,
        id: RequestId,
        claimant_id: UserId,
        claimant_label: &str,
        entry: &HistoryEntry,
    ) -> AppResult<Option<HelpRequest>> {
        // The write lock makes the check-and-set atomic.
        let mut guard = self.requests.write().await;
        match guard.get_mut(&id) {
            Some(request) if request.status == RequestStatus::Open => {
                request.status = RequestStatus::Claimed;
                request.claimant_id = Some(claimant_id);
                request.claimant_label = Some(claimant_label.to_string());
                request.history.push(entry.clone());
                request.updated_at = Utc::now();
                Ok(Some(request.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: &RequestFilter,
        sort: RequestSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HelpRequest>> {
        let guard = self.requests.read().await;
        let mut matched: Vec<HelpRequest> = guard
            .values()
            .filter(|r| matches(filter, r))
            .cloned()
            .collect();
        drop(guard);

        sort_requests(&mut matched, sort);
        let total = matched.len() as u64;
        let items: Vec<HelpRequest> = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn list_by_requester(&self, requester_id: UserId) -> AppResult<Vec<HelpRequest>> {
        let guard = self.requests.read().await;
        let mut requests: Vec<HelpRequest> = guard
            .values()
            .filter(|r| r.requester_id == requester_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn list_by_claimant(&self, claimant_id: UserId) -> AppResult<Vec<HelpRequest>> {
        let guard = self.requests.read().await;
        let mut requests: Vec<HelpRequest> = guard
            .values()
            .filter(|r| r.claimant_id == Some(claimant_id))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn totals(&self) -> AppResult<RequestTotals> {
        let guard = self.requests.read().await;
        let total_completed = guard
            .values()
            .filter(|r| r.status == RequestStatus::Completed)
            .count() as u64;
        Ok(RequestTotals {
            total_requests: guard.len() as u64,
            total_completed,
        })
    }
}
