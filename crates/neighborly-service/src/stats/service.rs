//! Stats service.

use neighborly_core::config::achievements::AchievementConfig;
use neighborly_core::result::AppResult;
use neighborly_core::types::UserId;
use neighborly_database::Store;

use super::report::{CommunityStats, StatsReport, compute_stats};

/// Computes contribution statistics on demand.
#[derive(Clone)]
pub struct StatsService {
    store: Store,
    config: AchievementConfig,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(store: Store, config: AchievementConfig) -> Self {
        Self { store, config }
    }

    /// Compute a user's statistics and badges from their request history.
    pub async fn report(&self, user_id: UserId) -> AppResult<StatsReport> {
        let authored = self.store.requests.list_by_requester(user_id).await?;
        let claimed = self.store.requests.list_by_claimant(user_id).await?;
        Ok(compute_stats(user_id, &authored, &claimed, &self.config))
    }

    /// Platform-wide totals for the community snapshot.
    pub async fn community(&self) -> AppResult<CommunityStats> {
        let totals = self.store.requests.totals().await?;
        Ok(CommunityStats {
            total_requests: totals.total_requests,
            total_completed: totals.total_completed,
        })
    }
}
