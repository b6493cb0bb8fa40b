//! Application state shared across all handlers.

use std::sync::Arc;

use neighborly_auth::JwtDecoder;
use neighborly_core::config::AppConfig;
use neighborly_database::Store;
use neighborly_realtime::EventHub;
use neighborly_service::account::AccountService;
use neighborly_service::lifecycle::LifecycleService;
use neighborly_service::message::MessageService;
use neighborly_service::notification::NotificationService;
use neighborly_service::profile::ProfileService;
use neighborly_service::stats::StatsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Services are
/// internally `Arc`-backed, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The selected persistence backend.
    pub store: Store,
    /// Realtime event hub.
    pub hub: Arc<EventHub>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Registration and login.
    pub accounts: AccountService,
    /// Request lifecycle operations.
    pub lifecycle: LifecycleService,
    /// Per-request message threads.
    pub messages: MessageService,
    /// Notification listing and read state.
    pub notifications: NotificationService,
    /// Profile reads and updates.
    pub profiles: ProfileService,
    /// Contribution statistics and badges.
    pub stats: StatsService,
}

impl AppState {
    /// Wire up all services over the given store.
    pub fn new(config: AppConfig, store: Store) -> Self {
        let hub = Arc::new(EventHub::new(config.realtime.channel_buffer_size));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let notifications = NotificationService::new(store.clone(), hub.clone());
        let lifecycle = LifecycleService::new(
            store.clone(),
            hub.clone(),
            notifications.clone(),
            config.lifecycle.clone(),
        );
        let messages = MessageService::new(store.clone(), hub.clone(), notifications.clone());
        let accounts = AccountService::new(store.clone(), config.auth.clone());
        let profiles = ProfileService::new(store.clone());
        let stats = StatsService::new(store.clone(), config.achievements.clone());

        Self {
            config: Arc::new(config),
            store,
            hub,
            jwt_decoder,
            accounts,
            lifecycle,
            messages,
            notifications,
            profiles,
            stats,
        }
    }
}
