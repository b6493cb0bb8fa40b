//! Storage traits implemented by every persistence backend.
//!
//! Services depend on these traits only; the concrete backend (PostgreSQL
//! or memory) is chosen at startup. The single operation with a hard
//! atomicity requirement is [`RequestStore::claim_if_open`]: it must be a
//! compare-and-set on `status == open`, never a read-then-write, so that
//! two volunteers racing for the same request cannot both win.

use async_trait::async_trait;

use neighborly_core::result::AppResult;
use neighborly_core::types::{
    NotificationId, PageRequest, PageResponse, RequestId, RequestSort, UserId,
};
use neighborly_entity::message::Message;
use neighborly_entity::notification::Notification;
use neighborly_entity::request::{HelpRequest, HistoryEntry, RequestFilter};
use neighborly_entity::user::{CreateUser, UpdateProfile, User};

/// Platform-wide request counts for the community snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTotals {
    /// All requests ever posted.
    pub total_requests: u64,
    /// Requests whose completion was confirmed.
    pub total_completed: u64,
}

/// Persistence operations for help requests.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Persist a new request.
    async fn insert(&self, request: &HelpRequest) -> AppResult<()>;

    /// Fetch a request by ID.
    async fn find_by_id(&self, id: RequestId) -> AppResult<Option<HelpRequest>>;

    /// Overwrite an existing request. Fails with `NotFound` if the row is
    /// missing. Callers hold the single-writer authorization for the
    /// transition they are applying.
    async fn update(&self, request: &HelpRequest) -> AppResult<()>;

    /// Atomically claim the request if and only if it is still open.
    ///
    /// Returns the updated request on success, or `None` when no open row
    /// matched (either the request does not exist or someone else claimed
    /// it first; callers disambiguate with a follow-up fetch).
    async fn claim_if_open(
        &self,
        id: RequestId,
        claimant_id: UserId,
        claimant_label: &str,
        entry: &HistoryEntry,
    ) -> AppResult<Option<HelpRequest>>;

    /// List requests matching a filter, sorted and paginated.
    async fn list(
        &self,
        filter: &RequestFilter,
        sort: RequestSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HelpRequest>>;

    /// All requests posted by a user, newest first.
    async fn list_by_requester(&self, requester_id: UserId) -> AppResult<Vec<HelpRequest>>;

    /// All requests ever claimed by a user (current claims and completed
    /// work), newest first.
    async fn list_by_claimant(&self, claimant_id: UserId) -> AppResult<Vec<HelpRequest>>;

    /// Platform-wide counts across all requests.
    async fn totals(&self) -> AppResult<RequestTotals>;
}

/// Persistence operations for message threads.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message.
    async fn insert(&self, message: &Message) -> AppResult<()>;

    /// All messages in a request's thread, oldest first.
    async fn list_thread(&self, request_id: RequestId) -> AppResult<Vec<Message>>;

    /// Mark every message addressed to `reader` in the thread as read.
    /// Returns the number of messages updated.
    async fn mark_thread_read(&self, request_id: RequestId, reader: UserId) -> AppResult<u64>;

    /// Count unread messages addressed to a user across all threads.
    async fn unread_count(&self, user_id: UserId) -> AppResult<u64>;
}

/// Persistence operations for notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Persist a new notification.
    async fn insert(&self, notification: &Notification) -> AppResult<()>;

    /// A user's notifications, newest first.
    async fn list_for_user(
        &self,
        user_id: UserId,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>>;

    /// Mark one notification as read. Returns false when the notification
    /// does not exist or belongs to another user.
    async fn mark_read(&self, id: NotificationId, user_id: UserId) -> AppResult<bool>;

    /// Mark all of a user's notifications as read. Returns the number
    /// updated.
    async fn mark_all_read(&self, user_id: UserId) -> AppResult<u64>;

    /// Count a user's unread notifications.
    async fn unread_count(&self, user_id: UserId) -> AppResult<u64>;
}

/// Persistence operations for user accounts and profiles.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Register a new user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Fetch a user by ID.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Fetch a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Apply a partial profile update. Fails with `NotFound` for unknown
    /// users.
    async fn update_profile(&self, id: UserId, update: &UpdateProfile) -> AppResult<User>;
}
