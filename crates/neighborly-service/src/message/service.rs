//! Messaging between requester and claimant.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use neighborly_core::error::AppError;
use neighborly_core::events::{DomainEvent, EventPayload, MessageEvent};
use neighborly_core::result::AppResult;
use neighborly_core::types::{MessageId, RequestId};
use neighborly_database::Store;
use neighborly_entity::message::Message;
use neighborly_entity::notification::NotificationKind;
use neighborly_entity::request::HelpRequest;
use neighborly_realtime::{EventHub, Topic};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Sends and reads messages in a request's thread.
///
/// A thread is open only between the requester and the current claimant,
/// and only while the request is claimed or pending completion. Outside
/// that window the thread is read-only for its parties.
#[derive(Clone)]
pub struct MessageService {
    store: Store,
    hub: Arc<EventHub>,
    notifier: NotificationService,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(store: Store, hub: Arc<EventHub>, notifier: NotificationService) -> Self {
        Self {
            store,
            hub,
            notifier,
        }
    }

    /// Post a message to a request's thread.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        request_id: RequestId,
        body: String,
    ) -> AppResult<Message> {
        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AppError::validation("Message body must not be empty"));
        }

        let request = self.fetch_request(request_id).await?;
        if !request.is_party(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the requester and claimant can message on this request",
            ));
        }
        if !request.status.allows_messaging() {
            return Err(AppError::invalid_transition(format!(
                "Messaging is closed while the request is {}",
                request.status
            )));
        }

        let recipient_id = if request.is_requester(ctx.user_id) {
            // allows_messaging implies a claimant is set
            request
                .claimant_id
                .ok_or_else(|| AppError::internal("Claimed request has no claimant"))?
        } else {
            request.requester_id
        };

        let message = Message {
            id: MessageId::new(),
            request_id,
            sender_id: ctx.user_id,
            sender_label: ctx.actor_label().to_string(),
            recipient_id,
            body,
            read: false,
            created_at: Utc::now(),
        };
        self.store.messages.insert(&message).await?;

        self.hub
            .publish(
                Topic::RequestThread(request_id),
                DomainEvent::new(
                    Some(ctx.user_id),
                    EventPayload::Message(MessageEvent::Posted {
                        message_id: message.id,
                        request_id,
                        sender_id: ctx.user_id,
                        recipient_id,
                    }),
                ),
            )
            .await;
        self.notifier
            .notify(
                recipient_id,
                NotificationKind::MessageReceived,
                "New message",
                format!("{} sent you a message about \"{}\"", ctx.actor_label(), request.title),
                Some(request_id),
            )
            .await;

        info!(request_id = %request_id, message_id = %message.id, "Message posted");
        Ok(message)
    }

    /// Read a request's thread, oldest first. Parties only.
    pub async fn list_thread(
        &self,
        ctx: &RequestContext,
        request_id: RequestId,
    ) -> AppResult<Vec<Message>> {
        let request = self.fetch_request(request_id).await?;
        if !request.is_party(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the requester and claimant can read this thread",
            ));
        }
        self.store.messages.list_thread(request_id).await
    }

    /// Mark every message addressed to the current user in the thread as
    /// read. Returns the number of messages updated.
    pub async fn mark_thread_read(
        &self,
        ctx: &RequestContext,
        request_id: RequestId,
    ) -> AppResult<u64> {
        let request = self.fetch_request(request_id).await?;
        if !request.is_party(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the requester and claimant can read this thread",
            ));
        }
        self.store
            .messages
            .mark_thread_read(request_id, ctx.user_id)
            .await
    }

    /// Count unread messages addressed to the current user across all
    /// threads.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.store.messages.unread_count(ctx.user_id).await
    }

    async fn fetch_request(&self, id: RequestId) -> AppResult<HelpRequest> {
        self.store
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neighborly_core::config::lifecycle::LifecycleConfig;
    use neighborly_core::error::ErrorKind;
    use neighborly_core::types::UserId;
    use neighborly_entity::request::{Category, CreateRequest, Location, Urgency};
    use neighborly_entity::user::UserType;

    use crate::lifecycle::LifecycleService;

    struct Fixture {
        messages: MessageService,
        lifecycle: LifecycleService,
        requester: RequestContext,
        volunteer: RequestContext,
    }

    fn fixture() -> Fixture {
        let store = Store::memory();
        let hub = Arc::new(EventHub::new(16));
        let notifier = NotificationService::new(store.clone(), hub.clone());
        Fixture {
            messages: MessageService::new(store.clone(), hub.clone(), notifier.clone()),
            lifecycle: LifecycleService::new(store, hub, notifier, LifecycleConfig::default()),
            requester: ctx("ana@example.com"),
            volunteer: ctx("ben@example.com"),
        }
    }

    fn ctx(email: &str) -> RequestContext {
        RequestContext::new(UserId::new(), email.to_string(), UserType::Both)
    }

    fn input() -> CreateRequest {
        CreateRequest {
            title: "Help carrying groceries".into(),
            description: "Need a hand carrying bags up three flights of stairs.".into(),
            category: Category::GroceriesShopping,
            urgency: Urgency::Medium,
            location: Location::PlainText {
                address: "4 Maple Ave".into(),
            },
            contact_info: None,
            estimated_time: None,
        }
    }

    #[tokio::test]
    async fn test_messaging_requires_claimed_status() {
        let f = fixture();
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();

        let err = f
            .messages
            .send(&f.requester, request.id, "Anyone there?".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);
    }

    #[tokio::test]
    async fn test_parties_exchange_messages() {
        let f = fixture();
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();
        f.lifecycle.claim(&f.volunteer, request.id).await.unwrap();

        let sent = f
            .messages
            .send(&f.volunteer, request.id, "On my way".into())
            .await
            .unwrap();
        assert_eq!(sent.recipient_id, f.requester.user_id);

        f.messages
            .send(&f.requester, request.id, "Thank you!".into())
            .await
            .unwrap();

        let thread = f
            .messages
            .list_thread(&f.requester, request.id)
            .await
            .unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].body, "On my way");
    }

    #[tokio::test]
    async fn test_outsiders_are_forbidden() {
        let f = fixture();
        let stranger = ctx("dan@example.com");
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();
        f.lifecycle.claim(&f.volunteer, request.id).await.unwrap();

        let err = f
            .messages
            .send(&stranger, request.id, "Hi".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = f
            .messages
            .list_thread(&stranger, request.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_thread_closes_after_completion() {
        let f = fixture();
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();
        f.lifecycle.claim(&f.volunteer, request.id).await.unwrap();
        f.lifecycle
            .mark_complete(&f.volunteer, request.id, None)
            .await
            .unwrap();

        // Still open during pending_completion.
        f.messages
            .send(&f.volunteer, request.id, "Done, please confirm".into())
            .await
            .unwrap();

        f.lifecycle
            .verify_completion(&f.requester, request.id, true, None)
            .await
            .unwrap();
        let err = f
            .messages
            .send(&f.volunteer, request.id, "Anything else?".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTransition);

        // The transcript stays readable for the parties.
        let thread = f
            .messages
            .list_thread(&f.volunteer, request.id)
            .await
            .unwrap();
        assert_eq!(thread.len(), 1);
    }

    #[tokio::test]
    async fn test_unread_tracking() {
        let f = fixture();
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();
        f.lifecycle.claim(&f.volunteer, request.id).await.unwrap();

        f.messages
            .send(&f.volunteer, request.id, "On my way".into())
            .await
            .unwrap();
        f.messages
            .send(&f.volunteer, request.id, "Be there in five".into())
            .await
            .unwrap();

        assert_eq!(f.messages.unread_count(&f.requester).await.unwrap(), 2);
        let updated = f
            .messages
            .mark_thread_read(&f.requester, request.id)
            .await
            .unwrap();
        assert_eq!(updated, 2);
        assert_eq!(f.messages.unread_count(&f.requester).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_blank_body_rejected() {
        let f = fixture();
        let request = f
            .lifecycle
            .create_request(&f.requester, input())
            .await
            .unwrap();
        f.lifecycle.claim(&f.volunteer, request.id).await.unwrap();

        let err = f
            .messages
            .send(&f.volunteer, request.id, "   ".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
