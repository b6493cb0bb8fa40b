//! Help-request lifecycle operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use neighborly_core::config::lifecycle::LifecycleConfig;
use neighborly_core::error::AppError;
use neighborly_core::events::{DomainEvent, EventPayload, RequestEvent};
use neighborly_core::result::AppResult;
use neighborly_core::types::{PageRequest, PageResponse, RequestId, RequestSort, UserId};
use neighborly_database::Store;
use neighborly_entity::notification::NotificationKind;
use neighborly_entity::request::{
    CompletionVerification, CreateRequest, GeoPoint, HelpRequest, HistoryEntry, HistoryEventType,
    Rating, RequestFilter, RequestStatus,
};
use neighborly_realtime::{EventHub, Topic};

use crate::context::RequestContext;
use crate::notification::NotificationService;

use super::distance::verify_proximity;
use super::validate::validate_create;

/// Drives help requests through their lifecycle.
///
/// Every transition except claiming is single-writer: only one user is
/// authorized to perform it, so a plain read-check-update suffices.
/// Claiming is the one contended transition and goes through the store's
/// atomic compare-and-set.
#[derive(Clone)]
pub struct LifecycleService {
    store: Store,
    hub: Arc<EventHub>,
    notifier: NotificationService,
    config: LifecycleConfig,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(
        store: Store,
        hub: Arc<EventHub>,
        notifier: NotificationService,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            store,
            hub,
            notifier,
            config,
        }
    }

    /// Post a new help request.
    pub async fn create_request(
        &self,
        ctx: &RequestContext,
        input: CreateRequest,
    ) -> AppResult<HelpRequest> {
        validate_create(&input, &self.config)?;

        let request = HelpRequest::create(input, ctx.user_id, ctx.actor_label());
        self.store.requests.insert(&request).await?;

        self.publish(
            ctx,
            RequestEvent::Created {
                request_id: request.id,
                requester_id: request.requester_id,
                category: request.category.as_str().to_string(),
                urgency: request.urgency.as_str().to_string(),
            },
        )
        .await;

        info!(request_id = %request.id, requester_id = %ctx.user_id, "Help request created");
        Ok(request)
    }

    /// Fetch a single request.
    pub async fn get_request(&self, id: RequestId) -> AppResult<HelpRequest> {
        self.fetch(id).await
    }

    /// List requests matching a filter, sorted and paginated.
    pub async fn list_requests(
        &self,
        filter: &RequestFilter,
        sort: RequestSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HelpRequest>> {
        self.store.requests.list(filter, sort, page).await
    }

    /// All requests posted by a user, newest first.
    pub async fn list_by_requester(&self, requester_id: UserId) -> AppResult<Vec<HelpRequest>> {
        self.store.requests.list_by_requester(requester_id).await
    }

    /// All requests a user has ever claimed, newest first.
    pub async fn list_by_claimant(&self, claimant_id: UserId) -> AppResult<Vec<HelpRequest>> {
        self.store.requests.list_by_claimant(claimant_id).await
    }

    /// Claim an open request for the current user.
    ///
    /// When two volunteers race, exactly one wins; the loser gets
    /// `AlreadyClaimed`.
    pub async fn claim(&self, ctx: &RequestContext, id: RequestId) -> AppResult<HelpRequest> {
        let request = self.fetch(id).await?;
        if request.is_requester(ctx.user_id) {
            return Err(AppError::forbidden("You cannot claim your own request"));
        }

        let entry = HistoryEntry::now(HistoryEventType::Claimed, ctx.user_id, ctx.actor_label());
        let claimed = self
            .store
            .requests
            .claim_if_open(id, ctx.user_id, ctx.actor_label(), &entry)
            .await?;

        let Some(request) = claimed else {
            // The initial fetch saw the request, so a missing open row means
            // somebody else won the race in between.
            return Err(AppError::already_claimed(format!(
                "Request {id} has already been claimed"
            )));
        };

        self.notifier
            .notify(
                request.requester_id,
                NotificationKind::RequestClaimed,
                "Your request was claimed",
                format!("{} offered to help with \"{}\"", ctx.actor_label(), request.title),
                Some(id),
            )
            .await;
        self.publish(
            ctx,
            RequestEvent::Claimed {
                request_id: id,
                requester_id: request.requester_id,
                claimant_id: ctx.user_id,
            },
        )
        .await;

        info!(request_id = %id, claimant_id = %ctx.user_id, "Request claimed");
        Ok(request)
    }

    /// Report a claimed request as complete, optionally with the
    /// volunteer's current position for on-site verification.
    ///
    /// A failed or missing position check degrades to an unverified
    /// completion report unless verification is configured as mandatory.
    pub async fn mark_complete(
        &self,
        ctx: &RequestContext,
        id: RequestId,
        reported_position: Option<GeoPoint>,
    ) -> AppResult<HelpRequest> {
        let mut request = self.fetch(id).await?;
        if !request.is_claimant(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the current claimant can report completion",
            ));
        }
        self.check_transition(&request, RequestStatus::PendingCompletion)?;

        request.verification = self.build_verification(&request, reported_position)?;
        let location_verified = request
            .verification
            .as_ref()
            .is_some_and(|v| v.verified);

        request.status = RequestStatus::PendingCompletion;
        request.history.push(HistoryEntry::now(
            HistoryEventType::MarkedComplete,
            ctx.user_id,
            ctx.actor_label(),
        ));
        request.updated_at = Utc::now();
        self.store.requests.update(&request).await?;

        self.notifier
            .notify(
                request.requester_id,
                NotificationKind::CompletionRequested,
                "Completion reported",
                format!(
                    "{} marked \"{}\" as complete. Please confirm.",
                    ctx.actor_label(),
                    request.title
                ),
                Some(id),
            )
            .await;
        self.publish(
            ctx,
            RequestEvent::CompletionRequested {
                request_id: id,
                requester_id: request.requester_id,
                claimant_id: ctx.user_id,
                location_verified,
            },
        )
        .await;

        info!(request_id = %id, location_verified, "Completion reported");
        Ok(request)
    }

    /// Confirm or reject a pending completion report. Requester only.
    ///
    /// Rejection returns the request to `claimed` with the claimant
    /// retained; the volunteer can report completion again.
    pub async fn verify_completion(
        &self,
        ctx: &RequestContext,
        id: RequestId,
        approved: bool,
        reason: Option<String>,
    ) -> AppResult<HelpRequest> {
        let mut request = self.fetch(id).await?;
        if !request.is_requester(ctx.user_id) {
            return Err(AppError::forbidden(
                "Only the requester can verify completion",
            ));
        }
        let next = if approved {
            RequestStatus::Completed
        } else {
            RequestStatus::Claimed
        };
        self.check_transition(&request, next)?;

        let claimant_id = self.claimant_of(&request)?;
        request.status = next;
        request.updated_at = Utc::now();

        if approved {
            request.verified_by = Some(ctx.user_id);
            request.history.push(HistoryEntry::now(
                HistoryEventType::VerifiedComplete,
                ctx.user_id,
                ctx.actor_label(),
            ));
        } else {
            // The rejected report's location proof goes with it.
            request.verification = None;
            request.history.push(HistoryEntry::now(
                HistoryEventType::CompletionRejected,
                ctx.user_id,
                ctx.actor_label(),
            ));
        }
        self.store.requests.update(&request).await?;

        if approved {
            self.notifier
                .notify(
                    claimant_id,
                    NotificationKind::CompletionConfirmed,
                    "Completion confirmed",
                    format!("\"{}\" is now completed. Thank you!", request.title),
                    Some(id),
                )
                .await;
            self.publish(
                ctx,
                RequestEvent::Completed {
                    request_id: id,
                    requester_id: request.requester_id,
                    claimant_id,
                },
            )
            .await;
            info!(request_id = %id, "Completion confirmed");
        } else {
            let body = match &reason {
                Some(reason) => format!(
                    "The completion report for \"{}\" was rejected: {reason}",
                    request.title
                ),
                None => format!(
                    "The completion report for \"{}\" was rejected",
                    request.title
                ),
            };
            self.notifier
                .notify(
                    claimant_id,
                    NotificationKind::CompletionRejected,
                    "Completion rejected",
                    body,
                    Some(id),
                )
                .await;
            self.publish(
                ctx,
                RequestEvent::CompletionRejected {
                    request_id: id,
                    requester_id: request.requester_id,
                    claimant_id,
                    reason,
                },
            )
            .await;
            info!(request_id = %id, "Completion rejected");
        }

        Ok(request)
    }

    /// Rate the claimant of a completed request. Requester only, once.
    pub async fn rate(
        &self,
        ctx: &RequestContext,
        id: RequestId,
        stars: u8,
        review: Option<String>,
    ) -> AppResult<HelpRequest> {
        if !(1..=5).contains(&stars) {
            return Err(AppError::validation("Rating must be between 1 and 5 stars"));
        }

        let mut request = self.fetch(id).await?;
        if !request.is_requester(ctx.user_id) {
            return Err(AppError::forbidden("Only the requester can rate"));
        }
        if request.status != RequestStatus::Completed {
            return Err(AppError::invalid_transition(
                "Only completed requests can be rated",
            ));
        }
        if request.rating.is_some() {
            return Err(AppError::conflict("This request has already been rated"));
        }

        let claimant_id = self.claimant_of(&request)?;
        let claimant_label = request.claimant_label.clone().unwrap_or_default();
        request.rating = Some(Rating {
            stars,
            review,
            rated_user_id: claimant_id,
            rated_user_email: claimant_label,
            rated_at: Utc::now(),
        });
        request.updated_at = Utc::now();
        self.store.requests.update(&request).await?;

        self.notifier
            .notify(
                claimant_id,
                NotificationKind::RatingReceived,
                "You received a rating",
                format!("{stars} stars for \"{}\"", request.title),
                Some(id),
            )
            .await;
        self.publish(
            ctx,
            RequestEvent::Rated {
                request_id: id,
                claimant_id,
                stars,
            },
        )
        .await;

        info!(request_id = %id, stars, "Rating recorded");
        Ok(request)
    }

    async fn fetch(&self, id: RequestId) -> AppResult<HelpRequest> {
        self.store
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }

    fn check_transition(&self, request: &HelpRequest, next: RequestStatus) -> AppResult<()> {
        if request.status.can_transition(next) {
            Ok(())
        } else {
            Err(AppError::invalid_transition(format!(
                "Cannot move request from {} to {}",
                request.status, next
            )))
        }
    }

    fn claimant_of(&self, request: &HelpRequest) -> AppResult<UserId> {
        request
            .claimant_id
            .ok_or_else(|| AppError::internal("Request past open has no claimant"))
    }

    /// Build the verification record for a completion report.
    ///
    /// Requests without coordinates cannot be verified and carry no record.
    fn build_verification(
        &self,
        request: &HelpRequest,
        reported: Option<GeoPoint>,
    ) -> AppResult<Option<CompletionVerification>> {
        let Some(target) = request.location.point() else {
            return Ok(None);
        };

        match reported {
            Some(position) => {
                let (distance_meters, verified) =
                    verify_proximity(target, position, self.config.verification_radius_meters);
                if !verified && self.config.require_location_verification {
                    return Err(AppError::validation(format!(
                        "You are {distance_meters:.0} m from the request location; \
                         completion must be reported within {:.0} m",
                        self.config.verification_radius_meters
                    )));
                }
                Ok(Some(CompletionVerification {
                    position,
                    distance_meters,
                    verified,
                    timestamp: Utc::now(),
                }))
            }
            None if self.config.require_location_verification => Err(AppError::validation(
                "A reported position is required to complete this request",
            )),
            None => Ok(None),
        }
    }

    async fn publish(&self, ctx: &RequestContext, event: RequestEvent) {
        self.hub
            .publish(
                Topic::Requests,
                DomainEvent::new(Some(ctx.user_id), EventPayload::Request(event)),
            )
            .await;
    }
}
