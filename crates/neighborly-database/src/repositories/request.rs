//! PostgreSQL help-request store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::Postgres;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, QueryBuilder};

use neighborly_core::error::{AppError, ErrorKind};
use neighborly_core::result::AppResult;
use neighborly_core::types::{PageRequest, PageResponse, RequestId, RequestSort, UserId};
use neighborly_entity::request::{
    Category, CompletionVerification, HelpRequest, HistoryEntry, Location, Rating, RequestFilter,
    RequestStatus, Urgency,
};

use crate::store::{RequestStore, RequestTotals};

/// Database row shape for the `requests` table.
///
/// Nested substructures (location, history, verification, rating) are
/// stored as JSONB columns.
#[derive(Debug, FromRow)]
struct RequestRow {
    id: RequestId,
    title: String,
    description: String,
    category: Category,
    urgency: Urgency,
    location: Json<Location>,
    contact_info: Option<String>,
    estimated_time: Option<String>,
    status: RequestStatus,
    requester_id: UserId,
    requester_label: String,
    claimant_id: Option<UserId>,
    claimant_label: Option<String>,
    verified_by: Option<UserId>,
    history: Json<Vec<HistoryEntry>>,
    verification: Option<Json<CompletionVerification>>,
    rating: Option<Json<Rating>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RequestRow> for HelpRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            urgency: row.urgency,
            location: row.location.0,
            contact_info: row.contact_info,
            estimated_time: row.estimated_time,
            status: row.status,
            requester_id: row.requester_id,
            requester_label: row.requester_label,
            claimant_id: row.claimant_id,
            claimant_label: row.claimant_label,
            verified_by: row.verified_by,
            history: row.history.0,
            verification: row.verification.map(|v| v.0),
            rating: row.rating.map(|r| r.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed request store.
#[derive(Debug, Clone)]
pub struct PgRequestStore {
    pool: PgPool,
}

impl PgRequestStore {
    /// Create a new store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the filter's WHERE conditions to a query builder.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &RequestFilter) {
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        qb.push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR location->>'address' ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(category) = filter.category {
        qb.push(" AND category = ").push_bind(category);
    }
    if let Some(urgency) = filter.urgency {
        qb.push(" AND urgency = ").push_bind(urgency);
    }
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(after) = filter.created_after {
        qb.push(" AND created_at >= ").push_bind(after);
    }
    if let Some(before) = filter.created_before {
        qb.push(" AND created_at <= ").push_bind(before);
    }
}

#[async_trait]
impl RequestStore for PgRequestStore {
    async fn insert(&self, request: &HelpRequest) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO requests \
             (id, title, description, category, urgency, location, contact_info, \
              estimated_time, status, requester_id, requester_label, claimant_id, \
              claimant_label, verified_by, history, verification, rating, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     $15, $16, $17, $18, $19)",
        )
        .bind(request.id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.category)
        .bind(request.urgency)
        .bind(Json(&request.location))
        .bind(&request.contact_info)
        .bind(&request.estimated_time)
        .bind(request.status)
        .bind(request.requester_id)
        .bind(&request.requester_label)
        .bind(request.claimant_id)
        .bind(&request.claimant_label)
        .bind(request.verified_by)
        .bind(Json(&request.history))
        .bind(request.verification.as_ref().map(Json))
        .bind(request.rating.as_ref().map(Json))
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert request", e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: RequestId) -> AppResult<Option<HelpRequest>> {
        sqlx::query_as::<_, RequestRow>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Into::into))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find request by id", e)
            })
    }

    async fn update(&self, request: &HelpRequest) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE requests SET \
                 status = $2, claimant_id = $3, claimant_label = $4, \
                 verified_by = $5, history = $6, verification = $7, \
                 rating = $8, updated_at = $9 \
             WHERE id = $1",
        )
        .bind(request.id)
        .bind(request.status)
        .bind(request.claimant_id)
        .bind(&request.claimant_label)
        .bind(request.verified_by)
        .bind(Json(&request.history))
        .bind(request.verification.as_ref().map(Json))
        .bind(request.rating.as_ref().map(Json))
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update request", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Request {} not found",
                request.id
            )));
        }
        Ok(())
    }

    async fn claim_if_open(
        &self,
        id: RequestId,
        claimant_id: UserId,
        claimant_label: &str,
        entry: &HistoryEntry,
    ) -> AppResult<Option<HelpRequest>> {
        // Single conditional UPDATE: the WHERE clause is the compare, the
        // SET is the swap. Losing racers match zero rows.
        sqlx::query_as::<_, RequestRow>(
            "UPDATE requests SET \
                 status = 'claimed', claimant_id = $2, claimant_label = $3, \
                 history = history || $4::jsonb, updated_at = NOW() \
             WHERE id = $1 AND status = 'open' \
             RETURNING *",
        )
        .bind(id)
        .bind(claimant_id)
        .bind(claimant_label)
        .bind(Json(entry))
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Into::into))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim request", e))
    }

    async fn list(
        &self,
        filter: &RequestFilter,
        sort: RequestSort,
        page: &PageRequest,
    ) -> AppResult<PageResponse<HelpRequest>> {
        let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM requests WHERE TRUE");
        push_filter(&mut count_qb, filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
            })?;

        let mut qb = QueryBuilder::new("SELECT * FROM requests WHERE TRUE");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY ").push(sort.as_sql());
        qb.push(" LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows: Vec<RequestRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))?;

        Ok(PageResponse::new(
            rows.into_iter().map(Into::into).collect(),
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn list_by_requester(&self, requester_id: UserId) -> AppResult<Vec<HelpRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(
            "SELECT * FROM requests WHERE requester_id = $1 ORDER BY created_at DESC",
        )
        .bind(requester_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list requests by requester", e)
        })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_claimant(&self, claimant_id: UserId) -> AppResult<Vec<HelpRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(
            "SELECT * FROM requests WHERE claimant_id = $1 ORDER BY created_at DESC",
        )
        .bind(claimant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list requests by claimant", e)
        })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn totals(&self) -> AppResult<RequestTotals> {
        let (total, completed): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'completed') FROM requests",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count requests", e))?;
        Ok(RequestTotals {
            total_requests: total as u64,
            total_completed: completed as u64,
        })
    }
}
