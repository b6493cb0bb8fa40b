//! Route definitions for the Neighborly HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`; the
//! WebSocket upgrade lives at `/ws`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(request_routes())
        .merge(message_routes())
        .merge(notification_routes())
        .merge(user_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Help-request listing, creation, and lifecycle transitions.
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(handlers::request::list))
        .route("/requests", post(handlers::request::create))
        .route("/requests/mine", get(handlers::request::list_mine))
        .route("/requests/claimed", get(handlers::request::list_claimed))
        .route("/requests/{id}", get(handlers::request::get))
        .route("/requests/{id}/claim", post(handlers::request::claim))
        .route("/requests/{id}/complete", post(handlers::request::complete))
        .route("/requests/{id}/verify", post(handlers::request::verify))
        .route("/requests/{id}/rating", post(handlers::request::rate))
}

/// Per-request message threads.
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests/{id}/messages",
            get(handlers::message::list_thread),
        )
        .route("/requests/{id}/messages", post(handlers::message::send))
        .route(
            "/requests/{id}/messages/read",
            put(handlers::message::mark_thread_read),
        )
        .route(
            "/messages/unread-count",
            get(handlers::message::unread_count),
        )
}

/// Notification endpoints.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Profiles and contribution statistics.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", put(handlers::profile::update_me))
        .route("/users/{id}", get(handlers::profile::get))
        .route("/users/{id}/stats", get(handlers::stats::get))
        .route("/stats/community", get(handlers::stats::community))
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
