//! Route definitions for the Hearth HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(community_routes())
        .merge(membership_routes())
        .merge(post_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: token sync, sign-out, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/token-sync", post(handlers::auth::token_sync))
        .route("/auth/signout", post(handlers::auth::signout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Community creation, lookup, settings, and the access probe.
///
/// The `{community}` segment is a slug for the lookup route and a UUID
/// everywhere else; the shared name keeps the route tree unambiguous.
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/communities", post(handlers::community::create))
        .route(
            "/communities/featured",
            get(handlers::community::list_featured),
        )
        .route(
            "/communities/{community}",
            get(handlers::community::get_by_slug),
        )
        .route(
            "/communities/{community}/settings",
            put(handlers::community::update_settings),
        )
        .route(
            "/communities/{community}/access",
            get(handlers::community::get_access),
        )
}

/// Roster endpoints.
fn membership_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/communities/{community}/members",
            post(handlers::membership::join).get(handlers::membership::list),
        )
        .route(
            "/communities/{community}/members/{user_id}",
            put(handlers::membership::set_role).delete(handlers::membership::remove),
        )
}

/// Feed endpoints.
fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/communities/{community}/posts",
            get(handlers::post::list).post(handlers::post::create),
        )
        .route("/posts/{id}", delete(handlers::post::delete))
}

/// Admin-only endpoints. Non-super-admins see 404s.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users/{id}/suspension",
            put(handlers::admin::set_user_suspension),
        )
        .route(
            "/admin/communities/{id}/disabled",
            put(handlers::admin::set_community_disabled),
        )
        .route(
            "/admin/communities/{id}/featured",
            put(handlers::admin::set_community_featured),
        )
        .route("/admin/stats", get(handlers::admin::stats))
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
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
