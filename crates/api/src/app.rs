use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{security_headers_middleware, trace_id};
use crate::routes::{event, health, invitation, panel, rsvp};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub fn create_app(config: Config) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Invitation routes (v1)
    let invitation_routes = Router::new()
        .route("/api/v1/invitation", get(invitation::resolve_invitation))
        .route("/api/v1/rsvp/confirmation", post(rsvp::confirm_rsvp))
        .route("/api/v1/event", get(event::get_event));

    // Panel routes (v1) - host-facing link generation
    let panel_routes = Router::new().route(
        "/api/v1/panel/invitation-links",
        post(panel::generate_invitation_link),
    );

    // Public routes (no versioned prefix)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(invitation_routes)
        .merge(panel_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
