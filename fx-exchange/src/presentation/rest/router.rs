use axum::{Router, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::QuoteService;
use crate::presentation::sse;

/// Application state shared across handlers
pub struct AppState {
    pub service: QuoteService,
    /// Interval between SSE keep-alive comments
    pub keep_alive: Duration,
}

impl AppState {
    pub fn new(service: QuoteService, keep_alive: Duration) -> Self {
        AppState {
            service,
            keep_alive,
        }
    }
}

/// Create the HTTP router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/exchange",
            get(handlers::list_quotes).post(handlers::create_quote),
        )
        .route("/api/exchange/realtime", get(sse::realtime))
        .route(
            "/api/exchange/profile/search",
            get(handlers::profile_search),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
