// src/api/mod.rs

pub mod console;
pub mod health;
pub mod relay;

use crate::config::RELAY_ROUTE;
use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use console::{console_page, create_handler, refresh_handler, send_reminder_handler};
pub use health::health_handler;
pub use relay::{relay_get, relay_post};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(console_page))
        .route("/console/refresh", post(refresh_handler))
        .route("/console/appointments", post(create_handler))
        .route(
            "/console/appointments/{id}/reminder",
            post(send_reminder_handler),
        )
        .route(RELAY_ROUTE, get(relay_get).post(relay_post))
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
