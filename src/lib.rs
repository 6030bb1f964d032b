//! Inventory item backend: validates create requests, persists rows in SQLite
//! and serves them back as JSON over axum.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod service;

pub use crate::error::{AppError, AppResult};
pub use crate::service::ItemService;

/// Shared application state. Cloning only bumps the pool's reference count.
#[derive(Clone)]
pub struct AppState {
    pub items: ItemService,
}

impl AppState {
    pub fn new(items: ItemService) -> Self {
        Self { items }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route(
            "/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route("/items/:id", delete(handlers::items::delete_item))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
