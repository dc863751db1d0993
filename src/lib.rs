//! # knox-albums
//!
//! Minimal HTTP CRUD backend for album records backed by a document store.
//! Four routes: list all albums, add an album, delete an album, replace an
//! album. Every response uses the `{message, body, code}` envelope.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod model;
pub mod store;

pub use model::{Album, Envelope, Song};
pub use store::{AlbumStore, StoreError};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Store handle opened once at startup and reused by every request
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/getAllAlbums", get(api::get_all_albums))
        .route("/addAlbum", post(api::add_album))
        .route("/deleteAlbum", post(api::delete_album))
        .route("/updateAlbum", post(api::update_album))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
