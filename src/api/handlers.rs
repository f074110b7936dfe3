//! API Handlers
//!
//! HTTP request handlers for each catalogue endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CacheStore, EntityId};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{
    Album, AlbumRequest, AlbumResponse, ArtistRequest, ArtistResponse, CacheStateResponse,
    CachedAlbumView, HealthResponse, StatsResponse, SweepResponse,
};
use crate::repository::InMemoryCatalog;
use crate::service::{AlbumService, ArtistService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub albums: AlbumService,
    pub artists: ArtistService,
}

impl AppState {
    pub fn new(albums: AlbumService, artists: ArtistService) -> Self {
        Self { albums, artists }
    }

    /// Wires the services to a fresh in-memory catalogue and an empty cache
    /// configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_cache(CacheStore::new(config.cache_ttl))
    }

    /// Wires the services to a fresh in-memory catalogue around `cache`.
    pub fn with_cache(cache: CacheStore<Album>) -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        let cache = Arc::new(RwLock::new(cache));
        Self::new(
            AlbumService::new(cache, catalog.clone(), catalog.clone()),
            ArtistService::new(catalog.clone(), catalog),
        )
    }
}

// == Album Handlers ==

/// Handler for GET /api/v1/album
pub async fn list_albums_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AlbumResponse>>> {
    let albums = state.albums.list_albums().await?;
    Ok(Json(albums.into_iter().map(AlbumResponse::from).collect()))
}

/// Handler for GET /api/v1/album/:id
///
/// Served through the cache.
pub async fn get_album_handler(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<AlbumResponse>> {
    let album = state
        .albums
        .lookup(id)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Album {}", id)))?;

    Ok(Json(album.into()))
}

/// Handler for POST /api/v1/album
pub async fn create_album_handler(
    State(state): State<AppState>,
    Json(req): Json<AlbumRequest>,
) -> Result<(StatusCode, Json<AlbumResponse>)> {
    let draft = req.into_draft()?;
    let album = state.albums.create(draft).await?;

    Ok((StatusCode::CREATED, Json(album.into())))
}

/// Handler for PUT /api/v1/album/:id
pub async fn update_album_handler(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(req): Json<AlbumRequest>,
) -> Result<Json<AlbumResponse>> {
    let draft = req.into_draft()?;
    let album = state.albums.update(id, draft).await?;

    Ok(Json(album.into()))
}

/// Handler for DELETE /api/v1/album/:id
pub async fn delete_album_handler(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode> {
    state.albums.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// == Artist Handlers ==

/// Handler for GET /api/v1/artist
pub async fn list_artists_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtistResponse>>> {
    let artists = state.artists.list().await?;
    Ok(Json(
        artists
            .into_iter()
            .map(|(artist, albums)| ArtistResponse::new(artist, albums))
            .collect(),
    ))
}

/// Handler for GET /api/v1/artist/:id
pub async fn get_artist_handler(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<ArtistResponse>> {
    let (artist, albums) = state.artists.get(id).await?;
    Ok(Json(ArtistResponse::new(artist, albums)))
}

/// Handler for POST /api/v1/artist
pub async fn create_artist_handler(
    State(state): State<AppState>,
    Json(req): Json<ArtistRequest>,
) -> Result<(StatusCode, Json<ArtistResponse>)> {
    let name = req.validate()?;
    let artist = state.artists.create(name).await?;

    Ok((StatusCode::CREATED, Json(ArtistResponse::new(artist, Vec::new()))))
}

// == Cache Handlers ==

/// Handler for POST /api/v1/cache/cleanup
pub async fn cleanup_cache_handler(State(state): State<AppState>) -> Json<SweepResponse> {
    let removed = state.albums.force_sweep().await;
    Json(SweepResponse::new(removed))
}

/// Handler for GET /api/v1/cache/state
pub async fn cache_state_handler(State(state): State<AppState>) -> Json<CacheStateResponse> {
    let snapshot = state.albums.snapshot().await;
    let now = snapshot.now_ms;

    Json(CacheStateResponse {
        ttl_ms: snapshot.ttl.as_millis() as u64,
        entries: snapshot
            .entries
            .into_iter()
            .map(|(id, entry)| CachedAlbumView::new(id, entry, now))
            .collect(),
    })
}

/// Handler for GET /api/v1/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.albums.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cached = state.albums.cache().read().await.len();
    Json(HealthResponse::healthy(cached))
}
