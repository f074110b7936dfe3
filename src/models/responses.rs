//! Response DTOs for the catalogue API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheEntry, CacheStats, EntityId};
use crate::models::{Album, Artist, Genre};

/// Album as returned by the album endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub album_id: Option<EntityId>,
    pub artist_id: Option<EntityId>,
    pub artist_name: String,
    pub title: String,
    pub genre: Genre,
    pub release_year: i32,
    pub stock: i32,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            album_id: album.album_id,
            artist_id: album.artist.artist_id,
            artist_name: album.artist.artist_name,
            title: album.title,
            genre: album.genre,
            release_year: album.release_year,
            stock: album.stock,
            price: album.price,
            created_at: album.created_at,
            updated_at: album.updated_at,
        }
    }
}

/// Artist as returned by the artist endpoints, with the titles of their albums
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistResponse {
    pub artist_id: Option<EntityId>,
    pub artist_name: String,
    pub albums: Vec<String>,
}

impl ArtistResponse {
    pub fn new(artist: Artist, albums: Vec<String>) -> Self {
        Self {
            artist_id: artist.artist_id,
            artist_name: artist.artist_name,
            albums,
        }
    }
}

/// One cached album in GET /api/v1/cache/state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedAlbumView {
    pub album_id: EntityId,
    pub inserted_at: u64,
    pub last_accessed: u64,
    pub idle_ms: u64,
    pub album: AlbumResponse,
}

impl CachedAlbumView {
    pub fn new(album_id: EntityId, entry: CacheEntry<Album>, now: u64) -> Self {
        Self {
            album_id,
            inserted_at: entry.inserted_at(),
            last_accessed: entry.last_accessed(),
            idle_ms: entry.idle_ms(now),
            album: entry.entity().clone().into(),
        }
    }
}

/// Response body for GET /api/v1/cache/state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStateResponse {
    pub ttl_ms: u64,
    pub entries: Vec<CachedAlbumView>,
}

/// Response body for POST /api/v1/cache/cleanup
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    pub message: String,
    pub removed: usize,
}

impl SweepResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: "Cache cleanup completed.".to_string(),
            removed,
        }
    }
}

/// Response body for GET /api/v1/cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub cached_entries: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(cached_entries: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            cached_entries,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
