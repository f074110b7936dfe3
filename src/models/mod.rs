//! Domain types and DTOs for the catalogue API
//!
//! This module defines the album/artist entities and the types used for
//! serializing/deserializing HTTP request and response bodies.

pub mod album;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use album::{Album, AlbumNaturalKey, Artist, Genre};
pub use requests::{AlbumDraft, AlbumRequest, ArtistRequest};
pub use responses::{
    AlbumResponse, ArtistResponse, CacheStateResponse, CachedAlbumView, ErrorResponse,
    HealthResponse, StatsResponse, SweepResponse,
};
