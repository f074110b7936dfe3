//! Repository Module
//!
//! The backing-store boundary consumed by the cache-aside service, plus an
//! in-memory adapter.

mod memory;

use async_trait::async_trait;

use crate::cache::EntityId;
use crate::error::Result;
use crate::models::{Album, AlbumNaturalKey, Artist};

pub use memory::InMemoryCatalog;

/// Durable album storage.
#[async_trait]
pub trait AlbumRepository: Send + Sync + 'static {
    /// Returns the album with `id`, or `None` if there is none.
    async fn load(&self, id: EntityId) -> Result<Option<Album>>;

    async fn exists(&self, id: EntityId) -> Result<bool>;

    /// Inserts the album when `album_id` is `None`, assigning an id and
    /// timestamps; otherwise persists changes to the existing row.
    ///
    /// Fails with `Conflict` when another album has the same natural key.
    async fn save(&self, album: Album) -> Result<Album>;

    /// Fails with `NotFound` if nothing was deleted.
    async fn delete(&self, id: EntityId) -> Result<()>;

    async fn find_duplicate(&self, key: &AlbumNaturalKey) -> Result<Option<Album>>;

    async fn list(&self) -> Result<Vec<Album>>;
}

/// Durable artist storage.
#[async_trait]
pub trait ArtistRepository: Send + Sync + 'static {
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    async fn load_artist(&self, id: EntityId) -> Result<Option<Artist>>;

    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>>;

    /// Inserts the artist, assigning an id. Names are unique.
    async fn save_artist(&self, artist: Artist) -> Result<Artist>;
}
