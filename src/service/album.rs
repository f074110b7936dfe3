//! Cache-aside album service.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheStats, EntityId, SharedCache};
use crate::error::{CatalogError, Result};
use crate::models::{Album, AlbumDraft, Artist};
use crate::repository::{AlbumRepository, ArtistRepository};

/// Point-in-time copy of the album cache.
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    pub now_ms: u64,
    pub ttl: Duration,
    pub entries: BTreeMap<EntityId, CacheEntry<Album>>,
}

// == Album Service ==
/// Serves album reads from the cache when possible and keeps the cache
/// coherent with every write.
///
/// Writes always reach the backing store first; the cache is touched only
/// after the store call succeeded, so a failed write never leaves unsaved
/// data cached. Writes run one at a time, each holding `writes` across its
/// store call and cache update, so the cache sees them in store order.
#[derive(Clone)]
pub struct AlbumService {
    cache: SharedCache<Album>,
    albums: Arc<dyn AlbumRepository>,
    artists: Arc<dyn ArtistRepository>,
    writes: Arc<Mutex<()>>,
}

impl AlbumService {
    pub fn new(
        cache: SharedCache<Album>,
        albums: Arc<dyn AlbumRepository>,
        artists: Arc<dyn ArtistRepository>,
    ) -> Self {
        Self {
            cache,
            albums,
            artists,
            writes: Arc::new(Mutex::new(())),
        }
    }

    pub fn cache(&self) -> &SharedCache<Album> {
        &self.cache
    }

    // == Lookup ==
    /// Returns the album with `id`, from memory if cached and live,
    /// otherwise from the backing store (populating the cache).
    ///
    /// `Ok(None)` is a miss in both places; misses are not cached. The
    /// loaded copy is not cached either if a write to `id` landed while
    /// the store was being read.
    pub async fn lookup(&self, id: EntityId) -> Result<Option<Album>> {
        let seen = {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(id) {
                debug!("Cache hit for album {}", id);
                return Ok(Some(entry.entity().clone()));
            }
            cache.generation(id)
        };

        debug!("Cache miss for album {}, loading from store", id);
        let Some(album) = self.albums.load(id).await? else {
            return Ok(None);
        };

        if !self.cache.write().await.fill(id, album.clone(), seen) {
            debug!("Album {} changed in cache during load, not filling", id);
        }
        Ok(Some(album))
    }

    /// All albums, straight from the store.
    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        self.albums.list().await
    }

    // == Create ==
    /// Persists a new album and caches the saved copy.
    pub async fn create(&self, draft: AlbumDraft) -> Result<Album> {
        let _write = self.writes.lock().await;
        let artist = self.resolve_artist(&draft.artist_name).await?;
        let album = draft_to_album(None, draft, artist);
        self.ensure_unique(&album).await?;

        let saved = self.albums.save(album).await?;
        let id = saved
            .album_id
            .ok_or_else(|| CatalogError::Internal("Store returned album without id".into()))?;

        self.cache.write().await.put(id, saved.clone());
        info!("Created album {} '{}'", id, saved.title);
        Ok(saved)
    }

    // == Update ==
    /// Replaces the album's fields and refreshes its cache entry in place.
    ///
    /// Fails with `NotFound` if the album does not exist.
    pub async fn update(&self, id: EntityId, draft: AlbumDraft) -> Result<Album> {
        let _write = self.writes.lock().await;
        if !self.albums.exists(id).await? {
            return Err(CatalogError::NotFound(format!("Album {}", id)));
        }

        let artist = self.resolve_artist(&draft.artist_name).await?;
        let album = draft_to_album(Some(id), draft, artist);
        self.ensure_unique(&album).await?;

        let saved = self.albums.save(album).await?;
        self.cache.write().await.put(id, saved.clone());
        info!("Updated album {}", id);
        Ok(saved)
    }

    // == Delete ==
    /// Removes the album from cache and store, returning what was deleted.
    ///
    /// Fails with `NotFound` and changes nothing if the album does not exist.
    pub async fn delete(&self, id: EntityId) -> Result<Album> {
        let _write = self.writes.lock().await;
        let album = self
            .albums
            .load(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Album {}", id)))?;

        self.cache.write().await.remove(id);
        self.albums.delete(id).await?;
        // A lookup may have read the row after the first removal.
        self.cache.write().await.remove(id);
        info!("Deleted album {}", id);
        Ok(album)
    }

    // == Cache Administration ==
    /// Runs a sweep right now, returning the number of entries evicted.
    pub async fn force_sweep(&self) -> usize {
        let removed = self.cache.write().await.sweep_expired();
        info!("Manual cache sweep removed {} entries", removed);
        removed
    }

    /// Read-only view of the cache. Does not refresh any entry.
    pub async fn snapshot(&self) -> CacheSnapshot {
        let cache = self.cache.read().await;
        CacheSnapshot {
            now_ms: cache.now_ms(),
            ttl: cache.ttl(),
            entries: cache.snapshot(),
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Finds the artist by name, creating it if missing.
    async fn resolve_artist(&self, name: &str) -> Result<Artist> {
        if let Some(artist) = self.artists.find_artist_by_name(name).await? {
            return Ok(artist);
        }
        let artist = self.artists.save_artist(Artist::named(name)).await?;
        warn!(
            "Artist '{}' was not found, a new artist has been created.",
            name
        );
        Ok(artist)
    }

    async fn ensure_unique(&self, album: &Album) -> Result<()> {
        let Some(key) = album.natural_key() else {
            return Ok(());
        };
        match self.albums.find_duplicate(&key).await? {
            Some(existing) if existing.album_id != album.album_id => {
                Err(CatalogError::Conflict(format!(
                    "Album '{}' ({}) by {} already exists",
                    album.title, album.release_year, album.artist.artist_name
                )))
            }
            _ => Ok(()),
        }
    }
}

fn draft_to_album(album_id: Option<EntityId>, draft: AlbumDraft, artist: Artist) -> Album {
    Album {
        album_id,
        title: draft.title,
        artist,
        genre: draft.genre,
        release_year: draft.release_year,
        stock: draft.stock,
        price: draft.price,
        created_at: None,
        updated_at: None,
    }
}
