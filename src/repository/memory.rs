//! In-memory catalogue storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::EntityId;
use crate::error::{CatalogError, Result};
use crate::models::{Album, AlbumNaturalKey, Artist};
use crate::repository::{AlbumRepository, ArtistRepository};

#[derive(Debug, Default)]
struct Tables {
    albums: BTreeMap<EntityId, Album>,
    artists: BTreeMap<EntityId, Artist>,
    last_album_id: EntityId,
    last_artist_id: EntityId,
}

impl Tables {
    fn duplicate_of(&self, key: &AlbumNaturalKey) -> Option<&Album> {
        self.albums
            .values()
            .find(|album| album.natural_key().as_ref() == Some(key))
    }
}

// == In-Memory Catalog ==
/// Album and artist tables held in process memory.
///
/// Enforces the same constraints a relational schema would: identity
/// assignment, the (title, artist, release year) unique key, artist
/// references and unique artist names. Every read returns an owned copy.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<Tables>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlbumRepository for InMemoryCatalog {
    async fn load(&self, id: EntityId) -> Result<Option<Album>> {
        Ok(self.tables.read().await.albums.get(&id).cloned())
    }

    async fn exists(&self, id: EntityId) -> Result<bool> {
        Ok(self.tables.read().await.albums.contains_key(&id))
    }

    async fn save(&self, mut album: Album) -> Result<Album> {
        let mut tables = self.tables.write().await;

        let artist_id = album.artist.artist_id.ok_or_else(|| {
            CatalogError::InvalidInput("Album artist has not been saved".to_string())
        })?;
        let artist = tables
            .artists
            .get(&artist_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Artist {}", artist_id)))?;
        album.artist = artist;

        if let Some(key) = album.natural_key() {
            if let Some(existing) = tables.duplicate_of(&key) {
                if existing.album_id != album.album_id {
                    return Err(CatalogError::Conflict(format!(
                        "Album '{}' ({}) by {} already exists",
                        album.title, album.release_year, album.artist.artist_name
                    )));
                }
            }
        }

        let now = Utc::now();
        match album.album_id {
            Some(id) => {
                let stored = tables
                    .albums
                    .get(&id)
                    .ok_or_else(|| CatalogError::NotFound(format!("Album {}", id)))?;
                album.created_at = stored.created_at;
                album.updated_at = Some(now);
                tables.albums.insert(id, album.clone());
            }
            None => {
                tables.last_album_id += 1;
                let id = tables.last_album_id;
                album.album_id = Some(id);
                album.created_at = Some(now);
                album.updated_at = Some(now);
                tables.albums.insert(id, album.clone());
                debug!("Inserted album {}", id);
            }
        }

        Ok(album)
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        match self.tables.write().await.albums.remove(&id) {
            Some(_) => Ok(()),
            None => Err(CatalogError::NotFound(format!("Album {}", id))),
        }
    }

    async fn find_duplicate(&self, key: &AlbumNaturalKey) -> Result<Option<Album>> {
        Ok(self.tables.read().await.duplicate_of(key).cloned())
    }

    async fn list(&self) -> Result<Vec<Album>> {
        Ok(self.tables.read().await.albums.values().cloned().collect())
    }
}

#[async_trait]
impl ArtistRepository for InMemoryCatalog {
    async fn list_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.tables.read().await.artists.values().cloned().collect())
    }

    async fn load_artist(&self, id: EntityId) -> Result<Option<Artist>> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>> {
        Ok(self
            .tables
            .read()
            .await
            .artists
            .values()
            .find(|artist| artist.artist_name == name)
            .cloned())
    }

    async fn save_artist(&self, mut artist: Artist) -> Result<Artist> {
        let mut tables = self.tables.write().await;

        if tables
            .artists
            .values()
            .any(|existing| existing.artist_name == artist.artist_name)
        {
            return Err(CatalogError::Conflict(format!(
                "Artist '{}' already exists",
                artist.artist_name
            )));
        }

        tables.last_artist_id += 1;
        let id = tables.last_artist_id;
        artist.artist_id = Some(id);
        tables.artists.insert(id, artist.clone());
        debug!("Inserted artist {}", id);

        Ok(artist)
    }
}
