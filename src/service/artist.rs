//! Artist service. Artists are not cached.

use std::sync::Arc;

use tracing::info;

use crate::cache::EntityId;
use crate::error::{CatalogError, Result};
use crate::models::{Album, Artist};
use crate::repository::{AlbumRepository, ArtistRepository};

#[derive(Clone)]
pub struct ArtistService {
    artists: Arc<dyn ArtistRepository>,
    albums: Arc<dyn AlbumRepository>,
}

impl ArtistService {
    pub fn new(artists: Arc<dyn ArtistRepository>, albums: Arc<dyn AlbumRepository>) -> Self {
        Self { artists, albums }
    }

    /// Every artist with the titles of their albums.
    pub async fn list(&self) -> Result<Vec<(Artist, Vec<String>)>> {
        let artists = self.artists.list_artists().await?;
        let albums = self.albums.list().await?;

        Ok(artists
            .into_iter()
            .map(|artist| {
                let titles = titles_by(&albums, artist.artist_id);
                (artist, titles)
            })
            .collect())
    }

    pub async fn get(&self, id: EntityId) -> Result<(Artist, Vec<String>)> {
        let artist = self
            .artists
            .load_artist(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(format!("Artist {}", id)))?;
        let albums = self.albums.list().await?;
        let titles = titles_by(&albums, artist.artist_id);
        Ok((artist, titles))
    }

    pub async fn create(&self, name: String) -> Result<Artist> {
        let artist = self.artists.save_artist(Artist::named(name)).await?;
        info!("Created artist '{}'", artist.artist_name);
        Ok(artist)
    }
}

fn titles_by(albums: &[Album], artist_id: Option<EntityId>) -> Vec<String> {
    albums
        .iter()
        .filter(|album| artist_id.is_some() && album.artist.artist_id == artist_id)
        .map(|album| album.title.clone())
        .collect()
}
