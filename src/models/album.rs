//! Catalogue domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::EntityId;

/// Album genres accepted by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    HipHop,
    Jazz,
    Reggae,
    Religious,
    Rock,
    Soundtrack,
    Latin,
    Pop,
    StageAndScreen,
}

impl Genre {
    pub const ALL: [Genre; 14] = [
        Genre::Blues,
        Genre::Classical,
        Genre::Country,
        Genre::Electronic,
        Genre::Folk,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Reggae,
        Genre::Religious,
        Genre::Rock,
        Genre::Soundtrack,
        Genre::Latin,
        Genre::Pop,
        Genre::StageAndScreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Blues => "BLUES",
            Genre::Classical => "CLASSICAL",
            Genre::Country => "COUNTRY",
            Genre::Electronic => "ELECTRONIC",
            Genre::Folk => "FOLK",
            Genre::HipHop => "HIP_HOP",
            Genre::Jazz => "JAZZ",
            Genre::Reggae => "REGGAE",
            Genre::Religious => "RELIGIOUS",
            Genre::Rock => "ROCK",
            Genre::Soundtrack => "SOUNDTRACK",
            Genre::Latin => "LATIN",
            Genre::Pop => "POP",
            Genre::StageAndScreen => "STAGE_AND_SCREEN",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Genre::ALL.iter().map(Genre::as_str).collect();
                format!("Genre can be only: {}", names.join(", "))
            })
    }
}

// == Artist ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub artist_id: Option<EntityId>,
    pub artist_name: String,
}

impl Artist {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            artist_id: None,
            artist_name: name.into(),
        }
    }
}

// == Album ==
/// An album as persisted by the backing store.
///
/// `album_id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub album_id: Option<EntityId>,
    pub title: String,
    pub artist: Artist,
    pub genre: Genre,
    pub release_year: i32,
    pub stock: i32,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The (title, artist, release year) triple that must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumNaturalKey {
    pub title: String,
    pub artist_id: EntityId,
    pub release_year: i32,
}

impl Album {
    /// Natural key of the album, if its artist has been persisted.
    pub fn natural_key(&self) -> Option<AlbumNaturalKey> {
        Some(AlbumNaturalKey {
            title: self.title.clone(),
            artist_id: self.artist.artist_id?,
            release_year: self.release_year,
        })
    }
}
